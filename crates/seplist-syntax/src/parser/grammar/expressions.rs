//! Expression rules.

use crate::parser::{CompletedMarker, Parser};
use crate::syntax_kind::SyntaxKind;

use super::lists;

pub(super) fn at_expr_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::IDENT | SyntaxKind::INT_NUMBER | SyntaxKind::STRING
    )
}

/// An atom followed by any number of argument lists.
///
/// `f(a)(b)` parses as a CALL_EXPR whose callee is the CALL_EXPR `f(a)`.
pub(super) fn expr(p: &mut Parser<'_, '_>) {
    let Some(mut lhs) = atom(p) else {
        return;
    };
    while p.at(SyntaxKind::L_PAREN) {
        let call = lhs.precede(p);
        lists::arg_list(p);
        lhs = call.complete(p, SyntaxKind::CALL_EXPR);
    }
}

fn atom(p: &mut Parser<'_, '_>) -> Option<CompletedMarker> {
    let kind = match p.current() {
        SyntaxKind::IDENT => SyntaxKind::PATH_EXPR,
        SyntaxKind::INT_NUMBER | SyntaxKind::STRING => SyntaxKind::LITERAL,
        _ => return None,
    };
    let m = p.start();
    p.bump();
    Some(m.complete(p, kind))
}
