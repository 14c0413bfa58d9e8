//! Separated list rules.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::{expressions, items};

/// `(a, b)` after a callee.
pub(super) fn arg_list(p: &mut Parser<'_, '_>) {
    delimited(
        p,
        SyntaxKind::ARG_LIST,
        SyntaxKind::L_PAREN,
        SyntaxKind::R_PAREN,
        expressions::at_expr_start,
        expressions::expr,
    );
}

/// `(a, b)` after a function name.
pub(super) fn param_list(p: &mut Parser<'_, '_>) {
    delimited(
        p,
        SyntaxKind::PARAM_LIST,
        SyntaxKind::L_PAREN,
        SyntaxKind::R_PAREN,
        at_name,
        param,
    );
}

/// `{ A, B }` after an enum name.
pub(super) fn variant_list(p: &mut Parser<'_, '_>) {
    delimited(
        p,
        SyntaxKind::VARIANT_LIST,
        SyntaxKind::L_CURLY,
        SyntaxKind::R_CURLY,
        at_name,
        variant,
    );
}

fn at_name(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::IDENT
}

fn param(p: &mut Parser<'_, '_>) {
    let m = p.start();
    items::name(p);
    m.complete(p, SyntaxKind::PARAM);
}

fn variant(p: &mut Parser<'_, '_>) {
    let m = p.start();
    items::name(p);
    m.complete(p, SyntaxKind::VARIANT);
}

/// Shared loop for `open (element (SEP element)* SEP?)? close`.
///
/// The caller has already checked that the parser is at `open`. `element`
/// must consume at least one token whenever `at_element` accepts the current
/// token. Parsing stops early at a keyword so an unclosed list does not
/// swallow the following item.
fn delimited(
    p: &mut Parser<'_, '_>,
    kind: SyntaxKind,
    open: SyntaxKind,
    close: SyntaxKind,
    at_element: fn(SyntaxKind) -> bool,
    element: fn(&mut Parser<'_, '_>),
) {
    let m = p.start();
    p.eat(open);

    let mut expect_element = true;
    while !p.at_end() && !p.at(close) {
        let current = p.current();
        if matches!(current, SyntaxKind::FN_KW | SyntaxKind::ENUM_KW) {
            break;
        }
        if current.is_separator() {
            if expect_element {
                p.err_and_bump();
            } else {
                p.bump();
                expect_element = true;
            }
        } else if at_element(current) {
            if expect_element {
                element(p);
                expect_element = false;
            } else {
                let error = p.start();
                element(p);
                error.complete(p, SyntaxKind::ERROR);
            }
        } else {
            p.err_and_bump();
        }
    }

    p.eat(close);
    m.complete(p, kind);
}
