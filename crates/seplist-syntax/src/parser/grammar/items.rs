//! Top-level item rules.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::{expressions, lists};

pub(super) fn item(p: &mut Parser<'_, '_>) {
    match p.current() {
        SyntaxKind::FN_KW => fn_def(p),
        SyntaxKind::ENUM_KW => enum_def(p),
        kind if expressions::at_expr_start(kind) => expr_stmt(p),
        _ => p.err_and_bump(),
    }
}

/// `fn name(params);`
fn fn_def(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    name(p);
    if p.at(SyntaxKind::L_PAREN) {
        lists::param_list(p);
    }
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::FN_DEF);
}

/// `enum Name { A, B }`
fn enum_def(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    name(p);
    if p.at(SyntaxKind::L_CURLY) {
        lists::variant_list(p);
    }
    m.complete(p, SyntaxKind::ENUM_DEF);
}

fn expr_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    expressions::expr(p);
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::EXPR_STMT);
}

/// A declared name. Missing names are tolerated.
pub(super) fn name(p: &mut Parser<'_, '_>) {
    if p.at(SyntaxKind::IDENT) {
        let m = p.start();
        p.bump();
        m.complete(p, SyntaxKind::NAME);
    }
}
