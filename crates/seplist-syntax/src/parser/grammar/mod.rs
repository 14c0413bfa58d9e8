//! # Grammar Rules
//!
//! Each function takes a `&mut Parser` and uses its methods to inspect and
//! consume tokens and to open and complete nodes.
//!
//! ## Module Structure
//!
//! - [`items`] - Top-level items (`fn`, `enum`, expression statements)
//! - [`expressions`] - Paths, literals and calls
//! - [`lists`] - The three separated lists and their shared loop
//!
//! ## Error Recovery
//!
//! Grammar functions are lenient and always make progress. A token that fits
//! nowhere is wrapped in an ERROR node; nothing panics or returns an error.
//! List rules are stricter about *shape* than about content: a separator
//! where an element is expected, or an element where a separator is
//! expected, ends up inside an ERROR node, so the elements and separators
//! left directly under a list node always alternate.

mod expressions;
mod items;
mod lists;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root node.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while !p.at_end() {
        items::item(p);
    }
    p.eat_trivia();

    m.complete(p, SyntaxKind::SOURCE_FILE);
}
