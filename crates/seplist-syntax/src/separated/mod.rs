//! # Separated Lists
//!
//! A [`SeparatedList`] is the persistent view of a delimited list's
//! children: content elements alternating with separator tokens.
//!
//! ```text
//! interleaved: [content[0], sep[0], content[1], sep[1], …, content[N-1], (sep[N-1])]
//! ```
//!
//! Two invariants hold for every list, however it was built:
//!
//! - content and separators strictly alternate, starting with content;
//! - the interleaved view has `2N - 1` elements, or `2N` when the list ends in
//!   a trailing separator (and zero when the list is empty).
//!
//! Lists are immutable. Edits such as [`SeparatedList::insert_range`] return a
//! new list and leave the old one valid; clones share the same backing slice,
//! and the nodes and tokens inside are cheap handles onto shared green data.
//!
//! ## Module Structure
//!
//! - `mod.rs` - the container, construction and read access
//! - [`insert`] - the range insertion splice
//! - [`trailing`] - insertion that keeps appends separator-terminated
//! - [`shared`] - the `Send + Sync` green form of a list

mod insert;
mod shared;
mod trailing;

use std::fmt;
use std::rc::Rc;

use rowan::NodeOrToken;

use crate::ast::AstNode;
use crate::error::SeparatedListError;
use crate::make;
use crate::syntax_kind::{SeparatorKind, SyntaxToken};

pub use shared::SharedList;
pub use trailing::{
    TrailingRepair, insert_range_with_trailing_separator,
    insert_range_with_trailing_separator_using,
};

/// One entry of a list's interleaved view.
pub type ListElement<T> = NodeOrToken<T, SyntaxToken>;

/// An immutable list of `T` whose elements are separated by tokens.
///
/// `separator` is the kind the list synthesizes when an edit needs a new
/// separator. Separators already in the list keep whatever kind they have.
#[derive(Clone)]
pub struct SeparatedList<T> {
    elements: Rc<[ListElement<T>]>,
    len: usize,
    separator: SeparatorKind,
}

impl<T: AstNode> SeparatedList<T> {
    pub fn empty(separator: SeparatorKind) -> Self {
        Self {
            elements: Rc::from(Vec::new()),
            len: 0,
            separator,
        }
    }

    /// Build a list from an interleaved view.
    ///
    /// Fails with [`SeparatedListError::MalformedSequence`] if the view starts
    /// with a separator or has two separators or two content elements next to
    /// each other.
    pub fn from_interleaved<I>(separator: SeparatorKind, elements: I) -> Result<Self, SeparatedListError>
    where
        I: IntoIterator<Item = ListElement<T>>,
    {
        let elements: Vec<_> = elements.into_iter().collect();
        check_alternation(&elements)?;
        Ok(Self {
            len: elements.len().div_ceil(2),
            elements: elements.into(),
            separator,
        })
    }

    /// Build a list from content alone, synthesizing a separator between each
    /// pair of elements. The result has no trailing separator.
    pub fn from_nodes<I>(separator: SeparatorKind, nodes: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::empty(separator).splice(0, nodes.into_iter())
    }

    /// Number of content elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `index`-th content element.
    pub fn get(&self, index: usize) -> Result<&T, SeparatedListError> {
        self.elements
            .get(2 * index)
            .and_then(NodeOrToken::as_node)
            .ok_or(SeparatedListError::OutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Content elements in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.elements.iter().filter_map(NodeOrToken::as_node)
    }

    /// Separator tokens in order, including a trailing one.
    pub fn separators(&self) -> impl DoubleEndedIterator<Item = &SyntaxToken> {
        self.elements.iter().filter_map(NodeOrToken::as_token)
    }

    /// Content and separators in their canonical alternating order.
    pub fn interleaved(&self) -> &[ListElement<T>] {
        &self.elements
    }

    pub fn has_trailing_separator(&self) -> bool {
        self.elements
            .last()
            .is_some_and(|element| element.as_token().is_some())
    }

    pub fn separator_kind(&self) -> SeparatorKind {
        self.separator
    }

    /// The same elements, synthesizing `separator` on later edits.
    pub fn with_separator_kind(&self, separator: SeparatorKind) -> Self {
        Self {
            elements: Rc::clone(&self.elements),
            len: self.len,
            separator,
        }
    }

    fn new_separator(&self) -> ListElement<T> {
        NodeOrToken::Token(make::separator(self.separator))
    }
}

fn check_alternation<T>(elements: &[ListElement<T>]) -> Result<(), SeparatedListError> {
    for (position, element) in elements.iter().enumerate() {
        let expects_content = position % 2 == 0;
        let reason = match element {
            NodeOrToken::Node(_) if !expects_content => "two content elements are adjacent",
            NodeOrToken::Token(_) if expects_content && position == 0 => {
                "list starts with a separator"
            }
            NodeOrToken::Token(_) if expects_content => "two separators are adjacent",
            _ => continue,
        };
        log::debug!("rejecting interleaved view of {} elements: {reason}", elements.len());
        return Err(SeparatedListError::MalformedSequence { position, reason });
    }
    Ok(())
}

/// Lists are equal when they synthesize the same separator and their
/// interleaved views have the same structure and text. Node identity is not
/// compared, so a list equals its own edits when those edits were no-ops.
impl<T: AstNode> PartialEq for SeparatedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator
            && self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|pair| match pair {
                    (NodeOrToken::Node(a), NodeOrToken::Node(b)) => {
                        a.syntax().green() == b.syntax().green()
                    }
                    (NodeOrToken::Token(a), NodeOrToken::Token(b)) => a.green() == b.green(),
                    _ => false,
                })
    }
}

impl<T: AstNode> Eq for SeparatedList<T> {}

impl<T: AstNode> fmt::Debug for SeparatedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeparatedList")
            .field("separator", &self.separator)
            .field("interleaved", &self.to_string())
            .finish()
    }
}

/// Interleaved texts joined by single spaces, e.g. `a , b ,`.
impl<T: AstNode> fmt::Display for SeparatedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            match element {
                NodeOrToken::Node(node) => write!(f, "{}", node.syntax())?,
                NodeOrToken::Token(token) => f.write_str(token.text())?,
            }
        }
        Ok(())
    }
}

impl<'a, T: AstNode> IntoIterator for &'a SeparatedList<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn DoubleEndedIterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use pretty_assertions::assert_eq;

    fn expr(text: &str) -> Expr {
        make::expr(text).unwrap()
    }

    fn comma() -> ListElement<Expr> {
        NodeOrToken::Token(make::separator(SeparatorKind::Comma))
    }

    fn node(text: &str) -> ListElement<Expr> {
        NodeOrToken::Node(expr(text))
    }

    #[test]
    fn empty_list_has_empty_view() {
        let list = SeparatedList::<Expr>::empty(SeparatorKind::Comma);
        assert!(list.is_empty());
        assert!(list.interleaved().is_empty());
        assert!(!list.has_trailing_separator());
        assert_eq!(list.first().map(|e| e.to_string()), None);
    }

    #[test]
    fn from_interleaved_counts_content() {
        let list =
            SeparatedList::from_interleaved(SeparatorKind::Comma, [node("a"), comma(), node("b")])
                .unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.has_trailing_separator());

        let trailing = SeparatedList::from_interleaved(
            SeparatorKind::Comma,
            [node("a"), comma(), node("b"), comma()],
        )
        .unwrap();
        assert_eq!(trailing.len(), 2);
        assert!(trailing.has_trailing_separator());
        assert_eq!(trailing.separators().count(), 2);
    }

    #[test]
    fn from_interleaved_rejects_leading_separator() {
        let err = SeparatedList::from_interleaved(SeparatorKind::Comma, [comma(), node("a")])
            .unwrap_err();
        assert_eq!(
            err,
            SeparatedListError::MalformedSequence {
                position: 0,
                reason: "list starts with a separator"
            }
        );
    }

    #[test]
    fn from_interleaved_rejects_adjacent_separators() {
        let err =
            SeparatedList::from_interleaved(SeparatorKind::Comma, [node("a"), comma(), comma()])
                .unwrap_err();
        assert!(matches!(
            err,
            SeparatedListError::MalformedSequence { position: 2, .. }
        ));
    }

    #[test]
    fn from_interleaved_rejects_adjacent_content() {
        let err = SeparatedList::from_interleaved(SeparatorKind::Comma, [node("a"), node("b")])
            .unwrap_err();
        assert!(matches!(
            err,
            SeparatedListError::MalformedSequence { position: 1, .. }
        ));
    }

    #[test]
    fn from_nodes_synthesizes_separators() {
        let list = SeparatedList::from_nodes(
            SeparatorKind::Semicolon,
            [expr("a"), expr("b"), expr("c")],
        );
        assert_eq!(list.to_string(), "a ; b ; c");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn get_returns_content_by_index() {
        let list = SeparatedList::from_nodes(SeparatorKind::Comma, [expr("a"), expr("f(b)")]);
        assert_eq!(list.get(1).unwrap().to_string(), "f(b)");
        assert_eq!(
            list.get(2).unwrap_err(),
            SeparatedListError::OutOfRange { index: 2, len: 2 }
        );
        assert_eq!(list.first().unwrap().to_string(), "a");
        assert_eq!(list.last().unwrap().to_string(), "f(b)");
    }

    #[test]
    fn iteration_skips_separators() {
        let list = SeparatedList::from_nodes(SeparatorKind::Comma, [expr("1"), expr("2")]);
        let texts: Vec<_> = (&list).into_iter().map(|e| e.to_string()).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn equality_is_structural() {
        let a = SeparatedList::from_nodes(SeparatorKind::Comma, [expr("x"), expr("y")]);
        let b = SeparatedList::from_nodes(SeparatorKind::Comma, [expr("x"), expr("y")]);
        let c = SeparatedList::from_nodes(SeparatorKind::Comma, [expr("x"), expr("z")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, a.with_separator_kind(SeparatorKind::Semicolon));
    }

    #[test]
    fn clones_share_storage() {
        let list = SeparatedList::from_nodes(SeparatorKind::Comma, [expr("x")]);
        let copy = list.clone();
        assert!(Rc::ptr_eq(&list.elements, &copy.elements));
    }
}
