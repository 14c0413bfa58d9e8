//! Range insertion.

use std::rc::Rc;

use rowan::NodeOrToken;

use super::{ListElement, SeparatedList};
use crate::ast::AstNode;
use crate::error::SeparatedListError;

impl<T: AstNode> SeparatedList<T> {
    /// Insert `items` as content starting at `index`, shifting the elements
    /// at `index..` to the right.
    ///
    /// Separators of [`Self::separator_kind`] are synthesized between the
    /// inserted items and wherever an inserted item would otherwise touch an
    /// existing content element. Existing separators stay right after the
    /// element they followed. Inserting at the end of a list that had a
    /// trailing separator leaves the new last item bare.
    ///
    /// Empty `items` yields a list equal to `self`.
    ///
    /// ```
    /// use seplist_syntax::{SeparatedList, SeparatorKind, make};
    ///
    /// let list = SeparatedList::from_nodes(SeparatorKind::Comma, [make::expr("a")?, make::expr("c")?]);
    /// let list = list.insert_range(1, [make::expr("b")?])?;
    /// assert_eq!(list.to_string(), "a , b , c");
    /// # Ok::<(), seplist_syntax::SeparatedListError>(())
    /// ```
    pub fn insert_range<I>(&self, index: usize, items: I) -> Result<Self, SeparatedListError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(SeparatedListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return Ok(self.clone());
        }
        Ok(self.splice(index, items))
    }

    /// Insert a single item at `index`.
    pub fn insert(&self, index: usize, item: T) -> Result<Self, SeparatedListError> {
        self.insert_range(index, std::iter::once(item))
    }

    /// `index` must be at most `self.len()`.
    pub(super) fn splice(&self, index: usize, items: impl Iterator<Item = T>) -> Self {
        // View position of the content element now at `index`, or the end of
        // the view when appending.
        let at = (2 * index).min(self.elements.len());
        let follows_content = at > 0 && self.elements[at - 1].as_node().is_some();

        let mut inserted: Vec<ListElement<T>> = Vec::new();
        let mut count = 0;
        for item in items {
            if count > 0 || follows_content {
                inserted.push(self.new_separator());
            }
            inserted.push(NodeOrToken::Node(item));
            count += 1;
        }
        if count > 0 && at < self.elements.len() {
            inserted.push(self.new_separator());
        }

        let mut elements = Vec::with_capacity(self.elements.len() + inserted.len());
        elements.extend_from_slice(&self.elements[..at]);
        elements.extend(inserted);
        elements.extend_from_slice(&self.elements[at..]);

        Self {
            elements: Rc::from(elements),
            len: self.len + count,
            separator: self.separator,
        }
    }
}
