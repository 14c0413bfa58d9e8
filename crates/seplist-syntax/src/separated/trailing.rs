//! Insertion that leaves appended lists ending in a separator.
//!
//! Callers that grow a list by repeated appends want every append to leave
//! the list separator-terminated, so the next append never has to ask whether
//! the previous tail was bare. This costs one synthesized separator per
//! append.

use std::iter;

use rowan::NodeOrToken;

use super::SeparatedList;
use crate::ast::AstNode;
use crate::error::SeparatedListError;
use crate::make;

/// When an append at the end of a list should add a trailing separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrailingRepair {
    /// Whenever the insertion point was at the end and the result ends in a
    /// bare element, even if no items were inserted. This matches how the
    /// rest of the tree tooling has always behaved.
    #[default]
    Always,
    /// Only when at least one item was inserted.
    NonEmptyItems,
}

/// [`SeparatedList::insert_range`], then, if `index` was at or past the end
/// of `list`, append a separator when the result ends in a content element.
///
/// An insertion before the end returns exactly what `insert_range` returns.
///
/// ```
/// use seplist_syntax::{SeparatedList, SeparatorKind, insert_range_with_trailing_separator, make};
///
/// let list = SeparatedList::from_nodes(SeparatorKind::Comma, [make::expr("a")?]);
/// let list = insert_range_with_trailing_separator(&list, 1, [make::expr("b")?])?;
/// assert_eq!(list.to_string(), "a , b ,");
/// # Ok::<(), seplist_syntax::SeparatedListError>(())
/// ```
pub fn insert_range_with_trailing_separator<T, I>(
    list: &SeparatedList<T>,
    index: usize,
    items: I,
) -> Result<SeparatedList<T>, SeparatedListError>
where
    T: AstNode,
    I: IntoIterator<Item = T>,
{
    insert_range_with_trailing_separator_using(list, index, items, TrailingRepair::Always)
}

/// [`insert_range_with_trailing_separator`] with an explicit repair policy.
pub fn insert_range_with_trailing_separator_using<T, I>(
    list: &SeparatedList<T>,
    index: usize,
    items: I,
    repair: TrailingRepair,
) -> Result<SeparatedList<T>, SeparatedListError>
where
    T: AstNode,
    I: IntoIterator<Item = T>,
{
    let mut items = items.into_iter().peekable();
    let inserts_any = items.peek().is_some();
    let new_list = list.insert_range(index, items)?;

    if index < list.len() {
        return Ok(new_list);
    }
    if repair == TrailingRepair::NonEmptyItems && !inserts_any {
        log::trace!("empty append at {index}; trailing separator left as is");
        return Ok(new_list);
    }

    match new_list.interleaved().last() {
        Some(NodeOrToken::Node(_)) => {
            log::debug!(
                "append at {index} left a bare tail; adding trailing {:?}",
                new_list.separator_kind()
            );
            let separator = make::separator(new_list.separator_kind());
            make::separated_list(
                new_list.separator_kind(),
                new_list
                    .interleaved()
                    .iter()
                    .cloned()
                    .chain(iter::once(NodeOrToken::Token(separator))),
            )
        }
        _ => Ok(new_list),
    }
}
