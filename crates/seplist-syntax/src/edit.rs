//! Applying separated-list edits to a syntax tree.
//!
//! Trees are never mutated. An edit builds a new list node and then the spine
//! from that node up to the root; every other subtree of the new tree is
//! shared with the old one, which stays valid.
//!
//! The new list node keeps every child of the old one where it was: trivia,
//! delimiters and `ERROR` nodes included. Elements and separators the edit
//! introduced are spliced in directly after the list entry they follow, or
//! after the opening delimiter when nothing precedes them.

use std::collections::HashSet;

use rowan::{GreenNode, GreenToken, NodeOrToken};

use crate::ast::{AnyList, AstNode, ListNode};
use crate::error::SeparatedListError;
use crate::make::ListFormat;
use crate::separated::{
    ListElement, SeparatedList, TrailingRepair, insert_range_with_trailing_separator_using,
};
use crate::syntax_kind::{SeparatorKind, SyntaxElement, SyntaxKind, SyntaxNode};

/// How [`insert_items`] edits a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOptions {
    /// Separator to synthesize. `None` keeps the kind the list already uses.
    pub separator: Option<SeparatorKind>,
    /// `None` inserts without touching the trailing separator.
    pub repair: Option<TrailingRepair>,
    /// Spacing around spliced-in entries. Existing text is never reformatted.
    pub format: ListFormat,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            separator: None,
            repair: Some(TrailingRepair::Always),
            format: ListFormat::default(),
        }
    }
}

/// Swap `old` for `new` in `old`'s tree and return the new root.
pub fn replace_list<L: ListNode>(old: &L, new: &L) -> SyntaxNode {
    let root = old.syntax().replace_with(new.syntax().green().into_owned());
    SyntaxNode::new_root(root)
}

/// Parse each of `items` as an element of `list_node`, insert them at
/// `index`, and return the root of the edited tree.
pub fn insert_items<L, S>(
    list_node: &L,
    index: usize,
    items: &[S],
    options: &EditOptions,
) -> Result<SyntaxNode, SeparatedListError>
where
    L: ListNode,
    S: AsRef<str>,
{
    let mut list = list_node.separated()?;
    if let Some(separator) = options.separator {
        list = list.with_separator_kind(separator);
    }
    let items = items
        .iter()
        .map(|text| L::parse_element(text.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let edited = insert(&list, index, items, options.repair)?;
    log::debug!(
        "{:?}: {} -> {} elements",
        L::KIND,
        list.len(),
        edited.len()
    );
    Ok(replace_list(
        list_node,
        &splice_list(list_node, &edited, options.format),
    ))
}

fn insert<T: AstNode>(
    list: &SeparatedList<T>,
    index: usize,
    items: Vec<T>,
    repair: Option<TrailingRepair>,
) -> Result<SeparatedList<T>, SeparatedListError> {
    match repair {
        Some(repair) => insert_range_with_trailing_separator_using(list, index, items, repair),
        None => list.insert_range(index, items),
    }
}

/// A detached copy of `list_node` whose entries are those of `edited`.
///
/// Every entry of `list_node`'s own list must also appear in `edited`, in
/// the same order; entries of `edited` that are not children of `list_node`
/// are the ones spliced in.
pub fn splice_list<L: ListNode>(
    list_node: &L,
    edited: &SeparatedList<L::Element>,
    format: ListFormat,
) -> L {
    let old_children: Vec<SyntaxElement> = list_node.syntax().children_with_tokens().collect();
    let existing: HashSet<SyntaxElement> = old_children.iter().cloned().collect();
    let entries: Vec<(SyntaxElement, bool)> = edited
        .interleaved()
        .iter()
        .map(|entry| {
            let element = as_syntax_element(entry);
            let is_new = !existing.contains(&element);
            (element, is_new)
        })
        .collect();

    let mut out = Splice::new(format);
    let mut next = 0;
    let opens = old_children
        .first()
        .is_some_and(|child| child.kind() == L::OPEN);
    if !opens {
        next = out.new_entries(&entries, next);
    }

    for (position, child) in old_children.iter().enumerate() {
        if position + 1 == old_children.len() && child.kind() == L::CLOSE {
            next = out.remaining(&entries, next);
        }
        match entries[next..].iter().position(|(entry, _)| entry == child) {
            Some(offset) => {
                next = out.remaining(&entries[..next + offset], next);
                out.existing(child, true);
                next = out.new_entries(&entries, next + 1);
            }
            None => {
                out.existing(child, false);
                if position == 0 && opens {
                    next = out.new_entries(&entries, next);
                }
            }
        }
    }
    out.remaining(&entries, next);

    L::from_built(SyntaxNode::new_root(GreenNode::new(
        L::KIND.into(),
        out.children,
    )))
}

fn as_syntax_element<T: AstNode>(entry: &ListElement<T>) -> SyntaxElement {
    match entry {
        NodeOrToken::Node(node) => NodeOrToken::Node(node.syntax().clone()),
        NodeOrToken::Token(token) => NodeOrToken::Token(token.clone()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Separator { is_new: bool },
    Other,
}

/// Child accumulator for [`splice_list`].
struct Splice {
    children: Vec<NodeOrToken<GreenNode, GreenToken>>,
    last: Last,
    format: ListFormat,
}

impl Splice {
    fn new(format: ListFormat) -> Self {
        Self {
            children: Vec::new(),
            last: Last::Other,
            format,
        }
    }

    /// Push consecutive new entries starting at `from`; returns the index
    /// of the first entry not pushed.
    fn new_entries(&mut self, entries: &[(SyntaxElement, bool)], from: usize) -> usize {
        let mut next = from;
        while let Some((element, true)) = entries.get(next) {
            self.push(element, true, true);
            next += 1;
        }
        next
    }

    /// Push every entry from `from` to the end of `entries`.
    fn remaining(&mut self, entries: &[(SyntaxElement, bool)], from: usize) -> usize {
        for (element, is_new) in entries.iter().skip(from) {
            self.push(element, true, *is_new);
        }
        entries.len().max(from)
    }

    fn existing(&mut self, child: &SyntaxElement, is_entry: bool) {
        self.push(child, is_entry, false);
    }

    fn push(&mut self, element: &SyntaxElement, is_entry: bool, is_new: bool) {
        match element {
            NodeOrToken::Node(node) => {
                let spaced = match self.last {
                    Last::Separator { is_new: sep_new } => is_entry && (is_new || sep_new),
                    Last::Other => false,
                };
                if spaced && self.format.space_after_separator {
                    self.children.push(NodeOrToken::Token(GreenToken::new(
                        SyntaxKind::WHITESPACE.into(),
                        " ",
                    )));
                }
                self.children
                    .push(NodeOrToken::Node(node.green().into_owned()));
                self.last = Last::Other;
            }
            NodeOrToken::Token(token) => {
                self.children
                    .push(NodeOrToken::Token(token.green().to_owned()));
                self.last = if is_entry && token.kind().is_separator() {
                    Last::Separator { is_new }
                } else {
                    Last::Other
                };
            }
        }
    }
}

impl AnyList {
    /// [`insert_items`] for whichever kind of list this is.
    pub fn insert_items<S: AsRef<str>>(
        &self,
        index: usize,
        items: &[S],
        options: &EditOptions,
    ) -> Result<SyntaxNode, SeparatedListError> {
        match self {
            AnyList::ArgList(it) => insert_items(it, index, items, options),
            AnyList::ParamList(it) => insert_items(it, index, items, options),
            AnyList::VariantList(it) => insert_items(it, index, items, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SourceFile;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn edit(source: &str, list: usize, index: usize, items: &[&str], options: EditOptions) -> String {
        let file = SourceFile::parse(source);
        let lists = file.list_nodes();
        lists[list]
            .insert_items(index, items, &options)
            .unwrap()
            .to_string()
    }

    #[test]
    fn append_argument_with_trailing_separator() {
        let out = edit("f(a, b);\n", 0, 2, &["c"], EditOptions::default());
        assert_eq!(out, "f(a, b, c,);\n");
    }

    #[test]
    fn insert_without_repair() {
        let options = EditOptions {
            repair: None,
            ..EditOptions::default()
        };
        let out = edit("f(a, b);\n", 0, 2, &["c"], options);
        assert_eq!(out, "f(a, b, c);\n");
    }

    #[test]
    fn insert_in_the_middle_of_variants() {
        let out = edit("enum E { A; C }", 0, 1, &["B"], EditOptions::default());
        assert_eq!(out, "enum E { A; B; C }");
    }

    #[rstest]
    #[case(0, &["x"], "f(x, a)")]
    #[case(0, &["x", "y"], "f(x, y, a)")]
    #[case(1, &["x"], "f(a, x,)")]
    fn spliced_entries_are_spaced(
        #[case] index: usize,
        #[case] items: &[&str],
        #[case] expected: &str,
    ) {
        assert_eq!(edit("f(a)", 0, index, items, EditOptions::default()), expected);
    }

    #[test]
    fn tight_format_adds_no_spaces() {
        let options = EditOptions {
            format: ListFormat {
                space_after_separator: false,
            },
            ..EditOptions::default()
        };
        assert_eq!(edit("f(a, b)", 0, 1, &["x"], options), "f(a,x, b)");
    }

    #[test]
    fn explicit_separator_overrides_existing_kind() {
        let options = EditOptions {
            separator: Some(SeparatorKind::Comma),
            ..EditOptions::default()
        };
        let out = edit("fn f(x; y);", 0, 2, &["z"], options);
        assert_eq!(out, "fn f(x; y, z,);");
    }

    #[test]
    fn only_the_chosen_list_changes() {
        let source = "// calls\nf(g(x), y)\nh()\n";
        let out = edit(source, 1, 1, &["1"], EditOptions::default());
        assert_eq!(out, "// calls\nf(g(x, 1,), y)\nh()\n");
    }

    #[test]
    fn comments_inside_the_list_survive() {
        let source = "f(\n    a, // keep me\n    b,\n)\n";
        let out = edit(source, 0, 2, &["c"], EditOptions::default());
        assert_eq!(out, "f(\n    a, // keep me\n    b, c,\n)\n");
    }

    #[test]
    fn multi_line_list_keeps_its_layout() {
        let source = "enum E {\n    A,\n    B\n}\n";
        let out = edit(source, 0, 1, &["X"], EditOptions::default());
        assert_eq!(out, "enum E {\n    A, X,\n    B\n}\n");

        let out = edit(source, 0, 2, &["C"], EditOptions::default());
        assert_eq!(out, "enum E {\n    A,\n    B, C,\n}\n");
    }

    #[test]
    fn error_nodes_are_kept_in_place() {
        let out = edit("f(a b)\n", 0, 1, &["c"], EditOptions::default());
        assert_eq!(out, "f(a, c, b)\n");

        let out = edit("f(a,, b)\n", 0, 2, &["c"], EditOptions::default());
        assert_eq!(out, "f(a,, b, c,)\n");
    }

    #[test]
    fn unclosed_list_appends_at_the_end() {
        let out = edit("f(a", 0, 1, &["b"], EditOptions::default());
        assert_eq!(out, "f(a, b,");
    }

    #[test]
    fn empty_append_follows_the_repair_policy() {
        assert_eq!(edit("f(a)", 0, 1, &[], EditOptions::default()), "f(a,)");
        let options = EditOptions {
            repair: Some(TrailingRepair::NonEmptyItems),
            ..EditOptions::default()
        };
        assert_eq!(edit("f(a)", 0, 1, &[], options), "f(a)");
    }

    #[test]
    fn old_tree_is_untouched() {
        let file = SourceFile::parse("f(a)");
        let list = file.list_nodes().remove(0);
        let new_root = list
            .insert_items(0, &["b"], &EditOptions::default())
            .unwrap();
        assert_eq!(new_root.to_string(), "f(b, a)");
        assert_eq!(file.to_string(), "f(a)");
    }

    #[test]
    fn spliced_list_reads_back_as_the_edited_list() {
        let file = SourceFile::parse("f(a, // note\n b)");
        let args = file.list_nodes().remove(0).into_arg_list().unwrap();
        let edited = args
            .separated()
            .unwrap()
            .insert(1, crate::make::expr("x").unwrap())
            .unwrap();
        let spliced = splice_list(&args, &edited, ListFormat::default());
        assert_eq!(spliced.separated().unwrap(), edited);
    }

    #[test]
    fn bad_item_is_reported() {
        let file = SourceFile::parse("f(a)");
        let err = file.list_nodes()[0]
            .insert_items(1, &["b c"], &EditOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            SeparatedListError::Snippet {
                expected: "expression",
                text: "b c".to_string(),
            }
        );
    }

    #[test]
    fn index_out_of_range_is_reported() {
        let file = SourceFile::parse("f(a)");
        let err = file.list_nodes()[0]
            .insert_items(5, &["b"], &EditOptions::default())
            .unwrap_err();
        assert_eq!(err, SeparatedListError::OutOfRange { index: 5, len: 1 });
    }
}
