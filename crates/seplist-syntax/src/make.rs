//! Constructors for detached tokens, nodes and lists.
//!
//! Content nodes are built by parsing a small snippet of source and picking
//! the node out of it, so a made node is always something the parser itself
//! would produce. Tokens and list nodes are assembled directly from green
//! data.

use rowan::{GreenNode, GreenToken, NodeOrToken};

use crate::ast::{
    ArgList, AstNode, Expr, ListNode, Param, ParamList, SourceFile, Variant, VariantList,
};
use crate::error::SeparatedListError;
use crate::separated::{ListElement, SeparatedList};
use crate::syntax_kind::{SeparatorKind, SyntaxKind, SyntaxNode, SyntaxToken};

/// Layout used when a list node is rebuilt from a [`SeparatedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFormat {
    /// Put one space after every separator that is followed by an element.
    pub space_after_separator: bool,
}

impl Default for ListFormat {
    fn default() -> Self {
        Self {
            space_after_separator: true,
        }
    }
}

/// A detached token.
pub fn token(kind: SyntaxKind, text: &str) -> SyntaxToken {
    detached_token(GreenToken::new(kind.into(), text))
}

pub(crate) fn detached_token(green: GreenToken) -> SyntaxToken {
    let root = SyntaxNode::new_root(GreenNode::new(
        SyntaxKind::SOURCE_FILE.into(),
        [NodeOrToken::Token(green)],
    ));
    match root.first_token() {
        Some(token) => token,
        None => unreachable!("a node built around a token has a first token"),
    }
}

pub fn separator(kind: SeparatorKind) -> SyntaxToken {
    token(kind.syntax_kind(), kind.text())
}

/// Rebuild a list from its interleaved view.
pub fn separated_list<T, I>(
    separator: SeparatorKind,
    elements: I,
) -> Result<SeparatedList<T>, SeparatedListError>
where
    T: AstNode,
    I: IntoIterator<Item = ListElement<T>>,
{
    SeparatedList::from_interleaved(separator, elements)
}

/// An expression such as `x`, `42`, `"s"` or `f(a, b)`.
pub fn expr(text: &str) -> Result<Expr, SeparatedListError> {
    from_snippet(text, text.to_string(), "expression")
}

/// A function parameter such as `x`.
pub fn param(text: &str) -> Result<Param, SeparatedListError> {
    from_snippet(text, format!("fn f({});", text.trim()), "parameter")
}

/// An enum variant such as `Red`.
pub fn variant(text: &str) -> Result<Variant, SeparatedListError> {
    from_snippet(text, format!("enum E {{ {} }}", text.trim()), "variant")
}

/// The first `N` in `source`, if it is exactly `text` and `source` parsed
/// cleanly.
fn from_snippet<N: AstNode>(
    text: &str,
    source: String,
    expected: &'static str,
) -> Result<N, SeparatedListError> {
    let file = SourceFile::parse(&source);
    let node = file.syntax().descendants().find_map(N::cast);
    match node {
        Some(node) if !file.has_errors() && node.syntax().text() == text.trim() => Ok(node),
        _ => Err(SeparatedListError::Snippet {
            expected,
            text: text.to_string(),
        }),
    }
}

pub fn arg_list(list: &SeparatedList<Expr>, format: ListFormat) -> ArgList {
    ArgList::with_separated(list, format)
}

pub fn param_list(list: &SeparatedList<Param>, format: ListFormat) -> ParamList {
    ParamList::with_separated(list, format)
}

pub fn variant_list(list: &SeparatedList<Variant>, format: ListFormat) -> VariantList {
    VariantList::with_separated(list, format)
}

/// A detached `kind` node: `open`, the interleaved view of `list`, `close`.
pub(crate) fn delimited_list<T: AstNode>(
    kind: SyntaxKind,
    open: SyntaxKind,
    close: SyntaxKind,
    list: &SeparatedList<T>,
    format: ListFormat,
) -> SyntaxNode {
    let elements = list.interleaved();
    let mut children = Vec::with_capacity(2 * elements.len() + 2);
    children.push(delimiter(open));
    for (position, element) in elements.iter().enumerate() {
        match element {
            NodeOrToken::Node(node) => {
                children.push(NodeOrToken::Node(node.syntax().green().into_owned()));
            }
            NodeOrToken::Token(separator) => {
                children.push(NodeOrToken::Token(separator.green().to_owned()));
                if format.space_after_separator && position + 1 < elements.len() {
                    children.push(NodeOrToken::Token(GreenToken::new(
                        SyntaxKind::WHITESPACE.into(),
                        " ",
                    )));
                }
            }
        }
    }
    children.push(delimiter(close));
    SyntaxNode::new_root(GreenNode::new(kind.into(), children))
}

fn delimiter(kind: SyntaxKind) -> NodeOrToken<GreenNode, GreenToken> {
    let text = match kind {
        SyntaxKind::L_PAREN => "(",
        SyntaxKind::R_PAREN => ")",
        SyntaxKind::L_CURLY => "{",
        SyntaxKind::R_CURLY => "}",
        _ => unreachable!("{kind:?} is not a list delimiter"),
    };
    NodeOrToken::Token(GreenToken::new(kind.into(), text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn separator_tokens() {
        let comma = separator(SeparatorKind::Comma);
        assert_eq!(comma.kind(), SyntaxKind::COMMA);
        assert_eq!(comma.text(), ",");
        assert_eq!(separator(SeparatorKind::Semicolon).text(), ";");
    }

    #[rstest]
    #[case("x")]
    #[case("42")]
    #[case("\"hi\"")]
    #[case("f(a, g(b))")]
    fn expr_accepts_single_expressions(#[case] text: &str) {
        assert_eq!(expr(text).unwrap().to_string(), text);
    }

    #[test]
    fn expr_trims_surrounding_whitespace() {
        assert_eq!(expr("  x ").unwrap().to_string(), "x");
    }

    #[rstest]
    #[case("")]
    #[case("a b")]
    #[case("a;")]
    #[case("f(a,,)")]
    #[case("fn f()")]
    fn expr_rejects_anything_else(#[case] text: &str) {
        assert_eq!(
            expr(text).unwrap_err(),
            SeparatedListError::Snippet {
                expected: "expression",
                text: text.to_string(),
            }
        );
    }

    #[test]
    fn param_and_variant_snippets() {
        assert_eq!(param("x").unwrap().name().unwrap().text(), "x");
        assert_eq!(variant("Red").unwrap().name().unwrap().text(), "Red");
        assert!(param("x, y").is_err());
        assert!(variant("1").is_err());
    }

    #[test]
    fn separated_list_validates() {
        let a: ListElement<Expr> = NodeOrToken::Node(expr("a").unwrap());
        let list = separated_list(SeparatorKind::Comma, [a.clone()]).unwrap();
        assert_eq!(list.len(), 1);
        assert!(separated_list(SeparatorKind::Comma, [a.clone(), a]).is_err());
    }

    #[test]
    fn arg_list_layout() {
        let list = SeparatedList::from_nodes(
            SeparatorKind::Comma,
            [expr("a").unwrap(), expr("b").unwrap()],
        );
        let list = crate::insert_range_with_trailing_separator(&list, 2, [expr("c").unwrap()])
            .unwrap();
        assert_eq!(arg_list(&list, ListFormat::default()).to_string(), "(a, b, c,)");
        let tight = ListFormat {
            space_after_separator: false,
        };
        assert_eq!(arg_list(&list, tight).to_string(), "(a,b,c,)");
    }

    #[test]
    fn variant_list_uses_braces() {
        let list = SeparatedList::from_nodes(
            SeparatorKind::Semicolon,
            [variant("A").unwrap(), variant("B").unwrap()],
        );
        let node = variant_list(&list, ListFormat::default());
        assert_eq!(node.to_string(), "{A; B}");
        assert_eq!(node.separated().unwrap(), list);
    }

    #[test]
    fn rebuilt_list_reads_back_the_same() {
        let list = SeparatedList::from_nodes(
            SeparatorKind::Comma,
            [param("x").unwrap(), param("y").unwrap()],
        );
        let node = param_list(&list, ListFormat::default());
        assert_eq!(node.separated().unwrap(), list);
    }
}
