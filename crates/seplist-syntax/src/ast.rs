//! # Typed AST
//!
//! Thin typed wrappers over [`SyntaxNode`]s, rust-analyzer style. A wrapper
//! is just a node whose kind has been checked; it owns nothing else, so
//! wrappers are as cheap to clone as the node itself.
//!
//! The three list-bearing nodes ([`ArgList`], [`ParamList`] and
//! [`VariantList`]) implement [`ListNode`], which exposes their children as a
//! [`SeparatedList`] and rebuilds a node from one.

use std::fmt;

use rowan::NodeOrToken;

use crate::error::SeparatedListError;
use crate::make::{self, ListFormat};
use crate::parser::parse;
use crate::separated::SeparatedList;
use crate::syntax_kind::{SeparatorKind, SyntaxKind, SyntaxNode, SyntaxToken};

/// A typed view of a syntax node.
pub trait AstNode: Clone {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(syntax: SyntaxNode) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($(#[$attr:meta])* $name:ident, $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self { syntax })
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.syntax, f)
            }
        }
    };
}

macro_rules! ast_enum {
    ($(#[$attr:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)+
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($variant::can_cast(kind))||+
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                $(
                    if $variant::can_cast(syntax.kind()) {
                        return $variant::cast(syntax).map($name::$variant);
                    }
                )+
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(it) => it.syntax(),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self.syntax(), f)
            }
        }
    };
}

ast_node!(SourceFile, SOURCE_FILE);
ast_node!(FnDef, FN_DEF);
ast_node!(ParamList, PARAM_LIST);
ast_node!(Param, PARAM);
ast_node!(EnumDef, ENUM_DEF);
ast_node!(VariantList, VARIANT_LIST);
ast_node!(Variant, VARIANT);
ast_node!(Name, NAME);
ast_node!(ExprStmt, EXPR_STMT);
ast_node!(CallExpr, CALL_EXPR);
ast_node!(ArgList, ARG_LIST);
ast_node!(PathExpr, PATH_EXPR);
ast_node!(Literal, LITERAL);

ast_enum!(Item { FnDef, EnumDef, ExprStmt });
ast_enum!(
    /// Anything that can appear in an argument list.
    Expr { PathExpr, Literal, CallExpr }
);
ast_enum!(
    /// Any of the list-bearing nodes.
    AnyList { ArgList, ParamList, VariantList }
);

fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

impl SourceFile {
    pub fn parse(text: &str) -> SourceFile {
        SourceFile { syntax: parse(text) }
    }

    pub fn items(&self) -> impl Iterator<Item = Item> {
        self.syntax.children().filter_map(Item::cast)
    }

    /// Every list node in the file, outermost first, in source order.
    pub fn list_nodes(&self) -> Vec<AnyList> {
        self.syntax.descendants().filter_map(AnyList::cast).collect()
    }

    /// True if the parser had to recover from malformed input anywhere.
    pub fn has_errors(&self) -> bool {
        self.syntax
            .descendants()
            .any(|node| node.kind() == SyntaxKind::ERROR)
    }
}

impl FnDef {
    pub fn name(&self) -> Option<Name> {
        child(&self.syntax)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.syntax)
    }
}

impl EnumDef {
    pub fn name(&self) -> Option<Name> {
        child(&self.syntax)
    }

    pub fn variant_list(&self) -> Option<VariantList> {
        child(&self.syntax)
    }
}

impl Param {
    pub fn name(&self) -> Option<Name> {
        child(&self.syntax)
    }
}

impl Variant {
    pub fn name(&self) -> Option<Name> {
        child(&self.syntax)
    }
}

impl Name {
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }
}

impl ExprStmt {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.syntax)
    }
}

impl CallExpr {
    pub fn callee(&self) -> Option<Expr> {
        child(&self.syntax)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        child(&self.syntax)
    }
}

/// A list-bearing node: delimiters around a separated list of `Element`s.
pub trait ListNode: AstNode {
    type Element: AstNode;

    const KIND: SyntaxKind;
    const OPEN: SyntaxKind;
    const CLOSE: SyntaxKind;

    /// Wrap a node built by [`make`]. `syntax` must already have this
    /// node's kind.
    fn from_built(syntax: SyntaxNode) -> Self;

    /// Parse `text` as a single element of this list.
    fn parse_element(text: &str) -> Result<Self::Element, SeparatedListError>;

    /// The node's elements and separators as a persistent list.
    ///
    /// Delimiters, trivia and ERROR nodes are skipped. The list synthesizes
    /// separators of the same kind as its first existing separator, or
    /// commas if it has none.
    fn separated(&self) -> Result<SeparatedList<Self::Element>, SeparatedListError> {
        let elements: Vec<_> = self
            .syntax()
            .children_with_tokens()
            .filter_map(|element| match element {
                NodeOrToken::Node(node) => Self::Element::cast(node).map(NodeOrToken::Node),
                NodeOrToken::Token(token) if token.kind().is_separator() => {
                    Some(NodeOrToken::Token(token))
                }
                NodeOrToken::Token(_) => None,
            })
            .collect();
        let separator = elements
            .iter()
            .find_map(|element| element.as_token())
            .and_then(|token: &SyntaxToken| SeparatorKind::from_syntax_kind(token.kind()))
            .unwrap_or_default();
        SeparatedList::from_interleaved(separator, elements)
    }

    /// A new detached node of this kind holding `list`.
    fn with_separated(list: &SeparatedList<Self::Element>, format: ListFormat) -> Self {
        Self::from_built(make::delimited_list(
            Self::KIND,
            Self::OPEN,
            Self::CLOSE,
            list,
            format,
        ))
    }
}

macro_rules! list_node {
    ($name:ident, $kind:ident, $element:ident, $open:ident, $close:ident, $parse:path) => {
        impl ListNode for $name {
            type Element = $element;

            const KIND: SyntaxKind = SyntaxKind::$kind;
            const OPEN: SyntaxKind = SyntaxKind::$open;
            const CLOSE: SyntaxKind = SyntaxKind::$close;

            fn from_built(syntax: SyntaxNode) -> Self {
                debug_assert!(Self::can_cast(syntax.kind()));
                Self { syntax }
            }

            fn parse_element(text: &str) -> Result<$element, SeparatedListError> {
                $parse(text)
            }
        }
    };
}

list_node!(ArgList, ARG_LIST, Expr, L_PAREN, R_PAREN, make::expr);
list_node!(ParamList, PARAM_LIST, Param, L_PAREN, R_PAREN, make::param);
list_node!(VariantList, VARIANT_LIST, Variant, L_CURLY, R_CURLY, make::variant);

impl AnyList {
    pub fn kind(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    pub fn into_arg_list(self) -> Option<ArgList> {
        match self {
            AnyList::ArgList(it) => Some(it),
            _ => None,
        }
    }

    pub fn into_param_list(self) -> Option<ParamList> {
        match self {
            AnyList::ParamList(it) => Some(it),
            _ => None,
        }
    }

    pub fn into_variant_list(self) -> Option<VariantList> {
        match self {
            AnyList::VariantList(it) => Some(it),
            _ => None,
        }
    }

    /// Element count and whether the list ends in a separator.
    pub fn shape(&self) -> Result<(usize, bool), SeparatedListError> {
        fn of<L: ListNode>(list: &L) -> Result<(usize, bool), SeparatedListError> {
            let separated = list.separated()?;
            Ok((separated.len(), separated.has_trailing_separator()))
        }
        match self {
            AnyList::ArgList(it) => of(it),
            AnyList::ParamList(it) => of(it),
            AnyList::VariantList(it) => of(it),
        }
    }
}
