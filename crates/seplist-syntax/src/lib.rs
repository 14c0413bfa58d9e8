//! # seplist-syntax
//!
//! Persistent separated lists over a lossless syntax tree built with
//! [Rowan] + [Logos], following the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Separated Lists
//!
//! Argument lists, parameter lists and enum variant lists are sequences of
//! content nodes with separator tokens between them, and sometimes one more
//! separator at the end:
//!
//! ```text
//! (a, b, c)    → a , b , c      3 elements, no trailing separator
//! (a, b, c,)   → a , b , c ,    3 elements, trailing separator
//! ```
//!
//! [`SeparatedList`] is an immutable value holding that interleaved view.
//! Every edit returns a new list and leaves the original untouched. Two
//! insertion operations are provided:
//!
//! - [`SeparatedList::insert_range`] inserts content and synthesizes the
//!   separators needed to keep the list alternating.
//! - [`insert_range_with_trailing_separator`] does the same and then, when
//!   the insertion was an append, makes sure the list ends in a separator.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//!
//! Rowan Tree → ast::*List → SeparatedList → insert → make::*_list → edit
//! ```
//!
//! The parser keeps every byte, including whitespace and comments. Typed
//! wrappers in [`ast`] find list nodes and read them into a
//! [`SeparatedList`]; [`make`] builds detached nodes and tokens; [`edit`]
//! splices new entries into a list node, keeping its trivia and `ERROR`
//! children, and returns the new tree.
//!
//! ## Module Structure
//!
//! ```text
//! seplist-syntax/
//! ├── lib.rs           # This file - public API and tree snapshot tests
//! ├── syntax_kind.rs   # SyntaxKind, SeparatorKind and Rowan integration
//! ├── lexer.rs         # Logos-based tokenizer
//! ├── error.rs         # SeparatedListError
//! ├── ast.rs           # Typed node wrappers and the ListNode trait
//! ├── make.rs          # Detached node, token and list constructors
//! ├── edit.rs          # Splicing new entries into list nodes
//! ├── separated/
//! │   ├── mod.rs       # SeparatedList and its read API
//! │   ├── insert.rs    # insert_range
//! │   ├── shared.rs    # SharedList, the thread-safe form
//! │   └── trailing.rs  # insert_range_with_trailing_separator
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, public parse() function
//!     ├── event.rs     # Event enum (Start, Token, Finish, Placeholder)
//!     ├── sink.rs      # Converts events to Rowan GreenNode
//!     └── grammar/     # Items, expressions and the list rules
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use seplist_syntax::ast::{ListNode, SourceFile};
//! use seplist_syntax::{insert_range_with_trailing_separator, make};
//!
//! let file = SourceFile::parse("f(a, b)");
//! let args = file.list_nodes().remove(0).into_arg_list().unwrap();
//!
//! let list = args.separated()?;
//! let list = insert_range_with_trailing_separator(&list, 2, [make::expr("c")?])?;
//! assert_eq!(list.to_string(), "a , b , c ,");
//!
//! let root = seplist_syntax::edit::replace_list(&args, &make::arg_list(&list, Default::default()));
//! assert_eq!(root.to_string(), "f(a, b, c,)");
//! # Ok::<(), seplist_syntax::SeparatedListError>(())
//! ```

pub mod ast;
pub mod edit;
pub mod error;
pub mod lexer;
pub mod make;
pub mod parser;
pub mod separated;
pub mod syntax_kind;

pub use ast::{AstNode, ListNode};
pub use error::SeparatedListError;
pub use parser::parse;
pub use separated::{
    ListElement, SeparatedList, SharedList, TrailingRepair,
    insert_range_with_trailing_separator, insert_range_with_trailing_separator_using,
};
pub use syntax_kind::{
    SeparatorKind, SeplistLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken,
};

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Helper to format a syntax tree for snapshot testing.
    fn format_tree(node: &SyntaxNode, indent: usize) -> String {
        let mut result = String::new();
        let prefix = "  ".repeat(indent);

        result.push_str(&format!(
            "{}{:?}@{:?}\n",
            prefix,
            node.kind(),
            node.text_range()
        ));

        for child in node.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Node(n) => {
                    result.push_str(&format_tree(&n, indent + 1));
                }
                rowan::NodeOrToken::Token(t) => {
                    let text = t.text().replace('\n', "\\n");
                    result.push_str(&format!(
                        "{}  {:?}@{:?} {:?}\n",
                        prefix,
                        t.kind(),
                        t.text_range(),
                        text
                    ));
                }
            }
        }

        result
    }

    #[test]
    fn snapshot_call() {
        let tree = parse("f(a, b)");
        assert_snapshot!(format_tree(&tree, 0), @r#"
        SOURCE_FILE@0..7
          EXPR_STMT@0..7
            CALL_EXPR@0..7
              PATH_EXPR@0..1
                IDENT@0..1 "f"
              ARG_LIST@1..7
                L_PAREN@1..2 "("
                PATH_EXPR@2..3
                  IDENT@2..3 "a"
                COMMA@3..4 ","
                WHITESPACE@4..5 " "
                PATH_EXPR@5..6
                  IDENT@5..6 "b"
                R_PAREN@6..7 ")"
        "#);
    }

    // === Error tolerance ===
    // Shape errors inside a list end up in ERROR nodes so the list's direct
    // children still alternate.

    #[test]
    fn snapshot_doubled_separator() {
        let tree = parse("f(a,,b)");
        assert_snapshot!(format_tree(&tree, 0), @r#"
        SOURCE_FILE@0..7
          EXPR_STMT@0..7
            CALL_EXPR@0..7
              PATH_EXPR@0..1
                IDENT@0..1 "f"
              ARG_LIST@1..7
                L_PAREN@1..2 "("
                PATH_EXPR@2..3
                  IDENT@2..3 "a"
                COMMA@3..4 ","
                ERROR@4..5
                  COMMA@4..5 ","
                PATH_EXPR@5..6
                  IDENT@5..6 "b"
                R_PAREN@6..7 ")"
        "#);
    }

    #[test]
    fn snapshot_missing_separator() {
        let tree = parse("fn f(x y);");
        assert_snapshot!(format_tree(&tree, 0), @r#"
        SOURCE_FILE@0..10
          FN_DEF@0..10
            FN_KW@0..2 "fn"
            WHITESPACE@2..3 " "
            NAME@3..4
              IDENT@3..4 "f"
            PARAM_LIST@4..9
              L_PAREN@4..5 "("
              PARAM@5..6
                NAME@5..6
                  IDENT@5..6 "x"
              WHITESPACE@6..7 " "
              ERROR@7..8
                PARAM@7..8
                  NAME@7..8
                    IDENT@7..8 "y"
              R_PAREN@8..9 ")"
            SEMICOLON@9..10 ";"
        "#);
    }

    #[test]
    fn snapshot_enum_with_trailing_separator() {
        let tree = parse("enum E {A;}");
        assert_snapshot!(format_tree(&tree, 0), @r#"
        SOURCE_FILE@0..11
          ENUM_DEF@0..11
            ENUM_KW@0..4 "enum"
            WHITESPACE@4..5 " "
            NAME@5..6
              IDENT@5..6 "E"
            WHITESPACE@6..7 " "
            VARIANT_LIST@7..11
              L_CURLY@7..8 "{"
              VARIANT@8..9
                NAME@8..9
                  IDENT@8..9 "A"
              SEMICOLON@9..10 ";"
              R_CURLY@10..11 "}"
        "#);
    }

    #[test]
    fn roundtrip_preserves_text() {
        let inputs = [
            "",
            "f(a, b)\n",
            "f(a, b,)\n",
            "  // leading comment\nf()\n",
            "fn f(x; y);\n",
            "enum E { A, B, }\n",
            "f(g(x)(y), \"s\", 42);\n",
            "f(a,,b\n",
            "enum { , }\n",
            "fn f(x y\nenum E {\n",
            "@#$ (( ,; ))\n",
        ];

        for input in inputs {
            let tree = parse(input);
            assert_eq!(
                tree.text().to_string(),
                input,
                "Roundtrip failed for: {:?}",
                input
            );
        }
    }

    #[test]
    fn edited_tree_keeps_untouched_text() {
        let file = ast::SourceFile::parse("// args\nf(a,   b) ; g()\n");
        let list = file.list_nodes().remove(0);
        let root = list
            .insert_items(2, &["c"], &edit::EditOptions::default())
            .unwrap();
        assert_eq!(root.to_string(), "// args\nf(a,   b, c,) ; g()\n");
    }
}
