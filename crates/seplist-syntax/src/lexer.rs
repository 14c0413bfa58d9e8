//! # Lexer - Tokenizing List-Language Source
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token.** Whitespace,
//! newlines and comments are kept as trivia tokens, and bytes no rule matches
//! become `UNKNOWN` tokens instead of being dropped:
//!
//! ```
//! use seplist_syntax::lexer::lex;
//!
//! let input = "f(a, b) // call\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Why Two Token Enums?
//!
//! Logos needs its own enum for `#[derive(Logos)]`, while Rowan uses
//! [`SyntaxKind`]. [`TokenKind::to_syntax_kind`] converts between them.
//!
//! [`SyntaxKind`]: crate::syntax_kind::SyntaxKind

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Keywords are declared as literal tokens so they win over the identifier
/// regex on an exact match; `fnord` still lexes as one identifier because
/// Logos prefers the longest match.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"//[^\r\n]*")]
    Comment,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LCurly,

    #[token("}")]
    RCurly,

    #[token("fn")]
    FnKw,

    #[token("enum")]
    EnumKw,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    IntNumber,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Comment => SyntaxKind::COMMENT,
            TokenKind::Comma => SyntaxKind::COMMA,
            TokenKind::Semicolon => SyntaxKind::SEMICOLON,
            TokenKind::LParen => SyntaxKind::L_PAREN,
            TokenKind::RParen => SyntaxKind::R_PAREN,
            TokenKind::LCurly => SyntaxKind::L_CURLY,
            TokenKind::RCurly => SyntaxKind::R_CURLY,
            TokenKind::FnKw => SyntaxKind::FN_KW,
            TokenKind::EnumKw => SyntaxKind::ENUM_KW,
            TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::IntNumber => SyntaxKind::INT_NUMBER,
            TokenKind::String => SyntaxKind::STRING,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            Err(()) => SyntaxKind::UNKNOWN,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
