//! # Parser - Event-Based Tree Construction
//!
//! This module implements the core parsing logic, transforming a token stream
//! into a syntax tree using the **event-based** architecture from rust-analyzer.
//!
//! Grammar functions never build tree nodes directly. They emit a flat list of
//! **events** ([`Event`]) that describe the tree structure, and the [`Sink`]
//! then builds the actual Rowan tree from them. Nested calls such as
//! `f(g(x), y)` therefore never need the parser to restructure a node it has
//! already built.
//!
//! ## Trivia
//!
//! Lookahead (`current()`, `nth()`, `at()`) skips whitespace, newlines and
//! comments. Trivia is emitted lazily, right before the next significant token
//! is consumed or the next node is started, so it lands in the innermost node
//! that is open at that point. A completed node therefore never ends with
//! trivia, and list elements carry no trailing whitespace:
//!
//! ```text
//! "f(a, b)" → ARG_LIST: [L_PAREN, PATH_EXPR, COMMA, WHITESPACE, PATH_EXPR, R_PAREN]
//! ```
//!
//! ## The Marker System
//!
//! When you call `parser.start()`, you get a [`Marker`]. This marker **must**
//! be either completed with `marker.complete(parser, KIND)` or abandoned with
//! `marker.abandon(parser)`. Dropping a marker without doing either panics.
//!
//! ```ignore
//! let m = p.start();
//! p.bump();
//! m.complete(p, SyntaxKind::PATH_EXPR);
//! ```
//!
//! ## Forward Parent Links
//!
//! A callee is parsed before the parser knows it is being called. When a `(`
//! follows, `CompletedMarker::precede()` opens a `CALL_EXPR` that the Sink
//! places *around* the already-parsed callee.
//!
//! ## Public API
//!
//! ```
//! use seplist_syntax::parse;
//!
//! let tree = parse("f(a, b)\n");
//! assert_eq!(tree.text().to_string(), "f(a, b)\n");
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// The parser state machine.
///
/// Holds the token stream, current position, and accumulated events.
/// Grammar functions receive `&mut Parser` and use its methods to:
///
/// - Inspect tokens: `current()`, `nth()`, `at()`, `at_end()`
/// - Consume tokens: `bump()`, `eat()`, `err_and_bump()`
/// - Build structure: `start()` → `Marker` → `complete()`/`abandon()`
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Parser<'t, 'input> {
    /// Create a new parser from a slice of tokens.
    pub fn new(tokens: &'t [Token<'input>]) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
        }
    }

    /// Parse the tokens and return a syntax tree.
    pub fn parse(mut self) -> SyntaxNode {
        grammar::root(&mut self);
        let sink = Sink::new(self.tokens, self.events);
        sink.finish()
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        // Leading trivia of the file belongs inside the root node, which is
        // the first node started.
        if !self.events.is_empty() {
            self.eat_trivia();
        }
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current significant token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n significant tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Check if only trivia (or nothing) is left.
    pub fn at_end(&self) -> bool {
        self.current() == SyntaxKind::EOF
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume pending trivia, then the current significant token.
    pub fn bump(&mut self) {
        self.eat_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.events.push(Event::token(token.kind));
            self.pos += 1;
        }
    }

    /// Wrap the current token in an ERROR node.
    pub fn err_and_bump(&mut self) {
        let m = self.start();
        self.bump();
        m.complete(self, SyntaxKind::ERROR);
    }

    /// Emit every trivia token up to the next significant token.
    pub fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.events.push(Event::token(token.kind));
            self.pos += 1;
        }
    }
}

/// A marker for a node being constructed.
///
/// When you call `parser.start()`, a `Placeholder` event is pushed and you get
/// a `Marker` pointing to it. The `#[must_use]` attribute and the `Drop` impl
/// together enforce that every marker is either completed or abandoned.
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() or abandon() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) -> CompletedMarker {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::Start {
            kind,
            forward_parent: None,
        };
        p.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }

    /// Abandon this marker without creating a node.
    ///
    /// Only removes the placeholder if it is the last event; otherwise the
    /// placeholder stays inert and the Sink skips it.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// A marker for a node that has been completed.
///
/// The only thing you can do with a `CompletedMarker` is call `precede()`
/// to wrap the completed node in a new parent:
///
/// ```ignore
/// let callee = atom(p);              // PATH_EXPR for "f"
/// if p.at(SyntaxKind::L_PAREN) {
///     let call = callee.precede(p);  // CALL_EXPR starts before "f"
///     arg_list(p);
///     call.complete(p, SyntaxKind::CALL_EXPR);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompletedMarker {
    /// Position of the Start event for this completed node
    pos: usize,
}

impl CompletedMarker {
    /// Create a new parent node that will contain this node.
    pub fn precede(self, p: &mut Parser<'_, '_>) -> Marker {
        let new_pos = p.events.len();
        p.events.push(Event::Placeholder);

        if let Event::Start { forward_parent, .. } = &mut p.events[self.pos] {
            *forward_parent = Some(new_pos);
        }

        Marker {
            pos: new_pos,
            completed: false,
        }
    }
}

/// Parse source text into a syntax tree.
///
/// Never fails: malformed input yields `ERROR` nodes, and the tree's text is
/// always exactly `source`.
pub fn parse(source: &str) -> SyntaxNode {
    let tokens = lex(source);
    let parser = Parser::new(&tokens);
    parser.parse()
}
