//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree building.
//! Instead of building the tree directly, the parser emits a **flat sequence**
//! of events that describe the tree structure.
//!
//! ```text
//! Start(CALL_EXPR)       ← forward parent of the PATH_EXPR below
//!   Start(PATH_EXPR)
//!     Token(IDENT)
//!   Finish
//!   Start(ARG_LIST)
//!     Token(L_PAREN)
//!     ...
//!     Token(R_PAREN)
//!   Finish
//! Finish
//! ```
//!
//! The Sink processes these in order, maintaining a stack of open nodes.
//! Start pushes, Finish pops.
//!
//! ## Forward Parent Links
//!
//! The `forward_parent` field in `Start` handles cases where we need to wrap
//! an already-parsed node: a callee is parsed as a `PATH_EXPR` before the
//! parser sees the `(` that makes it part of a `CALL_EXPR`. Instead of
//! restructuring the event list, we store a link that says "when you process
//! me, also process that other Start first."

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
///
/// Events form a flat representation of the tree that the [`Sink`](super::sink::Sink)
/// converts into an actual Rowan tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    ///
    /// If `forward_parent` is set, it points to another `Start` event that
    /// should become this node's parent.
    Start {
        kind: SyntaxKind,
        forward_parent: Option<usize>,
    },

    /// Add the next raw token to the current node.
    Token { kind: SyntaxKind },

    /// Finish the current node.
    Finish,

    /// A placeholder that will be replaced.
    ///
    /// When `parser.start()` is called, a `Placeholder` is pushed. Later,
    /// `marker.complete()` replaces it with a real `Start`, or
    /// `marker.abandon()` leaves it (the Sink ignores placeholders).
    Placeholder,
}

impl Event {
    /// Create a start event with no forward parent.
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start {
            kind,
            forward_parent: None,
        }
    }

    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_start_creation() {
        let event = Event::start(SyntaxKind::ARG_LIST);
        assert_eq!(
            event,
            Event::Start {
                kind: SyntaxKind::ARG_LIST,
                forward_parent: None
            }
        );
    }

    #[test]
    fn event_token_creation() {
        let event = Event::token(SyntaxKind::COMMA);
        assert_eq!(
            event,
            Event::Token {
                kind: SyntaxKind::COMMA
            }
        );
    }
}
