//! Sink for converting parser events into a Rowan green tree.

use rowan::GreenNodeBuilder;

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// Converts parser events and tokens into a Rowan syntax tree.
pub struct Sink<'t, 'input> {
    builder: GreenNodeBuilder<'static>,
    tokens: &'t [Token<'input>],
    cursor: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Sink<'t, 'input> {
    /// Create a new sink.
    pub fn new(tokens: &'t [Token<'input>], events: Vec<Event>) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            tokens,
            cursor: 0,
            events,
        }
    }

    /// Consume the sink and build the syntax tree.
    pub fn finish(mut self) -> SyntaxNode {
        let mut forward_parents = Vec::new();

        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    forward_parents.push(kind);
                    let mut fp = forward_parent;

                    while let Some(parent_idx) = fp {
                        match std::mem::replace(&mut self.events[parent_idx], Event::Placeholder) {
                            Event::Start {
                                kind,
                                forward_parent,
                            } => {
                                fp = forward_parent;
                                forward_parents.push(kind);
                            }
                            _ => unreachable!(),
                        }
                    }

                    // Outermost parent first
                    for kind in forward_parents.drain(..).rev() {
                        self.builder.start_node(kind.into());
                    }
                }
                Event::Token { kind } => self.token(kind),
                Event::Finish => self.builder.finish_node(),
                Event::Placeholder => {}
            }
        }

        SyntaxNode::new_root(self.builder.finish())
    }

    fn token(&mut self, kind: SyntaxKind) {
        let token = &self.tokens[self.cursor];
        self.cursor += 1;
        self.builder.token(kind.into(), token.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn sink_builds_simple_tree() {
        let tokens = lex("x");

        let events = vec![
            Event::start(SyntaxKind::SOURCE_FILE),
            Event::start(SyntaxKind::PATH_EXPR),
            Event::token(SyntaxKind::IDENT),
            Event::Finish,
            Event::Finish,
        ];

        let tree = Sink::new(&tokens, events).finish();

        assert_eq!(tree.kind(), SyntaxKind::SOURCE_FILE);
        assert_eq!(tree.children().count(), 1);
    }

    #[test]
    fn sink_resolves_forward_parents() {
        let tokens = lex("f()");

        let events = vec![
            Event::start(SyntaxKind::SOURCE_FILE),
            Event::Start {
                kind: SyntaxKind::PATH_EXPR,
                forward_parent: Some(4),
            },
            Event::token(SyntaxKind::IDENT),
            Event::Finish,
            Event::start(SyntaxKind::CALL_EXPR),
            Event::start(SyntaxKind::ARG_LIST),
            Event::token(SyntaxKind::L_PAREN),
            Event::token(SyntaxKind::R_PAREN),
            Event::Finish,
            Event::Finish,
            Event::Finish,
        ];

        let tree = Sink::new(&tokens, events).finish();
        let call = tree.first_child().unwrap();

        assert_eq!(call.kind(), SyntaxKind::CALL_EXPR);
        let kinds: Vec<_> = call.children().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![SyntaxKind::PATH_EXPR, SyntaxKind::ARG_LIST]);
        assert_eq!(tree.text().to_string(), "f()");
    }
}
