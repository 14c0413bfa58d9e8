//! Lists that can cross threads.
//!
//! A [`SeparatedList`] holds red nodes, which are tied to the thread that
//! built them. [`SharedList`] keeps only the green data of the same entries
//! behind an `Arc`, so it is `Send + Sync`; any thread can turn it back into
//! a [`SeparatedList`] of its own.

use std::sync::Arc;

use rowan::{GreenNode, GreenToken, NodeOrToken};

use super::SeparatedList;
use crate::ast::AstNode;
use crate::error::SeparatedListError;
use crate::make;
use crate::syntax_kind::{SeparatorKind, SyntaxNode};

/// The green form of a [`SeparatedList`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedList {
    elements: Arc<[NodeOrToken<GreenNode, GreenToken>]>,
    separator: SeparatorKind,
}

impl SharedList {
    pub fn len(&self) -> usize {
        self.elements.len().div_ceil(2)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn separator_kind(&self) -> SeparatorKind {
        self.separator
    }

    /// Rebuild the list on the current thread. Every content entry becomes
    /// the root of its own detached tree.
    ///
    /// Fails with [`SeparatedListError::MalformedSequence`] when a content
    /// entry is not a `T`.
    pub fn to_list<T: AstNode>(&self) -> Result<SeparatedList<T>, SeparatedListError> {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .map(|(position, element)| match element {
                NodeOrToken::Node(green) => T::cast(SyntaxNode::new_root(green.clone()))
                    .map(NodeOrToken::Node)
                    .ok_or(SeparatedListError::MalformedSequence {
                        position,
                        reason: "element has the wrong node kind",
                    }),
                NodeOrToken::Token(green) => Ok(NodeOrToken::Token(make::detached_token(
                    green.clone(),
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        SeparatedList::from_interleaved(self.separator, elements)
    }
}

impl<T: AstNode> SeparatedList<T> {
    /// A thread-safe copy of this list.
    pub fn share(&self) -> SharedList {
        SharedList {
            elements: self
                .interleaved()
                .iter()
                .map(|element| match element {
                    NodeOrToken::Node(node) => {
                        NodeOrToken::Node(node.syntax().green().into_owned())
                    }
                    NodeOrToken::Token(token) => NodeOrToken::Token(token.green().to_owned()),
                })
                .collect(),
            separator: self.separator_kind(),
        }
    }
}
