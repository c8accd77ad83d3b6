//! Shared-element transition identity
//!
//! A compact card and the detail panel it expands into carry the same
//! `TransitionKey`, so the animation layer can morph one into the other.
//! The controller only emits keys; it never animates anything itself.

use crate::roster::CardId;
use std::fmt;

/// Opaque correlation key: `<scope>-<card id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey(String);

impl TransitionKey {
    pub fn new(scope: &str, id: &CardId) -> Self {
        Self(format!("{}-{}", scope, id))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Compact card grows into the detail panel
    Expand,
    /// Detail panel shrinks back into its card
    Collapse,
}

/// Emitted by the controller on every state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub key: TransitionKey,
    pub kind: TransitionKind,
}

impl Transition {
    pub fn expand(key: TransitionKey) -> Self {
        Self {
            key,
            kind: TransitionKind::Expand,
        }
    }

    pub fn collapse(key: TransitionKey) -> Self {
        Self {
            key,
            kind: TransitionKind::Collapse,
        }
    }
}
