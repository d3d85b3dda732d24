// SPDX-License-Identifier: MPL-2.0

//! Errors surfaced by tree and traversal operations.

/// Errors triggered by binary search tree operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation needs at least one element but the tree has none.
    ///
    /// This is a violated precondition, not a failed lookup: a lookup that
    /// finds nothing in a non-empty tree returns `Ok(None)` instead.
    #[error("the tree is empty")]
    EmptyTree,
    /// An absent entry was offered for insertion.
    #[error("cannot add an absent entry to the tree")]
    NullEntry,
    /// A traversal was advanced past its last element.
    #[error("no more elements in traversal")]
    ExhaustedIterator,
}
