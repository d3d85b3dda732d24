// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]

//! A generic, unbalanced binary search tree.
//!
//! [`BinarySearchTree`] stores a duplicate-free set of totally ordered
//! elements in a plain linked tree of [`Node`]s and hands out three kinds of
//! lazy traversal: in-order, pre-order and post-order. The tree never
//! rebalances; its shape is decided by insertion order alone.
//!
//! Lookups on an empty tree fail with [`TreeError::EmptyTree`], which keeps
//! "the tree is empty" apart from "the element is not there".
//!
//! ## Features
//! - `serde` (default): `Serialize` and `Deserialize` for
//!   [`BinarySearchTree`], preserving its shape.

mod error;
pub mod node;
#[cfg(feature = "serde")]
mod persist;
pub mod traversal;
pub mod tree;

pub use error::TreeError;
pub use node::Node;
pub use traversal::{InOrder, Order, PostOrder, PreOrder, Traversal};
pub use tree::BinarySearchTree;
