// SPDX-License-Identifier: MPL-2.0

//! Lazy traversals over a [`BinarySearchTree`](crate::BinarySearchTree).
//!
//! Each traversal is a small state machine over a stack of borrowed nodes.
//! It is built from the tree's current root and borrows the tree for as long
//! as it lives, so the tree cannot change underneath it. Traversals are
//! forward-only and cannot be restarted: ask the tree for a new one to make
//! another pass.
//!
//! | Order | State | Memory |
//! |---|---|---|
//! | [`InOrder`] | left spines of pending subtrees | `O(depth)` |
//! | [`PreOrder`] | pending subtree roots | `O(depth)` |
//! | [`PostOrder`] | every node, computed up front | `O(len)` |

use core::iter::FusedIterator;

use crate::{node::Node, TreeError};

/// The order in which a traversal visits the elements of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Ascending order: left subtree, node, right subtree.
    InOrder,
    /// Node first, then its left and right subtrees.
    PreOrder,
    /// Left and right subtrees first, then the node.
    PostOrder,
}

/// A lazy sequence over the elements of a tree.
///
/// Every traversal is an [`Iterator`], so `next` returns `None` once the
/// sequence is exhausted. [`Traversal::try_next`] reports the same condition
/// as [`TreeError::ExhaustedIterator`] instead.
pub trait Traversal<'a, E: 'a>: Iterator<Item = &'a E> {
    /// Returns `true` if another element remains.
    fn has_next(&self) -> bool;

    /// Advances the traversal and returns the next element.
    ///
    /// Fails with [`TreeError::ExhaustedIterator`] when [`Traversal::has_next`]
    /// is `false`. An exhausted traversal stays exhausted.
    fn try_next(&mut self) -> Result<&'a E, TreeError> {
        self.next().ok_or(TreeError::ExhaustedIterator)
    }
}

/// In-order (ascending) traversal.
#[derive(Debug)]
pub struct InOrder<'a, E> {
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> InOrder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant below it.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<E>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, E> Iterator for InOrder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        debug_assert!(self.remaining > 0, "traversal outran its length");
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> Traversal<'a, E> for InOrder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<E> ExactSizeIterator for InOrder<'_, E> {}

impl<E> FusedIterator for InOrder<'_, E> {}

/// Pre-order traversal: each node before its subtrees, left before right.
#[derive(Debug)]
pub struct PreOrder<'a, E> {
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> PreOrder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, E> Iterator for PreOrder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so that left comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        debug_assert!(self.remaining > 0, "traversal outran its length");
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> Traversal<'a, E> for PreOrder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<E> ExactSizeIterator for PreOrder<'_, E> {}

impl<E> FusedIterator for PreOrder<'_, E> {}

/// Post-order traversal: each node after its subtrees, left before right.
///
/// Unlike the other orders, the whole visiting sequence is computed when the
/// traversal is built, and `next` only pops from it.
#[derive(Debug)]
pub struct PostOrder<'a, E> {
    output: Vec<&'a Node<E>>,
}

impl<'a, E> PostOrder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        let mut output = Vec::with_capacity(len);
        let mut work: Vec<&'a Node<E>> = root.into_iter().collect();
        // Visiting node, right, left and reading the result backwards yields
        // left, right, node.
        while let Some(node) = work.pop() {
            output.push(node);
            work.extend(node.left());
            work.extend(node.right());
        }

        Self { output }
    }
}

impl<'a, E> Iterator for PostOrder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.output.pop().map(Node::element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.output.len(), Some(self.output.len()))
    }
}

impl<'a, E> Traversal<'a, E> for PostOrder<'a, E> {
    fn has_next(&self) -> bool {
        !self.output.is_empty()
    }
}

impl<E> ExactSizeIterator for PostOrder<'_, E> {}

impl<E> FusedIterator for PostOrder<'_, E> {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{InOrder, PostOrder, PreOrder, Traversal};
    use crate::{node::Node, TreeError};

    //        2
    //      /   \
    //     1     4
    //          / \
    //         3   5
    fn sample() -> Node<u32> {
        Node::with_children(
            2,
            Some(Node::new(1)),
            Some(Node::with_children(4, Some(Node::new(3)), Some(Node::new(5)))),
        )
    }

    fn drain<'a, T: Traversal<'a, u32>>(mut traversal: T) -> Vec<u32> {
        let mut out = Vec::new();
        while traversal.has_next() {
            out.push(*traversal.try_next().unwrap());
        }
        assert_matches!(traversal.try_next(), Err(TreeError::ExhaustedIterator));
        out
    }

    #[test]
    fn in_order_sequence() {
        let root = sample();
        assert_eq!(drain(InOrder::new(Some(&root), 5)), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn pre_order_sequence() {
        let root = sample();
        assert_eq!(drain(PreOrder::new(Some(&root), 5)), [2, 1, 4, 3, 5]);
    }

    #[test]
    fn post_order_sequence() {
        let root = sample();
        assert_eq!(drain(PostOrder::new(Some(&root), 5)), [1, 3, 5, 4, 2]);
    }

    #[test]
    fn in_order_stack_holds_left_spine() {
        let root = sample();
        let mut iter = InOrder::new(Some(&root), 5);
        assert_eq!(iter.stack.len(), 2);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        // Popping 2 pushed the spine of its right subtree: 4, 3.
        assert_eq!(iter.stack.len(), 2);
    }

    #[test]
    fn empty_traversals() {
        assert!(!InOrder::<u32>::new(None, 0).has_next());
        assert!(!PreOrder::<u32>::new(None, 0).has_next());
        assert!(!PostOrder::<u32>::new(None, 0).has_next());
        assert!(drain(PostOrder::new(None, 0)).is_empty());
    }

    #[test]
    fn exact_size() {
        let root = sample();
        let mut iter = PreOrder::new(Some(&root), 5);
        assert_eq!(iter.len(), 5);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(PostOrder::new(Some(&root), 5).len(), 5);
        assert_eq!(InOrder::new(Some(&root), 5).count(), 5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "traversal outran its length")]
    fn length_mismatch_is_caught() {
        let root = sample();
        let mut iter = PreOrder::new(Some(&root), 1);
        iter.next();
        iter.next();
    }

    #[test]
    fn debug_output_is_flat() {
        let root = sample();
        let iter = InOrder::new(Some(&root), 5);
        let output = format!("{:?}", iter);
        assert!(output.contains("Node { element: 2, left: Some(1), right: Some(4) }"));
        assert!(output.contains("remaining: 5"));
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let root = Node::new(7);
        let mut iter = InOrder::new(Some(&root), 1);
        assert_eq!(iter.next(), Some(&7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_matches!(iter.try_next(), Err(TreeError::ExhaustedIterator));
    }
}
