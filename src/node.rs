// SPDX-License-Identifier: MPL-2.0

//! A vertex of a binary search tree.
//!
//! A [`Node`] owns its element and, exclusively, its left and right subtrees.
//! Dropping a node drops its whole subtree. Structural operations on a node
//! are iterative, so degenerate (list-shaped) trees are safe to measure, grow
//! and free regardless of their depth.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};

/// An owned, possibly absent, child subtree.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// Represents a node of a binary search tree.
///
/// Within a tree built through [`Node::add`] every element in the left
/// subtree compares less than this node's element and every element in the
/// right subtree compares greater. The setters do not re-validate this
/// ordering; keeping it is the caller's job.
#[derive(Default)]
pub struct Node<E> {
    pub(crate) element: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Node<E> {
    /// Creates a leaf holding `element`.
    pub fn new(element: E) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// Creates a node holding `element` that takes ownership of the given
    /// subtrees.
    pub fn with_children(element: E, left: Option<Node<E>>, right: Option<Node<E>>) -> Self {
        Self {
            element,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns a reference to the element stored in this node.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Returns a mutable reference to the element stored in this node.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Replaces the element stored in this node, returning the previous one.
    pub fn set_element(&mut self, element: E) -> E {
        core::mem::replace(&mut self.element, element)
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node<E>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node<E>> {
        self.right.as_deref()
    }

    /// Replaces the left subtree, returning the one previously owned there.
    pub fn set_left(&mut self, left: Option<Node<E>>) -> Option<Node<E>> {
        core::mem::replace(&mut self.left, left.map(Box::new)).map(|node| *node)
    }

    /// Replaces the right subtree, returning the one previously owned there.
    pub fn set_right(&mut self, right: Option<Node<E>>) -> Option<Node<E>> {
        core::mem::replace(&mut self.right, right.map(Box::new)).map(|node| *node)
    }

    /// Returns `true` if this node has a left child.
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns `true` if this node has a right child.
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of nodes on the longest downward path starting at
    /// this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }

        height
    }

    /// Finds the node holding an element equal to `key` in this subtree.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Node<E>>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match key.cmp(node.element.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    /// Mutable counterpart of [`Node::find`].
    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<E>>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self;
        loop {
            let next = match key.cmp(current.element.borrow()) {
                Ordering::Less => current.left.as_deref_mut(),
                Ordering::Greater => current.right.as_deref_mut(),
                Ordering::Equal => return Some(current),
            };
            current = next?;
        }
    }
}

impl<E: Ord> Node<E> {
    /// Inserts `node`, with any subtree it already owns, into this subtree.
    ///
    /// The tree is walked from this node with strict comparisons: smaller
    /// elements descend left, greater ones descend right, and `node` is
    /// attached at the first empty link reached. If an element equal to the
    /// incoming one is met on the way, nothing is attached, `node` is dropped
    /// and `false` is returned.
    pub fn add(&mut self, node: Node<E>) -> bool {
        let Some(mut link) = self.link_toward(&node.element) else {
            return false;
        };
        while let Some(next) = link {
            match next.link_toward(&node.element) {
                Some(child) => link = child,
                None => return false,
            }
        }
        *link = Some(Box::new(node));

        true
    }

    /// Returns the child link `element` belongs under, or `None` if
    /// `element` equals this node's element.
    fn link_toward(&mut self, element: &E) -> Option<&mut Link<E>> {
        match element.cmp(&self.element) {
            Ordering::Less => Some(&mut self.left),
            Ordering::Greater => Some(&mut self.right),
            Ordering::Equal => None,
        }
    }
}

impl<E: PartialEq> PartialEq for Node<E> {
    /// Nodes are equal when their subtrees have the same shape and hold equal
    /// elements at the same positions.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.element != right.element {
                return false;
            }
            for children in [(left.left(), right.left()), (left.right(), right.right())] {
                match children {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<E: Eq> Eq for Node<E> {}

// Only the children's elements are shown, so formatting never descends
// further than one level.
impl<E: Debug> Debug for Node<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left().map(Node::element))
            .field("right", &self.right().map(Node::element))
            .finish()
    }
}

impl<E> Drop for Node<E> {
    // Unlink the subtree onto a heap stack first so that freeing a deep tree
    // does not recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<E>>> = self.left.take().into_iter().collect();
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
