// SPDX-License-Identifier: MPL-2.0

//! An unbalanced binary search tree.
//!
//! ## Properties:
//! - Ordered: every element in a node's left subtree compares less than the
//!   node's element, every element in its right subtree compares greater.
//! - Duplicate-free: inserting an element equal to one already stored is
//!   rejected and leaves the tree untouched.
//! - Append-only: elements can be inserted and queried, never removed one by
//!   one. [`BinarySearchTree::clear`] drops everything at once.
//! - Unbalanced: the shape depends on insertion order alone. Sorted input
//!   degenerates into a list of depth `len`.
//!
//! ## Traversal
//! [`BinarySearchTree::inorder_iter`], [`BinarySearchTree::preorder_iter`] and
//! [`BinarySearchTree::postorder_iter`] return independent lazy sequences,
//! see the [`traversal`](crate::traversal) module.
//!
//! ## Example
//! ```
//! use bstree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for element in [2, 4, 1, 3, 5] {
//!     tree.add(element);
//! }
//! assert_eq!(tree.height(), 3);
//! assert!(tree.inorder_iter().copied().eq([1, 2, 3, 4, 5]));
//! assert!(tree.preorder_iter().copied().eq([2, 1, 4, 3, 5]));
//! assert!(tree.postorder_iter().copied().eq([1, 3, 5, 4, 2]));
//! ```

use core::borrow::Borrow;
use core::fmt::Debug;

use crate::{
    node::{Link, Node},
    traversal::{InOrder, Order, PostOrder, PreOrder, Traversal},
    TreeError,
};

/// Represents an unbalanced binary search tree.
pub struct BinarySearchTree<E> {
    root: Link<E>,
    len: usize,
}

impl<E> BinarySearchTree<E> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the root node.
    ///
    /// Fails with [`TreeError::EmptyTree`] if the tree has no elements.
    pub fn root(&self) -> Result<&Node<E>, TreeError> {
        self.root.as_deref().ok_or(TreeError::EmptyTree)
    }

    /// Returns the number of nodes on the longest path from the root, or 0
    /// for an empty tree.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        log::trace!("clearing tree of {} elements", self.len);
        self.root = None;
        self.len = 0;
    }

    /// Returns the node holding an element equal to `entry`.
    ///
    /// Returns `Ok(None)` if no such element is stored and fails with
    /// [`TreeError::EmptyTree`] if the tree has no elements at all.
    pub fn search<Q>(&self, entry: &Q) -> Result<Option<&Node<E>>, TreeError>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Ok(self.root()?.find(entry))
    }

    /// Returns `true` if an element equal to `entry` is stored.
    ///
    /// Fails with [`TreeError::EmptyTree`] if the tree has no elements.
    pub fn contains<Q>(&self, entry: &Q) -> Result<bool, TreeError>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(entry).map(|node| node.is_some())
    }

    /// Returns a mutable reference to the element equal to `entry`.
    ///
    /// This is meant for updating data that does not take part in ordering.
    /// Changing how the element compares corrupts the tree. Fails like
    /// [`BinarySearchTree::search`].
    pub fn get_mut<Q>(&mut self, entry: &Q) -> Result<Option<&mut E>, TreeError>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root.as_deref_mut().ok_or(TreeError::EmptyTree)?;
        Ok(root.find_mut(entry).map(Node::element_mut))
    }

    /// Returns an in-order (ascending) traversal.
    pub fn inorder_iter(&self) -> InOrder<'_, E> {
        InOrder::new(self.root.as_deref(), self.len)
    }

    /// Returns a pre-order traversal.
    pub fn preorder_iter(&self) -> PreOrder<'_, E> {
        PreOrder::new(self.root.as_deref(), self.len)
    }

    /// Returns a post-order traversal.
    ///
    /// The full visiting sequence is computed up front, so this costs
    /// `O(len)` time and memory before the first element is returned.
    pub fn postorder_iter(&self) -> PostOrder<'_, E> {
        PostOrder::new(self.root.as_deref(), self.len)
    }

    /// Returns a traversal in the given order.
    pub fn traverse(&self, order: Order) -> Box<dyn Traversal<'_, E> + '_> {
        match order {
            Order::InOrder => Box::new(self.inorder_iter()),
            Order::PreOrder => Box::new(self.preorder_iter()),
            Order::PostOrder => Box::new(self.postorder_iter()),
        }
    }

    /// Alias for [`BinarySearchTree::inorder_iter`].
    pub fn iter(&self) -> InOrder<'_, E> {
        self.inorder_iter()
    }
}

impl<E: Ord> BinarySearchTree<E> {
    /// Inserts `entry`.
    ///
    /// Returns `true` if it was stored, or `false` if an equal element is
    /// already present, in which case the tree is unchanged and `entry` is
    /// dropped.
    pub fn add(&mut self, entry: E) -> bool {
        let added = match self.root.as_deref_mut() {
            None => {
                self.root = Some(Box::new(Node::new(entry)));
                true
            }
            Some(root) => root.add(Node::new(entry)),
        };

        if added {
            self.len += 1;
        } else {
            log::trace!("rejected duplicate entry");
        }
        added
    }

    /// Inserts an entry that may be absent.
    ///
    /// Fails with [`TreeError::NullEntry`] before touching the tree if
    /// `entry` is `None`; otherwise behaves like [`BinarySearchTree::add`].
    pub fn try_add(&mut self, entry: Option<E>) -> Result<bool, TreeError> {
        entry.map(|entry| self.add(entry)).ok_or(TreeError::NullEntry)
    }
}

impl<E> Default for BinarySearchTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Debug> Debug for BinarySearchTree<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.inorder_iter()).finish()
    }
}

impl<E: Ord + Clone> Clone for BinarySearchTree<E> {
    // Replaying the pre-order sequence rebuilds the same shape.
    fn clone(&self) -> Self {
        self.preorder_iter().cloned().collect()
    }
}

impl<E: PartialEq> PartialEq for BinarySearchTree<E> {
    /// Trees are equal when they hold equal elements, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.inorder_iter().eq(other.inorder_iter())
    }
}

impl<E: Eq> Eq for BinarySearchTree<E> {}

impl<E: Ord> Extend<E> for BinarySearchTree<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<E: Ord> FromIterator<E> for BinarySearchTree<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, E> IntoIterator for &'a BinarySearchTree<E> {
    type Item = &'a E;
    type IntoIter = InOrder<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}
