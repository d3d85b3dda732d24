// SPDX-License-Identifier: MPL-2.0

//! `serde` support for [`BinarySearchTree`].
//!
//! A tree serializes as the sequence of its elements in pre-order and
//! deserializes by inserting that sequence in order. Replaying the pre-order
//! sequence of a duplicate-free tree rebuilds exactly the same shape, so the
//! in-order, pre-order and post-order traversals all survive a round trip.
//! Duplicates in a hand-written input are dropped, as with
//! [`BinarySearchTree::add`].

use core::fmt::{self, Formatter};
use core::marker::PhantomData;

use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::BinarySearchTree;

impl<E: Serialize> Serialize for BinarySearchTree<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.preorder_iter())
    }
}

impl<'de, E: Deserialize<'de> + Ord> Deserialize<'de> for BinarySearchTree<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TreeVisitor {
            phantom: PhantomData,
        })
    }
}

/// serde Visitor replaying a sequence of elements into a tree.
struct TreeVisitor<E> {
    phantom: PhantomData<E>,
}

impl<'de, E: Deserialize<'de> + Ord> Visitor<'de> for TreeVisitor<E> {
    type Value = BinarySearchTree<E>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence of tree elements in pre-order")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = BinarySearchTree::new();
        let mut offered = 0usize;
        while let Some(element) = seq.next_element()? {
            tree.add(element);
            offered += 1;
        }

        log::debug!(
            "replayed {} elements into tree, {} kept",
            offered,
            tree.len()
        );
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use crate::BinarySearchTree;

    #[test]
    fn serializes_in_pre_order() {
        let tree: BinarySearchTree<u32> = [2, 4, 1, 3, 5].into_iter().collect();
        assert_eq!(serde_json::to_string(&tree).unwrap(), "[2,1,4,3,5]");
    }

    #[test]
    fn empty_tree_is_empty_sequence() {
        let tree = BinarySearchTree::<u32>::new();
        assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");
        let back: BinarySearchTree<u32> = serde_json::from_str("[]").unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn deserialize_drops_duplicates() {
        let tree: BinarySearchTree<u32> = serde_json::from_str("[5,3,3,7]").unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.iter().copied().eq([3, 5, 7]));
    }

    #[test]
    fn rejects_non_sequence() {
        assert!(serde_json::from_str::<BinarySearchTree<u32>>("{\"a\":1}").is_err());
        assert!(serde_json::from_str::<BinarySearchTree<u32>>("[1,\"x\"]").is_err());
    }
}
