// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use tracing::{
    debug,
    instrument,
};

use crate::{
    node::{
        NodeId,
        TreeNode,
    },
    tree::{
        SearchTree,
        TreeCore,
    },
};

/// A height-balanced binary search tree.
///
/// After every insert and delete, each node's balance factor (left height
/// minus right height) is in `-1..=1`.
#[derive(Debug, Clone)]
pub struct AVLTree {
    core: TreeCore,
}

impl Default for AVLTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AVLTree {
    pub fn new() -> Self {
        AVLTree {
            core: TreeCore::new(),
        }
    }

    /// The node holding the smallest key.
    pub fn minimum(&self) -> Option<&TreeNode> {
        let root = self.core.root()?;
        self.core.get(self.core.min_from(root))
    }

    /// The node holding the largest key.
    pub fn maximum(&self) -> Option<&TreeNode> {
        let root = self.core.root()?;
        self.core.get(self.core.max_from(root))
    }

    /// Insert `key`, rebalancing on the way back to the root. Returns `false`
    /// and leaves the tree untouched if the key is already present.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, key: i32) -> bool {
        match self.core.attach(key) {
            | Some(id) => {
                let parent = self.core.parent_of(id);
                self.rebalance(parent);
                true
            },
            | None => {
                debug!(key, "key already exists");
                false
            },
        }
    }

    /// Delete `key`, rebalancing from the unlinked node's former parent.
    /// Returns `false` if the key was not present.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, key: i32) -> bool {
        match self.core.detach(key) {
            | Some(detached) => {
                self.rebalance(detached.parent);
                true
            },
            | None => {
                debug!(key, "key does not exist");
                false
            },
        }
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Walk from `start` to the root, fixing heights and rotating every
    /// ancestor whose balance factor left `-1..=1`.
    fn rebalance(&mut self, start: Option<NodeId>) {
        let mut cur = start;
        while let Some(id) = cur {
            self.core.update_height(id);
            let subtree = self.balance_at(id);
            cur = self.core.parent_of(subtree);
        }
    }

    /// Restore balance at `id`, returning the root of the resulting subtree.
    fn balance_at(&mut self, id: NodeId) -> NodeId {
        let factor = self.core.balance_factor(id);
        if factor > 1 {
            if let Some(left) = self.core.left_of(id) {
                // left-right: straighten the kink first
                if self.core.balance_factor(left) < 0 {
                    self.core.rotate_left(left);
                }
            }
            self.core.rotate_right(id)
        } else if factor < -1 {
            if let Some(right) = self.core.right_of(id) {
                // right-left
                if self.core.balance_factor(right) > 0 {
                    self.core.rotate_right(right);
                }
            }
            self.core.rotate_left(id)
        } else {
            id
        }
    }
}

impl SearchTree for AVLTree {
    fn core(&self) -> &TreeCore {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use proptest::{
        collection::vec,
        prelude::any,
        proptest,
    };
    use rand::{
        rngs::SmallRng,
        Rng,
        SeedableRng,
    };

    use crate::tree::{
        tests::check_structure,
        AVLTree,
        SearchTree,
        TraversalOrder,
    };

    /// Assert |balance factor| <= 1 everywhere.
    fn check_balanced(tree: &AVLTree) {
        check_structure(tree.core());
        let mut stack: Vec<_> = tree.core().root().into_iter().collect();
        while let Some(id) = stack.pop() {
            let factor = tree.core().balance_factor(id);
            assert!((-1..=1).contains(&factor), "balance factor {} out of range", factor);
            stack.extend(tree.core().left_of(id));
            stack.extend(tree.core().right_of(id));
        }
    }

    fn child_value(tree: &AVLTree, id: Option<crate::node::NodeId>) -> Option<i32> {
        id.and_then(|id| tree.node(id)).map(|n| n.value())
    }

    #[test]
    fn test_single_rotation() {
        let mut tree = AVLTree::new();
        for key in [10, 20, 30] {
            assert!(tree.insert(key));
        }

        let root = tree.root().expect("tree is not empty");
        assert_eq!(root.value(), 20);
        assert_eq!(child_value(&tree, root.left()), Some(10));
        assert_eq!(child_value(&tree, root.right()), Some(30));
        assert_eq!(tree.height(20), Some(1));
        check_balanced(&tree);
    }

    #[test]
    fn test_double_rotations() {
        // left-right
        let mut tree = AVLTree::new();
        for key in [30, 10, 20] {
            tree.insert(key);
        }
        assert_eq!(tree.root().map(|n| n.value()), Some(20));
        check_balanced(&tree);

        // right-left
        let mut tree = AVLTree::new();
        for key in [10, 30, 20] {
            tree.insert(key);
        }
        assert_eq!(tree.root().map(|n| n.value()), Some(20));
        check_balanced(&tree);
    }

    #[test]
    fn test_ascending_inserts_stay_logarithmic() {
        let mut tree = AVLTree::new();
        for key in 0..1024 {
            tree.insert(key);
        }
        check_balanced(&tree);
        let root = tree.root().expect("non-empty").value();
        // 1024 keys fit in a height of at most 1.44 * log2(n)
        assert!(tree.height(root).expect("root exists") <= 14);
        assert_eq!(tree.in_order().collect::<Vec<_>>(), (0..1024).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = AVLTree::new();
        assert!(tree.insert(5));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_min_max_successor() {
        let mut tree = AVLTree::new();
        assert!(tree.minimum().is_none());
        assert!(tree.maximum().is_none());

        for key in [50, 20, 70, 10, 30, 60, 80] {
            tree.insert(key);
        }
        assert_eq!(tree.minimum().map(|n| n.value()), Some(10));
        assert_eq!(tree.maximum().map(|n| n.value()), Some(80));
        assert_eq!(tree.successor(30).map(|n| n.value()), Some(50));
        assert_eq!(tree.successor(60).map(|n| n.value()), Some(70));
        assert!(tree.successor(80).is_none(), "maximum has no successor");
        assert!(tree.successor(55).is_none(), "missing key has no successor");
    }

    #[test]
    fn test_depth_and_height() {
        let mut tree = AVLTree::new();
        for key in [50, 20, 70, 10] {
            tree.insert(key);
        }
        assert_eq!(tree.depth(50), Some(0));
        assert_eq!(tree.depth(10), Some(2));
        assert_eq!(tree.height(50), Some(2));
        assert_eq!(tree.height(10), Some(0));
        assert_eq!(tree.depth(99), None);
        assert_eq!(tree.height(99), None);
    }

    #[test]
    fn test_delete_rebalances() {
        let mut tree = AVLTree::new();
        for key in [50, 20, 70, 10, 30, 80, 5] {
            tree.insert(key);
        }
        // removing the right side forces a rotation at the root
        assert!(tree.delete(70));
        assert!(tree.delete(80));
        check_balanced(&tree);
        assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![5, 10, 20, 30, 50]);

        assert!(!tree.delete(70));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_delete_root_with_two_children() {
        let mut tree = AVLTree::new();
        for key in [2, 1, 3] {
            tree.insert(key);
        }
        assert!(tree.delete(2));
        assert_eq!(tree.root().map(|n| n.value()), Some(3));
        check_balanced(&tree);

        assert!(tree.delete(3));
        assert!(tree.delete(1));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_traversals() {
        let mut tree = AVLTree::new();
        for key in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(key);
        }
        assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.post_order().collect::<Vec<_>>(), vec![1, 3, 2, 5, 7, 6, 4]);

        let mut seen = Vec::new();
        tree.traverse(TraversalOrder::InOrder, |v| seen.push(v));
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);

        // traversals are restartable
        assert_eq!(tree.in_order().count(), 7);
        assert_eq!(tree.in_order().count(), 7);
    }

    #[test]
    fn test_random_workload() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut tree = AVLTree::new();
        let mut model = std::collections::BTreeSet::new();

        for _ in 0..2_000 {
            let key = rng.gen_range(0..300);
            if rng.gen_bool(0.6) {
                assert_eq!(tree.insert(key), model.insert(key));
            } else {
                assert_eq!(tree.delete(key), model.remove(&key));
            }
        }
        check_balanced(&tree);
        assert_eq!(tree.len(), model.len());
        assert!(tree.in_order().eq(model.iter().copied()));
    }

    proptest! {
        #[test]
        fn test_balanced_after_every_operation(ops in vec((any::<bool>(), -50i32..50), 1..200)) {
            let mut tree = AVLTree::new();
            let mut model = std::collections::BTreeSet::new();
            for (insert, key) in ops {
                if insert {
                    tree.insert(key);
                    model.insert(key);
                } else {
                    tree.delete(key);
                    model.remove(&key);
                }
                check_balanced(&tree);
                assert!(tree.in_order().eq(model.iter().copied()));
            }
        }
    }
}
