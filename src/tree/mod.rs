// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! Binary search trees over `i32` keys.
//!
//! [`BinarySearchTree`] and [`AVLTree`] share one arena-backed core,
//! [`TreeCore`], which owns every node and does the ordered bookkeeping
//! (descent, splicing, successor, heights). The AVL tree adds rotations on
//! top. Read-only queries shared by both trees live on the [`SearchTree`]
//! trait.

mod avl;
mod bst;

pub use avl::AVLTree;
pub use bst::BinarySearchTree;

use crate::node::{
    Arena,
    NodeId,
    TreeNode,
};

/// The node store and ordered structure behind both tree types.
#[derive(Debug, Clone)]
pub struct TreeCore {
    arena: Arena<TreeNode>,
    root: Option<NodeId>,
}

/// What [`TreeCore::detach`] leaves behind.
pub(crate) struct Detached {
    /// Former parent of the node that was physically unlinked. Heights above
    /// this point may be stale.
    pub(crate) parent: Option<NodeId>,
}

impl TreeCore {
    pub(crate) fn new() -> Self {
        TreeCore {
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.arena.get(id)
    }

    pub(crate) fn find(&self, key: i32) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.arena[id];
            cur = match key.cmp(&node.value) {
                | std::cmp::Ordering::Equal => return Some(id),
                | std::cmp::Ordering::Less => node.left,
                | std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    pub(crate) fn min_from(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn max_from(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    /// The in-order successor of `id`.
    pub(crate) fn successor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena[id].right {
            return Some(self.min_from(right));
        }
        let mut child = id;
        let mut parent = self.arena[id].parent;
        while let Some(p) = parent {
            if self.arena[p].right != Some(child) {
                break;
            }
            child = p;
            parent = self.arena[p].parent;
        }
        parent
    }

    pub(crate) fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cur = self.arena[id].parent;
        while let Some(p) = cur {
            depth += 1;
            cur = self.arena[p].parent;
        }
        depth
    }

    /// Attach `key` as a new leaf. Returns `None` if the key is present.
    pub(crate) fn attach(&mut self, key: i32) -> Option<NodeId> {
        let mut parent = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.arena[id];
            parent = Some(id);
            cur = match key.cmp(&node.value) {
                | std::cmp::Ordering::Equal => return None,
                | std::cmp::Ordering::Less => node.left,
                | std::cmp::Ordering::Greater => node.right,
            };
        }

        let id = self.arena.insert(TreeNode::new(key, parent));
        match parent {
            | None => self.root = Some(id),
            | Some(p) if key < self.arena[p].value => self.arena[p].left = Some(id),
            | Some(p) => self.arena[p].right = Some(id),
        }
        Some(id)
    }

    /// Remove `key` with the usual three cases: a leaf is dropped, a node with
    /// one child is spliced out, and a node with two children takes its
    /// in-order successor's value before the successor is spliced out.
    pub(crate) fn detach(&mut self, key: i32) -> Option<Detached> {
        let target = self.find(key)?;
        let victim = match (self.arena[target].left, self.arena[target].right) {
            | (Some(_), Some(right)) => {
                let succ = self.min_from(right);
                self.arena[target].value = self.arena[succ].value;
                succ
            },
            | _ => target,
        };

        let node = &self.arena[victim];
        let child = node.left.or(node.right);
        let parent = node.parent;
        if let Some(c) = child {
            self.arena[c].parent = parent;
        }
        self.replace_child(parent, victim, child);
        self.arena.remove(victim);

        Some(Detached { parent })
    }

    /// Point whatever referenced `old` (its parent, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            | None => self.root = new,
            | Some(p) if self.arena[p].left == Some(old) => self.arena[p].left = new,
            | Some(p) => self.arena[p].right = new,
        }
    }

    /// Height of an optional subtree; an absent subtree is -1.
    pub(crate) fn subtree_height(&self, id: Option<NodeId>) -> isize {
        id.map_or(-1, |id| self.arena[id].height as isize)
    }

    pub(crate) fn balance_factor(&self, id: NodeId) -> isize {
        let node = &self.arena[id];
        self.subtree_height(node.left) - self.subtree_height(node.right)
    }

    /// Recompute the cached height of `id` from its children. Returns whether
    /// it changed.
    pub(crate) fn update_height(&mut self, id: NodeId) -> bool {
        let node = &self.arena[id];
        let height = (1 + self.subtree_height(node.left).max(self.subtree_height(node.right))) as usize;
        let changed = self.arena[id].height != height;
        self.arena[id].height = height;
        changed
    }

    /// Refresh heights from `start` towards the root, stopping once a height
    /// is unchanged.
    pub(crate) fn refresh_heights(&mut self, start: Option<NodeId>) {
        let mut cur = start;
        while let Some(id) = cur {
            if !self.update_height(id) {
                break;
            }
            cur = self.arena[id].parent;
        }
    }

    pub(crate) fn value_of(&self, id: NodeId) -> i32 {
        self.arena[id].value
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    pub(crate) fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].left
    }

    pub(crate) fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].right
    }

    /// Rotate `x` down to the left. `x` must have a right child, which takes
    /// its place. Returns the new subtree root.
    pub(crate) fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let Some(y) = self.arena[x].right else {
            return x;
        };
        let parent = self.arena[x].parent;

        let inner = self.arena[y].left;
        self.arena[x].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));
        self.arena[y].left = Some(x);
        self.arena[x].parent = Some(y);

        self.update_height(x);
        self.update_height(y);
        y
    }

    /// Mirror of [`TreeCore::rotate_left`].
    pub(crate) fn rotate_right(&mut self, x: NodeId) -> NodeId {
        let Some(y) = self.arena[x].left else {
            return x;
        };
        let parent = self.arena[x].parent;

        let inner = self.arena[y].right;
        self.arena[x].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));
        self.arena[y].right = Some(x);
        self.arena[x].parent = Some(y);

        self.update_height(x);
        self.update_height(y);
        y
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }
}

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

/// Read-only queries common to both tree types.
pub trait SearchTree {
    fn core(&self) -> &TreeCore;

    fn len(&self) -> usize {
        self.core().len()
    }

    fn is_empty(&self) -> bool {
        self.core().root().is_none()
    }

    fn root(&self) -> Option<&TreeNode> {
        self.core().root().and_then(|id| self.core().get(id))
    }

    /// Resolve a node id handed out by this tree.
    fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.core().get(id)
    }

    fn exists(&self, key: i32) -> bool {
        self.core().find(key).is_some()
    }

    fn search(&self, key: i32) -> Option<&TreeNode> {
        self.core().find(key).and_then(|id| self.core().get(id))
    }

    /// The node holding the smallest key greater than `key`. `None` if `key`
    /// is absent or is the maximum.
    fn successor(&self, key: i32) -> Option<&TreeNode> {
        let core = self.core();
        let id = core.find(key)?;
        core.successor_of(id).and_then(|succ| core.get(succ))
    }

    /// Number of edges between the root and `key`.
    fn depth(&self, key: i32) -> Option<usize> {
        self.core().find(key).map(|id| self.core().depth_of(id))
    }

    /// Height of the subtree rooted at `key`; a leaf is 0.
    fn height(&self, key: i32) -> Option<usize> {
        self.search(key).map(TreeNode::height)
    }

    fn in_order(&self) -> InOrder<'_> {
        InOrder {
            core: self.core(),
            stack: Vec::new(),
            cur: self.core().root(),
        }
    }

    fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            core: self.core(),
            stack: self.core().root().into_iter().collect(),
        }
    }

    fn post_order(&self) -> PostOrder<'_> {
        PostOrder {
            core: self.core(),
            stack: self.core().root().map(|id| (id, false)).into_iter().collect(),
        }
    }

    /// Forward every key to `sink` in the given order.
    fn traverse<F: FnMut(i32)>(&self, order: TraversalOrder, sink: F)
    where
        Self: Sized,
    {
        match order {
            | TraversalOrder::InOrder => self.in_order().for_each(sink),
            | TraversalOrder::PreOrder => self.pre_order().for_each(sink),
            | TraversalOrder::PostOrder => self.post_order().for_each(sink),
        }
    }
}

/// Left subtree, node, right subtree.
pub struct InOrder<'a> {
    core: &'a TreeCore,
    stack: Vec<NodeId>,
    cur: Option<NodeId>,
}

impl Iterator for InOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cur {
            self.stack.push(id);
            self.cur = self.core.left_of(id);
        }
        let id = self.stack.pop()?;
        self.cur = self.core.right_of(id);
        Some(self.core.arena[id].value)
    }
}

/// Node, left subtree, right subtree.
pub struct PreOrder<'a> {
    core: &'a TreeCore,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.core.arena[id];
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(node.value)
    }
}

/// Left subtree, right subtree, node.
pub struct PostOrder<'a> {
    core: &'a TreeCore,
    // the flag marks nodes whose children have already been pushed
    stack: Vec<(NodeId, bool)>,
}

impl Iterator for PostOrder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = &self.core.arena[id];
            if expanded {
                return Some(node.value);
            }
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|r| (r, false)));
            self.stack.extend(node.left.map(|l| (l, false)));
        }
    }
}
