// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! The node shapes shared by the containers in this crate.
//!
//! [`ListNode`] owns its successor directly. [`TreeNode`] and [`SkipNode`]
//! carry back-references (`parent`, `backward`), so they live in an
//! [`Arena`] owned by their container and link to each other through
//! [`NodeId`]s. A back-reference is only ever an index, never an ownership
//! path, so releasing a container releases each node exactly once.

use std::ops::{
    Index,
    IndexMut,
};

/// A stable reference to a node inside the container that produced it.
///
/// An id is only meaningful to that container; once the node is removed the
/// id no longer resolves (its slot may later be reused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A singly-linked list node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub(crate) value: i32,
    pub(crate) next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(value: i32) -> Self {
        ListNode { value, next: None }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut ListNode> {
        self.next.as_deref_mut()
    }

    /// Replace the successor, returning the old one.
    pub fn set_next(&mut self, next: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
        std::mem::replace(&mut self.next, next)
    }

    pub fn take_next(&mut self) -> Option<Box<ListNode>> {
        self.next.take()
    }
}

/// A binary tree node.
///
/// `height` is the length of the longest downward path to a leaf, so a leaf
/// has height 0. The owning tree keeps it exact after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub(crate) value: i32,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) height: usize,
}

impl TreeNode {
    pub(crate) fn new(value: i32, parent: Option<NodeId>) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            parent,
            height: 0,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A skip list node present on levels `0..height()`.
///
/// A `None` backward link means the predecessor on that level is the list
/// head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipNode {
    pub(crate) value: i32,
    pub(crate) forward: Vec<Option<NodeId>>,
    pub(crate) backward: Vec<Option<NodeId>>,
}

impl SkipNode {
    pub(crate) fn new(value: i32, height: usize) -> Self {
        SkipNode {
            value,
            forward: vec![None; height],
            backward: vec![None; height],
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn height(&self) -> usize {
        self.forward.len()
    }

    /// The next node on `level`, if any.
    pub fn next(&self, level: usize) -> Option<NodeId> {
        self.forward.get(level).copied().flatten()
    }

    /// The previous node on `level`; `None` at the head or above this node's
    /// height.
    pub fn prev(&self, level: usize) -> Option<NodeId> {
        self.backward.get(level).copied().flatten()
    }
}

/// Slot storage for nodes addressed by [`NodeId`]. Freed slots are recycled.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            | Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            },
            | None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.0)?.as_ref()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

// Indexing is for ids the container itself holds in its links; those always
// resolve to a live slot.
impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match self.slots[id.0] {
            | Some(ref node) => node,
            | None => panic!("dangling node id {}", id.index()),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match self.slots[id.0] {
            | Some(ref mut node) => node,
            | None => panic!("dangling node id {}", id.index()),
        }
    }
}
