// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist over `i32` keys which allows faster search than a standard
//! linked list.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level `n` is `p` times the chance of occupying level `n-1`
//! (with `0 < p < 1`).
//!
//! It is very unlikely that this will need to be changed as the default should
//! suffice, but if need be custom level generators can be implemented.

mod level_generator;

use std::fmt;

pub use level_generator::{
    GeometricalLevelGenerator,
    LevelGenerator,
};
use tracing::{
    debug,
    instrument,
};

use crate::{
    config::SkipListConfig,
    errs::Result,
    node::{
        Arena,
        NodeId,
        SkipNode,
    },
};

/// An ordered set of keys with expected `O(log n)` search, insert and delete.
///
/// Every node is linked both ways on each level it occupies. The head is not
/// a node; a `None` link on the way back means "the head".
#[derive(Debug, Clone)]
pub struct SkipList<G = GeometricalLevelGenerator> {
    arena: Arena<SkipNode>,
    /// Forward links out of the head, one per possible level.
    head: Vec<Option<NodeId>>,
    /// Number of levels with at least one node.
    height: usize,
    level_generator: G,
}

impl SkipList {
    pub fn new() -> Result<Self> {
        Self::with_config(SkipListConfig::default())
    }

    /// A list whose node heights are reproducible across runs.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::with_config(SkipListConfig {
            seed: Some(seed),
            ..SkipListConfig::default()
        })
    }

    pub fn with_config(config: SkipListConfig) -> Result<Self> {
        let generator = match config.seed {
            | Some(seed) => GeometricalLevelGenerator::with_seed(config.max_level, config.p, seed)?,
            | None => GeometricalLevelGenerator::new(config.max_level, config.p)?,
        };
        Ok(Self::with_generator(generator))
    }
}

impl<G: LevelGenerator> SkipList<G> {
    pub fn with_generator(level_generator: G) -> Self {
        SkipList {
            arena: Arena::new(),
            head: vec![None; level_generator.total()],
            height: 0,
            level_generator,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.first().copied().flatten().is_none()
    }

    /// Count of levels currently in use, 0 for an empty list. A list whose
    /// tallest node spans levels 0 and 1 has height 2.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the highest level in use. `None` for an empty list.
    pub fn top_level(&self) -> Option<usize> {
        self.height.checked_sub(1)
    }

    /// The node holding the smallest key.
    pub fn head(&self) -> Option<&SkipNode> {
        self.head
            .first()
            .copied()
            .flatten()
            .and_then(|id| self.arena.get(id))
    }

    /// Resolve a node id handed out by this list.
    pub fn node(&self, id: NodeId) -> Option<&SkipNode> {
        self.arena.get(id)
    }

    /// The forward link of `from` on `level`, with `None` standing for the
    /// head.
    fn next_of(&self, from: Option<NodeId>, level: usize) -> Option<NodeId> {
        match from {
            | None => self.head[level],
            | Some(id) => self.arena[id].forward[level],
        }
    }

    fn set_next(&mut self, from: Option<NodeId>, level: usize, to: Option<NodeId>) {
        match from {
            | None => self.head[level] = to,
            | Some(id) => self.arena[id].forward[level] = to,
        }
    }

    /// For each of the lowest `levels` levels, the last node whose key is
    /// below `key`.
    fn predecessors(&self, key: i32, levels: usize) -> Vec<Option<NodeId>> {
        let mut update = vec![None; levels];
        let mut cur = None;
        for level in (0..levels).rev() {
            while let Some(next) = self.next_of(cur, level) {
                if self.arena[next].value >= key {
                    break;
                }
                cur = Some(next);
            }
            update[level] = cur;
        }
        update
    }

    fn find(&self, key: i32) -> Option<NodeId> {
        let mut cur = None;
        for level in (0..self.height).rev() {
            while let Some(next) = self.next_of(cur, level) {
                if self.arena[next].value >= key {
                    break;
                }
                cur = Some(next);
            }
        }
        if self.height == 0 {
            return None;
        }
        self.next_of(cur, 0)
            .filter(|&id| self.arena[id].value == key)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, key: i32) -> Option<&SkipNode> {
        self.find(key).map(|id| &self.arena[id])
    }

    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Insert `key` with a freshly drawn height. Returns `false` if the key
    /// is already present.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, key: i32) -> bool {
        if self.contains(key) {
            debug!(key, "key already exists");
            return false;
        }

        let height = self.level_generator.random() + 1;
        let update = self.predecessors(key, height.max(self.height));
        let id = self.arena.insert(SkipNode::new(key, height));

        for (level, &prev) in update.iter().enumerate().take(height) {
            let next = self.next_of(prev, level);
            let node = &mut self.arena[id];
            node.forward[level] = next;
            node.backward[level] = prev;
            self.set_next(prev, level, Some(id));
            if let Some(next) = next {
                self.arena[next].backward[level] = Some(id);
            }
        }

        self.height = self.height.max(height);
        true
    }

    /// Unlink `key` from every level it sits on. Returns `false` if the key
    /// was not present.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, key: i32) -> bool {
        let Some(id) = self.find(key) else {
            debug!(key, "key does not exist");
            return false;
        };

        let Some(node) = self.arena.remove(id) else {
            return false;
        };
        for level in 0..node.height() {
            let (prev, next) = (node.backward[level], node.forward[level]);
            self.set_next(prev, level, next);
            if let Some(next) = next {
                self.arena[next].backward[level] = prev;
            }
        }

        while self.height > 0 && self.head[self.height - 1].is_none() {
            self.height -= 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head.iter_mut().for_each(|link| *link = None);
        self.height = 0;
    }

    /// All keys in ascending order.
    pub fn iter(&self) -> Level<'_, G> {
        self.level(0)
    }

    /// The keys present on `level`, ascending. Empty above the list height.
    pub fn level(&self, level: usize) -> Level<'_, G> {
        Level {
            list: self,
            level,
            next: self.head.get(level).copied().flatten(),
        }
    }
}

pub struct Level<'a, G> {
    list: &'a SkipList<G>,
    level: usize,
    next: Option<NodeId>,
}

impl<G> Iterator for Level<'_, G> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.arena[self.next?];
        self.next = node.forward[self.level];
        Some(node.value)
    }
}

/// One line per level, top level first. Keys are aligned to their column on
/// level 0:
///
/// ```text
/// [ ]     [3]
/// [ ] [1] [3] [7]
/// ```
impl<G: LevelGenerator> fmt::Display for SkipList<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "The skip list is empty");
        }
        for level in (0..self.height).rev() {
            write!(f, "[ ]")?;
            // gaps are only written once a key follows them
            let mut pad = 0;
            let mut cur = self.head[0];
            while let Some(id) = cur {
                let node = &self.arena[id];
                let cell = format!(" [{}]", node.value);
                if node.height() > level {
                    write!(f, "{:pad$}{}", "", cell)?;
                    pad = 0;
                } else {
                    pad += cell.len();
                }
                cur = node.forward[0];
            }
            if level > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
