// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use tracing::{
    debug,
    instrument,
};

use crate::{
    errs::{
        Error,
        Result,
    },
    tree::{
        SearchTree,
        TreeCore,
    },
};

/// An unbalanced binary search tree. Its shape depends entirely on the
/// insertion order.
#[derive(Debug, Clone)]
pub struct BinarySearchTree {
    core: TreeCore,
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinarySearchTree {
    pub fn new() -> Self {
        BinarySearchTree {
            core: TreeCore::new(),
        }
    }

    /// The smallest key. Unlike [`AVLTree::minimum`](crate::tree::AVLTree::minimum)
    /// this returns the value itself.
    pub fn minimum(&self) -> Result<i32> {
        let root = self.core.root().ok_or(Error::EmptyContainer)?;
        Ok(self.core.value_of(self.core.min_from(root)))
    }

    /// The largest key.
    pub fn maximum(&self) -> Result<i32> {
        let root = self.core.root().ok_or(Error::EmptyContainer)?;
        Ok(self.core.value_of(self.core.max_from(root)))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, key: i32) -> bool {
        match self.core.attach(key) {
            | Some(id) => {
                let parent = self.core.parent_of(id);
                self.core.refresh_heights(parent);
                true
            },
            | None => {
                debug!(key, "key already exists");
                false
            },
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, key: i32) -> bool {
        match self.core.detach(key) {
            | Some(detached) => {
                self.core.refresh_heights(detached.parent);
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
}

impl SearchTree for BinarySearchTree {
    fn core(&self) -> &TreeCore {
        &self.core
    }
}
