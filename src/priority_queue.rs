// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::fmt;

use tracing::{
    instrument,
    warn,
};

use crate::{
    config::PriorityQueueConfig,
    errs::{
        Error,
        Result,
    },
};

/// A max-priority queue over `i32`, backed by an array binary heap.
///
/// The element at index `i` has children at `2i + 1` and `2i + 2`, and no
/// child is greater than its parent.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    heap: Vec<i32>,
    max_len: Option<usize>,
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PriorityQueueConfig) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            max_len: config.max_len,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[i32] {
        &self.heap
    }

    /// Position of the first occurrence of `key` in the backing array.
    pub fn index_of(&self, key: i32) -> Option<usize> {
        self.heap.iter().position(|&v| v == key)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, value: i32) -> Result<()> {
        if self.max_len.is_some_and(|max| self.heap.len() >= max) {
            warn!(value, len = self.heap.len(), "priority queue is full");
            return Err(Error::DataExceedsMaximum);
        }
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    pub fn maximum(&self) -> Result<i32> {
        self.heap.first().copied().ok_or(Error::EmptyContainer)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn extract_max(&mut self) -> Result<i32> {
        if self.heap.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let max = self.heap.swap_remove(0);
        let len = self.heap.len();
        self.sift_down(0, len);
        Ok(max)
    }

    /// Raise the element at `index` to `value`. Lowering a key is rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn increase_key(&mut self, index: usize, value: i32) -> Result<()> {
        let Some(current) = self.heap.get_mut(index) else {
            warn!(index, len = self.heap.len(), "index out of range");
            return Err(Error::InvalidOperation("index out of range"));
        };
        if value < *current {
            warn!(index, value, current = *current, "new key is smaller than the current key");
            return Err(Error::InvalidOperation("new key is smaller than the current key"));
        }
        *current = value;
        self.sift_up(index);
        Ok(())
    }

    /// Sort the elements ascending and hand them over. The queue is left
    /// empty.
    #[instrument(level = "debug", skip(self))]
    pub fn heap_sort(&mut self) -> Vec<i32> {
        for end in (1..self.heap.len()).rev() {
            self.heap.swap(0, end);
            self.sift_down(0, end);
        }
        std::mem::take(&mut self.heap)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.heap[parent(i)] < self.heap[i] {
            self.heap.swap(i, parent(i));
            i = parent(i);
        }
    }

    /// Restore the heap property below `i`, looking only at `heap[..end]`.
    fn sift_down(&mut self, mut i: usize, end: usize) {
        loop {
            let l = left(i);
            if l >= end {
                break;
            }
            let r = l + 1;
            // left wins ties
            let child = if r < end && self.heap[r] > self.heap[l] { r } else { l };
            if self.heap[child] <= self.heap[i] {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }
}

impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.heap.is_empty() {
            return write!(f, "Priority queue is empty");
        }
        for (i, v) in self.heap.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
