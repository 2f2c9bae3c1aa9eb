// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! Classic in-memory data structures over `i32` keys: an AVL tree, an
//! unbalanced binary search tree, a skip list, an adjacency-list graph and a
//! max-priority queue.
//!
//! Every structure owns its nodes outright. Queries that may find nothing
//! return [`Option`], operations that can fail return [`Result`], and results
//! handed back to the caller (neighbor lists, paths, sorted arrays) are owned
//! copies that outlive the structure they came from.

/// Tunables and their defaults.
pub mod config;
mod errs;
/// Directed and undirected graphs with breadth-first queries.
pub mod graph;
/// The singly linked list used for neighbor lists and query results.
pub mod linked_list;
/// Node records shared by the containers.
pub mod node;
pub mod priority_queue;
/// A probabilistic skip list. The level generator is courtesy of
/// [`JP-Ellis`].
///
/// [`JP-Ellis`]: https://github.com/JP-Ellis/rust-skiplist/
pub mod skiplist;
pub mod tree;

pub use errs::{
    Error,
    Result,
};
pub use graph::{
    Distance,
    Graph,
};
pub use linked_list::LinkedList;
pub use priority_queue::PriorityQueue;
pub use skiplist::SkipList;
pub use tree::{
    AVLTree,
    BinarySearchTree,
    SearchTree,
    TraversalOrder,
};
