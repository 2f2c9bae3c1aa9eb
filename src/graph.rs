// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    collections::{
        HashMap,
        HashSet,
        VecDeque,
    },
    fmt,
};

use tracing::{
    debug,
    instrument,
    warn,
};

use crate::{
    errs::{
        Error,
        Result,
    },
    linked_list::LinkedList,
};

/// Outcome of a shortest-path length query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// Number of edges on a shortest path.
    Hops(usize),
    /// No path exists. This is an answer, not a failure.
    Unreachable,
}

impl Distance {
    pub fn hops(&self) -> Option<usize> {
        match self {
            | Distance::Hops(n) => Some(*n),
            | Distance::Unreachable => None,
        }
    }
}

/// Breadth-first search state for one vertex.
#[derive(Debug, Clone, Copy)]
struct Visit {
    distance: usize,
    parent: Option<i32>,
}

/// A directed or undirected graph over `i32` vertices, stored as adjacency
/// lists.
///
/// Vertices keep their creation order and each neighbor list keeps edge
/// insertion order; both orders are visible in query results. Parallel edges
/// are kept.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    vertices: Vec<i32>,
    adjacency: HashMap<i32, LinkedList>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            vertices: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, v: i32) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn has_edge(&self, u: i32, v: i32) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Add `v` if it is not already a vertex. Returns whether it was added.
    #[instrument(level = "debug", skip(self))]
    pub fn create_vertex(&mut self, v: i32) -> bool {
        if self.contains_vertex(v) {
            debug!(v, "vertex already exists");
            return false;
        }
        self.vertices.push(v);
        self.adjacency.insert(v, LinkedList::new());
        true
    }

    /// Remove `v` and every edge touching it. Returns whether it existed.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_vertex(&mut self, v: i32) -> bool {
        if self.adjacency.remove(&v).is_none() {
            debug!(v, "cannot delete missing vertex");
            return false;
        }
        self.vertices.retain(|&x| x != v);
        for neighbors in self.adjacency.values_mut() {
            neighbors.delete_all(v);
        }
        true
    }

    /// Append `v` to `u`'s neighbors, and `u` to `v`'s when undirected. A self
    /// loop is recorded once.
    #[instrument(level = "debug", skip(self))]
    pub fn add_edge(&mut self, u: i32, v: i32) -> Result<()> {
        self.check_vertices(u, v)?;
        if let Some(neighbors) = self.adjacency.get_mut(&u) {
            neighbors.push_back(v);
        }
        if !self.directed && u != v {
            if let Some(neighbors) = self.adjacency.get_mut(&v) {
                neighbors.push_back(u);
            }
        }
        Ok(())
    }

    /// Remove every `u -> v` edge (and `v -> u` when undirected).
    #[instrument(level = "debug", skip(self))]
    pub fn delete_edge(&mut self, u: i32, v: i32) -> Result<()> {
        self.check_vertices(u, v)?;
        if !self.has_edge(u, v) {
            debug!(u, v, "edge does not exist");
            return Err(Error::NotFound);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&u) {
            neighbors.delete_all(v);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(&v) {
                neighbors.delete_all(u);
            }
        }
        Ok(())
    }

    fn check_vertices(&self, u: i32, v: i32) -> Result<()> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            warn!(u, v, "one or both vertices do not exist");
            return Err(Error::InvalidArgument("one or both vertices do not exist"));
        }
        Ok(())
    }

    /// A copy of `v`'s neighbors in edge order. `None` if `v` is missing or
    /// has no neighbors.
    pub fn neighbors(&self, v: i32) -> Option<LinkedList> {
        self.adjacency
            .get(&v)
            .filter(|neighbors| !neighbors.is_empty())
            .cloned()
    }

    /// Every vertex in creation order. `None` for an empty graph.
    pub fn vertices(&self) -> Option<LinkedList> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(self.vertices.iter().copied().collect())
    }

    /// Every edge as `(from, to)`. Undirected edges are listed once, in the
    /// orientation they are first met.
    pub fn edges(&self) -> Vec<(i32, i32)> {
        let mut edges = Vec::new();
        let mut emitted = HashSet::new();
        for &u in &self.vertices {
            let Some(neighbors) = self.adjacency.get(&u) else {
                continue;
            };
            for v in neighbors {
                if !self.directed {
                    if emitted.contains(&(v, u)) {
                        continue;
                    }
                    emitted.insert((u, v));
                }
                edges.push((u, v));
            }
        }
        edges
    }

    /// Breadth-first search from `source`, in discovery order.
    fn bfs(&self, source: i32) -> Vec<(i32, Visit)> {
        let mut seen: HashMap<i32, Visit> = HashMap::with_capacity(self.vertices.len());
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        let start = Visit {
            distance: 0,
            parent: None,
        };
        seen.insert(source, start);
        order.push((source, start));
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let distance = seen[&u].distance + 1;
            let Some(neighbors) = self.adjacency.get(&u) else {
                continue;
            };
            for v in neighbors {
                if seen.contains_key(&v) {
                    continue;
                }
                let visit = Visit {
                    distance,
                    parent: Some(u),
                };
                seen.insert(v, visit);
                order.push((v, visit));
                queue.push_back(v);
            }
        }
        order
    }

    /// Fewest edges from `u` to `v`.
    #[instrument(level = "trace", skip(self))]
    pub fn distance(&self, u: i32, v: i32) -> Result<Distance> {
        self.check_vertices(u, v)?;
        let distance = self
            .bfs(u)
            .into_iter()
            .find(|(vertex, _)| *vertex == v)
            .map_or(Distance::Unreachable, |(_, visit)| Distance::Hops(visit.distance));
        Ok(distance)
    }

    /// Every vertex reachable from `v`, including `v`, in BFS discovery order.
    /// `None` if `v` is not a vertex.
    #[instrument(level = "trace", skip(self))]
    pub fn reachable_vertices(&self, v: i32) -> Option<LinkedList> {
        if !self.contains_vertex(v) {
            debug!(v, "vertex does not exist");
            return None;
        }
        Some(self.bfs(v).into_iter().map(|(vertex, _)| vertex).collect())
    }

    /// The vertices of one shortest path from `u` to `v`, endpoints included.
    /// `Ok(None)` when `v` is unreachable.
    pub fn shortest_path(&self, u: i32, v: i32) -> Result<Option<LinkedList>> {
        self.check_vertices(u, v)?;
        let visits: HashMap<i32, Visit> = self.bfs(u).into_iter().collect();
        if !visits.contains_key(&v) {
            return Ok(None);
        }

        let mut path = LinkedList::new();
        let mut cur = Some(v);
        while let Some(vertex) = cur {
            path.push_front(vertex);
            cur = visits.get(&vertex).and_then(|visit| visit.parent);
        }
        Ok(Some(path))
    }

    /// Write the shortest path from `u` to `v` as `1 -> 2 -> 3`.
    pub fn print_path<W: fmt::Write>(&self, u: i32, v: i32, out: &mut W) -> fmt::Result {
        match self.shortest_path(u, v) {
            | Err(_) => writeln!(out, "One or both vertices do not exist"),
            | Ok(None) => writeln!(out, "No path from {} to {} exists", u, v),
            | Ok(Some(path)) => {
                for (i, vertex) in path.iter().enumerate() {
                    if i > 0 {
                        write!(out, " -> ")?;
                    }
                    write!(out, "{}", vertex)?;
                }
                writeln!(out)
            },
        }
    }

    /// A view that renders the edge list.
    pub fn display_edges(&self) -> DisplayEdges<'_> {
        DisplayEdges { graph: self }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }
}

/// Neighbor listing, one vertex per line:
///
/// ```text
/// Graph is undirected with 2 vertices.
/// Neighbors List:
/// 1-> 2
/// 2-> 1
/// ```
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Graph is empty");
        }
        writeln!(
            f,
            "Graph is {} with {} vertices.",
            if self.directed { "directed" } else { "undirected" },
            self.len()
        )?;
        writeln!(f, "Neighbors List:")?;
        for v in &self.vertices {
            write!(f, "{}-> ", v)?;
            match self.adjacency.get(v) {
                | Some(neighbors) if !neighbors.is_empty() => {
                    let listed: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
                    writeln!(f, "{}", listed.join(", "))?;
                },
                | _ => writeln!(f, "No neighbors")?,
            }
        }
        Ok(())
    }
}

pub struct DisplayEdges<'a> {
    graph: &'a Graph,
}

impl fmt::Display for DisplayEdges<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.graph.is_empty() {
            return writeln!(f, "Graph is empty");
        }
        writeln!(f, "Edges List:")?;
        for (u, v) in self.graph.edges() {
            writeln!(f, "({},{})", u, v)?;
        }
        Ok(())
    }
}
