//! Directed weighted graph with an adjacency list.

use std::cmp::Ordering;
use std::ops::Add;

/// Index of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Index of an edge, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Edge weight usable by the shortest-path search.
///
/// Weights must be totally ordered and closed under addition. Negative
/// weights are not supported by the search.
pub trait Weight: Copy + Add<Output = Self> {
    const ZERO: Self;

    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Weight for f64 {
    const ZERO: Self = 0.0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl Weight for u32 {
    const ZERO: Self = 0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Weight for u64 {
    const ZERO: Self = 0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// A directed graph with a fixed vertex count.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Copy> DirectedWeightedGraph<W> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, edge: Edge<W>) -> EdgeId {
        assert!(
            edge.from.0 < self.incidence.len() && edge.to.0 < self.incidence.len(),
            "edge endpoint out of range"
        );
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        self.incidence[edge.from.0].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edges.get(id.0)
    }

    /// Ids of the edges leaving `vertex`. Empty for unknown vertices.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
