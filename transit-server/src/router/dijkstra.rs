//! Single-source shortest path search.
//!
//! Dijkstra's algorithm with a binary-heap frontier. Scratch state lives in
//! each call, so one engine can answer any number of independent queries.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::{DirectedWeightedGraph, EdgeId, VertexId, Weight};

/// A minimum-weight path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    /// Total weight of the path.
    pub weight: W,
    /// Edges from source to target, in travel order.
    pub edges: Vec<EdgeId>,
}

#[derive(Clone, Copy)]
struct State<W> {
    cost: W,
    vertex: VertexId,
}

// Reversed so that `BinaryHeap` pops the cheapest state first. Ties are
// broken on the vertex to keep `Ord` consistent with `Eq`.
impl<W: Weight> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl<W: Weight> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for State<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for State<W> {}

/// Shortest path queries over a borrowed, immutable graph.
pub struct ShortestPathEngine<'g, W> {
    graph: &'g DirectedWeightedGraph<W>,
}

impl<'g, W: Weight> ShortestPathEngine<'g, W> {
    pub fn new(graph: &'g DirectedWeightedGraph<W>) -> Self {
        Self { graph }
    }

    /// Find a minimum-weight path from `source` to `target`.
    ///
    /// Returns `None` when `target` is unreachable or either vertex is not in
    /// the graph. A query from a vertex to itself yields an empty path of
    /// zero weight. Among equal-weight paths, which one is returned is
    /// unspecified.
    pub fn find_path(&self, source: VertexId, target: VertexId) -> Option<Path<W>> {
        let n = self.graph.vertex_count();
        if source.0 >= n || target.0 >= n {
            return None;
        }

        let mut best: Vec<Option<W>> = vec![None; n];
        let mut via: Vec<Option<EdgeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        best[source.0] = Some(W::ZERO);
        heap.push(State {
            cost: W::ZERO,
            vertex: source,
        });

        let mut settled = 0usize;
        while let Some(State { cost, vertex }) = heap.pop() {
            // Stale entry: a cheaper route to this vertex was already found.
            if best[vertex.0].is_some_and(|b| cost.total_cmp(&b) == Ordering::Greater) {
                continue;
            }
            settled += 1;
            if vertex == target {
                break;
            }

            for &edge_id in self.graph.outgoing(vertex) {
                let Some(edge) = self.graph.edge(edge_id) else {
                    continue;
                };
                let next = cost + edge.weight;
                let improves = match best[edge.to.0] {
                    None => true,
                    Some(current) => next.total_cmp(&current) == Ordering::Less,
                };
                if improves {
                    best[edge.to.0] = Some(next);
                    via[edge.to.0] = Some(edge_id);
                    heap.push(State {
                        cost: next,
                        vertex: edge.to,
                    });
                }
            }
        }

        let weight = best[target.0]?;
        trace!(
            source = source.0,
            target = target.0,
            settled,
            "shortest path found"
        );

        let mut edges = Vec::new();
        let mut at = target;
        while at != source {
            let edge_id = via[at.0]?;
            edges.push(edge_id);
            at = self.graph.edge(edge_id)?.from;
        }
        edges.reverse();

        Some(Path { weight, edges })
    }
}
