//! Routing graph construction.
//!
//! Every stop used by a bus line gets two vertices: a *wait* vertex (arrived,
//! waiting for a bus) and a *board* vertex (on a bus). A `Wait` edge joins
//! them with the configured wait time. For every line and every pair of
//! positions `i < j` along its traversal there is a `Ride` edge from
//! board(i) to wait(j), weighted by the time to ride the whole stretch. Riding
//! through intermediate stops therefore never pays their wait time, and the
//! search can compare "stay on" against "change" directly.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalogue::TransitNetwork;
use crate::domain::StopId;

use super::config::{ConfigError, RoutingSettings};
use super::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};

/// What an edge of the routing graph means to a rider.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeItem {
    /// Wait at a stop before boarding.
    Wait { stop_name: String, duration: f64 },
    /// Ride a line across `span_count` consecutive hops.
    Ride {
        bus_name: String,
        span_count: usize,
        duration: f64,
    },
}

impl EdgeItem {
    /// Minutes this edge takes.
    pub fn duration(&self) -> f64 {
        match self {
            EdgeItem::Wait { duration, .. } | EdgeItem::Ride { duration, .. } => *duration,
        }
    }
}

/// The two vertices allocated for a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub wait: VertexId,
    pub board: VertexId,
}

/// The built routing graph and its edge metadata.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: DirectedWeightedGraph<f64>,
    edge_items: Vec<EdgeItem>,
    stop_vertices: HashMap<StopId, StopVertices>,
}

impl RouteGraph {
    pub fn graph(&self) -> &DirectedWeightedGraph<f64> {
        &self.graph
    }

    /// Metadata for an edge.
    pub fn edge_item(&self, id: EdgeId) -> Option<&EdgeItem> {
        self.edge_items.get(id.0)
    }

    pub fn edge_items(&self) -> &[EdgeItem] {
        &self.edge_items
    }

    /// Vertices for a stop, or `None` if no line serves it.
    pub fn vertices_for(&self, stop: StopId) -> Option<StopVertices> {
        self.stop_vertices.get(&stop).copied()
    }

    /// Number of stops represented in the graph.
    pub fn stop_count(&self) -> usize {
        self.stop_vertices.len()
    }
}

/// Builds a [`RouteGraph`] from a finished network.
#[derive(Debug, Clone)]
pub struct RouteGraphBuilder {
    settings: RoutingSettings,
}

impl RouteGraphBuilder {
    pub fn new(settings: RoutingSettings) -> Self {
        Self { settings }
    }

    /// Build the routing graph.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the settings would produce undefined or negative
    /// weights. Nothing is built in that case.
    pub fn build(&self, network: &TransitNetwork) -> Result<RouteGraph, ConfigError> {
        self.settings.validate()?;

        let stops = Self::served_stops(network);
        let mut graph = DirectedWeightedGraph::new(stops.len() * 2);
        let mut edge_items = Vec::new();
        let mut stop_vertices = HashMap::with_capacity(stops.len());

        for (idx, stop_id) in stops.iter().enumerate() {
            let vertices = StopVertices {
                wait: VertexId(idx * 2),
                board: VertexId(idx * 2 + 1),
            };
            stop_vertices.insert(*stop_id, vertices);

            let stop_name = network
                .stop(*stop_id)
                .map(|s| s.name.clone())
                .unwrap_or_default();
            graph.add_edge(Edge {
                from: vertices.wait,
                to: vertices.board,
                weight: self.settings.bus_wait_time,
            });
            edge_items.push(EdgeItem::Wait {
                stop_name,
                duration: self.settings.bus_wait_time,
            });
        }

        for line in network.bus_lines() {
            let seq = &line.stops;
            for i in 0..seq.len() {
                let Some(from) = stop_vertices.get(&seq[i]) else {
                    continue;
                };
                let mut meters = 0.0;
                for j in (i + 1)..seq.len() {
                    meters += network.distance(seq[j - 1], seq[j]);
                    let Some(to) = stop_vertices.get(&seq[j]) else {
                        continue;
                    };
                    let duration = self.settings.travel_time(meters);
                    graph.add_edge(Edge {
                        from: from.board,
                        to: to.wait,
                        weight: duration,
                    });
                    edge_items.push(EdgeItem::Ride {
                        bus_name: line.name.clone(),
                        span_count: j - i,
                        duration,
                    });
                }
            }
        }

        debug!(
            stops = stops.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "routing graph built"
        );

        Ok(RouteGraph {
            graph,
            edge_items,
            stop_vertices,
        })
    }

    /// Distinct stops referenced by any line, in order of first appearance.
    fn served_stops(network: &TransitNetwork) -> Vec<StopId> {
        let mut seen = HashSet::new();
        network
            .bus_lines()
            .flat_map(|line| line.stops.iter().copied())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
