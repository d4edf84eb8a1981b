//! Itinerary types and path-to-itinerary composition.

use super::builder::{EdgeItem, RouteGraph};
use super::graph::EdgeId;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Leg {
    /// Wait at `stop_name` for the next bus.
    Wait { stop_name: String, duration: f64 },
    /// Ride `bus_name` for `span_count` stops.
    Ride {
        bus_name: String,
        span_count: usize,
        duration: f64,
    },
}

impl Leg {
    /// Minutes this leg takes.
    pub fn duration(&self) -> f64 {
        match self {
            Leg::Wait { duration, .. } | Leg::Ride { duration, .. } => *duration,
        }
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, Leg::Ride { .. })
    }
}

impl From<&EdgeItem> for Leg {
    fn from(item: &EdgeItem) -> Self {
        match item {
            EdgeItem::Wait {
                stop_name,
                duration,
            } => Leg::Wait {
                stop_name: stop_name.clone(),
                duration: *duration,
            },
            EdgeItem::Ride {
                bus_name,
                span_count,
                duration,
            } => Leg::Ride {
                bus_name: bus_name.clone(),
                span_count: *span_count,
                duration: *duration,
            },
        }
    }
}

/// A sequence of legs from one stop to another.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Total minutes across all legs.
    pub fn total_time(&self) -> f64 {
        self.legs.iter().map(Leg::duration).sum()
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_ride()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Translate a path of graph edges into an itinerary, one leg per edge.
///
/// Edges without metadata are skipped; a path produced from the same
/// [`RouteGraph`] never has any.
pub fn compose(edges: &[EdgeId], route: &RouteGraph) -> Itinerary {
    let legs = edges
        .iter()
        .filter_map(|id| route.edge_item(*id))
        .map(Leg::from)
        .collect();
    Itinerary { legs }
}
