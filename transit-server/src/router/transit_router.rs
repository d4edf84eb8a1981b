//! Fastest-itinerary queries between named stops.

use std::sync::Arc;

use tracing::trace;

use crate::catalogue::TransitNetwork;
use crate::domain::LookupError;

use super::builder::{RouteGraph, RouteGraphBuilder};
use super::config::{ConfigError, RoutingSettings};
use super::dijkstra::ShortestPathEngine;
use super::itinerary::{Itinerary, compose};

/// Error from an itinerary query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// An endpoint names no stop in the network
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Both stops exist but no sequence of rides connects them
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}

impl From<LookupError> for RouteError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::UnknownStop(name) | LookupError::UnknownBusLine(name) => {
                RouteError::UnknownStop(name)
            }
        }
    }
}

/// Answers itinerary queries over a finished network.
///
/// The routing graph is built once, in [`TransitRouter::new`], and never
/// changes afterwards. Queries share no state.
#[derive(Debug, Clone)]
pub struct TransitRouter {
    network: Arc<TransitNetwork>,
    settings: RoutingSettings,
    route: RouteGraph,
}

impl TransitRouter {
    /// Build the routing graph for `network`.
    ///
    /// # Errors
    ///
    /// Returns `Err` for settings that cannot yield valid travel times.
    pub fn new(network: Arc<TransitNetwork>, settings: RoutingSettings) -> Result<Self, ConfigError> {
        let route = RouteGraphBuilder::new(settings).build(&network)?;
        Ok(Self {
            network,
            settings,
            route,
        })
    }

    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn route_graph(&self) -> &RouteGraph {
        &self.route
    }

    /// Fastest itinerary from stop `from` to stop `to`.
    ///
    /// Fails with [`RouteError::UnknownStop`] when either name is not a stop,
    /// and with [`RouteError::NoRoute`] when both are stops but no line
    /// connects them (including stops no line serves at all).
    pub fn build_itinerary(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let from_id = self.network.resolve_stop(from)?;
        let to_id = self.network.resolve_stop(to)?;

        let no_route = || RouteError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        };

        let source = self.route.vertices_for(from_id).ok_or_else(no_route)?;
        let target = self.route.vertices_for(to_id).ok_or_else(no_route)?;

        let path = ShortestPathEngine::new(self.route.graph())
            .find_path(source.wait, target.wait)
            .ok_or_else(no_route)?;

        trace!(from, to, minutes = path.weight, legs = path.edges.len(), "itinerary built");

        Ok(compose(&path.edges, &self.route))
    }
}
