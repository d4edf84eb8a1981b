//! Answering stat requests against a loaded network.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cache::{CacheConfig, CachedRouter};
use crate::catalogue::TransitNetwork;
use crate::render::MapRenderer;
use crate::router::TransitRouter;

use super::dto::{
    BusResponse, MapResponse, RequestDocument, RouteResponse, StatRequest, StatResponse,
    StopResponse,
};
use super::ingest::{LoadError, load_network, parse_document};

/// Everything needed to answer stat requests: the network, its routing
/// graph and the map renderer. Immutable once built.
pub struct RequestHandler {
    network: Arc<TransitNetwork>,
    router: CachedRouter,
    renderer: MapRenderer,
}

impl RequestHandler {
    /// Ingest the document's base requests and build the routing graph.
    ///
    /// Missing settings sections fall back to their defaults.
    pub fn from_document(doc: &RequestDocument, cache: &CacheConfig) -> Result<Self, LoadError> {
        let network = Arc::new(load_network(&doc.base_requests));
        let routing = doc.routing_settings.unwrap_or_default();
        let router = TransitRouter::new(Arc::clone(&network), routing)?;
        let renderer = MapRenderer::new(doc.render_settings.clone().unwrap_or_default());

        let graph = router.route_graph().graph();
        info!(
            stops = network.stop_count(),
            lines = network.bus_line_count(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "network ready"
        );

        Ok(Self {
            network,
            router: CachedRouter::new(router, cache),
            renderer,
        })
    }

    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    /// Answer one request. Lookup and routing failures become a
    /// "not found" response.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        match request {
            StatRequest::Stop { name, .. } => match self.network.buses_serving_stop(name) {
                Ok(buses) => StatResponse::Stop(StopResponse {
                    request_id: id,
                    buses: buses.into_iter().map(str::to_string).collect(),
                }),
                Err(e) => {
                    debug!(request_id = id, error = %e, "stop request failed");
                    StatResponse::not_found(id)
                }
            },
            StatRequest::Bus { name, .. } => match self.network.line_statistics(name) {
                Ok(stats) => StatResponse::Bus(BusResponse::from_statistics(id, &stats)),
                Err(e) => {
                    debug!(request_id = id, error = %e, "bus request failed");
                    StatResponse::not_found(id)
                }
            },
            StatRequest::Map { .. } => match self.render_map() {
                Ok(map) => StatResponse::Map(MapResponse { request_id: id, map }),
                Err(e) => {
                    error!(request_id = id, error = %e, "map rendering failed");
                    StatResponse::not_found(id)
                }
            },
            StatRequest::Route { from, to, .. } => match self.router.build_itinerary(from, to) {
                Ok(itinerary) => {
                    StatResponse::Route(RouteResponse::from_itinerary(id, &itinerary))
                }
                Err(e) => {
                    debug!(request_id = id, error = %e, "route request failed");
                    StatResponse::not_found(id)
                }
            },
        }
    }

    /// Answer requests in order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|r| self.handle(r)).collect()
    }

    /// The network map as an SVG document.
    pub fn render_map(&self) -> Result<String, askama::Error> {
        self.renderer.render(&self.network)
    }
}

/// Run a whole JSON document: build the network, answer its stat requests.
pub fn process_document(text: &str, cache: &CacheConfig) -> Result<Vec<StatResponse>, LoadError> {
    let doc = parse_document(text)?;
    let handler = RequestHandler::from_document(&doc, cache)?;
    Ok(handler.handle_all(&doc.stat_requests))
}
