//! Loading request documents and building the network from base requests.

use std::path::Path;

use tracing::{debug, warn};

use crate::catalogue::TransitNetwork;
use crate::domain::Coordinates;
use crate::router::ConfigError;

use super::dto::{BaseRequest, RequestDocument};

/// Errors from loading a request document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document could not be read
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or has the wrong shape
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// The routing settings cannot be used to build a graph
    #[error("invalid routing settings: {0}")]
    Config(#[from] ConfigError),
}

/// Parse a request document from JSON text.
pub fn parse_document(text: &str) -> Result<RequestDocument, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a request document from disk.
pub async fn read_document(path: impl AsRef<Path>) -> Result<RequestDocument, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), bytes = text.len(), "read request document");
    parse_document(&text)
}

/// Build a network from base requests.
///
/// Stops go in first, then the road distances they declare, then the bus
/// lines, so requests may reference stops defined later in the list.
/// Distances naming an unknown stop are dropped.
pub fn load_network(requests: &[BaseRequest]) -> TransitNetwork {
    let mut network = TransitNetwork::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            network.add_stop(name, Coordinates::new(*latitude, *longitude));
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (to, meters) in road_distances {
                if let Err(e) = network.set_distance_by_name(name, to, *meters) {
                    warn!(from = %name, to = %to, error = %e, "skipping road distance");
                }
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            network.add_bus_line(name, stops, *is_roundtrip);
        }
    }

    debug!(
        stops = network.stop_count(),
        lines = network.bus_line_count(),
        "network loaded"
    );
    network
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::StopId;

    const DOCUMENT: &str = r#"{
        "base_requests": [
            {"type": "Bus", "name": "750", "stops": ["Tolstopaltsevo", "Marushkino"], "is_roundtrip": false},
            {"type": "Stop", "name": "Tolstopaltsevo", "latitude": 55.611087, "longitude": 37.20829,
             "road_distances": {"Marushkino": 3900, "Nowhere": 10}},
            {"type": "Stop", "name": "Marushkino", "latitude": 55.595884, "longitude": 37.209755,
             "road_distances": {"Marushkino": 100}}
        ],
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
        "stat_requests": [
            {"id": 1, "type": "Bus", "name": "750"}
        ]
    }"#;

    #[test]
    fn buses_may_precede_their_stops() {
        let doc = parse_document(DOCUMENT).unwrap();
        let net = load_network(&doc.base_requests);

        assert_eq!(net.stop_count(), 2);
        let line = net.find_bus_line("750").unwrap();
        assert_eq!(line.stops.len(), 3);
        assert_eq!(
            net.buses_serving_stop("Marushkino").unwrap(),
            vec!["750"]
        );
    }

    #[test]
    fn distances_are_applied_after_all_stops() {
        let doc = parse_document(DOCUMENT).unwrap();
        let net = load_network(&doc.base_requests);

        let a = net.resolve_stop("Tolstopaltsevo").unwrap();
        let b = net.resolve_stop("Marushkino").unwrap();
        assert_eq!(net.distance(a, b), 3900.0);
        // Reverse falls back to the forward measurement.
        assert_eq!(net.distance(b, a), 3900.0);
        assert_eq!(net.distance(b, b), 100.0);
    }

    #[test]
    fn unknown_distance_target_is_skipped() {
        let doc = parse_document(DOCUMENT).unwrap();
        let net = load_network(&doc.base_requests);
        assert!(net.find_stop("Nowhere").is_none());
        assert_eq!(net.distance(StopId(0), StopId(0)), 0.0);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(parse_document("{"), Err(LoadError::Json(_))));
        assert!(matches!(
            parse_document(r#"{"base_requests": [{"type": "Tram"}]}"#),
            Err(LoadError::Json(_))
        ));
    }

    #[tokio::test]
    async fn read_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let doc = read_document(file.path()).await.unwrap();
        assert_eq!(doc.base_requests.len(), 3);
        assert_eq!(doc.stat_requests.len(), 1);
    }

    #[tokio::test]
    async fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_document(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
