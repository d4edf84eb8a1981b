//! Data transfer objects for the JSON request document and its responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::LineStatistics;
use crate::render::RenderSettings;
use crate::router::{Itinerary, Leg, RoutingSettings};

/// Message sent for every failed stat request.
pub const NOT_FOUND: &str = "not found";

/// The whole input document.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestDocument {
    /// Requests that populate the network.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Map drawing settings. Defaults apply when absent.
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,

    /// Routing parameters. Defaults apply when absent.
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    /// Queries to answer once the network is built.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A request that adds a stop or a bus line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distances in metres from this stop to the named stops.
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A query against the built network.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. }
            | StatRequest::Bus { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// Answer to a single stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Stop(StopResponse),
    Bus(BusResponse),
    Map(MapResponse),
    Route(RouteResponse),
    Error(ErrorResponse),
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::Error(ErrorResponse {
            request_id,
            error_message: NOT_FOUND.to_string(),
        })
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Map(r) => r.request_id,
            StatResponse::Route(r) => r.request_id,
            StatResponse::Error(r) => r.request_id,
        }
    }
}

/// Lines serving a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    pub buses: Vec<String>,
}

/// Statistics of a bus line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    /// `null` when the line has no geographic extent.
    pub curvature: Option<f64>,
    pub route_length: f64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusResponse {
    pub fn from_statistics(request_id: i64, stats: &LineStatistics) -> Self {
        Self {
            request_id,
            curvature: stats.curvature(),
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

/// The rendered map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,
    pub map: String,
}

/// An itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    pub fn from_itinerary(request_id: i64, itinerary: &Itinerary) -> Self {
        Self {
            request_id,
            total_time: itinerary.total_time(),
            items: itinerary.legs.iter().map(RouteItem::from).collect(),
        }
    }
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Leg> for RouteItem {
    fn from(leg: &Leg) -> Self {
        match leg {
            Leg::Wait {
                stop_name,
                duration,
            } => RouteItem::Wait {
                stop_name: stop_name.clone(),
                time: *duration,
            },
            Leg::Ride {
                bus_name,
                span_count,
                duration,
            } => RouteItem::Bus {
                bus: bus_name.clone(),
                span_count: *span_count,
                time: *duration,
            },
        }
    }
}

/// A failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_base_requests() {
        let requests: Vec<BaseRequest> = serde_json::from_value(json!([
            {
                "type": "Stop", "name": "Riviera",
                "latitude": 43.587795, "longitude": 39.716901,
                "road_distances": {"Ocean": 850}
            },
            {"type": "Stop", "name": "Ocean", "latitude": 43.58, "longitude": 39.71},
            {"type": "Bus", "name": "114", "stops": ["Riviera", "Ocean"], "is_roundtrip": false}
        ]))
        .unwrap();

        assert_eq!(requests.len(), 3);
        match &requests[0] {
            BaseRequest::Stop { road_distances, .. } => {
                assert_eq!(road_distances.get("Ocean"), Some(&850.0));
            }
            other => panic!("unexpected {other:?}"),
        }
        match &requests[1] {
            BaseRequest::Stop { road_distances, .. } => assert!(road_distances.is_empty()),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(&requests[2], BaseRequest::Bus { is_roundtrip: false, .. }));
    }

    #[test]
    fn parse_stat_requests() {
        let requests: Vec<StatRequest> = serde_json::from_value(json!([
            {"id": 1, "type": "Stop", "name": "Ocean"},
            {"id": 2, "type": "Bus", "name": "114"},
            {"id": 3, "type": "Map"},
            {"id": 4, "type": "Route", "from": "Ocean", "to": "Riviera"}
        ]))
        .unwrap();

        let ids: Vec<i64> = requests.iter().map(StatRequest::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(matches!(&requests[3], StatRequest::Route { from, .. } if from == "Ocean"));
    }

    #[test]
    fn unknown_request_type_is_rejected() {
        let result: Result<StatRequest, _> =
            serde_json::from_value(json!({"id": 1, "type": "Tram", "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn document_sections_are_optional() {
        let doc: RequestDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.base_requests.is_empty());
        assert!(doc.render_settings.is_none());
        assert!(doc.routing_settings.is_none());
        assert!(doc.stat_requests.is_empty());
    }

    #[test]
    fn serialize_route_response() {
        let itinerary = Itinerary {
            legs: vec![
                Leg::Wait {
                    stop_name: "A".into(),
                    duration: 6.0,
                },
                Leg::Ride {
                    bus_name: "297".into(),
                    span_count: 2,
                    duration: 5.235,
                },
            ],
        };
        let response = StatResponse::Route(RouteResponse::from_itinerary(5, &itinerary));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "request_id": 5,
                "total_time": 11.235,
                "items": [
                    {"type": "Wait", "stop_name": "A", "time": 6.0},
                    {"type": "Bus", "bus": "297", "span_count": 2, "time": 5.235}
                ]
            })
        );
    }

    #[test]
    fn serialize_not_found() {
        assert_eq!(
            serde_json::to_value(StatResponse::not_found(9)).unwrap(),
            json!({"request_id": 9, "error_message": "not found"})
        );
    }

    #[test]
    fn serialize_bus_without_curvature() {
        let response = StatResponse::Bus(BusResponse {
            request_id: 1,
            curvature: None,
            route_length: 0.0,
            stop_count: 1,
            unique_stop_count: 1,
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["curvature"], serde_json::Value::Null);
        assert_eq!(value["stop_count"], json!(1));
    }
}
