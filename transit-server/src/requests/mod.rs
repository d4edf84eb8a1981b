//! JSON request layer.
//!
//! A request document carries base requests that build the network,
//! optional render and routing settings, and stat requests answered
//! against the finished network.

mod dto;
mod handler;
mod ingest;

pub use dto::*;
pub use handler::{RequestHandler, process_document};
pub use ingest::{LoadError, load_network, parse_document, read_document};
