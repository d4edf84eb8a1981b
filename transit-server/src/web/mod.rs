//! Web layer for the transit catalogue.
//!
//! Serves stat requests and the network map over HTTP.

mod routes;
mod state;

pub use routes::{AppError, ErrorBody, create_router};
pub use state::{ADDR_ENV, AppState, ServerConfig};
