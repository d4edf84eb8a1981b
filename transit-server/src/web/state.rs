//! Application state for the web layer.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::requests::RequestHandler;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "TRANSIT_ADDR";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Shared application state.
///
/// The network is loaded before the server starts and never mutated, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    pub fn new(handler: RequestHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

/// Server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read settings from the environment, using defaults for unset values.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        Self::from_addr(std::env::var(ADDR_ENV).ok().as_deref())
    }

    fn from_addr(addr: Option<&str>) -> Result<Self, std::net::AddrParseError> {
        let addr = addr.unwrap_or(DEFAULT_ADDR).parse()?;
        Ok(Self { addr })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
