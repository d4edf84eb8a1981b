//! Domain types for the transit network.
//!
//! Stops and bus lines are addressed by integer handles into the
//! network's arenas; names are resolved to handles once, at the boundary.

mod bus_line;
mod error;
mod stop;

pub use bus_line::{BusLine, BusLineId, expand_traversal};
pub use error::LookupError;
pub use stop::{Coordinates, EARTH_RADIUS_M, Stop, StopId};
