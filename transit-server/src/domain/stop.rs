//! Stop types and geographic coordinates.

use std::collections::BTreeSet;
use std::fmt;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Handle for a stop inside a [`TransitNetwork`](crate::catalogue::TransitNetwork).
///
/// Handles are indices into the network's stop arena. They stay valid for the
/// lifetime of the network because stops are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in metres.
    ///
    /// Uses the spherical law of cosines. Identical points are exactly zero
    /// apart.
    ///
    /// ```
    /// use transit_server::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611087, 37.20829);
    /// assert_eq!(a.distance_to(&a), 0.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlng = (self.lng - other.lng).abs().to_radians();
        // Rounding can push the cosine a hair outside [-1, 1].
        let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos())
            .clamp(-1.0, 1.0);
        cos_angle.acos() * EARTH_RADIUS_M
    }
}

/// A named stop.
#[derive(Debug, Clone)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
    /// Names of the bus lines calling here. Only used for statistics.
    pub buses: BTreeSet<String>,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
            buses: BTreeSet::new(),
        }
    }
}
