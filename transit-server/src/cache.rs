//! Caching layer for itinerary queries.
//!
//! The routing graph never changes after it is built, so an itinerary
//! between two stop names is a pure function of those names. Caching the
//! outcome, failures included, only saves the search.

use moka::sync::Cache as MokaCache;

use crate::router::{Itinerary, RouteError, TransitRouter};

/// Cache key: (from stop name, to stop name).
type RouteKey = (String, String);

/// Cached outcome of an itinerary query.
type RouteEntry = Result<Itinerary, RouteError>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached itineraries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 1000 }
    }
}

/// Transit router with memoised itineraries.
pub struct CachedRouter {
    router: TransitRouter,
    itineraries: MokaCache<RouteKey, RouteEntry>,
}

impl CachedRouter {
    /// Wrap a router.
    pub fn new(router: TransitRouter, config: &CacheConfig) -> Self {
        let itineraries = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();
        Self {
            router,
            itineraries,
        }
    }

    /// Same as [`TransitRouter::build_itinerary`], using the cache if possible.
    pub fn build_itinerary(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let key = (from.to_string(), to.to_string());
        self.itineraries
            .get_with(key, || self.router.build_itinerary(from, to))
    }

    /// The wrapped router.
    pub fn router(&self) -> &TransitRouter {
        &self.router
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.itineraries.run_pending_tasks();
        self.itineraries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.itineraries.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalogue::TransitNetwork;
    use crate::domain::Coordinates;
    use crate::router::RoutingSettings;

    fn cached_router() -> CachedRouter {
        let mut net = TransitNetwork::new();
        net.add_stop("A", Coordinates::default());
        net.add_stop("B", Coordinates::default());
        net.add_stop("C", Coordinates::default());
        net.set_distance_by_name("A", "B", 2000.0).unwrap();
        net.add_bus_line("1", &["A", "B"], false);

        let router = TransitRouter::new(Arc::new(net), RoutingSettings::new(3.0, 60.0)).unwrap();
        CachedRouter::new(router, &CacheConfig::default())
    }

    #[test]
    fn cached_matches_uncached() {
        let cached = cached_router();
        let direct = cached.router().build_itinerary("A", "B");

        assert_eq!(cached.build_itinerary("A", "B"), direct);
        assert_eq!(cached.build_itinerary("A", "B"), direct);
        assert_eq!(cached.entry_count(), 1);
    }

    #[test]
    fn failures_are_cached_too() {
        let cached = cached_router();

        assert!(matches!(
            cached.build_itinerary("A", "C"),
            Err(RouteError::NoRoute { .. })
        ));
        assert!(matches!(
            cached.build_itinerary("A", "Z"),
            Err(RouteError::UnknownStop(_))
        ));
        assert_eq!(cached.entry_count(), 2);
    }

    #[test]
    fn direction_is_part_of_the_key() {
        let cached = cached_router();
        cached.build_itinerary("A", "B").unwrap();
        cached.build_itinerary("B", "A").unwrap();
        assert_eq!(cached.entry_count(), 2);

        cached.invalidate_all();
        assert!(cached.build_itinerary("A", "B").is_ok());
    }
}
