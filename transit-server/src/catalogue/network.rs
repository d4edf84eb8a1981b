//! The transit network: stops, bus lines and road distances.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{BusLine, BusLineId, Coordinates, LookupError, Stop, StopId};

use super::stats::LineStatistics;

/// Stops, bus lines and directed road distances.
///
/// Stops and lines live in arenas addressed by [`StopId`] / [`BusLineId`];
/// names resolve to handles through an index built as entities are added.
/// The network is mutated only while ingesting, then read by the router and
/// the statistics queries.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    lines: Vec<BusLine>,
    line_index: HashMap<String, BusLineId>,
    /// Road distance in metres for each measured ordered pair.
    distances: HashMap<(StopId, StopId), f64>,
}

impl TransitNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, or update the coordinates of an existing one.
    ///
    /// Re-adding a name keeps its handle and the set of lines serving it.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            trace!(stop = name, "updating existing stop");
            self.stops[id.0].coordinates = coordinates;
            return id;
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(id, name, coordinates));
        self.stop_index.insert(name.to_string(), id);
        id
    }

    /// Add a bus line over the named stops.
    ///
    /// Unknown stop names are skipped rather than failing the whole line. A
    /// linear line is expanded into its there-and-back traversal. Re-adding a
    /// name replaces the previous definition.
    pub fn add_bus_line<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> BusLineId {
        let mut declared = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            match self.stop_index.get(stop_name.as_ref()) {
                Some(&id) => declared.push(id),
                None => debug!(
                    line = name,
                    stop = stop_name.as_ref(),
                    "skipping unknown stop in bus line"
                ),
            }
        }

        let id = match self.line_index.get(name) {
            Some(&existing) => {
                for stop in &self.lines[existing.0].stops {
                    self.stops[stop.0].buses.remove(name);
                }
                existing
            }
            None => BusLineId(self.lines.len()),
        };

        for stop in &declared {
            self.stops[stop.0].buses.insert(name.to_string());
        }

        let line = BusLine::new(id, name, declared, is_roundtrip);
        if id.0 == self.lines.len() {
            self.lines.push(line);
            self.line_index.insert(name.to_string(), id);
        } else {
            self.lines[id.0] = line;
        }
        id
    }

    /// Set the road distance from `from` to `to`, overwriting any prior value
    /// for this ordered pair. The reverse direction is left untouched.
    pub fn set_distance(&mut self, from: StopId, to: StopId, meters: f64) {
        self.distances.insert((from, to), meters);
    }

    /// Name-based form of [`set_distance`](Self::set_distance).
    pub fn set_distance_by_name(
        &mut self,
        from: &str,
        to: &str,
        meters: f64,
    ) -> Result<(), LookupError> {
        let from = self.resolve_stop(from)?;
        let to = self.resolve_stop(to)?;
        self.set_distance(from, to, meters);
        Ok(())
    }

    /// Road distance from `from` to `to` in metres.
    ///
    /// Falls back to the reverse pair when the forward pair was never set,
    /// and to zero when neither was.
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0.0)
    }

    /// Look up a stop by handle.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    /// Look up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| &self.stops[id.0])
    }

    /// Resolve a stop name to its handle.
    pub fn resolve_stop(&self, name: &str) -> Result<StopId, LookupError> {
        self.stop_index
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownStop(name.to_string()))
    }

    /// Look up a bus line by name.
    pub fn find_bus_line(&self, name: &str) -> Option<&BusLine> {
        self.line_index.get(name).map(|id| &self.lines[id.0])
    }

    /// All stops, in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// All bus lines, in insertion order.
    pub fn bus_lines(&self) -> impl Iterator<Item = &BusLine> {
        self.lines.iter()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Statistics for the named line.
    pub fn line_statistics(&self, name: &str) -> Result<LineStatistics, LookupError> {
        let line = self
            .find_bus_line(name)
            .ok_or_else(|| LookupError::UnknownBusLine(name.to_string()))?;

        let unique: HashSet<StopId> = line.stops.iter().copied().collect();
        let mut route_length = 0.0;
        let mut geographic_length = 0.0;
        for (from, to) in line.hops() {
            route_length += self.distance(from, to);
            geographic_length += self.stops[from.0]
                .coordinates
                .distance_to(&self.stops[to.0].coordinates);
        }

        Ok(LineStatistics {
            stop_count: line.stops.len(),
            unique_stop_count: unique.len(),
            route_length,
            geographic_length,
        })
    }

    /// Names of the lines serving the named stop, sorted.
    ///
    /// A known stop with no lines yields an empty list.
    pub fn buses_serving_stop(&self, name: &str) -> Result<Vec<&str>, LookupError> {
        let stop = self
            .find_stop(name)
            .ok_or_else(|| LookupError::UnknownStop(name.to_string()))?;
        Ok(stop.buses.iter().map(String::as_str).collect())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A single directed entry answers both directions.
        #[test]
        fn reverse_fallback(meters in 0.0f64..1.0e6) {
            let mut net = TransitNetwork::new();
            let a = net.add_stop("A", Coordinates::default());
            let b = net.add_stop("B", Coordinates::new(1.0, 1.0));
            net.set_distance(a, b, meters);
            prop_assert_eq!(net.distance(b, a), meters);
        }

        /// An explicit reverse entry always wins over the fallback.
        #[test]
        fn explicit_reverse_wins(forward in 0.0f64..1.0e6, backward in 0.0f64..1.0e6) {
            let mut net = TransitNetwork::new();
            let a = net.add_stop("A", Coordinates::default());
            let b = net.add_stop("B", Coordinates::new(1.0, 1.0));
            net.set_distance(a, b, forward);
            net.set_distance(b, a, backward);
            prop_assert_eq!(net.distance(a, b), forward);
            prop_assert_eq!(net.distance(b, a), backward);
        }
    }
}
