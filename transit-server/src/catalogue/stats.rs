//! Per-line statistics.

/// Summary of a bus line's traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStatistics {
    /// Stops in the expanded traversal, repeats included.
    pub stop_count: usize,

    /// Distinct stops in the expanded traversal.
    pub unique_stop_count: usize,

    /// Sum of road distances along the traversal, in metres.
    pub route_length: f64,

    /// Sum of great-circle distances along the traversal, in metres.
    pub geographic_length: f64,
}

impl LineStatistics {
    /// Ratio of road length to straight-line length.
    ///
    /// Returns `None` when the geographic length is zero (a single-stop line,
    /// or every stop at the same coordinates), where the ratio is undefined.
    pub fn curvature(&self) -> Option<f64> {
        if self.geographic_length > 0.0 {
            Some(self.route_length / self.geographic_length)
        } else {
            None
        }
    }
}
