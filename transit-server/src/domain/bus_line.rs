//! Bus line type.
//!
//! A `BusLine` stores its *full traversal*: a linear line declared as
//! A, B, C is kept as A, B, C, B, A so that every consumer (statistics,
//! graph building, rendering) can walk the sequence without caring how the
//! line was declared.

use super::StopId;

/// Handle for a bus line inside a [`TransitNetwork`](crate::catalogue::TransitNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusLineId(pub usize);

/// A named bus line.
///
/// # Invariants
///
/// - `stops` is the expanded traversal (see [`expand_traversal`])
/// - `original_stop_count <= stops.len()`
#[derive(Debug, Clone)]
pub struct BusLine {
    pub id: BusLineId,
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
    /// Number of stops in the declared (pre-expansion) sequence.
    pub original_stop_count: usize,
}

impl BusLine {
    /// Build a line from its declared stop sequence, expanding it.
    pub fn new(id: BusLineId, name: impl Into<String>, declared: Vec<StopId>, is_roundtrip: bool) -> Self {
        let original_stop_count = declared.len();
        Self {
            id,
            name: name.into(),
            stops: expand_traversal(declared, is_roundtrip),
            is_roundtrip,
            original_stop_count,
        }
    }

    /// First stop of the traversal, if any.
    pub fn first_stop(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// Last stop of the declared sequence (the turnaround point of a linear line).
    pub fn last_declared_stop(&self) -> Option<StopId> {
        self.original_stop_count
            .checked_sub(1)
            .and_then(|idx| self.stops.get(idx).copied())
    }

    /// Consecutive `(from, to)` pairs along the traversal.
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Expand a declared stop sequence into the full traversal.
///
/// Round trips are used as declared. Linear lines are mirrored back to their
/// origin.
///
/// ```
/// use transit_server::domain::expand_traversal;
///
/// assert_eq!(expand_traversal(vec!['A', 'B', 'C'], false), vec!['A', 'B', 'C', 'B', 'A']);
/// assert_eq!(expand_traversal(vec!['A', 'B', 'C'], true), vec!['A', 'B', 'C']);
/// ```
pub fn expand_traversal<T: Clone>(mut declared: Vec<T>, is_roundtrip: bool) -> Vec<T> {
    if is_roundtrip || declared.len() < 2 {
        return declared;
    }
    let back: Vec<T> = declared[..declared.len() - 1].iter().rev().cloned().collect();
    declared.extend(back);
    declared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<StopId> {
        raw.iter().copied().map(StopId).collect()
    }

    #[test]
    fn linear_line_is_mirrored() {
        let line = BusLine::new(BusLineId(0), "1", ids(&[0, 1, 2]), false);
        assert_eq!(line.stops, ids(&[0, 1, 2, 1, 0]));
        assert_eq!(line.original_stop_count, 3);
        assert_eq!(line.last_declared_stop(), Some(StopId(2)));
    }

    #[test]
    fn roundtrip_kept_as_declared() {
        let line = BusLine::new(BusLineId(0), "2", ids(&[0, 1, 2, 0]), true);
        assert_eq!(line.stops, ids(&[0, 1, 2, 0]));
        assert_eq!(line.original_stop_count, 4);
    }

    #[test]
    fn single_stop_linear_line_is_unchanged() {
        assert_eq!(expand_traversal(ids(&[4]), false), ids(&[4]));
    }

    #[test]
    fn empty_line() {
        let line = BusLine::new(BusLineId(0), "ghost", Vec::new(), false);
        assert!(line.stops.is_empty());
        assert_eq!(line.first_stop(), None);
        assert_eq!(line.last_declared_stop(), None);
        assert_eq!(line.hops().count(), 0);
    }

    #[test]
    fn hops_follow_traversal() {
        let line = BusLine::new(BusLineId(0), "1", ids(&[0, 1]), false);
        let hops: Vec<_> = line.hops().collect();
        assert_eq!(
            hops,
            vec![(StopId(0), StopId(1)), (StopId(1), StopId(0))]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A mirrored line has 2n - 1 stops and reads the same both ways.
        #[test]
        fn linear_expansion_is_palindrome(declared in proptest::collection::vec(0usize..50, 2..20)) {
            let expanded = expand_traversal(declared.clone(), false);
            prop_assert_eq!(expanded.len(), 2 * declared.len() - 1);
            let reversed: Vec<_> = expanded.iter().rev().copied().collect();
            prop_assert_eq!(&expanded, &reversed);
            prop_assert_eq!(&expanded[..declared.len()], &declared[..]);
        }
    }
}
