//! Projection of geographic coordinates onto the canvas.

use crate::domain::Coordinates;

const EPSILON: f64 = 1e-6;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Maps coordinates into a `width` x `height` canvas with `padding` on each
/// side, north up, keeping the aspect ratio of the longitude/latitude box.
#[derive(Debug, Clone, Copy)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit the projection to `points`.
    ///
    /// With no points, or when every point coincides, the zoom is zero and
    /// everything lands on the padding corner.
    pub fn new<I>(points: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for c in points {
            bounds = Some(match bounds {
                None => (c.lng, c.lng, c.lat, c.lat),
                Some((min_lng, max_lng, min_lat, max_lat)) => (
                    min_lng.min(c.lng),
                    max_lng.max(c.lng),
                    min_lat.min(c.lat),
                    max_lat.max(c.lat),
                ),
            });
        }

        let Some((min_lng, max_lng, min_lat, max_lat)) = bounds else {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        };

        let width_zoom =
            (max_lng - min_lng > EPSILON).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom =
            (max_lat - min_lat > EPSILON).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    pub fn project(&self, coords: Coordinates) -> Point {
        Point {
            x: (coords.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coords.lat) * self.zoom + self.padding,
        }
    }
}
