//! Network map rendering.
//!
//! Projects stop coordinates onto a canvas and draws lines, stops and their
//! labels as an SVG document.

mod map;
mod projector;
mod settings;

pub use map::MapRenderer;
pub use projector::{Point, SphereProjector};
pub use settings::{Color, Offset, RenderSettings};
