//! Map rendering settings.

use std::fmt;

use serde::Deserialize;

/// An SVG paint value.
///
/// In JSON a colour is a name (`"red"`), an `[r, g, b]` triple or an
/// `[r, g, b, opacity]` quadruple.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    #[default]
    None,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
            Color::None => f.write_str("none"),
        }
    }
}

/// A screen-space offset, `[dx, dy]` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Offset(pub f64, pub f64);

/// Everything the map renderer needs besides the network.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Offset,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Offset,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Palette colour for the `index`-th rendered line, cycling through the
    /// palette. An empty palette paints nothing.
    pub fn palette_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::None;
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Offset(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: Offset(7.0, -3.0),
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::Named("green".into()),
                Color::Rgb(255, 160, 0),
                Color::Named("red".into()),
            ],
        }
    }
}
