//! SVG network map.
//!
//! Layers, bottom to top: line polylines, line name labels, stop circles,
//! stop name labels. Lines are drawn in name order, each taking the next
//! palette colour.

use std::collections::BTreeMap;

use askama::Template;
use tracing::debug;

use crate::catalogue::TransitNetwork;
use crate::domain::{BusLine, Stop, StopId};

use super::projector::{Point, SphereProjector};
use super::settings::RenderSettings;

/// A line's polyline.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub points: String,
    pub color: String,
}

/// A text label at a projected point.
#[derive(Debug, Clone)]
pub struct LabelView {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: String,
}

/// A stop marker.
#[derive(Debug, Clone)]
pub struct CircleView {
    pub x: f64,
    pub y: f64,
}

#[derive(Template)]
#[template(path = "map.svg")]
struct MapTemplate {
    routes: Vec<RouteView>,
    bus_labels: Vec<LabelView>,
    stop_circles: Vec<CircleView>,
    stop_labels: Vec<LabelView>,
    line_width: f64,
    stop_radius: f64,
    underlayer_color: String,
    underlayer_width: f64,
    bus_label_font_size: u32,
    bus_label_dx: f64,
    bus_label_dy: f64,
    stop_label_font_size: u32,
    stop_label_dx: f64,
    stop_label_dy: f64,
}

/// Renders a network into an SVG document.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render the whole network as an SVG document.
    pub fn render(&self, network: &TransitNetwork) -> Result<String, askama::Error> {
        let mut lines: Vec<&BusLine> = network
            .bus_lines()
            .filter(|line| !line.stops.is_empty())
            .collect();
        lines.sort_by(|a, b| a.name.cmp(&b.name));

        let stops: BTreeMap<&str, &Stop> = lines
            .iter()
            .flat_map(|line| line.stops.iter())
            .filter_map(|id| network.stop(*id))
            .map(|stop| (stop.name.as_str(), stop))
            .collect();

        let projector = SphereProjector::new(
            stops.values().map(|stop| stop.coordinates),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );
        let project = |stop: &Stop| projector.project(stop.coordinates);

        let mut routes = Vec::with_capacity(lines.len());
        let mut bus_labels = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            let color = self.settings.palette_color(idx).to_string();

            let points: Vec<String> = line
                .stops
                .iter()
                .filter_map(|id| network.stop(*id))
                .map(|stop| {
                    let p = project(stop);
                    format!("{},{}", p.x, p.y)
                })
                .collect();
            routes.push(RouteView {
                points: points.join(" "),
                color: color.clone(),
            });

            for stop in Self::label_stops(line).into_iter().filter_map(|id| network.stop(id)) {
                bus_labels.push(label(project(stop), &line.name, &color));
            }
        }

        let stop_circles = stops
            .values()
            .copied()
            .map(|stop| {
                let Point { x, y } = project(stop);
                CircleView { x, y }
            })
            .collect();
        let stop_labels = stops
            .values()
            .copied()
            .map(|stop| label(project(stop), &stop.name, "black"))
            .collect();

        debug!(lines = lines.len(), stops = stops.len(), "rendering map");

        MapTemplate {
            routes,
            bus_labels,
            stop_circles,
            stop_labels,
            line_width: self.settings.line_width,
            stop_radius: self.settings.stop_radius,
            underlayer_color: self.settings.underlayer_color.to_string(),
            underlayer_width: self.settings.underlayer_width,
            bus_label_font_size: self.settings.bus_label_font_size,
            bus_label_dx: self.settings.bus_label_offset.0,
            bus_label_dy: self.settings.bus_label_offset.1,
            stop_label_font_size: self.settings.stop_label_font_size,
            stop_label_dx: self.settings.stop_label_offset.0,
            stop_label_dy: self.settings.stop_label_offset.1,
        }
        .render()
    }

    /// Stops that carry the line's name: the first stop, plus the turnaround
    /// stop of a linear line when it differs from the first.
    fn label_stops(line: &BusLine) -> Vec<StopId> {
        let Some(first) = line.first_stop() else {
            return Vec::new();
        };
        let mut result = vec![first];
        if !line.is_roundtrip && line.original_stop_count > 1 {
            if let Some(last) = line.last_declared_stop() {
                if last != first {
                    result.push(last);
                }
            }
        }
        result
    }
}

fn label(at: Point, text: &str, color: &str) -> LabelView {
    LabelView {
        x: at.x,
        y: at.y,
        text: text.to_string(),
        color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use crate::render::settings::Color;

    fn network() -> TransitNetwork {
        let mut net = TransitNetwork::new();
        net.add_stop("Riviera", Coordinates::new(43.587795, 39.716901));
        net.add_stop("Ocean", Coordinates::new(43.581969, 39.719848));
        net.add_stop("Morskoy", Coordinates::new(43.598701, 39.730623));
        net.add_stop("Unused", Coordinates::new(43.0, 39.0));
        net.add_bus_line("14", &["Riviera", "Ocean", "Riviera"], true);
        net.add_bus_line("114", &["Morskoy", "Riviera"], false);
        net
    }

    fn render(net: &TransitNetwork) -> String {
        MapRenderer::new(RenderSettings::default()).render(net).unwrap()
    }

    #[test]
    fn document_envelope() {
        let svg = render(&network());
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
        assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn one_polyline_per_line_in_name_order() {
        let svg = render(&network());
        assert_eq!(svg.matches("<polyline").count(), 2);

        // "114" sorts before "14", so it takes the first palette colour.
        let first = svg.find("<polyline").unwrap();
        let line = &svg[first..svg[first..].find("/>").unwrap() + first];
        assert!(line.contains("stroke=\"green\""));
    }

    #[test]
    fn only_served_stops_are_drawn() {
        let svg = render(&network());
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(!svg.contains("Unused"));
    }

    #[test]
    fn linear_line_labelled_at_both_ends() {
        let svg = render(&network());
        // Two labels (underlayer + text) at each end of 114, one pair for 14.
        assert_eq!(svg.matches(">114</text>").count(), 4);
        assert_eq!(svg.matches(">14</text>").count(), 2);
    }

    #[test]
    fn stop_labels_have_underlayer() {
        let svg = render(&network());
        assert_eq!(svg.matches(">Ocean</text>").count(), 2);
    }

    #[test]
    fn names_are_escaped() {
        let mut net = TransitNetwork::new();
        net.add_stop("Fish & <Chips>", Coordinates::new(1.0, 1.0));
        net.add_stop("B", Coordinates::new(2.0, 2.0));
        net.add_bus_line("1", &["Fish & <Chips>", "B"], false);

        let svg = render(&net);
        assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(!svg.contains("<Chips>"));
    }

    #[test]
    fn empty_network() {
        let svg = render(&TransitNetwork::new());
        assert!(!svg.contains("<polyline"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn label_stops_rules() {
        let mut net = network();
        net.add_bus_line("loop", &["Ocean", "Morskoy", "Ocean"], false);
        let line = net.find_bus_line("loop").unwrap();
        // Declared last stop equals the first: labelled once.
        assert_eq!(MapRenderer::label_stops(line).len(), 1);

        let line = net.find_bus_line("114").unwrap();
        assert_eq!(MapRenderer::label_stops(line).len(), 2);
    }

    #[test]
    fn underlayer_color_used() {
        let settings = RenderSettings {
            underlayer_color: Color::Named("white".into()),
            ..RenderSettings::default()
        };
        let svg = MapRenderer::new(settings).render(&network()).unwrap();
        assert!(svg.contains("stroke=\"white\""));
    }
}
