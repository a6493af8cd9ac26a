// src/views/click_markers.rs
//
// Numbered annotation pins dropped by clicking the map

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::draw::{draw_marker, MarkerKind};
use crate::models::LngLat;
use crate::views::MapView;

pub struct ClickMarker {
    pub position: LngLat,
    pub number: usize,
}

#[derive(Default)]
pub struct ClickMarkerLayer {
    markers: Vec<ClickMarker>,
}

impl ClickMarkerLayer {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Adds a pin and returns its display number (1-based, like the
    /// order the pins were dropped in).
    pub fn add(&mut self, position: LngLat) -> usize {
        let number = self.markers.len() + 1;
        self.markers.push(ClickMarker { position, number });
        number
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn draw(&self, draw: &Draw, map: &MapView, style: &StyleConfig) {
        for marker in &self.markers {
            let at = map.project(marker.position);
            draw_marker(
                draw,
                MarkerKind::Click,
                at,
                (0, 0, 0),
                style.marker_outline_weight,
            );
            draw.text(&marker.number.to_string())
                .x_y(at.x, at.y)
                .color(WHITE)
                .font_size(style.label_font_size - 2);
        }
    }
}
