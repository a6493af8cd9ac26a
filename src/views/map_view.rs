// src/views/map_view.rs
//
// Flat-chart projection between geographic coordinates and window space

use nannou::prelude::*;

use crate::models::LngLat;

/// Equirectangular view centered on a fixed coordinate. Window origin is
/// the center, +x east, +y north, matching nannou's coordinate space.
pub struct MapView {
    center: LngLat,
    pixels_per_degree: f32,
}

impl MapView {
    pub fn new(center: LngLat, pixels_per_degree: f32) -> Self {
        Self {
            center,
            pixels_per_degree,
        }
    }

    pub fn center(&self) -> LngLat {
        self.center
    }

    pub fn project(&self, pos: LngLat) -> Point2 {
        pt2(
            (pos.lng - self.center.lng) as f32 * self.pixels_per_degree,
            (pos.lat - self.center.lat) as f32 * self.pixels_per_degree,
        )
    }

    pub fn unproject(&self, point: Point2) -> LngLat {
        LngLat {
            lng: self.center.lng + <f64 as From<_>>::from(point.x / self.pixels_per_degree),
            lat: self.center.lat + <f64 as From<_>>::from(point.y / self.pixels_per_degree),
        }
    }

    /// Faint meridian/parallel lines at `spacing` degrees across the
    /// visible window.
    pub fn draw_graticule(&self, draw: &Draw, bounds: Rect, spacing: f32) {
        if spacing <= 0.0 {
            return;
        }
        let line_color = rgba(1.0, 1.0, 1.0, 0.08);
        let spacing = <f64 as From<_>>::from(spacing);

        let south_west = self.unproject(pt2(bounds.left(), bounds.bottom()));
        let north_east = self.unproject(pt2(bounds.right(), bounds.top()));

        let mut lng = (south_west.lng / spacing).floor() * spacing;
        while lng <= north_east.lng {
            let x = self.project(LngLat::new(lng, self.center.lat)).x;
            draw.line()
                .points(pt2(x, bounds.bottom()), pt2(x, bounds.top()))
                .color(line_color)
                .stroke_weight(1.0);
            lng += spacing;
        }

        let mut lat = (south_west.lat / spacing).floor() * spacing;
        while lat <= north_east.lat {
            let y = self.project(LngLat::new(self.center.lng, lat)).y;
            draw.line()
                .points(pt2(bounds.left(), y), pt2(bounds.right(), y))
                .color(line_color)
                .stroke_weight(1.0);
            lat += spacing;
        }
    }
}
