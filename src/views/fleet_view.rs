// src/views/fleet_view.rs
//
// Runtime view state for the fleet: one marker per ship, moved by voyage
// progress notices, plus the static path overlay and waypoint markers.

use nannou::prelude::*;
use std::error::Error;

use crate::animation::VoyageState;
use crate::config::StyleConfig;
use crate::draw::{draw_dashed_polyline, draw_marker, ship_rgba, MarkerKind};
use crate::models::{Fleet, LngLat, ShipPath};
use crate::views::MapView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoyageStatus {
    InTransit,
    Arrived,
}

impl VoyageStatus {
    fn label(&self) -> &'static str {
        match self {
            VoyageStatus::InTransit => "In Transit",
            VoyageStatus::Arrived => "Arrived",
        }
    }
}

/// What the animator tells the host about one ship, forwarded out of the
/// voyage callbacks.
#[derive(Debug, Clone, Copy)]
pub enum VoyageNotice {
    Progress {
        ship: usize,
        state: VoyageState,
        position: LngLat,
    },
    Arrived {
        ship: usize,
    },
}

pub struct ShipMarker {
    pub name: String,
    pub color: (u8, u8, u8),
    pub position: LngLat,
    pub state: VoyageState,
    pub status: VoyageStatus,
}

pub struct FleetView {
    markers: Vec<ShipMarker>,
    paths: Vec<ShipPath>,
}

impl FleetView {
    pub fn new(fleet: &Fleet) -> Result<Self, Box<dyn Error>> {
        let mut markers = Vec::with_capacity(fleet.ships.len());
        let mut paths = Vec::with_capacity(fleet.ships.len());

        for ship in &fleet.ships {
            let path = ship.path()?;
            markers.push(ShipMarker {
                name: ship.name.clone(),
                color: ship.rgb(),
                position: path.first(),
                state: VoyageState {
                    segment_index: 0,
                    progress: 0.0,
                },
                status: VoyageStatus::InTransit,
            });
            paths.push(path);
        }

        Ok(Self { markers, paths })
    }

    pub fn paths(&self) -> &[ShipPath] {
        &self.paths
    }

    pub fn ship_name(&self, ship: usize) -> Option<&str> {
        self.markers.get(ship).map(|m| m.name.as_str())
    }

    pub fn marker(&self, ship: usize) -> Option<&ShipMarker> {
        self.markers.get(ship)
    }

    pub fn apply(&mut self, notice: VoyageNotice) {
        match notice {
            VoyageNotice::Progress {
                ship,
                state,
                position,
            } => {
                if let Some(marker) = self.markers.get_mut(ship) {
                    marker.state = state;
                    marker.position = position;
                }
            }
            VoyageNotice::Arrived { ship } => {
                if let Some(marker) = self.markers.get_mut(ship) {
                    marker.status = VoyageStatus::Arrived;
                }
            }
        }
    }

    /// Puts every ship back at its first waypoint, ready for a fresh set
    /// of voyages.
    pub fn reset(&mut self) {
        for (marker, path) in self.markers.iter_mut().zip(&self.paths) {
            marker.position = path.first();
            marker.state = VoyageState {
                segment_index: 0,
                progress: 0.0,
            };
            marker.status = VoyageStatus::InTransit;
        }
    }

    pub fn draw(&self, draw: &Draw, map: &MapView, style: &StyleConfig, show_labels: bool) {
        // Path overlays under everything else
        for (marker, path) in self.markers.iter().zip(&self.paths) {
            let screen_points: Vec<Point2> =
                path.points().iter().map(|p| map.project(*p)).collect();
            draw_dashed_polyline(
                draw,
                &screen_points,
                ship_rgba(marker.color, 0.85),
                style.path_stroke_weight,
                style.dash_length,
                style.gap_length,
            );
        }

        for (marker, path) in self.markers.iter().zip(&self.paths) {
            draw_waypoints(draw, map, style, marker, path, show_labels);
        }

        for marker in &self.markers {
            let at = map.project(marker.position);
            draw_marker(
                draw,
                MarkerKind::Moving,
                at,
                marker.color,
                style.marker_outline_weight,
            );
            draw.text(&marker.name)
                .x_y(at.x, at.y + MarkerKind::Moving.radius() + 14.0)
                .color(WHITE)
                .font_size(style.label_font_size);
            draw.text(marker.status.label())
                .x_y(at.x, at.y - MarkerKind::Moving.radius() - 12.0)
                .color(rgba(1.0, 1.0, 1.0, 0.7))
                .font_size(style.label_font_size - 2);
        }
    }
}

fn draw_waypoints(
    draw: &Draw,
    map: &MapView,
    style: &StyleConfig,
    marker: &ShipMarker,
    path: &ShipPath,
    show_labels: bool,
) {
    let last = path.len() - 1;
    for (i, waypoint) in path.points().iter().enumerate() {
        let kind = if i == 0 {
            MarkerKind::Start
        } else if i == last {
            MarkerKind::End
        } else {
            MarkerKind::Waypoint
        };

        let at = map.project(*waypoint);
        draw_marker(draw, kind, at, marker.color, style.marker_outline_weight);

        if show_labels {
            let label = if i == 0 {
                "Start".to_string()
            } else if i == last {
                "End".to_string()
            } else {
                format!("Waypoint {}", i)
            };
            draw.text(&label)
                .x_y(at.x, at.y - kind.radius() - 10.0)
                .color(rgba(1.0, 1.0, 1.0, 0.6))
                .font_size(style.label_font_size - 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fleet() -> Fleet {
        serde_json::from_str(
            r##"{
                "ships": [
                    {
                        "name": "Coral Runner",
                        "color": "#3b82f6",
                        "coordinates": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]
                    }
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_markers_start_at_first_waypoint() {
        let view = FleetView::new(&test_fleet()).unwrap();
        let marker = view.marker(0).unwrap();

        assert_eq!(marker.position, LngLat::new(0.0, 0.0));
        assert_eq!(marker.status, VoyageStatus::InTransit);
    }

    #[test]
    fn test_progress_notice_moves_marker() {
        let mut view = FleetView::new(&test_fleet()).unwrap();
        let state = VoyageState {
            segment_index: 1,
            progress: 0.5,
        };

        view.apply(VoyageNotice::Progress {
            ship: 0,
            state,
            position: LngLat::new(10.0, 5.0),
        });

        let marker = view.marker(0).unwrap();
        assert_eq!(marker.position, LngLat::new(10.0, 5.0));
        assert_eq!(marker.state, state);
    }

    #[test]
    fn test_arrival_notice_updates_status() {
        let mut view = FleetView::new(&test_fleet()).unwrap();
        view.apply(VoyageNotice::Arrived { ship: 0 });
        assert_eq!(view.marker(0).unwrap().status, VoyageStatus::Arrived);
    }

    #[test]
    fn test_notice_for_unknown_ship_is_ignored() {
        let mut view = FleetView::new(&test_fleet()).unwrap();
        view.apply(VoyageNotice::Arrived { ship: 9 });
        assert_eq!(view.marker(0).unwrap().status, VoyageStatus::InTransit);
    }

    #[test]
    fn test_reset_rewinds_markers() {
        let mut view = FleetView::new(&test_fleet()).unwrap();
        view.apply(VoyageNotice::Progress {
            ship: 0,
            state: VoyageState {
                segment_index: 1,
                progress: 1.0,
            },
            position: LngLat::new(10.0, 10.0),
        });
        view.apply(VoyageNotice::Arrived { ship: 0 });

        view.reset();

        let marker = view.marker(0).unwrap();
        assert_eq!(marker.position, LngLat::new(0.0, 0.0));
        assert_eq!(marker.status, VoyageStatus::InTransit);
        assert_eq!(marker.state.segment_index, 0);
    }
}
