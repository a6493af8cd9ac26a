// src/draw/marker_draw.rs
// Marker glyphs for the map: waypoints, moving ships, annotation pins

use nannou::prelude::*;

use crate::models::DEFAULT_SHIP_COLOR;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerKind {
    Start,
    Waypoint,
    End,
    Moving,
    Click,
}

impl MarkerKind {
    pub fn radius(&self) -> f32 {
        match self {
            MarkerKind::Start | MarkerKind::Waypoint => 10.0,
            MarkerKind::End | MarkerKind::Moving => 15.0,
            MarkerKind::Click => 12.5,
        }
    }

    fn opacity(&self) -> f32 {
        match self {
            MarkerKind::Start => 0.7,
            MarkerKind::Waypoint => 0.6,
            _ => 1.0,
        }
    }
}

pub fn ship_rgba(color: (u8, u8, u8), alpha: f32) -> Rgba {
    rgba(
        <f32 as From<_>>::from(color.0) / 255.0,
        <f32 as From<_>>::from(color.1) / 255.0,
        <f32 as From<_>>::from(color.2) / 255.0,
        alpha,
    )
}

pub fn draw_marker(
    draw: &Draw,
    kind: MarkerKind,
    at: Point2,
    color: (u8, u8, u8),
    outline_weight: f32,
) {
    let radius = kind.radius();

    match kind {
        MarkerKind::End => {
            draw.ellipse()
                .xy(at)
                .radius(radius)
                .color(rgba(0.1, 0.1, 0.12, 0.9))
                .stroke(WHITE)
                .stroke_weight(outline_weight);
            draw_cross(draw, at, radius * 0.55, outline_weight);
        }
        MarkerKind::Click => {
            draw.ellipse()
                .xy(at)
                .radius(radius)
                .color(ship_rgba(DEFAULT_SHIP_COLOR, 1.0))
                .stroke(WHITE)
                .stroke_weight(outline_weight);
        }
        _ => {
            draw.ellipse()
                .xy(at)
                .radius(radius)
                .color(ship_rgba(color, kind.opacity()))
                .stroke(WHITE)
                .stroke_weight(outline_weight);
        }
    }
}

fn draw_cross(draw: &Draw, at: Point2, arm: f32, weight: f32) {
    draw.line()
        .points(at + vec2(-arm, -arm), at + vec2(arm, arm))
        .color(rgba(0.95, 0.3, 0.3, 1.0))
        .stroke_weight(weight);
    draw.line()
        .points(at + vec2(-arm, arm), at + vec2(arm, -arm))
        .color(rgba(0.95, 0.3, 0.3, 1.0))
        .stroke_weight(weight);
}
