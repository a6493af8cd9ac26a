// src/draw/path_draw.rs
// Dashed polyline rendering for ship path overlays

use nannou::prelude::*;

/// Draws `points` as a dashed polyline. The dash pattern flows across
/// vertices instead of restarting on every segment.
pub fn draw_dashed_polyline(
    draw: &Draw,
    points: &[Point2],
    color: Rgba,
    weight: f32,
    dash_length: f32,
    gap_length: f32,
) {
    let mut phase = 0.0;
    for pair in points.windows(2) {
        for (a, b) in dash_spans(pair[0], pair[1], dash_length, gap_length, &mut phase) {
            draw.line().points(a, b).color(color).stroke_weight(weight);
        }
    }
}

/// The visible spans of one segment under a dash/gap pattern. `phase` is
/// the distance already consumed within the pattern period when the
/// segment starts, and is updated for the next segment.
fn dash_spans(
    start: Point2,
    end: Point2,
    dash_length: f32,
    gap_length: f32,
    phase: &mut f32,
) -> Vec<(Point2, Point2)> {
    let delta = end - start;
    let length = delta.length();
    if length <= f32::EPSILON {
        return Vec::new();
    }

    let direction = delta / length;
    let period = dash_length + gap_length;
    let mut spans = Vec::new();

    let mut distance = 0.0;
    while distance < length {
        let pattern_pos = (*phase + distance) % period;
        if pattern_pos < dash_length {
            let span_end = (distance + (dash_length - pattern_pos)).min(length);
            spans.push((start + direction * distance, start + direction * span_end));
            distance = span_end + gap_length;
        } else {
            // inside a gap, jump to the next dash
            distance += period - pattern_pos;
        }
    }

    *phase = (*phase + length) % period;
    spans
}
