// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub fleet_file: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    pub pixels_per_degree: f32,
    pub graticule_spacing: f32,
}

/************************* Animation Config ********************/

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    pub tick_interval: f32, // Seconds between animation ticks
    pub step: f64,          // Fraction of a segment covered per tick (0.0-1.0)
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub path_stroke_weight: f32,
    pub marker_outline_weight: f32,
    pub dash_length: f32,
    pub gap_length: f32,
    pub label_font_size: u32,
}
