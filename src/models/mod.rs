pub mod fleet_model;
pub mod geometry;

pub use fleet_model::{parse_hex_color, Fleet, Ship, DEFAULT_SHIP_COLOR};
pub use geometry::{LngLat, ShipPath};
