// src/models/fleet_model.rs
// the JSON-based fleet data model

use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::models::{LngLat, ShipPath};

/// Fallback marker blue, used when a ship's color string fails to parse.
pub const DEFAULT_SHIP_COLOR: (u8, u8, u8) = (59, 130, 246);

#[derive(Debug, Serialize, Deserialize)]
pub struct Fleet {
    pub ships: Vec<Ship>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    pub color: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl Fleet {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let fleet: Fleet = serde_json::from_str(&content)?;
        Ok(fleet)
    }
}

impl Ship {
    pub fn path(&self) -> Result<ShipPath, Box<dyn Error>> {
        let points = self
            .coordinates
            .iter()
            .map(|c| LngLat::new(c[0], c[1]))
            .collect();
        ShipPath::new(points)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.color).unwrap_or(DEFAULT_SHIP_COLOR)
    }
}

/// parse a CSS-style "#rrggbb" color string
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
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
                        "coordinates": [[72.8, 18.9], [70.0, 15.0], [79.8, 6.9]]
                    },
                    {
                        "name": "Dinghy",
                        "color": "not-a-color",
                        "coordinates": [[1.0, 2.0]]
                    }
                ]
            }"##,
        )
        .unwrap()
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_parse_hex_color() {
            assert_eq!(parse_hex_color("#3b82f6"), Some((59, 130, 246)));
            assert_eq!(parse_hex_color("#ffffff"), Some((255, 255, 255)));
            assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        }

        #[test]
        fn test_parse_hex_color_rejects_malformed() {
            assert_eq!(parse_hex_color("3b82f6"), None);
            assert_eq!(parse_hex_color("#fff"), None);
            assert_eq!(parse_hex_color("#zzzzzz"), None);
            assert_eq!(parse_hex_color(""), None);
        }

        #[test]
        fn test_bad_color_falls_back_to_default() {
            let fleet = test_fleet();
            assert_eq!(fleet.ships[1].rgb(), DEFAULT_SHIP_COLOR);
        }
    }

    mod fleet_tests {
        use super::*;

        #[test]
        fn test_fleet_parses_from_json() {
            let fleet = test_fleet();
            assert_eq!(fleet.ships.len(), 2);
            assert_eq!(fleet.ships[0].name, "Coral Runner");
            assert_eq!(fleet.ships[0].rgb(), (59, 130, 246));
        }

        #[test]
        fn test_ship_path_conversion() {
            let fleet = test_fleet();
            let path = fleet.ships[0].path().unwrap();
            assert_eq!(path.len(), 3);
            assert_eq!(path.first(), LngLat::new(72.8, 18.9));
            assert_eq!(path.last(), LngLat::new(79.8, 6.9));
        }
    }
}
