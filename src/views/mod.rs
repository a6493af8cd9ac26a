pub mod click_markers;
pub mod fleet_view;
pub mod map_view;

pub use click_markers::{ClickMarker, ClickMarkerLayer};
pub use fleet_view::{FleetView, ShipMarker, VoyageNotice, VoyageStatus};
pub use map_view::MapView;
