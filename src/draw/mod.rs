pub mod marker_draw;
pub mod path_draw;

pub use marker_draw::{draw_marker, ship_rgba, MarkerKind};
pub use path_draw::draw_dashed_polyline;
