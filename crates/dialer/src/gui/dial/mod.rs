pub mod view;
pub mod widget;

pub use view::{DiscCache, draw};
pub use widget::{DialSettings, DialState, DialView};

/// Space kept free around the disc inside the drawing area.
pub const DIAL_PADDING: f64 = 12.0;
pub const FONT_FACE: &str = "Sans";
