pub mod animation;
pub mod dial;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod macros;
pub mod number;
