pub mod easing;
pub mod frames;
pub mod reveal;
pub mod scroll;
