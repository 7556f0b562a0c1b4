//! Pointer input: frame-coherent cursor tracking and click classification.

pub mod click;
pub mod pointer;

pub use click::{ClickKind, ClickTracker, DOUBLE_CLICK_WINDOW};
pub use pointer::PointerState;
