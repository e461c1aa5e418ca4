//! Pointer input handling

pub mod hover;

pub use hover::{HoverState, HoverTracker, PointerEvent};
