//! Scene management
//!
//! Bridges the scene state (activation, hover, rotation) with whatever
//! renderer draws it.
//!
//! ## Architecture
//!
//! ```text
//! FrameClock ──────────┐
//! ActivationScheduler ─┼─> HeroScene ──FrameSnapshot──> RendererAdapter
//! HoverTracker ────────┘
//! ```
//!
//! The layout is fixed at construction; only the per-frame values change.

mod hero_scene;
mod node;
pub mod renderer;
mod snapshot;

pub use hero_scene::HeroScene;
pub use node::{Headline, Node, NodeId, RotationState, SceneLayout};
pub use renderer::{NodeInstance, RendererAdapter};
pub use snapshot::{active_motion, emissive_intensity, FrameSnapshot, NodeSnapshot};

use crate::config::ConfigError;

/// Scene construction errors
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// The config failed validation
    #[error("Invalid scene configuration: {0}")]
    Config(#[from] ConfigError),

    /// Two nodes share a label, so pointer targets would be ambiguous
    #[error("Duplicate node label: {0:?}")]
    DuplicateLabel(String),
}
