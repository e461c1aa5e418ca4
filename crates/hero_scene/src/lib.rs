//! # Hero Scene
//!
//! Headless state core for an animated 3D hero scene: two groups of labelled
//! nodes, two unrelated periodic timers choosing which node is emphasized,
//! pointer hover on top, and an immutable snapshot per frame for a renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use hero_scene::prelude::*;
//!
//! let mut scene = HeroScene::new(&HeroConfig::default())?;
//! scene.start();
//!
//! let frame = scene.tick(1.0 / 60.0);
//! assert_eq!(frame.nodes().len(), 6);
//! assert_eq!(frame.active_group(), Group::Frontend);
//!
//! scene.teardown();
//! # Ok::<(), SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod activation;
pub mod config;
pub mod foundation;
pub mod input;
pub mod scene;

/// Common imports for scene users
pub mod prelude {
    pub use crate::{
        activation::{ActivationEvent, ActivationState, Group},
        config::{Config, ConfigError, HeroConfig},
        foundation::{
            math::{Color, Vec3},
            time::{FrameClock, FrameTime, WallClock},
        },
        input::PointerEvent,
        scene::{FrameSnapshot, HeroScene, NodeId, NodeSnapshot, RendererAdapter, SceneError},
    };
}
