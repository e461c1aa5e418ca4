//! Per-frame scene snapshot
//!
//! A [`FrameSnapshot`] is everything a renderer needs for one frame. It is
//! built completely before it is published and its node array is shared
//! behind an `Arc`, so readers can never observe a half-updated frame.

use std::sync::Arc;

use serde::Serialize;

use super::node::{Headline, NodeId};
use super::renderer::NodeInstance;
use crate::activation::{ActivationState, Group};
use crate::config::AnimationConfig;
use crate::foundation::math::{Color, Vec3};
use crate::foundation::time::FrameTime;

/// Render parameters for one node in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// Node identifier
    pub id: NodeId,
    /// Group offset plus local offset
    pub world_position: Vec3,
    /// Accumulated Y rotation, radians
    pub angle_y: f32,
    /// X tilt, radians (zero unless active)
    pub tilt_x: f32,
    /// Uniform scale (one unless active)
    pub scale: f32,
    /// Base material color
    pub color: Color,
    /// Emissive color
    pub glow_color: Color,
    /// Emissive strength
    pub emissive_intensity: f32,
    /// Whether this is the active node
    pub active: bool,
    /// Whether the pointer is over this node
    pub hovered: bool,
}

/// Tilt and scale of the active node at `elapsed` seconds
pub fn active_motion(animation: &AnimationConfig, elapsed: f32) -> (f32, f32) {
    let tilt_x = animation.tilt_amplitude * elapsed.sin();
    let scale = animation.pulse_amplitude.mul_add((2.0 * elapsed).sin(), 1.0);
    (tilt_x, scale)
}

/// Emissive strength: high when active or hovered, low otherwise. No easing.
pub fn emissive_intensity(animation: &AnimationConfig, active: bool, hovered: bool) -> f32 {
    if active || hovered {
        animation.emissive_high
    } else {
        animation.emissive_low
    }
}

/// Immutable snapshot of the whole scene for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    /// Frame timing
    pub time: FrameTime,
    /// Activation at the end of the frame's timer updates
    pub activation: ActivationState,
    /// Overlay copy for the active group
    pub headline: Arc<Headline>,
    nodes: Arc<[NodeSnapshot]>,
}

impl FrameSnapshot {
    /// Wrap fully computed node data
    pub fn new(
        time: FrameTime,
        activation: ActivationState,
        headline: Arc<Headline>,
        nodes: Vec<NodeSnapshot>,
    ) -> Self {
        Self {
            time,
            activation,
            headline,
            nodes: nodes.into(),
        }
    }

    /// Frame number
    pub fn frame(&self) -> u64 {
        self.time.frame
    }

    /// Currently emphasized group
    pub fn active_group(&self) -> Group {
        self.activation.active_group()
    }

    /// All node snapshots, in layout order
    pub fn nodes(&self) -> &[NodeSnapshot] {
        &self.nodes
    }

    /// Snapshot for one node
    pub fn node(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.nodes.get(id.0)
    }

    /// The active node, if any
    pub fn active_node(&self) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|node| node.active)
    }

    /// Flatten into GPU instance data
    pub fn instances(&self) -> Vec<NodeInstance> {
        self.nodes.iter().map(NodeInstance::from_snapshot).collect()
    }
}
