//! Renderer boundary
//!
//! The scene core never draws. Whatever does (a GPU backend, a canvas bridge,
//! a test recorder) implements [`RendererAdapter`] and receives one
//! [`FrameSnapshot`] per frame. [`NodeInstance`] is the flattened per-node
//! layout for backends that upload instance buffers.

use bytemuck::{Pod, Zeroable};

use super::snapshot::{FrameSnapshot, NodeSnapshot};
use crate::foundation::math::{Mat4, Vec3};

/// Consumer of per-frame snapshots
pub trait RendererAdapter {
    /// Draw (or otherwise consume) one complete frame
    fn submit(&mut self, frame: &FrameSnapshot);
}

/// Model matrix for a node: translate, then tilt around X, then spin around Y,
/// then scale (XYZ Euler order, matching the web scene this mirrors)
pub fn model_matrix(node: &NodeSnapshot) -> Mat4 {
    Mat4::new_translation(&node.world_position)
        * Mat4::new_rotation(Vec3::x() * node.tilt_x)
        * Mat4::new_rotation(Vec3::y() * node.angle_y)
        * Mat4::new_scaling(node.scale)
}

/// GPU-ready per-node instance data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    /// Base color, alpha 1
    pub color: [f32; 4],
    /// Emissive color in rgb, emissive intensity in w
    pub emissive: [f32; 4],
}

impl NodeInstance {
    /// Flatten one node snapshot
    pub fn from_snapshot(node: &NodeSnapshot) -> Self {
        let [r, g, b] = node.color.to_array();
        let [er, eg, eb] = node.glow_color.to_array();
        Self {
            model: model_matrix(node).into(),
            color: [r, g, b, 1.0],
            emissive: [er, eg, eb, node.emissive_intensity],
        }
    }
}

/// Raw bytes of an instance slice, ready for a buffer upload
pub fn instance_bytes(instances: &[NodeInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
