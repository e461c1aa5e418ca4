//! Static scene topology
//!
//! The node set is built once from [`HeroConfig`] and never changes: two
//! groups side by side, each a vertical column of labelled nodes centred on
//! the group's offset.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::SceneError;
use crate::activation::Group;
use crate::config::HeroConfig;
use crate::foundation::math::{Color, Vec3};

/// Stable node identifier (index into the layout's node list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// One labelled element of the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Identifier, equal to the node's position in [`SceneLayout::nodes`]
    pub id: NodeId,
    /// Label text
    pub text: String,
    /// Owning group
    pub group: Group,
    /// Position inside the group, top to bottom
    pub index_in_group: usize,
    /// Offset from the group origin
    pub local_offset: Vec3,
    /// Base material color
    pub color: Color,
    /// Emissive color
    pub glow_color: Color,
}

/// Per-node Y rotation accumulator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Accumulated rotation around Y, radians
    pub angle_y: f32,
}

impl RotationState {
    /// Add one tick's worth of rotation
    pub fn advance(&mut self, step: f32) {
        self.angle_y += step;
    }
}

/// Overlay copy for the active group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    /// e.g. "Frontend Developer"
    pub title: String,
    /// One-sentence pitch under the title
    pub tagline: String,
}

/// Immutable node topology plus per-group placement and copy
#[derive(Debug, Clone)]
pub struct SceneLayout {
    nodes: Vec<Node>,
    nodes_per_group: usize,
    group_offsets: [Vec3; 2],
    headlines: [Arc<Headline>; 2],
}

impl SceneLayout {
    /// Build the layout from a validated config
    pub fn from_config(config: &HeroConfig) -> Result<Self, SceneError> {
        config.validate()?;

        let nodes_per_group = config.nodes_per_group();
        let spacing = config.layout.node_spacing;
        let centre = (nodes_per_group as f32 - 1.0) / 2.0;

        let mut nodes = Vec::with_capacity(nodes_per_group * Group::ALL.len());
        let mut seen = HashSet::new();
        for group in Group::ALL {
            let group_config = config.groups.get(group);
            for (index, label) in group_config.labels.iter().enumerate() {
                if !seen.insert(label.as_str()) {
                    return Err(SceneError::DuplicateLabel(label.clone()));
                }
                nodes.push(Node {
                    id: NodeId(nodes.len()),
                    text: label.clone(),
                    group,
                    index_in_group: index,
                    local_offset: Vec3::new(0.0, (index as f32 - centre) * spacing, 0.0),
                    color: group_config.color,
                    glow_color: group_config.glow_color,
                });
            }
        }

        let x = config.layout.group_spacing;
        let headline = |group: Group| {
            let group_config = config.groups.get(group);
            Arc::new(Headline {
                title: group_config.title.clone(),
                tagline: group_config.tagline.clone(),
            })
        };

        Ok(Self {
            nodes,
            nodes_per_group,
            group_offsets: [Vec3::new(-x, 0.0, 0.0), Vec3::new(x, 0.0, 0.0)],
            headlines: [headline(Group::Frontend), headline(Group::Backend)],
        })
    }

    /// All nodes, frontend first
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total node count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a validated layout
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in each group
    pub fn nodes_per_group(&self) -> usize {
        self.nodes_per_group
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Look up a node by its label
    pub fn node_by_label(&self, text: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.text == text)
    }

    /// Node at `index` within `group`, reducing the index modulo the group size
    pub fn node_at(&self, group: Group, index: usize) -> Option<&Node> {
        let slot = match group {
            Group::Frontend => 0,
            Group::Backend => 1,
        };
        self.nodes
            .get(slot * self.nodes_per_group + index % self.nodes_per_group.max(1))
    }

    /// World-space origin of a group
    pub fn group_offset(&self, group: Group) -> Vec3 {
        match group {
            Group::Frontend => self.group_offsets[0],
            Group::Backend => self.group_offsets[1],
        }
    }

    /// Group offset plus the node's local offset
    pub fn world_position(&self, node: &Node) -> Vec3 {
        self.group_offset(node.group) + node.local_offset
    }

    /// Overlay copy for a group
    pub fn headline(&self, group: Group) -> &Arc<Headline> {
        match group {
            Group::Frontend => &self.headlines[0],
            Group::Backend => &self.headlines[1],
        }
    }
}
