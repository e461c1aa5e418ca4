//! Activation state: which group is emphasized and which index inside it

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two thematic node groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Left-hand group, active first
    Frontend,
    /// Right-hand group
    Backend,
}

impl Group {
    /// Both groups in layout order
    pub const ALL: [Self; 2] = [Self::Frontend, Self::Backend];

    /// The other group
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Frontend => Self::Backend,
            Self::Backend => Self::Frontend,
        }
    }

    /// Lowercase name, matching the config keys
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scene-global activation singleton.
///
/// Values handed out by the scheduler are copies; the live state only moves
/// through [`ActivationScheduler`](super::ActivationScheduler) fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivationState {
    active_group: Group,
    active_index: usize,
}

impl Default for ActivationState {
    fn default() -> Self {
        Self {
            active_group: Group::Frontend,
            active_index: 0,
        }
    }
}

impl ActivationState {
    /// A state with the given group and index
    pub const fn new(active_group: Group, active_index: usize) -> Self {
        Self {
            active_group,
            active_index,
        }
    }

    /// Group whose nodes can be active
    pub const fn active_group(&self) -> Group {
        self.active_group
    }

    /// Index of the active node inside the active group
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether the node at `(group, index)` is the active one.
    ///
    /// `active_index` is reduced modulo `nodes_per_group` so a stale or
    /// oversized index still selects exactly one node.
    pub fn is_active(&self, group: Group, index: usize, nodes_per_group: usize) -> bool {
        group == self.active_group && index == self.active_index % nodes_per_group.max(1)
    }

    /// State after a group timer fire
    #[must_use]
    pub const fn with_group_flipped(self) -> Self {
        Self {
            active_group: self.active_group.toggled(),
            active_index: self.active_index,
        }
    }

    /// State after an index timer fire
    #[must_use]
    pub fn with_index_advanced(self, nodes_per_group: usize) -> Self {
        self.with_index_advanced_by(nodes_per_group, 1)
    }

    /// State after `steps` index timer fires
    #[must_use]
    pub fn with_index_advanced_by(self, nodes_per_group: usize, steps: usize) -> Self {
        let n = nodes_per_group.max(1);
        Self {
            active_group: self.active_group,
            active_index: (self.active_index % n + steps % n) % n,
        }
    }
}

/// A change produced by one timer fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivationEvent {
    /// The group timer fired
    GroupChanged {
        /// Previously active group
        from: Group,
        /// Newly active group
        to: Group,
    },
    /// The index timer fired
    IndexChanged {
        /// Previous index
        from: usize,
        /// New index
        to: usize,
    },
}
