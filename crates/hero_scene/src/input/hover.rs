//! Hover tracking
//!
//! Per-node hover flags driven by pointer enter/exit events. Unlike activation
//! there is no exclusivity: any number of nodes can be hovered at once.

use crate::scene::NodeId;

/// Pointer event targeting one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved onto the node
    Enter(NodeId),
    /// Pointer left the node
    Exit(NodeId),
}

impl PointerEvent {
    /// Node the event targets
    pub const fn node(self) -> NodeId {
        match self {
            Self::Enter(id) | Self::Exit(id) => id,
        }
    }
}

/// Hover flags for a fixed set of nodes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Vec<bool>,
}

impl HoverState {
    /// All nodes un-hovered
    pub fn new(node_count: usize) -> Self {
        Self {
            hovered: vec![false; node_count],
        }
    }

    /// Whether `id` is hovered. Unknown ids are never hovered.
    pub fn is_hovered(&self, id: NodeId) -> bool {
        self.hovered.get(id.0).copied().unwrap_or(false)
    }

    /// Whether `id` belongs to this state
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.hovered.len()
    }

    /// Number of hovered nodes
    pub fn hovered_count(&self) -> usize {
        self.hovered.iter().filter(|&&h| h).count()
    }

    /// Pure transition: the state after `event`.
    ///
    /// Events for unknown nodes leave the state unchanged.
    #[must_use]
    pub fn apply(&self, event: PointerEvent) -> Self {
        let mut next = self.clone();
        if let Some(flag) = next.hovered.get_mut(event.node().0) {
            *flag = matches!(event, PointerEvent::Enter(_));
        }
        next
    }
}

/// Owns the hover state and applies pointer events to it
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    /// Tracker for `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            state: HoverState::new(node_count),
        }
    }

    /// Current hover state
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Apply a pointer event. Returns `false` if the target node is unknown.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        if !self.state.contains(event.node()) {
            log::warn!("Ignoring {event:?}: no such node");
            return false;
        }
        self.state = self.state.apply(event);
        true
    }

    /// Pointer entered `id`
    pub fn on_pointer_enter(&mut self, id: NodeId) -> bool {
        self.handle(PointerEvent::Enter(id))
    }

    /// Pointer left `id`
    pub fn on_pointer_exit(&mut self, id: NodeId) -> bool {
        self.handle(PointerEvent::Exit(id))
    }
}
