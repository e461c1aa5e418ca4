//! The hero scene
//!
//! Ties the clock, the activation scheduler and the hover tracker to the
//! static layout. Every call runs to completion on the host's loop thread;
//! there is no interior locking.
//!
//! Per tick:
//! 1. advance the frame clock (negative deltas clamp to zero)
//! 2. spin every node by the fixed rotation step
//! 3. advance the activation timers by the frame delta
//! 4. build and publish an immutable [`FrameSnapshot`]
//!
//! Activation events queue up until [`HeroScene::drain_events`]; hosts that
//! never drain only keep the newest [`HeroScene::MAX_PENDING_EVENTS`].

use std::collections::VecDeque;
use std::time::Duration;

use super::node::{NodeId, RotationState, SceneLayout};
use super::renderer::RendererAdapter;
use super::snapshot::{active_motion, emissive_intensity, FrameSnapshot, NodeSnapshot};
use super::SceneError;
use crate::activation::{ActivationEvent, ActivationScheduler, ActivationState};
use crate::config::{AnimationConfig, HeroConfig};
use crate::foundation::time::{FrameClock, FrameTime};
use crate::input::{HoverState, HoverTracker, PointerEvent};

/// Animated two-group hero scene
pub struct HeroScene {
    layout: SceneLayout,
    animation: AnimationConfig,
    clock: FrameClock,
    scheduler: ActivationScheduler,
    hover: HoverTracker,
    rotations: Vec<RotationState>,
    events: VecDeque<ActivationEvent>,
    latest: Option<FrameSnapshot>,
}

impl HeroScene {
    /// Undrained activation events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;

    /// Build a scene from config. Timers start stopped; call [`Self::start`].
    pub fn new(config: &HeroConfig) -> Result<Self, SceneError> {
        let layout = SceneLayout::from_config(config)?;
        let scheduler = ActivationScheduler::new(&config.timing, layout.nodes_per_group());
        let node_count = layout.len();

        log::info!(
            "Hero scene created: {} nodes ({} per group)",
            node_count,
            layout.nodes_per_group()
        );

        Ok(Self {
            layout,
            animation: config.animation.clone(),
            clock: FrameClock::new(),
            scheduler,
            hover: HoverTracker::new(node_count),
            rotations: vec![RotationState::default(); node_count],
            events: VecDeque::new(),
            latest: None,
        })
    }

    /// Start the activation timers (idempotent)
    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Stop the activation timers (idempotent). Rotation keeps running.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Whether the activation timers are running
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Advance one frame and return its snapshot
    pub fn tick(&mut self, raw_delta: f32) -> FrameSnapshot {
        let time = self.clock.tick(raw_delta);

        for rotation in &mut self.rotations {
            rotation.advance(self.animation.rotation_step);
        }

        let dt = Duration::try_from_secs_f32(time.delta).unwrap_or_else(|_| {
            log::warn!("Frame delta {}s out of range, skipping timer update", time.delta);
            Duration::ZERO
        });
        self.events.extend(self.scheduler.update(dt));
        if self.events.len() > Self::MAX_PENDING_EVENTS {
            let dropped = self.events.len() - Self::MAX_PENDING_EVENTS;
            self.events.drain(..dropped);
            log::trace!("Dropped {dropped} undrained activation events");
        }

        let snapshot = self.build_snapshot(time);
        self.latest = Some(snapshot.clone());
        snapshot
    }

    /// Advance one frame and hand the snapshot to `renderer`
    pub fn render_frame(&mut self, raw_delta: f32, renderer: &mut dyn RendererAdapter) {
        let snapshot = self.tick(raw_delta);
        renderer.submit(&snapshot);
    }

    fn build_snapshot(&self, time: FrameTime) -> FrameSnapshot {
        let activation = self.scheduler.state();
        let hover = self.hover.state();
        let per_group = self.layout.nodes_per_group();

        let nodes = self
            .layout
            .nodes()
            .iter()
            .zip(&self.rotations)
            .map(|(node, rotation)| {
                let active = activation.is_active(node.group, node.index_in_group, per_group);
                let hovered = hover.is_hovered(node.id);
                let (tilt_x, scale) = if active {
                    active_motion(&self.animation, time.elapsed)
                } else {
                    (0.0, 1.0)
                };

                NodeSnapshot {
                    id: node.id,
                    world_position: self.layout.world_position(node),
                    angle_y: rotation.angle_y,
                    tilt_x,
                    scale,
                    color: node.color,
                    glow_color: node.glow_color,
                    emissive_intensity: emissive_intensity(&self.animation, active, hovered),
                    active,
                    hovered,
                }
            })
            .collect();

        FrameSnapshot::new(
            time,
            activation,
            self.layout.headline(activation.active_group()).clone(),
            nodes,
        )
    }

    /// Apply a pointer event. Returns `false` for unknown nodes.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.hover.handle(event)
    }

    /// Pointer entered a node
    pub fn on_pointer_enter(&mut self, id: NodeId) -> bool {
        self.hover.on_pointer_enter(id)
    }

    /// Pointer left a node
    pub fn on_pointer_exit(&mut self, id: NodeId) -> bool {
        self.hover.on_pointer_exit(id)
    }

    /// Take every activation change since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<ActivationEvent> {
        self.events.drain(..).collect()
    }

    /// Snapshot of the most recent tick
    pub fn latest_snapshot(&self) -> Option<&FrameSnapshot> {
        self.latest.as_ref()
    }

    /// Current activation state
    pub fn activation(&self) -> ActivationState {
        self.scheduler.state()
    }

    /// Current hover state
    pub fn hover_state(&self) -> &HoverState {
        self.hover.state()
    }

    /// The node currently emphasized by the timers
    pub fn active_node(&self) -> Option<NodeId> {
        let state = self.scheduler.state();
        self.layout
            .node_at(state.active_group(), state.active_index())
            .map(|node| node.id)
    }

    /// Static topology
    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Accumulated Y rotation of a node
    pub fn angle_y(&self, id: NodeId) -> Option<f32> {
        self.rotations.get(id.0).map(|rotation| rotation.angle_y)
    }

    /// Frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Stop the timers, then discard the scene
    pub fn teardown(mut self) {
        self.stop();
        log::info!("Hero scene torn down after {} frames", self.clock.frame_count());
    }
}

impl Drop for HeroScene {
    fn drop(&mut self) {
        self.scheduler.stop();
    }
}
