//! Activation scheduler
//!
//! Owns the [`ActivationState`] and the two periodic timers that mutate it.
//! Nothing else writes activation state: the renderer and hover input only
//! ever read it.
//!
//! Hosts can drive the scheduler two ways:
//! - call [`ActivationScheduler::update`] with a virtual frame delta, or
//! - wire real periodic timers to [`ActivationScheduler::fire_group`] and
//!   [`ActivationScheduler::fire_index`].
//!
//! Both paths go through the same liveness check, so a fire that arrives
//! after [`ActivationScheduler::stop`] never mutates state.
//!
//! Both timers return to the same phase every fire cycle (the lcm of the two
//! periods, 12 s by default). An update spanning many cycles applies all but
//! the last one arithmetically, so a long stall costs the same as a short one.

use std::time::Duration;

use super::state::{ActivationEvent, ActivationState};
use super::timer::PeriodicTimer;
use crate::config::TimingConfig;

/// Two independent periodic timers selecting the active group and index
#[derive(Debug, Clone)]
pub struct ActivationScheduler {
    state: ActivationState,
    group_timer: PeriodicTimer,
    index_timer: PeriodicTimer,
    nodes_per_group: usize,
    fire_cycle: Option<Duration>,
    live: bool,
}

/// Least common multiple of two periods, `None` if it does not fit a `Duration`
fn fire_cycle(a: Duration, b: Duration) -> Option<Duration> {
    let (a, b) = (a.as_nanos(), b.as_nanos());
    let (mut x, mut y) = (a, b);
    while y != 0 {
        (x, y) = (y, x % y);
    }
    let lcm = (a / x).checked_mul(b)?;
    u64::try_from(lcm).ok().map(Duration::from_nanos)
}

impl ActivationScheduler {
    /// Create a stopped scheduler in the initial state `(Frontend, 0)`
    pub fn new(timing: &TimingConfig, nodes_per_group: usize) -> Self {
        let group_timer = PeriodicTimer::new(timing.group_period());
        let index_timer = PeriodicTimer::new(timing.index_period());
        Self {
            state: ActivationState::default(),
            fire_cycle: fire_cycle(group_timer.period(), index_timer.period()),
            group_timer,
            index_timer,
            nodes_per_group: nodes_per_group.max(1),
            live: false,
        }
    }

    /// Start both timers. No-op if already running.
    pub fn start(&mut self) {
        if self.live {
            return;
        }
        self.live = true;
        self.group_timer.start();
        self.index_timer.start();
        log::info!(
            "Activation scheduler started (group every {:?}, index every {:?})",
            self.group_timer.period(),
            self.index_timer.period()
        );
    }

    /// Cancel both timers. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        self.group_timer.stop();
        self.index_timer.stop();
        log::info!("Activation scheduler stopped at {:?}", self.state);
    }

    /// Whether the timers are live
    pub fn is_running(&self) -> bool {
        self.live
    }

    /// Current activation state
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Nodes per group used for index wrap-around
    pub fn nodes_per_group(&self) -> usize {
        self.nodes_per_group
    }

    /// Period after which both timers are back in phase
    pub fn fire_cycle(&self) -> Option<Duration> {
        self.fire_cycle
    }

    /// Advance both timers by `dt` and apply every fire in time order.
    ///
    /// When both timers expire at the same instant the group fire is applied
    /// first. Returns the resulting events, oldest first. Fires inside skipped
    /// whole cycles are reported as at most one event per timer.
    pub fn update(&mut self, dt: Duration) -> Vec<ActivationEvent> {
        let (mut events, mut left) = self.skip_whole_cycles(dt);

        while self.live {
            let next = [self.group_timer.until_next_fire(), self.index_timer.until_next_fire()]
                .into_iter()
                .flatten()
                .min();

            let Some(step) = next.filter(|step| *step <= left) else {
                self.group_timer.advance(left);
                self.index_timer.advance(left);
                break;
            };

            left -= step;
            if self.group_timer.advance(step) > 0 {
                events.extend(self.fire_group());
            }
            if self.index_timer.advance(step) > 0 {
                events.extend(self.fire_index());
            }
        }

        events
    }

    /// Apply all but the last whole fire cycle in `dt` without stepping.
    ///
    /// Over one cycle each timer fires `cycle / period` times whatever its
    /// phase, and both end the cycle with the same time remaining.
    fn skip_whole_cycles(&mut self, dt: Duration) -> (Vec<ActivationEvent>, Duration) {
        let Some(cycle) = self.fire_cycle.filter(|_| self.live) else {
            return (Vec::new(), dt);
        };
        let cycle_nanos = cycle.as_nanos();
        let skipped = (dt.as_nanos() / cycle_nanos).saturating_sub(1);
        if skipped == 0 {
            return (Vec::new(), dt);
        }

        let n = self.nodes_per_group as u128;
        let group_fires = skipped * (cycle_nanos / self.group_timer.period().as_nanos());
        let index_fires = (skipped % n) * (cycle_nanos / self.index_timer.period().as_nanos() % n);
        let steps = usize::try_from(index_fires % n).unwrap_or(0);

        let before = self.state;
        if group_fires % 2 == 1 {
            self.state = self.state.with_group_flipped();
        }
        self.state = self.state.with_index_advanced_by(self.nodes_per_group, steps);
        log::debug!(
            "Skipped {skipped} fire cycles ({group_fires} group fires): {before:?} -> {:?}",
            self.state
        );

        let mut events = Vec::new();
        if before.active_group() != self.state.active_group() {
            events.push(ActivationEvent::GroupChanged {
                from: before.active_group(),
                to: self.state.active_group(),
            });
        }
        if before.active_index() != self.state.active_index() {
            events.push(ActivationEvent::IndexChanged {
                from: before.active_index(),
                to: self.state.active_index(),
            });
        }

        let partial = u64::try_from(dt.as_nanos() % cycle_nanos).unwrap_or(0);
        (events, Duration::from_nanos(partial).saturating_add(cycle))
    }

    /// Group timer callback: flip the active group
    pub fn fire_group(&mut self) -> Option<ActivationEvent> {
        if !self.live {
            log::debug!("Dropping group fire after stop");
            return None;
        }
        let from = self.state.active_group();
        self.state = self.state.with_group_flipped();
        log::debug!("Active group {from} -> {}", self.state.active_group());
        Some(ActivationEvent::GroupChanged {
            from,
            to: self.state.active_group(),
        })
    }

    /// Index timer callback: advance the active index modulo the group size
    pub fn fire_index(&mut self) -> Option<ActivationEvent> {
        if !self.live {
            log::debug!("Dropping index fire after stop");
            return None;
        }
        let from = self.state.active_index();
        self.state = self.state.with_index_advanced(self.nodes_per_group);
        log::debug!("Active index {from} -> {}", self.state.active_index());
        Some(ActivationEvent::IndexChanged {
            from,
            to: self.state.active_index(),
        })
    }
}
