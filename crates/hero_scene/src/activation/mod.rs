//! Activation scheduling
//!
//! Exactly one node is "active" at a time: the node at `active_index` inside
//! `active_group`. Two unrelated periodic timers move that selection. Their
//! fire pattern repeats every lcm of the periods (12 s with the default
//! 4 s / 1.5 s), but the state only repeats once both counters have wrapped
//! too: lcm(2 x 4 s, 3 x 1.5 s) = 72 s.

mod scheduler;
mod state;
mod timer;

pub use scheduler::ActivationScheduler;
pub use state::{ActivationEvent, ActivationState, Group};
pub use timer::PeriodicTimer;
