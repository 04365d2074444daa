//! Viewport-driven reveal state for page sections, plus the counters built on it.

pub mod counter;
pub mod set;
pub mod tracker;

pub use counter::{use_animated_counter, CounterRun, TimerSlot, COUNTER_STEPS, COUNTER_TICK_MS};
pub use set::{reveal_class, IntersectionSample, Threshold, ThresholdError, VisibilitySet};
pub use tracker::use_visibility;
