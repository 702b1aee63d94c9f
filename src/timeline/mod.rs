//! Step-timeline playback engine.
//!
//! - [`sequence`]: the immutable, non-empty [`StepSequence`] of recorded steps
//! - [`scheduler`]: the seam to whatever delivers frame ticks
//! - [`controller`]: the [`PlaybackController`] state machine

pub mod controller;
pub mod scheduler;
pub mod sequence;

pub use controller::{
    is_valid_speed, IndexListener, PlaybackController, PlaybackState, BASE_INTERVAL,
    DEFAULT_SPEED,
};
pub use scheduler::{FrameClock, Registration, Scheduler};
pub use sequence::{SequenceError, Step, StepSequence};
