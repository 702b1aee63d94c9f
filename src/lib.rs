//! # Introduction
//!
//! algotty precomputes every step of a classic algorithm run over a fixed
//! sample input, then plays the resulting timeline back in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! AlgorithmId → generator → StepSequence<Snapshot> → PlaybackController → TUI
//! ```
//!
//! 1. [`algorithms`]: deterministic step generators, one per algorithm, each
//!    recording a [`algorithms::Snapshot`] per step.
//! 2. [`timeline`]: the immutable [`timeline::StepSequence`] and the
//!    [`timeline::PlaybackController`] that navigates it manually or on a
//!    speed-scaled frame clock.
//! 3. [`catalog`]: names, complexity notes and search over the library.
//! 4. [`config`]: JSON configuration for timing, presets and startup.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod catalog;
pub mod config;
pub mod error;
pub mod timeline;
pub mod ui;

pub use error::{AlgottyError, Result};
