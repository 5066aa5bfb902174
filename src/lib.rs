//! # Introduction
//!
//! sortty records every state-changing operation of a sorting algorithm as a
//! snapshot of the array, then plays the snapshots back as an animation in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Text → Parser → Vec<i64> → Step recorder → StepSequence → Playback → TUI
//! ```
//!
//! 1. [`input`]: turns comma separated text (or a text file) into integers.
//! 2. [`steps`]: ten instrumented algorithms, each producing a
//!    [`steps::StepSequence`] of `(snapshot, highlight)` pairs.
//! 3. [`playback`]: a play/pause/step state machine over a sequence, driven
//!    by an injectable [`playback::TickSource`].
//! 4. [`config`]: constants and command-line configuration.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, insertion, selection, merge, quick, heap, counting, radix, shell
//! and bucket sort. Counting, radix and bucket sort index auxiliary storage
//! by value and only accept values in `0..=max_value`.

pub mod config;
pub mod input;
pub mod playback;
pub mod steps;
pub mod ui;

pub use input::{parse, ParseError};
pub use steps::{record, Algorithm, RecordError, StepSequence};
