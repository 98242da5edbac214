//! Slide list gesture replay.
//!
//! Plays recorded or hand-written pointer scripts against the core
//! controller and reports what the list would do at every step.

pub mod replay;

pub use replay::{run, Replay, ReplayError, ReplayResult, ReplayScript, Step, StepReport};
