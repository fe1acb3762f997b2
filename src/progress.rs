// src/progress.rs
use crate::error::Stage;

/// Lightweight progress reporting used by the pipeline stages.
/// Frontends implement this to surface status to users; logging happens
/// independently through `tracing`.
pub trait Progress {
    /// A pipeline stage is starting.
    fn stage(&mut self, _stage: Stage) {}

    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One logical unit completed (e.g., a catalogue page was scraped).
    fn item_done(&mut self, _id: u32) {}

    /// One logical unit was skipped after an error.
    fn item_failed(&mut self, _id: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
