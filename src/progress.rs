// src/progress.rs
use crate::data::ExtractionResult;

/// Lightweight progress reporting for a scrape run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of ids that will be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// About to pause + fetch the id on table row `row`.
    fn item_started(&mut self, _row: usize, _video_id: &str) {}

    /// Result for table row `row` is in.
    fn item_done(&mut self, _row: usize, _result: &ExtractionResult) {}

    /// Called at the end; `stopped` when the run was cut short.
    fn finish(&mut self, _stopped: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
