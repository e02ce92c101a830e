// src/progress.rs
/// Progress reporting for a crawl. Frontends implement this to surface
/// status; logging happens regardless.
pub trait Progress {
    /// Called once the listing is parsed, with the number of dated papers.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A paper was skipped because the sheet already has it.
    fn item_skipped(&mut self, _link: &str) {}

    /// A paper was recorded.
    fn item_done(&mut self, _link: &str, _title: &str) {}

    /// A paper could not be processed this run.
    fn item_failed(&mut self, _link: &str, _reason: &str) {}

    /// Called at the end of the iteration, early exit included.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
