// src/progress.rs
/// Lightweight progress reporting for the scrape/generate run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout.
pub struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}
