// src/progress.rs
/// Lightweight progress reporting for a run over many spec files.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of specs.
    fn begin(&mut self, _total: usize) {}

    /// One spec finished; `label` is usually the file name.
    fn item_done(&mut self, _index: usize, _label: &str, _users: u64) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints `[i/n] label: users` lines to stderr.
#[derive(Default)]
pub struct StderrProgress {
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, index: usize, label: &str, users: u64) {
        eprintln!("[{}/{}] {label}: {users}", index + 1, self.total);
    }
}
