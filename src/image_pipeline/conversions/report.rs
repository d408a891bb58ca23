use std::path::PathBuf;

/// A buffer file the batch could not convert
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(source, destination)` pairs in processing order
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
