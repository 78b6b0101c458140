use std::path::PathBuf;

/// Outcome of one fix-imports run.
#[derive(Debug, Clone)]
pub struct FixResult {
    /// Files whose content changed and were written back, in visit order.
    pub rewritten: Vec<PathBuf>,
    /// Number of eligible source files read.
    pub files_scanned: usize,
}
