use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "app.log";
pub const DEFAULT_MAX_SIZE_KB: u64 = 1024;
pub const DEFAULT_BACKUP_COUNT: usize = 5;

/// Shared configuration of the process-wide logger.
///
/// `backup_count == 0` is accepted and means "never rotate": the active file
/// grows without bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_file: PathBuf,
    pub max_size_bytes: u64,
    pub backup_count: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            max_size_bytes: DEFAULT_MAX_SIZE_KB * 1024,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl LoggerConfig {
    pub fn new(log_file: impl AsRef<Path>,
               max_size_kb: u64,
               backup_count: usize
    ) -> Self {
        Self::default()
            .log_file(log_file)
            .max_size_kb(max_size_kb)
            .backup_count(backup_count)
    }

    pub fn log_file(mut self, log_file: impl AsRef<Path>) -> Self {
        self.log_file = log_file.as_ref().to_path_buf();
        self
    }

    pub fn max_size_kb(mut self, max_size_kb: u64) -> Self {
        self.max_size_bytes = max_size_kb.saturating_mul(1024);
        self
    }

    pub fn max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    pub fn backup_count(mut self, backup_count: usize) -> Self {
        self.backup_count = backup_count;
        self
    }
}
