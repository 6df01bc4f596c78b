use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{LoggerConfig, LoggerError, RotationPolicy};

/// Destination the consumer thread drains records into.
///
/// Only the single consumer ever calls `write`, so implementations need no
/// internal locking.
pub trait LogTarget {
    fn write(&mut self,
             line: &str
    ) -> Result<(), LoggerError>;
}

/// Appends lines to a file, rotating it first when it has grown too large.
///
/// The file is opened in append mode and closed again for every line.
pub struct LogSink {
    path: PathBuf,
    policy: RotationPolicy,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>,
               policy: RotationPolicy
    ) -> Self {
        LogSink {
            path: path.as_ref().to_path_buf(),
            policy,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(&config.log_file, RotationPolicy::new(config.max_size_bytes, config.backup_count))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }
}

impl LogTarget for LogSink {
    fn write(&mut self,
             line: &str
    ) -> Result<(), LoggerError> {
        if self.policy.should_rotate(&self.path) {
            // a failed rotation must not cost us the record
            if let Err(err) = self.policy.rotate(&self.path) {
                eprintln!("Failed to rotate log file: {}", err);
            }
        }

        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}
