use std::fs;
use std::path::{Path, PathBuf};

use crate::LoggerError;

/// Size-based rotation over a numbered backup chain.
///
/// Backups are `<path>.1` (most recent) through `<path>.<backup_count>`
/// (oldest). Anything older is discarded on rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    max_size_bytes: u64,
    backup_count: usize,
}

impl RotationPolicy {
    pub fn new(max_size_bytes: u64, backup_count: usize) -> Self {
        RotationPolicy { max_size_bytes, backup_count }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn backup_count(&self) -> usize {
        self.backup_count
    }

    /// True iff `path` exists and is strictly larger than the size limit.
    /// Always false when no backups are kept.
    pub fn should_rotate(&self, path: &Path) -> bool {
        if self.backup_count == 0 {
            return false;
        }
        match fs::metadata(path) {
            Ok(meta) => meta.len() > self.max_size_bytes,
            Err(_) => false,
        }
    }

    /// Shifts the chain up by one, highest index first so that no file is
    /// overwritten before it has moved. Leaves `path` absent on success.
    pub fn rotate(&self, path: &Path) -> Result<(), LoggerError> {
        for i in (1..=self.backup_count).rev() {
            let source = if i == 1 { path.to_path_buf() } else { backup_path(path, i - 1) };
            let dest = backup_path(path, i);

            if !source.exists() {
                continue;
            }
            // rename() does not replace an existing file on every platform
            if i == self.backup_count && dest.exists() {
                fs::remove_file(&dest)
                    .map_err(|source| LoggerError::Rotation { path: dest.clone(), source })?;
            }
            fs::rename(&source, &dest)
                .map_err(|err| LoggerError::Rotation { path: source.clone(), source: err })?;
        }
        Ok(())
    }
}

/// `app.log` + 2 -> `app.log.2`
pub fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}
