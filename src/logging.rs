//! # File Logging
//!
//! The log lives at `<user-cache-dir>/glow/glow.log` and is opened in append
//! mode. Any failure along the way (no cache dir, directory not creatable,
//! file not openable) silently disables logging: the menu must run either way.
//!
//! The file handle is shared between the global logger and a [`LogGuard`].
//! Closing the guard flushes and closes the file exactly once; anything logged
//! afterwards is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::core::config::APP_DIR;

pub const LOG_FILE_NAME: &str = "glow.log";

/// A log file that can be closed while the logger still holds a handle.
#[derive(Clone)]
pub struct SharedLogFile {
    file: Arc<Mutex<Option<File>>>,
}

impl SharedLogFile {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(Some(file))),
        }
    }

    fn close(&self) -> io::Result<()> {
        let taken = self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match taken {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }

    fn is_open(&self) -> bool {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Write for SharedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.lock().unwrap_or_else(PoisonError::into_inner).as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.lock().unwrap_or_else(PoisonError::into_inner).as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Scoped owner of the log file. Closes it on drop if not closed before.
#[must_use = "dropping the guard closes the log file"]
pub struct LogGuard {
    file: Option<SharedLogFile>,
}

impl LogGuard {
    /// A guard with nothing to close, used when logging is disabled.
    pub fn noop() -> Self {
        Self { file: None }
    }

    pub fn is_active(&self) -> bool {
        self.file.as_ref().is_some_and(SharedLogFile::is_open)
    }

    /// Flush and close the file. Later calls do nothing.
    pub fn close(&mut self) -> io::Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        log::logger().flush();
        file.close()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Returns `<user-cache-dir>/glow/glow.log`.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| log_file_path_in(&dir))
}

pub fn log_file_path_in(cache_dir: &Path) -> PathBuf {
    cache_dir.join(APP_DIR).join(LOG_FILE_NAME)
}

/// Create the parent directory and open the file for appending.
pub fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Route the `log` facade into the cache-dir log file.
///
/// Never fails: when the file cannot be opened the returned guard is a no-op
/// and log records are discarded.
pub fn setup_log(level: LevelFilter) -> LogGuard {
    match log_file_path() {
        Some(path) => setup_log_at(&path, level),
        None => LogGuard::noop(),
    }
}

pub fn setup_log_at(path: &Path, level: LevelFilter) -> LogGuard {
    let Some(file) = open_log_file(path) else {
        return LogGuard::noop();
    };
    let shared = SharedLogFile::new(file);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    // Only one global logger per process; a second init keeps the first.
    let _ = WriteLogger::init(level, log_config, shared.clone());

    LogGuard { file: Some(shared) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_layout() {
        let path = log_file_path_in(Path::new("/tmp/cache"));
        assert_eq!(path, PathBuf::from("/tmp/cache/glow/glow.log"));
    }

    #[test]
    fn test_open_creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path_in(dir.path());

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_unwritable_directory_gives_noop_guard() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the log directory should be
        let blocker = dir.path().join("glow");
        fs::write(&blocker, "not a directory").unwrap();

        let mut guard = setup_log_at(&log_file_path_in(dir.path()), LevelFilter::Debug);
        assert!(!guard.is_active());
        assert!(guard.close().is_ok());
        // Logging still works as a call, it just goes nowhere
        log::info!("discarded");
    }

    #[test]
    fn test_guard_closes_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path_in(dir.path());
        let mut guard = setup_log_at(&path, LevelFilter::Debug);
        assert!(guard.is_active());

        guard.close().unwrap();
        assert!(!guard.is_active());
        guard.close().unwrap();
    }

    #[test]
    fn test_writes_after_close_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("direct.log");
        let mut shared = SharedLogFile::new(open_log_file(&path).unwrap());

        writeln!(shared, "kept").unwrap();
        shared.close().unwrap();
        writeln!(shared, "dropped").unwrap();
        assert!(!shared.is_open());

        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\n");
    }

    #[test]
    fn test_noop_guard() {
        let mut guard = LogGuard::noop();
        assert!(!guard.is_active());
        assert!(guard.close().is_ok());
    }
}
