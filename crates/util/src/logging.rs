//! Log file location for the tracing subscriber.
//!
//! The TUI owns the terminal, so diagnostics go to an append-only file
//! instead of stdout/stderr.

use std::fs::{File, OpenOptions, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};

use crate::resolve_app_file;

/// Environment variable used to override the log file path.
pub const LOG_PATH_ENV: &str = "HERBARIUM_LOG_PATH";

/// Default log filename inside the config directory.
pub const LOG_FILE_NAME: &str = "herbarium.log";

/// Pick the log file: an explicit path first, then the env override, then the
/// config directory default.
pub fn resolve_log_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => resolve_app_file(LOG_PATH_ENV, LOG_FILE_NAME),
    }
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_path_beats_environment() {
        temp_env::with_var(LOG_PATH_ENV, Some("/from/env.log"), || {
            assert_eq!(resolve_log_path(Some(Path::new("/cli.log"))), PathBuf::from("/cli.log"));
            assert_eq!(resolve_log_path(None), PathBuf::from("/from/env.log"));
        });
    }

    #[test]
    fn open_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join(LOG_FILE_NAME);

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
