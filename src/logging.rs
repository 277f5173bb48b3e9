//! Process-wide logging setup
//!
//! Diagnostics go to two sinks: stderr for the console (stdout is reserved
//! for rendered page text) and a fresh per-run file under the log directory.
//! Both sinks share one verbosity filter. The subscriber is installed once
//! at startup and lives for the whole process.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Maps the `-v`/`-q` flags to filter directives.
pub fn filter_directives(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "go2web=info,warn",
        1 => "go2web=debug,info",
        _ => "trace",
    }
}

/// Creates the log directory if needed and opens a uniquely named log file
/// in it. Each run gets its own file.
pub fn create_log_file(log_dir: &Path) -> io::Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)?;
    let path = log_dir.join(format!("{}_log.txt", uuid::Uuid::new_v4()));
    let file = File::create(&path)?;
    Ok((file, path))
}

/// Installs the global tracing subscriber and returns the log file path.
pub fn init(log_dir: &Path, verbose: u8, quiet: bool) -> io::Result<PathBuf> {
    let (log_file, log_path) = create_log_file(log_dir)?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directives(verbose, quiet)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Arc::new(log_file)),
        )
        .init();

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_files_are_unique_per_run() {
        let dir = tempfile::tempdir().unwrap();

        let (_f1, p1) = create_log_file(dir.path()).unwrap();
        let (_f2, p2) = create_log_file(dir.path()).unwrap();

        assert_ne!(p1, p2);
        assert!(p1.exists());
        assert!(p1.file_name().unwrap().to_string_lossy().ends_with("_log.txt"));
    }

    #[test]
    fn test_log_directory_is_created_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");

        let (_file, path) = create_log_file(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_quiet_wins_and_verbosity_escalates() {
        assert_eq!(filter_directives(3, true), "error");
        assert_eq!(filter_directives(0, false), "go2web=info,warn");
        assert_eq!(filter_directives(1, false), "go2web=debug,info");
        assert_eq!(filter_directives(2, false), "trace");
    }
}
