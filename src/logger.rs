use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "air1-prep.log";

/// Routes `tracing` output to `<data_dir>/air1-prep.log`.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout.
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init(data_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(LOG_FILE);
    let file: File = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,air1_prep=debug"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("logging initialized at {}", path.display());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_init_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = init(temp_dir.path()).unwrap();
        assert!(path.exists());
        tracing::info!("Test log message");
        assert!(init(temp_dir.path()).is_ok());
    }
}
