use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `<log_dir>/autoflow.log`.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout or
/// stderr. Returns the log path, or `None` if the file could not be opened,
/// in which case logging stays off.
pub fn init_logging(log_dir: &Path, filter: &str) -> Option<PathBuf> {
    std::fs::create_dir_all(log_dir).ok()?;
    let log_path = log_dir.join("autoflow.log");
    let file = OpenOptions::new().append(true).create(true).open(&log_path).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&log_path, std::fs::Permissions::from_mode(0o600));
    }

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false),
    );
    tracing::subscriber::set_global_default(subscriber).ok()?;

    tracing::info!(path = %log_path.display(), "logging initialized");
    Some(log_path)
}
