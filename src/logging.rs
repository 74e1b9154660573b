use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path prefix.
pub const LOG_ENV: &str = "THESAURUS_LOG";

/// Initialize tracing with file output.
///
/// The TUI owns stdout, so nothing is logged unless a path is given
/// (`explicit`, else `THESAURUS_LOG`). The file is named
/// `{path}.{timestamp}.{pid}` so concurrent instances do not collide.
/// Returns the file actually written to.
pub fn init_tracing(explicit: Option<&Path>) -> Option<PathBuf> {
    let log_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(std::env::var_os(LOG_ENV)?),
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}
