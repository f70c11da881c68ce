use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Logging stays off without it so a host
/// TUI's display is never corrupted by stray output.
const LOG_PATH_ENV: &str = "WELLNESS_LOG";

/// Initialize tracing from the environment.
///
/// Set `WELLNESS_LOG` to a file path to enable logging; the filter comes
/// from `RUST_LOG` and defaults to `info`. Failure to open the log file is
/// reported on stderr and logging stays off; a broken log path should not
/// take the host application down.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    if let Err(err) = init_tracing_to(Path::new(&log_path)) {
        eprintln!("Warning: failed to set up log file '{log_path}': {err}");
    }
}

/// Installs an env-filtered file subscriber writing next to `path`.
///
/// The actual file is `{path}.{timestamp}.{pid}` so simultaneous instances
/// never interleave writes in one file.
pub fn init_tracing_to(path: &Path) -> std::io::Result<()> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", path.display(), timestamp, pid);
    let file = std::fs::File::create(unique_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(())
}
