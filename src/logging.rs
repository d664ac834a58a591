//! Diagnostic logging to a file.
//!
//! The terminal belongs to the session, so tracing output only goes to a
//! file, and only when `SUMMARIST_LOG` names one.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "SUMMARIST_LOG";

/// Filter used when `RUST_LOG` is unset: this crate at info, HTTP stack quiet.
const DEFAULT_FILTER: &str = "summarist=info,reqwest=warn,hyper=warn";

/// Per-run log file: `{base}.{timestamp}.{pid}`.
///
/// Runs started in the same second still differ by pid.
pub fn run_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

fn open_run_log(base: &Path) -> std::io::Result<(PathBuf, File)> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = run_log_path(base, timestamp, std::process::id());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    Ok((path, file))
}

/// Initialize tracing if `SUMMARIST_LOG` is set; otherwise a no-op.
pub fn init_tracing() {
    let Some(base) = std::env::var_os(LOG_ENV_VAR).filter(|p| !p.is_empty()) else {
        return;
    };

    let (path, file) = match open_run_log(Path::new(&base)) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open log file: {}", e);
            return;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %path.display(),
        "Logging started"
    );
}
