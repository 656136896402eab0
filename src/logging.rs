//! Diagnostic logging
//!
//! Tracing output goes to `pocketbook.log` in the data directory so it never
//! draws over the TUI. The filter comes from `POCKETBOOK_LOG` when set,
//! otherwise from `settings.log_level`.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{PocketbookPaths, Settings};
use crate::error::{PocketbookError, PocketbookResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "POCKETBOOK_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter from the environment or the configured level
pub fn build_filter(settings: &Settings) -> PocketbookResult<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.log_level).map_err(|e| {
            PocketbookError::Config(format!("Invalid log level '{}': {}", settings.log_level, e))
        }),
    }
}

/// Install the global file subscriber; later calls are no-ops
pub fn init_tracing(paths: &PocketbookPaths, settings: &Settings) -> PocketbookResult<()> {
    if TRACING_INIT.is_completed() {
        return Ok(());
    }

    let filter = build_filter(settings)?;
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| PocketbookError::Io(format!("Failed to open log file: {}", e)))?;

    TRACING_INIT.call_once(|| {
        // Another subscriber may already be installed (tests); keep it
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_level_is_config_error() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        let settings = Settings {
            log_level: "pocketbook=verbose".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            build_filter(&settings),
            Err(PocketbookError::Config(_))
        ));
    }

    #[test]
    fn test_init_creates_log_file_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().join("data"));
        let settings = Settings::default();

        init_tracing(&paths, &settings).unwrap();
        init_tracing(&paths, &settings).unwrap();
        assert!(paths.log_file().exists());
    }
}
