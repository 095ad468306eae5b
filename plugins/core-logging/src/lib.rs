//! Process-wide logging for Portico.
//!
//! The library crates only talk to the `log` facade. This crate installs a
//! `tracing` subscriber and bridges `log` records into it, so one filter governs
//! both. `RUST_LOG` wins over the configured level.
use portico_core::config::LoggingSection;
use portico_core::kernel::error::{Error as KernelError, Result as KernelResult};
use tracing_subscriber::EnvFilter;

/// Name reported in startup logs
pub const PLUGIN_NAME: &str = "core-logging";

/// Installs the global subscriber described by a [`LoggingSection`].
#[derive(Debug, Clone, Default)]
pub struct LoggingPlugin {
    settings: LoggingSection,
}

impl LoggingPlugin {
    pub fn new(settings: LoggingSection) -> Self {
        Self { settings }
    }

    /// Override the configured level, e.g. from a command-line flag
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.settings.level = level.into();
        self
    }

    pub fn settings(&self) -> &LoggingSection {
        &self.settings
    }

    /// Filter from `RUST_LOG` if set and valid, otherwise from the configured level.
    pub fn filter(&self) -> KernelResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        filter_for_level(&self.settings.level)
    }

    /// Install the subscriber and the `log` bridge. Fails if either is already set.
    pub fn init(&self) -> KernelResult<()> {
        let filter = self.filter()?;
        tracing_log::LogTracer::init()
            .map_err(|e| KernelError::from(format!("Failed to bridge log records: {}", e)))?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true);
        let installed = if self.settings.json {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };
        installed.map_err(|e| {
            KernelError::from(format!("Failed to install tracing subscriber: {}", e))
        })?;

        log::debug!(
            "{} initialized (level '{}', json: {})",
            PLUGIN_NAME,
            self.settings.level,
            self.settings.json
        );
        Ok(())
    }
}

fn filter_for_level(level: &str) -> KernelResult<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| format!("Invalid log level '{}': {}", level, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directives_parse() {
        for level in ["info", "debug", "portico_core=trace,warn"] {
            assert!(filter_for_level(level).is_ok(), "level {:?} should parse", level);
        }
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = filter_for_level("portico_core=notalevel").unwrap_err();
        assert!(matches!(err, KernelError::Other(ref msg) if msg.contains("Invalid log level")));
        assert_eq!(err.class(), portico_core::kernel::error::ErrorClass::Runtime);
    }

    #[test]
    fn test_with_level_overrides_settings() {
        let plugin = LoggingPlugin::default().with_level("trace");
        assert_eq!(plugin.settings().level, "trace");
        assert!(!plugin.settings().json);
    }
}
