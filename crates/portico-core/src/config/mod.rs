//! # Portico Configuration
//!
//! [`AppConfig`] gathers every tunable of the admin shell. It is read from a JSON,
//! YAML or TOML file (chosen by extension) and every field has a default, so an
//! empty file, or no file at all, yields a working configuration.
pub mod error;
pub mod preferences;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::installer::loading::LoadingDirectiveOptions;
use crate::kernel::constants::{
    APP_NAMESPACE, APP_VERSION, ConstantsRegistry, DEFAULT_DISPLAY_NAME, DEFAULT_LOCALE,
    DEFAULT_MOUNT_ANCHOR,
};
use crate::kernel::error::Result;

pub use error::ConfigError;
pub use preferences::{AppPreferences, Preferences};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// `[app]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Display name appended to every document title
    pub name: String,
    /// Derive the document title from the current route
    pub dynamic_title: bool,
    pub locale: String,
    /// Store namespace; derived from name, version and environment when unset
    pub namespace: Option<String>,
    pub mount_anchor: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_DISPLAY_NAME.to_string(),
            dynamic_title: true,
            locale: DEFAULT_LOCALE.to_string(),
            namespace: None,
            mount_anchor: DEFAULT_MOUNT_ANCHOR.to_string(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// `[i18n]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSection {
    /// Directory of `<locale>.json` catalogues; embedded catalogues when unset
    pub locales_dir: Option<PathBuf>,
}

/// `[store]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Directory for file-backed snapshots; in-memory stores when unset
    pub persist_dir: Option<PathBuf>,
}

/// Complete configuration of the admin shell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub loading: LoadingDirectiveOptions,
    /// Entries layered over the built-in constants
    pub constants: BTreeMap<String, String>,
    pub logging: LoggingSection,
    pub i18n: I18nSection,
    pub store: StoreSection,
}

impl AppConfig {
    /// Read and parse a config file; the format follows the extension.
    pub async fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&content, format, path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse config content in the given format. `origin` only labels errors.
    pub fn parse(content: &str, format: ConfigFormat, origin: &Path) -> Result<Self> {
        let parse_error = |reason: String| ConfigError::Parse {
            path: origin.to_path_buf(),
            format: format.extension().to_string(),
            reason,
        };
        let config = match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => {
                // An empty YAML document means "all defaults"
                if content.trim().is_empty() {
                    Self::default()
                } else {
                    serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
                }
            }
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        };
        Ok(config)
    }

    /// Built-in constants with the `[constants]` table layered on top
    pub fn constants(&self) -> ConstantsRegistry {
        ConstantsRegistry::builder()
            .defaults()
            .extend(self.constants.iter().map(|(k, v)| (k.clone(), v.clone())))
            .build()
    }

    /// Store namespace for `env`: the configured one, or `<prefix>-<version>-<env>`.
    pub fn namespace(&self, env: &str) -> String {
        self.app
            .namespace
            .clone()
            .unwrap_or_else(|| default_namespace(env))
    }
}

pub fn default_namespace(env: &str) -> String {
    format!("{}-{}-{}", APP_NAMESPACE, APP_VERSION, env)
}

// Test module declaration
#[cfg(test)]
mod tests;
