//! Process-wide constants and the [`ConstantsRegistry`] of named URLs and asset paths.
use std::collections::BTreeMap;

use crate::kernel::error::Result;
use crate::router::error::RouterError;

/// Application name
pub const APP_NAME: &str = "Portico";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of the default store namespace
pub const APP_NAMESPACE: &str = "portico-web-antd";

/// DOM anchor the application mounts into
pub const DEFAULT_MOUNT_ANCHOR: &str = "#app";

/// Default display name used for the document title
pub const DEFAULT_DISPLAY_NAME: &str = "Vben Admin";

/// Default UI locale
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Separator between the route title and the application name
pub const TITLE_SEPARATOR: &str = " - ";

// Registry keys referenced by route modules and views
pub const GITHUB_URL: &str = "GITHUB_URL";
pub const DOC_URL: &str = "DOC_URL";
pub const LOCAL_DOC_URL: &str = "LOCAL_DOC_URL";
pub const LOCAL_PROJECT_URL: &str = "LOCAL_PROJECT_URL";
pub const LOGO_URL: &str = "LOGO_URL";
pub const PREVIEW_URL: &str = "PREVIEW_URL";
pub const SUBJECT_MANAGEMENT_URL: &str = "SUBJECT_MANAGEMENT_URL";
pub const PROJECT_MANAGEMENT_URL: &str = "PROJECT_MANAGEMENT_URL";
pub const ANT_PREVIEW_URL: &str = "ANT_PREVIEW_URL";

const DEFAULTS: &[(&str, &str)] = &[
    (GITHUB_URL, "https://github.com/TianBa-SCP035"),
    (DOC_URL, "https://doc.vben.pro"),
    (LOCAL_DOC_URL, "/docs"),
    (LOCAL_PROJECT_URL, "/projects"),
    (LOGO_URL, "/favicon.ico"),
    (PREVIEW_URL, "https://www.vben.pro"),
    (SUBJECT_MANAGEMENT_URL, "http://172.16.1.141:10111/"),
    (PROJECT_MANAGEMENT_URL, "https://pm.biocytogen.com.cn/"),
    (ANT_PREVIEW_URL, "https://ant.vben.pro"),
];

/// Immutable name -> URL/path map shared by route modules and views.
///
/// Built once through [`ConstantsRegistryBuilder`] and then shared behind an `Arc`.
/// The registry knows nothing about who reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantsRegistry {
    values: BTreeMap<String, String>,
}

impl ConstantsRegistry {
    /// Start an empty registry
    pub fn builder() -> ConstantsRegistryBuilder {
        ConstantsRegistryBuilder::default()
    }

    /// Registry holding only the built-in defaults
    pub fn with_defaults() -> Self {
        Self::builder().defaults().build()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a missing entry is a configuration error.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| {
            RouterError::MissingConstant {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder for [`ConstantsRegistry`]. Later entries override earlier ones.
#[derive(Debug, Default)]
pub struct ConstantsRegistryBuilder {
    values: BTreeMap<String, String>,
}

impl ConstantsRegistryBuilder {
    /// Add the built-in defaults
    pub fn defaults(mut self) -> Self {
        for (name, value) in DEFAULTS {
            self.values.insert((*name).to_string(), (*value).to_string());
        }
        self
    }

    pub fn insert(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Layer a set of overrides (e.g. the `[constants]` config table)
    pub fn extend<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in entries {
            self.values.insert(k.into(), v.into());
        }
        self
    }

    pub fn build(self) -> ConstantsRegistry {
        ConstantsRegistry {
            values: self.values,
        }
    }
}
