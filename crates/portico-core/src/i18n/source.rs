use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::i18n::error::I18nError;
use crate::kernel::error::Result;

/// Provides the raw message tree of a locale
#[async_trait]
pub trait LocaleSource: Send + Sync {
    async fn load(&self, locale: &str) -> Result<Value>;
}

const EMBEDDED: &[(&str, &str)] = &[
    ("zh-CN", include_str!("../../locales/zh-CN.json")),
    ("en-US", include_str!("../../locales/en-US.json")),
];

/// Message catalogues compiled into the binary
#[derive(Debug, Default)]
pub struct EmbeddedLocales;

impl EmbeddedLocales {
    pub fn locales() -> Vec<&'static str> {
        EMBEDDED.iter().map(|(l, _)| *l).collect()
    }
}

#[async_trait]
impl LocaleSource for EmbeddedLocales {
    async fn load(&self, locale: &str) -> Result<Value> {
        let (_, raw) = EMBEDDED
            .iter()
            .find(|(l, _)| *l == locale)
            .ok_or_else(|| I18nError::LocaleNotFound {
                locale: locale.to_string(),
            })?;
        parse(locale, raw)
    }
}

/// Reads `<dir>/<locale>.json`
#[derive(Debug, Clone)]
pub struct DirLocaleSource {
    dir: PathBuf,
}

impl DirLocaleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl LocaleSource for DirLocaleSource {
    async fn load(&self, locale: &str) -> Result<Value> {
        let path = self.dir.join(format!("{}.json", locale));
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(I18nError::LocaleNotFound {
                    locale: locale.to_string(),
                }
                .into());
            }
            Err(source) => return Err(I18nError::Io { path, source }.into()),
        };
        parse(locale, &raw)
    }
}

fn parse(locale: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| {
        I18nError::InvalidMessages {
            locale: locale.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
