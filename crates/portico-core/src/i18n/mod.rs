//! # Portico Internationalization
//!
//! Loads the message catalogue of one locale through a [`LocaleSource`] and
//! exposes the `t(key)` lookup used by route titles and views.
pub mod error;
pub mod source;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;

pub use error::I18nError;
pub use source::{DirLocaleSource, EmbeddedLocales, LocaleSource};

/// Flattened message catalogue of a single locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    locale: String,
    messages: HashMap<String, String>,
}

impl Translator {
    /// Build from a nested JSON object; nested keys are joined with `.`.
    pub fn from_json(locale: &str, messages: &Value) -> Result<Self> {
        let Value::Object(root) = messages else {
            return Err(I18nError::InvalidMessages {
                locale: locale.to_string(),
                reason: "top level must be an object".to_string(),
            }
            .into());
        };
        let mut flat = HashMap::new();
        for (key, value) in root {
            flatten(key.clone(), value, &mut flat);
        }
        Ok(Self {
            locale: locale.to_string(),
            messages: flat,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Message for `key`, or the key itself when there is none.
    ///
    /// Literal titles therefore pass through unchanged.
    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten(prefix: String, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(format!("{}.{}", prefix, key), nested, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}

/// Load `locale` from `source` and attach the translator to the instance.
pub async fn setup_i18n(
    app: &mut AppInstance,
    source: &dyn LocaleSource,
    locale: &str,
) -> Result<Arc<Translator>> {
    let messages = source.load(locale).await?;
    let translator = Arc::new(Translator::from_json(locale, &messages)?);
    log::info!(
        "I18n ready: locale '{}' with {} messages",
        translator.locale(),
        translator.len()
    );
    app.set_translator(Arc::clone(&translator));
    Ok(translator)
}

// Test module declaration
#[cfg(test)]
mod tests;
