use crate::config::AppConfig;
use crate::signal::Signal;

/// Application-wide preferences read by the title reactor
#[derive(Debug, Clone)]
pub struct AppPreferences {
    pub name: Signal<String>,
    pub dynamic_title: Signal<bool>,
    pub locale: Signal<String>,
}

/// Reactive user preferences. Clones share the same signals.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub app: AppPreferences,
}

impl Preferences {
    pub fn new(name: impl Into<String>, dynamic_title: bool) -> Self {
        Self {
            app: AppPreferences {
                name: Signal::new(name.into()),
                dynamic_title: Signal::new(dynamic_title),
                locale: Signal::new(crate::kernel::constants::DEFAULT_LOCALE.to_string()),
            },
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let prefs = Self::new(config.app.name.clone(), config.app.dynamic_title);
        prefs.app.locale.set(config.app.locale.clone());
        prefs
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
