//! # Portico Title Reactor
//!
//! Keeps the document title in sync with the current route and the app preferences.
//!
//! The reactor subscribes to three signals: the router's current route,
//! `preferences.app.dynamic_title` and `preferences.app.name`. It evaluates once on
//! subscription and again on every change of any of them. While `dynamic_title` is
//! off, evaluation writes nothing at all.
pub mod sink;

use std::sync::{Arc, Weak};

use crate::config::Preferences;
use crate::i18n::Translator;
use crate::kernel::constants::TITLE_SEPARATOR;
use crate::router::{CurrentRoute, Router};
use crate::signal::{Signal, SubscriptionId};

pub use sink::{LogTitleSink, MemoryTitleSink, TitleSink};

struct TitleInputs {
    route: Signal<Option<CurrentRoute>>,
    dynamic_title: Signal<bool>,
    app_name: Signal<String>,
    translator: Arc<Translator>,
    sink: Arc<dyn TitleSink>,
}

impl TitleInputs {
    fn compute(&self) -> Option<String> {
        if !self.dynamic_title.get() {
            return None;
        }
        let app_name = self.app_name.get();
        let route_title = self.route.with(|current| {
            current
                .as_ref()
                .and_then(|r| r.meta.title.clone())
                .filter(|t| !t.is_empty())
        });
        Some(match route_title {
            Some(title) => format!("{}{}{}", self.translator.t(&title), TITLE_SEPARATOR, app_name),
            None => app_name,
        })
    }

    fn run(&self) {
        if let Some(title) = self.compute() {
            log::debug!("Document title -> '{}'", title);
            self.sink.set_title(&title);
        }
    }
}

/// Handle of a subscribed title reactor. Dropping it unsubscribes.
pub struct TitleReactor {
    inputs: Arc<TitleInputs>,
    subscriptions: Vec<SubscriptionId>,
}

impl std::fmt::Debug for TitleReactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleReactor")
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

impl TitleReactor {
    /// Subscribe to the route and preference signals and run once immediately.
    pub fn subscribe(
        router: &Router,
        preferences: &Preferences,
        translator: Arc<Translator>,
        sink: Arc<dyn TitleSink>,
    ) -> Self {
        let inputs = Arc::new(TitleInputs {
            route: router.current(),
            dynamic_title: preferences.app.dynamic_title.clone(),
            app_name: preferences.app.name.clone(),
            translator,
            sink,
        });

        let subscriptions = vec![
            inputs.route.subscribe(rerun(&inputs)),
            inputs.dynamic_title.subscribe(rerun(&inputs)),
            inputs.app_name.subscribe(rerun(&inputs)),
        ];

        inputs.run();
        Self {
            inputs,
            subscriptions,
        }
    }

    /// The title the current inputs produce, or `None` while dynamic titles are off
    pub fn compute(&self) -> Option<String> {
        self.inputs.compute()
    }

    /// Re-run the reactor by hand with the current inputs.
    pub fn evaluate(&self) {
        self.inputs.run();
    }

    /// Unsubscribe from all signals. Further changes write nothing.
    pub fn stop(&mut self) {
        for id in self.subscriptions.drain(..) {
            // Ids are unique across signals; only the owning signal removes it.
            let _ = self.inputs.route.unsubscribe(id)
                || self.inputs.dynamic_title.unsubscribe(id)
                || self.inputs.app_name.unsubscribe(id);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.subscriptions.is_empty()
    }
}

impl Drop for TitleReactor {
    fn drop(&mut self) {
        self.stop();
    }
}

// Callbacks hold a weak reference so the signals never keep the reactor alive.
fn rerun(inputs: &Arc<TitleInputs>) -> impl Fn() + Send + Sync + 'static {
    let weak: Weak<TitleInputs> = Arc::downgrade(inputs);
    move || {
        if let Some(inputs) = weak.upgrade() {
            inputs.run();
        }
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
