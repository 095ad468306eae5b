//! # Portico Signals
//!
//! A [`Signal`] is a shared, observable value. Subscribers register a callback
//! and receive a [`SubscriptionId`]; every [`Signal::set`] that actually changes
//! the value invokes all callbacks synchronously, in registration order.
//!
//! Callbacks run outside the signal's internal locks, so a callback may read
//! this signal (or any other) while it is being notified.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Identifier handed out by [`Signal::subscribe`]
pub type SubscriptionId = u64;

/// Callback invoked on every change of a signal
pub type Subscriber = Arc<dyn Fn() + Send + Sync>;

// Ids are unique across all signals so a handle can hold ids from several of them.
static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

struct Inner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
}

/// Observable value shared between a writer and any number of observers
pub struct Signal<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Signal");
        match self.inner.value.read() {
            Ok(value) => s.field("value", &*value),
            Err(_) => s.field("value", &"<poisoned>"),
        };
        s.field("subscribers", &self.subscriber_count()).finish()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Signal<T> {
    /// Create a signal holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register a callback invoked after every change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was not subscribed here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .map(|s| s.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    /// Read the current value through a closure without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self
            .inner
            .value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&value)
    }

    fn notify(&self) {
        // Snapshot the callbacks so none of them runs while the list is locked.
        let callbacks: Vec<Subscriber> = {
            let subscribers = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> Signal<T> {
    /// Clone out the current value
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T: PartialEq> Signal<T> {
    /// Replace the value. Subscribers run only if the new value differs.
    /// Returns whether a change happened.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self
                .inner
                .value
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.notify();
        true
    }

    /// Mutate the value in place. Subscribers run only if it changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool
    where
        T: Clone,
    {
        let changed = {
            let mut current = self
                .inner
                .value
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let before = current.clone();
            f(&mut current);
            *current != before
        };
        if changed {
            self.notify();
        }
        changed
    }
}
