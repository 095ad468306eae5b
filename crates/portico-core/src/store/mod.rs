//! # Portico State Stores
//!
//! Namespace-scoped key/value state plus the access store consumed by the
//! access directive. Every key is stored as `<namespace>-<key>`, so several
//! deployments can share one backend without seeing each other's state.
pub mod access;
pub mod backend;
pub mod error;

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::kernel::error::Result;
use crate::kernel::instance::AppInstance;
use crate::store::backend::Snapshot;

pub use access::AccessStore;
pub use backend::{FileBackend, MemoryBackend, StoreBackend};
pub use error::StoreError;

const ACCESS_CODES_KEY: &str = "access-codes";
const ACCESS_ROLES_KEY: &str = "access-roles";

/// State stores of one deployment namespace
pub struct StoreManager {
    namespace: String,
    backend: Arc<dyn StoreBackend>,
    values: RwLock<Snapshot>,
    access: AccessStore,
}

impl std::fmt::Debug for StoreManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreManager")
            .field("namespace", &self.namespace)
            .field("backend", &self.backend.name())
            .finish_non_exhaustive()
    }
}

impl StoreManager {
    /// Load the namespace's snapshot from `backend` and restore the access store.
    pub async fn init(namespace: &str, backend: Arc<dyn StoreBackend>) -> Result<Self> {
        validate_namespace(namespace)?;
        let snapshot = backend.load(namespace).await?;
        log::info!(
            "Stores initialized for namespace '{}' ({} persisted keys, backend '{}')",
            namespace,
            snapshot.len(),
            backend.name()
        );

        let manager = Self {
            namespace: namespace.to_string(),
            backend,
            values: RwLock::new(snapshot),
            access: AccessStore::new(),
        };
        if let Some(codes) = manager.get::<BTreeSet<String>>(ACCESS_CODES_KEY) {
            manager.access.set_codes(codes);
        }
        if let Some(roles) = manager.get::<BTreeSet<String>>(ACCESS_ROLES_KEY) {
            manager.access.set_roles(roles);
        }
        Ok(manager)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The key a value is stored under
    pub fn scoped_key(&self, key: &str) -> String {
        format!("{}-{}", self.namespace, key)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let values = self
            .values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let scoped = self.scoped_key(key);
        let value = values.get(&scoped)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Ignoring stored value '{}' of unexpected shape: {}", scoped, e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(StoreError::from)?;
        let mut values = self
            .values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        values.insert(self.scoped_key(key), value);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> bool {
        let mut values = self
            .values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        values.remove(&self.scoped_key(key)).is_some()
    }

    pub fn access(&self) -> &AccessStore {
        &self.access
    }

    /// Write the current values and access state back to the backend.
    pub async fn persist(&self) -> Result<()> {
        self.set(ACCESS_CODES_KEY, self.access.codes().get())?;
        self.set(ACCESS_ROLES_KEY, self.access.roles().get())?;
        let snapshot = self
            .values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        self.backend.save(&self.namespace, &snapshot).await
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    let reason = if namespace.trim().is_empty() {
        Some("namespace is empty")
    } else if namespace.contains(['/', '\\']) || namespace.contains("..") {
        Some("namespace must not contain path separators")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(StoreError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Initialize the stores for `namespace` and attach them to the instance.
pub async fn init_stores(
    app: &mut AppInstance,
    namespace: &str,
    backend: Arc<dyn StoreBackend>,
) -> Result<Arc<StoreManager>> {
    let stores = Arc::new(StoreManager::init(namespace, backend).await?);
    app.set_stores(Arc::clone(&stores));
    Ok(stores)
}
