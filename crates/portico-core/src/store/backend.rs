use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::kernel::error::Result;
use crate::store::error::StoreError;

/// Snapshot of one namespace's store values
pub type Snapshot = HashMap<String, Value>;

/// Where store snapshots live between runs
#[async_trait]
pub trait StoreBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Load the snapshot for `namespace`; an unknown namespace yields an empty snapshot.
    async fn load(&self, namespace: &str) -> Result<Snapshot>;

    async fn save(&self, namespace: &str, snapshot: &Snapshot) -> Result<()>;
}

/// Process-local backend; snapshots vanish with the process
#[derive(Debug, Default)]
pub struct MemoryBackend {
    namespaces: Mutex<HashMap<String, Snapshot>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, namespace: &str) -> Result<Snapshot> {
        Ok(self
            .namespaces
            .lock()
            .await
            .get(namespace)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, namespace: &str, snapshot: &Snapshot) -> Result<()> {
        self.namespaces
            .lock()
            .await
            .insert(namespace.to_string(), snapshot.clone());
        Ok(())
    }
}

/// Stores each namespace as `<dir>/<namespace>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{}.json", namespace))
    }
}

#[async_trait]
impl StoreBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self, namespace: &str) -> Result<Snapshot> {
        let path = self.path_for(namespace);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(serde_json::from_str(&content).map_err(StoreError::from)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Snapshot::new()),
            Err(e) => Err(StoreError::io(e, "read", path).into()),
        }
    }

    async fn save(&self, namespace: &str, snapshot: &Snapshot) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io(e, "create_dir_all", self.dir.clone()))?;
        let path = self.path_for(namespace);
        let content = serde_json::to_string_pretty(snapshot).map_err(StoreError::from)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| StoreError::io(e, "write", path.clone()))?;
        Ok(())
    }
}
