use std::sync::Mutex;

/// Destination of computed document titles
pub trait TitleSink: Send + Sync {
    fn set_title(&self, title: &str);
}

/// Records every write; the last write is the current title.
#[derive(Debug, Default)]
pub struct MemoryTitleSink {
    writes: Mutex<Vec<String>>,
}

impl MemoryTitleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|w| w.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn last(&self) -> Option<String> {
        self.writes().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.writes().len()
    }
}

impl TitleSink for MemoryTitleSink {
    fn set_title(&self, title: &str) {
        let mut writes = self
            .writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writes.push(title.to_string());
    }
}

/// Logs each title and remembers the latest one.
#[derive(Debug, Default)]
pub struct LogTitleSink {
    current: Mutex<Option<String>>,
}

impl LogTitleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.current
            .lock()
            .map(|c| c.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl TitleSink for LogTitleSink {
    fn set_title(&self, title: &str) {
        log::info!("Document title: {}", title);
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(title.to_string());
    }
}
