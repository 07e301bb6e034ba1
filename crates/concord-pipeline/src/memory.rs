//! Single-slot context memory.

use std::sync::Mutex;

use tracing::debug;

/// A key-value store with capacity for exactly one entry.
///
/// `store` overwrites the slot (key and value) unconditionally; there is no
/// history, no eviction policy, and no TTL. The slot belongs to the pipeline
/// instance that owns it — never process-global state — so callers wanting
/// isolation construct separate pipelines. The mutex makes the
/// read-modify-write cycle safe for concurrent callers sharing one pipeline.
#[derive(Debug, Default)]
pub struct ContextMemory {
    slot: Mutex<Option<(String, String)>>,
}

impl ContextMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with `key` and `value`.
    pub fn store(&self, key: &str, value: &str) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some((key.to_string(), value.to_string()));
        debug!(key, "Context memory overwritten");
    }

    /// Return the stored value when `key` matches the current slot's key.
    pub fn fetch(&self, key: &str) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.as_ref()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}
