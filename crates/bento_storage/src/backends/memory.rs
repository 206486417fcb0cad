use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use async_trait::async_trait;
use bento_core::{Result, ResultStore};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, Value>,
    /// Keys in insertion order, oldest first
    order: VecDeque<String>,
}

/// Process-local store; contents vanish with the process.
///
/// Holds at most `capacity` entries. Inserting a new key past that evicts the
/// oldest one; overwriting an existing key keeps its place.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Arc<RwLock<Entries>>,
    capacity: usize,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries::default())),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.values.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.values.is_empty()
    }
}

#[async_trait]
impl ResultStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().await;
        Ok(entries.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        debug!("💾 Storing result {}", key);
        let mut entries = self.entries.write().await;
        if entries.values.insert(key.to_string(), value).is_none() {
            entries.order.push_back(key.to_string());
        }
        while entries.values.len() > self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            debug!("🗑️ Evicting result {}", oldest);
            entries.values.remove(&oldest);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty().await);
        assert_eq!(storage.get("missing").await.unwrap(), None);

        storage.set("last", json!({ "title": "一" })).await.unwrap();
        storage.set("last", json!({ "title": "二" })).await.unwrap();

        assert_eq!(storage.len().await, 1);
        assert_eq!(storage.get("last").await.unwrap(), Some(json!({ "title": "二" })));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        clone.set("k", json!([1, 2])).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn test_oldest_entries_are_evicted() {
        let storage = MemoryStorage::with_capacity(2);
        storage.set("a", json!(1)).await.unwrap();
        storage.set("b", json!(2)).await.unwrap();
        storage.set("a", json!(10)).await.unwrap();
        storage.set("c", json!(3)).await.unwrap();

        assert_eq!(storage.len().await, 2);
        assert_eq!(storage.get("a").await.unwrap(), None);
        assert_eq!(storage.get("b").await.unwrap(), Some(json!(2)));
        assert_eq!(storage.get("c").await.unwrap(), Some(json!(3)));
    }
}
