use async_trait::async_trait;
use serde_json::Value;
use crate::Result;

/// Key/value capability used to keep generated results around for later recovery.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Fetch the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing what was there
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}
