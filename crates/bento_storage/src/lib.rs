use std::sync::Arc;
use bento_core::{Error, Result, ResultStore};

pub mod backends;

pub use backends::*;

/// Builds the result store named `storage_type`.
pub async fn create_storage(storage_type: &str) -> Result<Arc<dyn ResultStore>> {
    match storage_type {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        other => Err(Error::Storage(format!(
            "Unknown storage backend: {}. Available backends: memory",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_storage;
    pub use bento_core::ResultStore;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_storage() {
        let storage = create_storage("memory").await.unwrap();
        storage.set("k", json!(1)).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some(json!(1)));

        assert!(matches!(create_storage("qdrant").await, Err(Error::Storage(_))));
    }
}
