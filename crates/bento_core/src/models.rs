use async_trait::async_trait;
use crate::types::ModelRequest;
use crate::Result;

#[async_trait]
pub trait CompletionModel: Send + Sync {
    fn name(&self) -> &str;

    /// Send one chat completion and return the assistant's raw text reply
    async fn complete(&self, request: &ModelRequest) -> Result<String>;
}
