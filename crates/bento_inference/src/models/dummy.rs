use std::fmt;
use async_trait::async_trait;
use bento_core::{CompletionModel, ModelRequest, Result};
use serde_json::json;
use crate::normalize::truncate_chars;

/// Offline stand-in that builds a bento reply out of the input itself.
#[derive(Default)]
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: &ModelRequest) -> Result<String> {
        let content = request.user_content.trim();

        // First three sentences become the key observations
        let observations: Vec<_> = content
            .split(|c: char| matches!(c, '。' | '！' | '？' | '.' | '!' | '?' | '\n'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(3)
            .enumerate()
            .map(|(i, sentence)| json!({ "label": format!("观点{}", i + 1), "value": sentence }))
            .collect();

        let reply = json!({
            "title": truncate_chars(content, 16),
            "subtitle": truncate_chars(content, 40),
            "coreNumbers": [{ "number": content.chars().count().to_string(), "desc": "字" }],
            "sections": [{ "title": "主要观点", "items": observations }],
            "tags": [],
            "cta": "阅读原文"
        });

        Ok(reply.to_string())
    }
}
