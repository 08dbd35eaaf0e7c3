use async_trait::async_trait;
use std::sync::Mutex;

use super::{ChatModel, ChatPrompt, ModelError};

/// Replies with a fixed text and keeps every prompt it was sent.
pub struct RecordingModel {
    reply: String,
    prompts: Mutex<Vec<ChatPrompt>>,
}

impl RecordingModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<ChatPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for RecordingModel {
    fn name(&self) -> &str {
        "recording"
    }

    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(self.reply.clone())
    }
}

/// Fails every call, like an unreachable API or a revoked key.
pub struct FailingModel;

#[async_trait]
impl ChatModel for FailingModel {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _prompt: &ChatPrompt) -> Result<String, ModelError> {
        Err(ModelError::Api("insufficient_quota".to_string()))
    }
}

/// Panics on every call.
pub struct PanickingModel;

#[async_trait]
impl ChatModel for PanickingModel {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn complete(&self, _prompt: &ChatPrompt) -> Result<String, ModelError> {
        panic!("model backend bug")
    }
}
