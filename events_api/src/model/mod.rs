pub mod mock;
pub mod openai;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockChatModel;
pub use openai::OpenAiChatModel;

/// Sampling parameters shared by every request.
pub const TEMPERATURE: f32 = 0.5;
pub const TOP_P: f32 = 1.0;

/// What a prompt is asking for. Real models only see the rendered text; the
/// offline mock uses this to produce a matching reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Survey { location: String },
    Drilldown { location: String, date: String },
}

/// A system + user message pair and the output budget for the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub kind: PromptKind,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model API error: {0}")]
    Api(String),
    #[error("model did not answer within {0} seconds")]
    Timeout(u64),
    #[error("model reply had no text content")]
    EmptyReply,
}

/// A chat completion backend. One call, one reply, no retries.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ModelError>;
}
