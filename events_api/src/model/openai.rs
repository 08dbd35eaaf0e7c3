use async_trait::async_trait;
use openai_dive::v1::api::Client;
use openai_dive::v1::error::APIError;
use openai_dive::v1::resources::chat::{
    ChatCompletionParameters, ChatCompletionResponse, ChatMessage, ChatMessageContent,
};
use redact::Secret;
use std::time::Duration;
use tracing::instrument;

use super::{ChatModel, ChatPrompt, ModelError, TEMPERATURE, TOP_P};

/// Chat completions against the `OpenAI` API.
pub struct OpenAiChatModel {
    client: Client,
    model: String,
    timeout: Duration,
}

impl OpenAiChatModel {
    pub fn new(api_key: &Secret<String>, model: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(api_key.expose_secret().clone()),
            model,
            timeout,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(user = %prompt.user))]
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ModelError> {
        let parameters = build_parameters(prompt, &self.model);

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(parameters))
            .await
            .map_err(|_| ModelError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| {
                if let APIError::InvalidRequestError(message) = &e {
                    tracing::error!("invalid request: {message}");
                }
                ModelError::Api(e.to_string())
            })?;

        let reply = reply_text(&response)?;

        tracing::info!("{} replied with {} characters", self.model, reply.len());
        tracing::debug!("model reply: {reply}");

        Ok(reply)
    }
}

fn build_parameters(prompt: &ChatPrompt, model: &str) -> ChatCompletionParameters {
    ChatCompletionParameters {
        model: model.to_string(),
        messages: vec![
            ChatMessage::System {
                name: None,
                content: ChatMessageContent::Text(prompt.system.clone()),
            },
            ChatMessage::User {
                name: None,
                content: ChatMessageContent::Text(prompt.user.clone()),
            },
        ],
        temperature: Some(TEMPERATURE),
        top_p: Some(TOP_P),
        frequency_penalty: Some(0.0),
        presence_penalty: Some(0.0),
        n: Some(1),
        max_completion_tokens: Some(prompt.max_tokens),
        ..Default::default()
    }
}

fn reply_text(response: &ChatCompletionResponse) -> Result<String, ModelError> {
    let Some(choice) = response.choices.first() else {
        return Err(ModelError::EmptyReply);
    };

    match &choice.finish_reason {
        Some(reason) => {
            tracing::info!("Finish reason: {:?}", reason);
        }
        None => {
            tracing::info!("No finish reason provided");
        }
    }

    match &choice.message {
        ChatMessage::Assistant {
            content: Some(ChatMessageContent::Text(text)),
            ..
        } if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(ModelError::EmptyReply),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts;

    #[test]
    fn test_build_parameters_sampling() {
        let prompt = prompts::survey("Milan");
        let parameters = build_parameters(&prompt, "gpt-4o");

        assert_eq!(parameters.model, "gpt-4o");
        assert_eq!(parameters.temperature, Some(0.5));
        assert_eq!(parameters.top_p, Some(1.0));
        assert_eq!(parameters.frequency_penalty, Some(0.0));
        assert_eq!(parameters.presence_penalty, Some(0.0));
        assert_eq!(parameters.n, Some(1));
        assert_eq!(parameters.max_completion_tokens, Some(800));
        assert_eq!(parameters.messages.len(), 2);
    }

    #[test]
    fn test_build_parameters_message_order() {
        let prompt = prompts::drilldown("Milan", "1906", "context");
        let parameters = build_parameters(&prompt, "gpt-4o");

        assert_eq!(parameters.max_completion_tokens, Some(400));
        assert!(matches!(
            &parameters.messages[0],
            ChatMessage::System { content: ChatMessageContent::Text(text), .. }
                if text.contains("Previous context: context")
        ));
        assert!(matches!(
            &parameters.messages[1],
            ChatMessage::User { content: ChatMessageContent::Text(text), .. }
                if text == "1906"
        ));
    }
}
