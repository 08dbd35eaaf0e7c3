use async_trait::async_trait;
use serde_json::json;

use super::{ChatModel, ChatPrompt, ModelError, PromptKind};

/// Offline stand-in used when no `OpenAI` key is configured.
///
/// Replies are deterministic functions of the prompt kind, written in the
/// same JSON shape the real model is asked for, so the rest of the pipeline
/// runs unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockChatModel;

// (year, era, category) for the survey reply
const SURVEY_ERAS: [(&str, &str, &str); 5] = [
    ("1850", "Early Settlement", "social"),
    ("1900", "Industrial Growth", "economic"),
    ("1945", "Postwar Reconstruction", "political"),
    ("1969", "Cultural Transformation", "cultural"),
    ("2000", "Entering the New Millennium", "economic"),
];

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ModelError> {
        let reply = match &prompt.kind {
            PromptKind::Survey { location } => survey_reply(location),
            PromptKind::Drilldown { location, date } => drilldown_reply(location, date),
        };

        Ok(reply.to_string())
    }
}

fn survey_reply(location: &str) -> serde_json::Value {
    let events: Vec<_> = SURVEY_ERAS
        .iter()
        .map(|(year, era, category)| {
            json!({
                "date": year,
                "title": format!("{era} of {location}"),
                "description": format!(
                    "Sample event for {location} around {year}. Set OPENAI_API_KEY for researched history."
                ),
                "category": category,
            })
        })
        .collect();

    json!({
        "location": { "name": location },
        "events": events,
    })
}

fn drilldown_reply(location: &str, date: &str) -> serde_json::Value {
    json!({
        "location": { "name": location },
        "events": [
            {
                "date": date,
                "title": format!("Civic Life in {location}"),
                "description": format!(
                    "Sample account of public affairs in {location} around {date}. Set OPENAI_API_KEY for researched history."
                ),
                "category": "political",
            },
            {
                "date": date,
                "title": format!("Commerce in {location}"),
                "description": format!(
                    "Sample account of trade and industry in {location} around {date}. Set OPENAI_API_KEY for researched history."
                ),
                "category": "economic",
            },
        ],
    })
}
