//! Prompts sent to the model.
//!
//! Both prompts embed an example of the JSON shape the normalizer reads, and
//! ask for nothing but that JSON.

use crate::model::{ChatPrompt, PromptKind};

pub const SURVEY_MAX_TOKENS: u32 = 800;
pub const DRILLDOWN_MAX_TOKENS: u32 = 400;

/// Asks for the five most significant dated events of a location. The user
/// message is the location itself.
pub fn survey(location: &str) -> ChatPrompt {
    let system = format!(
        r#"You are a fabulous historian. Given a location name from the user, return the 5 most significant dates and descriptions of what occurred on those dates in the following json format:
{{"location": {{ "name": "{location}" }},
 "events": [
    {{
        "date": "1931",
        "title": "Gambling Legalized",
        "description": "Nevada legalizes gambling, starting the casino boom.",
        "category": "economic"
    }}
 ]
}}
Only return valid JSON, no additional text."#
    );

    ChatPrompt {
        kind: PromptKind::Survey {
            location: location.to_string(),
        },
        system,
        user: location.to_string(),
        max_tokens: SURVEY_MAX_TOKENS,
    }
}

/// Asks for detailed events in `location` around `date`, with the last
/// survey reply for the location (or the "no previous information"
/// sentinel) as `previous_context`. The user message is the date.
pub fn drilldown(location: &str, date: &str, previous_context: &str) -> ChatPrompt {
    let system = format!(
        r#"You are a fabulous historian. Given a location "{location}" and a specific date "{date}", provide detailed information about historical events that occurred in {location} around {date}.

Return the response in this EXACT JSON format:
{{"location": {{ "name": "{location}" }},
 "events": [
    {{
        "date": "{date}",
        "title": "Specific Event Title",
        "description": "Detailed description of what happened in {location} around {date}.",
        "category": "political"
    }},
    {{
        "date": "{date}",
        "title": "Another Event Title",
        "description": "Another event that happened in {location} around {date}.",
        "category": "economic"
    }}
 ]
}}

Focus on events that actually happened in {location} around the year {date}. If you don't know specific events for that exact year, provide events from nearby years in {location}.

Previous context: {previous_context}

IMPORTANT: Only return valid JSON in the exact format above, no additional text or explanations."#
    );

    ChatPrompt {
        kind: PromptKind::Drilldown {
            location: location.to_string(),
            date: date.to_string(),
        },
        system,
        user: date.to_string(),
        max_tokens: DRILLDOWN_MAX_TOKENS,
    }
}
