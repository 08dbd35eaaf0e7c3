//! Turns the text a model replied with into validated `Event` records.
//!
//! Models are asked for a fixed JSON shape but routinely wrap it in markdown
//! fences or drop fields, so every field has a default and only structural
//! problems (not JSON, not an object, `events` not a list of objects) are
//! reported as errors.

use serde_json::{Map, Value};
use thiserror::Error;
use types::{Event, location_slug};

use crate::coordinates;

const DEFAULT_DATE: &str = "Unknown";
const DEFAULT_ID_DATE: &str = "unknown";
const DEFAULT_TITLE: &str = "Historical Event";
const DEFAULT_DESCRIPTION: &str = "An important historical event.";
pub const DEFAULT_CATEGORY: &str = "historical";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("model reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("model reply is not a JSON object")]
    NotAnObject,
    #[error("`events` is not a list of objects")]
    MalformedEvents,
}

/// Parses a model reply into events for `location`, in reply order.
///
/// # Errors
///
/// Returns an error if the reply, after removing a leading "```json" and a
/// trailing "```", is not a JSON object, or if its `events` member is
/// present but is not an array of objects.
pub fn normalize(raw: &str, location: &str) -> Result<Vec<Event>, NormalizeError> {
    let data: Value = serde_json::from_str(strip_code_fence(raw))?;

    let Value::Object(data) = data else {
        return Err(NormalizeError::NotAnObject);
    };

    let entries = match data.get("events") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(NormalizeError::MalformedEvents),
    };

    let slug = location_slug(location);
    let coordinates = coordinates::lookup(location);

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let Value::Object(entry) = entry else {
                return Err(NormalizeError::MalformedEvents);
            };

            let date = text_field(entry, "date");

            Ok(Event {
                id: format!(
                    "{slug}_{index}_{}",
                    date.as_deref().unwrap_or(DEFAULT_ID_DATE)
                ),
                date: date.unwrap_or_else(|| DEFAULT_DATE.to_string()),
                title: text_field(entry, "title")
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                description: text_field(entry, "description")
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                category: Some(
                    text_field(entry, "category")
                        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                ),
                coordinates,
            })
        })
        .collect()
}

/// Same as [`normalize`], but a reply that cannot be parsed yields no
/// events. The failure and the offending text are logged.
pub fn normalize_or_empty(raw: &str, location: &str) -> Vec<Event> {
    match normalize(raw, location) {
        Ok(events) => {
            tracing::info!("normalized {} events for {location}", events.len());
            events
        }
        Err(e) => {
            tracing::error!("failed to normalize model reply for {location}: {e}");
            tracing::debug!("unparseable model reply: {raw}");
            Vec::new()
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text)
}

// Strings are taken as-is, other scalars (a bare year such as 1931) keep
// their JSON spelling. `null` counts as missing.
fn text_field(entry: &Map<String, Value>, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
