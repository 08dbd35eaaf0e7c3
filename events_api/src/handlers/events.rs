use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::instrument;
use types::{Event, EventsResponse, QueryRequest, location_slug};

use super::{ApiError, DEFAULT_LIMIT, validate_limit};
use crate::normalizer::{self, DEFAULT_CATEGORY};
use crate::state::AppContext;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}(-\d{2}-\d{2})?$").expect("date pattern is a valid regex")
});

#[derive(Debug, Deserialize)]
pub struct ListParams {
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DrilldownParams {
    date: String,
    title: String,
    limit: Option<u32>,
}

/// `GET /locations/{location}/events`
#[instrument(skip(context, params))]
pub async fn list_events(
    State(context): State<AppContext>,
    Path(location): Path<String>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<EventsResponse>, ApiError> {
    let Query(params) = params?;
    let limit = validate_limit(params.limit)?;

    research(context, location, limit).await.map(Json)
}

/// `POST /query`, kept for older clients; same as listing with the default
/// limit.
#[instrument(skip(context, request))]
pub async fn query_location(
    State(context): State<AppContext>,
    request: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<EventsResponse>, ApiError> {
    let Json(request) = request?;

    research(context, request.location, DEFAULT_LIMIT as usize)
        .await
        .map(Json)
}

/// `GET /locations/{location}/events/drilldown`
///
/// Once the query is valid this always answers 200: a failed model call is
/// replaced by a single placeholder event describing the request.
#[instrument(skip(context, params))]
pub async fn drill_down(
    State(context): State<AppContext>,
    Path(location): Path<String>,
    params: Result<Query<DrilldownParams>, QueryRejection>,
) -> Result<Json<EventsResponse>, ApiError> {
    let Query(DrilldownParams { date, title, limit }) = params?;
    let limit = validate_limit(limit)?;

    if !DATE_PATTERN.is_match(&date) {
        return Err(ApiError::Validation(format!(
            "date must be YYYY or YYYY-MM-DD, got {date:?}"
        )));
    }

    tracing::info!("drilling down into {title} ({date}) in {location}");

    // the model call runs in its own task so a panic below is contained
    let task = tokio::spawn({
        let (location, date, title) = (location.clone(), date.clone(), title.clone());
        async move {
            match context.historian.drilldown(&location, &date).await {
                Ok(reply) => {
                    let mut events = normalizer::normalize_or_empty(&reply, &location);
                    events.truncate(limit);
                    events
                }
                Err(e) => {
                    tracing::warn!("no drilldown reply, using placeholder: {e}");
                    vec![details_placeholder(&location, &date, &title)]
                }
            }
        }
    });

    let events = task.await.unwrap_or_else(|e| {
        tracing::error!("drilldown for {title} failed unexpectedly: {e}");
        vec![unavailable_placeholder(&location, &date, &title)]
    });

    tracing::info!("returning {} sub-events for {title}", events.len());

    Ok(Json(EventsResponse::new(location, events)))
}

async fn research(
    context: AppContext,
    location: String,
    limit: usize,
) -> Result<EventsResponse, ApiError> {
    tracing::info!("researching events for {location}, limit {limit}");

    let task = tokio::spawn(async move {
        let reply = context
            .historian
            .survey(&location)
            .await
            .map_err(|_| ApiError::Research)?;

        let mut events = normalizer::normalize_or_empty(&reply, &location);
        events.truncate(limit);

        tracing::info!("found {} events for {location}", events.len());

        Ok::<_, ApiError>(EventsResponse::new(location, events))
    });

    task.await.unwrap_or_else(|e| {
        tracing::error!("research failed unexpectedly: {e}");
        Err(ApiError::Research)
    })
}

/// Stands in for a drilldown the model could not answer.
fn details_placeholder(location: &str, date: &str, title: &str) -> Event {
    Event {
        id: format!("{}_drilldown_0_{date}", location_slug(location)),
        date: date.to_string(),
        title: format!("Details about {title}"),
        description: format!(
            "More information about the event '{title}' that occurred in {location} on {date}. Set your OpenAI API key for detailed historical analysis."
        ),
        category: Some(DEFAULT_CATEGORY.to_string()),
        coordinates: None,
    }
}

/// Stands in for a drilldown that failed for any other reason.
fn unavailable_placeholder(location: &str, date: &str, title: &str) -> Event {
    Event {
        id: format!("{}_error_0_{date}", location_slug(location)),
        date: date.to_string(),
        title: format!("Event in {location}"),
        description: format!(
            "Unable to get detailed information about '{title}' in {location}. Please check server logs for details."
        ),
        category: Some(DEFAULT_CATEGORY.to_string()),
        coordinates: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_pattern() {
        assert!(DATE_PATTERN.is_match("1931"));
        assert!(DATE_PATTERN.is_match("1969-07-20"));
        assert!(!DATE_PATTERN.is_match("31"));
        assert!(!DATE_PATTERN.is_match("1969-7-20"));
        assert!(!DATE_PATTERN.is_match("July 1969"));
        assert!(!DATE_PATTERN.is_match("1969-07-20T00:00"));
    }

    #[test]
    fn test_details_placeholder() {
        let event = details_placeholder("Las Vegas", "1931", "Gambling Legalized");

        assert_eq!(event.id, "las_vegas_drilldown_0_1931");
        assert_eq!(event.date, "1931");
        assert_eq!(event.title, "Details about Gambling Legalized");
        assert!(event.description.contains("'Gambling Legalized'"));
        assert!(event.description.contains("Las Vegas on 1931"));
        assert!(event.coordinates.is_none());
    }

    #[test]
    fn test_unavailable_placeholder() {
        let event = unavailable_placeholder("New York", "1969-07-20", "Moon Landing");

        assert_eq!(event.id, "new_york_error_0_1969-07-20");
        assert_eq!(event.title, "Event in New York");
        assert!(event.description.starts_with("Unable to get detailed information"));
        assert!(event.description.contains("'Moon Landing'"));
    }
}
