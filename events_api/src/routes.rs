use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{events, health};
use crate::state::AppContext;

pub fn app(context: AppContext) -> Router {
    let allowed_origins = context.config.allowed_origins();

    let router = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/locations/{location}/events", get(events::list_events))
        .route(
            "/locations/{location}/events/drilldown",
            get(events::drill_down),
        )
        .route("/query", post(events::query_location))
        .with_state(context);

    ts_axum::with_common_layers(router, &allowed_origins)
}
