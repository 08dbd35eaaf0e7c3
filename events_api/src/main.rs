/**
 * This is the main entrypoint for the `events_api` service.
 *
 * The service answers "what happened here?" for a location on the map. A
 * language model is asked for the location's most significant events, the
 * reply is normalized into `Event` records with coordinates for known
 * cities, and follow-up drilldowns reuse the previous reply as context.
 *
 * Without an `OPENAI_API_KEY` the service runs against a deterministic
 * offline model so the frontend can still be developed against it.
 */
use std::net::SocketAddr;

mod config;
mod coordinates;
mod handlers;
mod historian;
mod knowledge;
mod model;
mod normalizer;
mod prompts;
mod routes;
mod state;

use config::Config;
use state::AppContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the application context (which also initializes tracing)
    let context: AppContext = ts_app::create_app_context::<AppContext, Config>().await?;

    let addr: SocketAddr = context.config.bind_address().parse()?;

    tracing::info!(
        "starting Time Space API with the {} model",
        context.historian.model_name()
    );

    let app = routes::app(context);

    ts_axum::run_app(app, addr).await?;

    Ok(())
}
