use axum::{
    body::Body,
    http::{
        header::{self, ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, ORIGIN},
        HeaderValue, Request, StatusCode,
    },
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Wraps a router with the middleware every Time Space service uses:
/// a JSON 404 fallback, request tracing, CORS and response compression.
///
/// When `allowed_origins` is empty any origin is accepted.
pub fn with_common_layers(app: Router, allowed_origins: &[HeaderValue]) -> Router {
    // Set up a trace layer
    let trace_layer = TraceLayer::new_for_http().on_request(
        |request: &Request<Body>, _: &tracing::Span| {
            tracing::info!(
                "received request: {method} {uri}",
                method = request.method(),
                uri = request.uri()
            );
        },
    );

    // Set up a CORS layer
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins.iter().cloned())
    };

    let cors_layer = CorsLayer::new()
        .allow_headers([ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, ORIGIN])
        .allow_methods(tower_http::cors::Any)
        .allow_origin(allow_origin);

    let compression_layer = CompressionLayer::new().gzip(true).deflate(true);

    app.fallback(not_found)
        .layer(cors_layer)
        .layer(trace_layer)
        .layer(compression_layer)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/json")],
        Json(json!({
            "message": "not found",
        })),
    )
}

/// Serves an Axum router on `addr` until Ctrl+C or SIGTERM is received.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the address or the
/// connection loop fails.
pub async fn run_app(app: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::warn!("signal received, starting graceful shutdown");
}
