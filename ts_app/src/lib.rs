use figment::{Figment, providers::Env};
use serde::de::DeserializeOwned;

pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Initialize the application context with configuration from environment variables.
/// A `.env` file in the working directory is loaded first, if there is one.
/// The configuration is extracted using figment.
///
/// # Returns
/// The application context built from the configuration as specified by the
/// trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
///
pub async fn create_app_context<A, Config: DeserializeOwned>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    // .env goes first so it can set RUST_LOG
    let dotenv = dotenvy::dotenv();

    init_tracing();

    // a missing .env file is the normal case outside local development
    match dotenv {
        Ok(path) => tracing::info!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("could not load .env file: {e}"),
    }

    let config: Config = load_config()?;

    let context = A::new(config).await;

    Ok(context)
}

/// Extract a configuration struct from the raw process environment.
///
/// Variable names are matched case-insensitively against field names, so
/// `OPENAI_MODEL` populates `openai_model`.
///
/// # Errors
/// If a required variable is missing or a value cannot be parsed.
pub fn load_config<Config: DeserializeOwned>() -> Result<Config, figment::Error> {
    let figment = Figment::new().merge(Env::raw());

    figment.extract()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // ANSI color codes are noise once the JSON lands in a log collector.
        .with_ansi(false)
        .with_target(false)
        .init();
}
