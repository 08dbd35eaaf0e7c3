use axum::http::HeaderValue;
use redact::Secret;
use serde::Deserialize;
use std::time::Duration;

/// Service configuration, read from the environment (and `.env`).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Without a key the service answers from the offline mock model.
    #[serde(default)]
    openai_api_key: Option<Secret<String>>,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    #[serde(default = "default_model_timeout_secs")]
    pub model_timeout_secs: u64,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma separated; unset means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

const fn default_model_timeout_secs() -> u64 {
    60
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: default_openai_model(),
            model_timeout_secs: default_model_timeout_secs(),
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: None,
        }
    }
}

impl Config {
    /// The `OpenAI` key, if one is set and not blank.
    pub fn openai_api_key(&self) -> Option<&Secret<String>> {
        self.openai_api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    pub const fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed CORS origins. Entries that are not valid header values are
    /// skipped with a warning.
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("ignoring CORS origin {origin:?}: {e}");
                    None
                }
            })
            .collect()
    }
}
