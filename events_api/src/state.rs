use std::sync::Arc;

use crate::config::Config;
use crate::historian::Historian;
use crate::model::{ChatModel, MockChatModel, OpenAiChatModel};

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub historian: Arc<Historian>,
}

impl AppContext {
    pub fn with_model(config: Config, model: Arc<dyn ChatModel>) -> Self {
        Self {
            config: Arc::new(config),
            historian: Arc::new(Historian::new(model)),
        }
    }
}

impl ts_app::ContextProvider<Config> for AppContext {
    async fn new(config: Config) -> Self {
        let model: Arc<dyn ChatModel> = match config.openai_api_key() {
            Some(api_key) => {
                tracing::info!("using OpenAI model {}", config.openai_model);
                Arc::new(OpenAiChatModel::new(
                    api_key,
                    config.openai_model.clone(),
                    config.model_timeout(),
                ))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY is not set, answering with the offline mock model");
                Arc::new(MockChatModel)
            }
        };

        Self::with_model(config, model)
    }
}
