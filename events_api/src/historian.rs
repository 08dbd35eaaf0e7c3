use std::sync::Arc;
use tracing::instrument;

use crate::knowledge::KnowledgeCache;
use crate::model::{ChatModel, ModelError};
use crate::prompts;

/// Researches locations with a chat model, remembering each survey so a
/// later drilldown can build on it.
pub struct Historian {
    model: Arc<dyn ChatModel>,
    knowledge: KnowledgeCache,
}

impl Historian {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            knowledge: KnowledgeCache::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    #[cfg(test)]
    pub const fn knowledge(&self) -> &KnowledgeCache {
        &self.knowledge
    }

    /// Asks for the most significant events of `location` and returns the
    /// raw reply. A successful reply becomes the knowledge for `location`.
    ///
    /// # Errors
    ///
    /// Returns the model error; nothing is remembered in that case.
    #[instrument(skip(self))]
    pub async fn survey(&self, location: &str) -> Result<String, ModelError> {
        let prompt = prompts::survey(location);

        let reply = self.model.complete(&prompt).await.inspect_err(|e| {
            tracing::error!("survey of {location} failed: {e}");
        })?;

        self.knowledge.remember(location, &reply);
        tracing::debug!("knowledge cache holds {} locations", self.knowledge.len());

        Ok(reply)
    }

    /// Asks for detailed events of `location` around `date`, giving the
    /// model whatever the last survey of `location` returned.
    ///
    /// # Errors
    ///
    /// Returns the model error.
    #[instrument(skip(self))]
    pub async fn drilldown(&self, location: &str, date: &str) -> Result<String, ModelError> {
        let previous = self.knowledge.recall(location);
        let prompt = prompts::drilldown(location, date, &previous);

        self.model.complete(&prompt).await.inspect_err(|e| {
            tracing::error!("drilldown into {location} on {date} failed: {e}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::NO_PRIOR_KNOWLEDGE;
    use crate::model::testing::{FailingModel, RecordingModel};

    const PARIS_REPLY: &str = r#"{"events": [{"date": "1889", "title": "Exposition Universelle"}]}"#;

    #[tokio::test]
    async fn test_survey_remembers_reply() {
        let historian = Historian::new(Arc::new(RecordingModel::new(PARIS_REPLY)));

        let reply = historian.survey("Paris").await.unwrap();

        assert_eq!(reply, PARIS_REPLY);
        assert_eq!(historian.knowledge().recall("Paris"), PARIS_REPLY);
    }

    #[tokio::test]
    async fn test_drilldown_sends_previous_survey() {
        let model = Arc::new(RecordingModel::new(PARIS_REPLY));
        let historian = Historian::new(model.clone());

        historian.survey("Paris").await.unwrap();
        historian.drilldown("Paris", "1889").await.unwrap();

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(
            prompts[1]
                .system
                .contains(&format!("Previous context: {PARIS_REPLY}"))
        );
    }

    #[tokio::test]
    async fn test_drilldown_without_survey_sends_sentinel() {
        let model = Arc::new(RecordingModel::new(PARIS_REPLY));
        let historian = Historian::new(model.clone());

        historian.drilldown("Paris", "1889").await.unwrap();

        let prompts = model.prompts();
        assert!(
            prompts[0]
                .system
                .contains(&format!("Previous context: {NO_PRIOR_KNOWLEDGE}"))
        );
    }

    #[tokio::test]
    async fn test_drilldown_does_not_touch_knowledge() {
        let historian = Historian::new(Arc::new(RecordingModel::new(PARIS_REPLY)));

        historian.drilldown("Paris", "1889").await.unwrap();

        assert_eq!(historian.knowledge().len(), 0);
    }

    #[tokio::test]
    async fn test_failed_survey_is_not_remembered() {
        let historian = Historian::new(Arc::new(FailingModel));

        assert!(historian.survey("Paris").await.is_err());
        assert!(historian.drilldown("Paris", "1889").await.is_err());
        assert_eq!(historian.knowledge().len(), 0);
    }
}
