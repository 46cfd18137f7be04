//! Publish Topics Use Case
//!
//! Drafts educational content for each topic and publishes it to the registry.
//! A failing topic is logged and skipped; the rest still run.

use std::sync::Arc;

use crate::domain::gateways::ContentPublisher;
use crate::domain::models::content::ContentRecord;
use crate::domain::models::draft::EducationalDraft;

/// Outcome of a publishing run
#[derive(Debug, Default)]
pub struct PublishReport {
    pub published: Vec<(String, ContentRecord)>,
    pub failed: Vec<(String, String)>,
}

impl PublishReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Use case driving the publishing agent loop
pub struct PublishTopicsUseCase {
    publisher: Arc<dyn ContentPublisher>,
}

impl PublishTopicsUseCase {
    /// Create a new PublishTopicsUseCase
    #[must_use]
    pub fn new(publisher: Arc<dyn ContentPublisher>) -> Self {
        Self { publisher }
    }

    /// Execute the use case over `topics`, in order
    pub async fn execute(&self, topics: &[String]) -> PublishReport {
        let mut report = PublishReport::default();

        for topic in topics {
            let draft = EducationalDraft::for_topic(topic);
            tracing::info!(topic = %draft.topic, title = %draft.title, "Generated content");

            match self.publisher.publish(&draft.to_submission()).await {
                Ok(record) => {
                    tracing::info!(
                        topic = %draft.topic,
                        content_id = %record.id(),
                        content_hash = %record.content_hash(),
                        "Published content"
                    );
                    report.published.push((draft.topic, record));
                }
                Err(err) => {
                    tracing::error!(topic = %draft.topic, error = %err, "Error publishing content");
                    report.failed.push((draft.topic, err.to_string()));
                }
            }
        }

        tracing::info!(
            published = report.published.len(),
            failed = report.failed.len(),
            "Publishing run finished"
        );
        report
    }
}
