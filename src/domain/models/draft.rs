//! Educational content drafts produced by the publishing agent.

use blake3::Hasher;

use super::content::{ContentSubmission, ContentType};

/// A short-form video script drafted for a single topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationalDraft {
    pub topic: String,
    pub title: String,
    pub script: String,
    pub tags: Vec<String>,
}

impl EducationalDraft {
    /// Draft a script with a hook, three key learning points and a call to action.
    #[must_use]
    pub fn for_topic(topic: &str) -> Self {
        let topic = topic.trim();
        let script = format!(
            "Hook: Ever wondered what {topic} really means? Here it is in under 60 seconds.\n\
             1. What {topic} is and the problem it solves.\n\
             2. How {topic} works, step by step.\n\
             3. Where you will meet {topic} in practice.\n\
             Call to action: Follow for more, and try explaining {topic} to a friend today."
        );

        Self {
            topic: topic.to_string(),
            title: format!("Learn about {topic}"),
            script,
            tags: vec!["education".to_string(), topic.to_lowercase()],
        }
    }

    /// Content-addressed identifier of the script (blake3, hex)
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = Hasher::new();
        hasher.update(self.title.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.script.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Registry submission for this draft. Drafts are always short-form video.
    #[must_use]
    pub fn to_submission(&self) -> ContentSubmission {
        ContentSubmission {
            content_hash: self.content_hash(),
            content_type: ContentType::Video,
            tags: self.tags.clone(),
        }
    }
}
