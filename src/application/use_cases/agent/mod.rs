//! Publishing Agent Use Cases

mod publish_topics;

pub use publish_topics::{PublishReport, PublishTopicsUseCase};
