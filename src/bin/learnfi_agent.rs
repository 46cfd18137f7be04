//! LearnFi Publishing Agent
//!
//! Drafts educational content for a list of topics and publishes each draft
//! to a running registry.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use learnfi_content_registry::application::use_cases::agent::PublishTopicsUseCase;
use learnfi_content_registry::infrastructure::driven_adapters::registry_client::HttpContentPublisher;
use learnfi_content_registry::shared::secret::SecretString;

/// Publish educational drafts to the LearnFi content registry
#[derive(Parser)]
#[command(name = "learnfi-agent")]
#[command(about = "Draft and publish educational content to the LearnFi registry")]
struct Args {
    /// Topics to draft content for
    #[arg(default_values = ["Blockchain Basics", "DeFi", "Smart Contracts", "Web3"])]
    topics: Vec<String>,

    /// Base URL of the registry API
    #[arg(long, env = "LEARNFI_REGISTRY_URL", default_value = "http://127.0.0.1:8080")]
    registry_url: String,

    /// Bearer token whose subject is the agent's account address
    #[arg(long, env = "LEARNFI_AGENT_TOKEN", hide_env_values = true)]
    token: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "learnfi_content_registry=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let publisher = HttpContentPublisher::new(&args.registry_url, SecretString::new(args.token))?;
    let use_case = PublishTopicsUseCase::new(Arc::new(publisher));

    tracing::info!(registry_url = %args.registry_url, topics = args.topics.len(), "Starting publishing run");
    let report = use_case.execute(&args.topics).await;

    for (topic, record) in &report.published {
        println!("published {topic:?} as content {}", record.id());
    }
    for (topic, error) in &report.failed {
        eprintln!("failed {topic:?}: {error}");
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
