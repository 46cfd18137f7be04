//! Registry HTTP Client
//!
//! `ContentPublisher` backed by a running registry's REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::gateways::ContentPublisher;
use crate::domain::models::content::{ContentRecord, ContentSubmission};
use crate::infrastructure::driving_adapters::api_rest::dto::content::{ContentResponseDto, CreateContentDto};
use crate::shared::errors::{ErrorResponse, PublisherError};
use crate::shared::secret::SecretString;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Publishes submissions with `POST {base_url}/contents`
pub struct HttpContentPublisher {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl HttpContentPublisher {
    /// Create a publisher for the registry at `base_url`, authenticating with `token`
    ///
    /// # Errors
    ///
    /// Returns `PublisherError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: SecretString) -> Result<Self, PublisherError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn contents_url(&self) -> String {
        format!("{}/contents", self.base_url)
    }
}

#[async_trait]
impl ContentPublisher for HttpContentPublisher {
    async fn publish(&self, submission: &ContentSubmission) -> Result<ContentRecord, PublisherError> {
        let response = self
            .client
            .post(self.contents_url())
            .bearer_auth(self.token.expose_secret())
            .json(&CreateContentDto::from(submission))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CREATED || status == StatusCode::OK {
            let dto: ContentResponseDto = response
                .json()
                .await
                .map_err(|e| PublisherError::MalformedResponse(e.to_string()))?;
            return ContentRecord::try_from(dto).map_err(|e| PublisherError::MalformedResponse(e.to_string()));
        }

        let body = response.text().await?;
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => Err(PublisherError::Rejected {
                status: status.as_u16(),
                code: error.error.code,
                message: error.error.message,
            }),
            Err(_) => Err(PublisherError::Rejected {
                status: status.as_u16(),
                code: "UNKNOWN".to_string(),
                message: body,
            }),
        }
    }
}
