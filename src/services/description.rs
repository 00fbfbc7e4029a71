//! Client for the introduction (description) generation service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ServicesConfig;

use super::error::ServiceError;
use super::DescriptionService;

const SERVICE: &str = "description";

/// Fallback shown when the service gives no message of its own.
pub const GENERIC_FAILURE: &str = "Failed to generate introduction";

/// Big Five personality scores on a 1–7 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Big5 {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl Default for Big5 {
    /// Every trait at the neutral midpoint.
    fn default() -> Self {
        Self {
            openness: 4,
            conscientiousness: 4,
            extraversion: 4,
            agreeableness: 4,
            neuroticism: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub mbti: String,
    pub big5: Big5,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHints {
    pub has_image: bool,
    pub auto_detected_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub max_length: u32,
    pub language: String,
}

/// Request body for the description service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub personality: Personality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageHints>,
    pub options: GenerationOptions,
}

#[derive(Debug, Deserialize)]
struct DescriptionResponse {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the description service.
pub struct DescriptionClient {
    client: Client,
    url: String,
}

impl DescriptionClient {
    pub fn new(config: &ServicesConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            url: config.description_url.clone(),
        })
    }
}

#[async_trait]
impl DescriptionService for DescriptionClient {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String, ServiceError> {
        tracing::debug!(
            url = %self.url,
            tag_count = request.personality.tags.len(),
            has_image = request.image.is_some(),
            "Requesting description"
        );

        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());

            tracing::error!(status = %status, error = %message, "Description service error");
            return Err(ServiceError::Api {
                service: SERVICE,
                status: status.as_u16(),
                message,
            });
        }

        let body: DescriptionResponse =
            serde_json::from_str(&text).map_err(|e| ServiceError::Parse {
                service: SERVICE,
                source: e,
            })?;

        match body.description {
            Some(description) if !description.is_empty() => {
                tracing::info!(len = description.len(), "Generated description");
                Ok(description)
            }
            _ => Err(ServiceError::EmptyDescription),
        }
    }
}
