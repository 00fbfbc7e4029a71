//! Client for the image tagging service.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::config::ServicesConfig;

use super::error::ServiceError;
use super::TagService;

const SERVICE: &str = "tag";

/// Response body: `{"tags": [...]}`. A missing or null list means no tags.
#[derive(Debug, Deserialize)]
struct TagResponse {
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// HTTP client posting an image as multipart `image` field.
pub struct TagClient {
    client: Client,
    url: String,
}

impl TagClient {
    pub fn new(config: &ServicesConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            url: config.tag_url.clone(),
        })
    }

    /// Read an image from disk and extract tags from it.
    pub async fn extract_tags_from_file(&self, path: &Path) -> Result<Vec<String>, ServiceError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| ServiceError::ReadImage {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        self.extract_tags(&file_name, bytes).await
    }
}

#[async_trait]
impl TagService for TagClient {
    async fn extract_tags(
        &self,
        file_name: &str,
        image: Vec<u8>,
    ) -> Result<Vec<String>, ServiceError> {
        tracing::debug!(url = %self.url, file_name, bytes = image.len(), "Requesting image tags");

        let form = Form::new().part("image", Part::bytes(image).file_name(file_name.to_string()));
        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Tag service error");
            return Err(ServiceError::Api {
                service: SERVICE,
                status: status.as_u16(),
                message: "Failed to generate image tags".to_string(),
            });
        }

        let text = response.text().await?;
        let body: TagResponse = serde_json::from_str(&text).map_err(|e| ServiceError::Parse {
            service: SERVICE,
            source: e,
        })?;

        let tags = body.tags.unwrap_or_default();
        tracing::info!(count = tags.len(), "Extracted image tags");
        Ok(tags)
    }
}
