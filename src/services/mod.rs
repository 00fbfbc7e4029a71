//! Clients for the external generation services.
//!
//! Both services are opaque collaborators: one request, one response, no
//! retry. The traits let the intro form be driven by fakes in tests.

mod description;
mod error;
mod tags;

use async_trait::async_trait;

pub use description::{
    Big5, DescriptionClient, DescriptionRequest, GenerationOptions, ImageHints, Personality,
    GENERIC_FAILURE,
};
pub use error::ServiceError;
pub use tags::TagClient;

/// Extracts descriptive tags from a photo.
#[async_trait]
pub trait TagService: Send + Sync {
    async fn extract_tags(
        &self,
        file_name: &str,
        image: Vec<u8>,
    ) -> Result<Vec<String>, ServiceError>;
}

/// Writes an introduction from profile attributes.
#[async_trait]
pub trait DescriptionService: Send + Sync {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String, ServiceError>;
}
