use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

use crate::generations::models::generation_request::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProviderError {}

/// A hosted text-to-image backend. One call produces one image.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn text_to_image(&self, request: &GenerationRequest) -> Result<Bytes, ProviderError>;
}
