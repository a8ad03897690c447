use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, StatusCode};

use crate::{
    app::env::Envy,
    generations::{
        apis::inference_provider::{InferenceProvider, ProviderError},
        models::generation_request::GenerationRequest,
    },
};

use super::{
    config::{API_URL, DEFAULT_TIMEOUT_SECS},
    models::input_spec::InputSpec,
    structs::hugging_face_error_response::HuggingFaceErrorResponse,
};

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(api_key: &str, api_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_envy(envy: &Envy) -> Result<Self, reqwest::Error> {
        Self::new(
            &envy.hf_api_key,
            envy.inference_api_url.as_deref().unwrap_or(API_URL),
            Duration::from_secs(envy.inference_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        )
    }

    fn model_url(&self, model_id: &str) -> String {
        format!("{}/{}", self.api_url, model_id)
    }
}

#[async_trait]
impl InferenceProvider for HuggingFaceClient {
    async fn text_to_image(&self, request: &GenerationRequest) -> Result<Bytes, ProviderError> {
        let input_spec = InputSpec::from_request(request);
        let url = self.model_url(&request.model_id);

        tracing::debug!(
            "text_to_image slot {} model {} seed {}",
            request.slot,
            request.model_id,
            request.seed
        );

        let result = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "image/png")
            .json(&input_spec)
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!("text_to_image (1): {:?}", e);
                return Err(ProviderError::new(e.to_string()));
            }
        };

        let status = res.status();

        match res.bytes().await {
            Ok(bytes) if status.is_success() => Ok(bytes),
            Ok(bytes) => {
                let message = error_message(status, &bytes);
                tracing::warn!("text_to_image (2): {} {}", status, message);
                Err(ProviderError::new(message))
            }
            Err(e) => {
                tracing::warn!("text_to_image (3): {:?}", e);
                Err(ProviderError::new(e.to_string()))
            }
        }
    }
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(response) = serde_json::from_slice::<HuggingFaceErrorResponse>(body) {
        return response.error;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    if text.is_empty() {
        status.to_string()
    } else {
        text.to_string()
    }
}
