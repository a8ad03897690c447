use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HuggingFaceErrorResponse {
    pub error: String,
}
