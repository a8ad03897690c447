use serde::Serialize;
use uuid::Uuid;

use super::share_links::ShareLinks;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationBatch {
    pub id: Uuid,
    pub prompt: String,
    pub model_id: String,
    pub results: Vec<GenerationResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub slot: u8,
    #[serde(flatten)]
    pub outcome: SlotOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotOutcome {
    Image(GeneratedImage),
    Failure { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub file_name: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    /// Base64 encoded PNG.
    pub data: String,
    pub share_links: ShareLinks,
}

impl GenerationResult {
    pub fn is_image(&self) -> bool {
        matches!(self.outcome, SlotOutcome::Image(_))
    }
}
