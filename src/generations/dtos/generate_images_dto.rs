use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PROMPT: &str = "Astronaut riding a horse in photorealistic style";
pub const DEFAULT_MODEL_ID: &str = "black-forest-labs/FLUX.1-dev";
pub const DEFAULT_NUM_IMAGES: u8 = 2;
pub const DEFAULT_SIZE: u16 = 512;
pub const DEFAULT_GUIDANCE_SCALE: f32 = 7.5;
pub const DEFAULT_STEPS: u16 = 50;

/// Seed value meaning "let the provider pick".
pub const RANDOM_SEED: i64 = -1;
pub const MAX_SEED: i64 = 1_000_000;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateImagesDto {
    #[serde(default)]
    #[validate(length(max = 1000, message = "prompt must be at most 1000 characters."))]
    pub prompt: String,
    #[serde(default = "default_model_id")]
    #[validate(length(
        min = 1,
        max = 200,
        message = "model_id must be between 1 and 200 characters."
    ))]
    pub model_id: String,
    #[serde(default = "default_num_images")]
    #[validate(range(min = 1, max = 10, message = "num_images must be between 1 and 10."))]
    pub num_images: u8,
    #[serde(default = "default_size")]
    #[validate(range(min = 256, max = 1024, message = "width must be between 256 and 1024."))]
    pub width: u16,
    #[serde(default = "default_size")]
    #[validate(range(min = 256, max = 1024, message = "height must be between 256 and 1024."))]
    pub height: u16,
    #[serde(default = "default_guidance_scale")]
    #[validate(range(
        min = 1.0,
        max = 20.0,
        message = "guidance_scale must be between 1 and 20."
    ))]
    pub guidance_scale: f32,
    #[serde(default = "default_steps")]
    #[validate(range(min = 10, max = 150, message = "steps must be between 10 and 150."))]
    pub steps: u16,
    #[serde(default)]
    #[validate(length(
        max = 1000,
        message = "negative_prompt must be at most 1000 characters."
    ))]
    pub negative_prompt: String,
    // -1 lower bound is checked when the settings are built
    #[serde(default = "default_seed")]
    #[validate(range(max = 1000000, message = "seed must be between -1 and 1000000."))]
    pub seed: i64,
}

impl Default for GenerateImagesDto {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            model_id: default_model_id(),
            num_images: default_num_images(),
            width: default_size(),
            height: default_size(),
            guidance_scale: default_guidance_scale(),
            steps: default_steps(),
            negative_prompt: String::new(),
            seed: default_seed(),
        }
    }
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_num_images() -> u8 {
    DEFAULT_NUM_IMAGES
}

fn default_size() -> u16 {
    DEFAULT_SIZE
}

fn default_guidance_scale() -> f32 {
    DEFAULT_GUIDANCE_SCALE
}

fn default_steps() -> u16 {
    DEFAULT_STEPS
}

fn default_seed() -> i64 {
    RANDOM_SEED
}
