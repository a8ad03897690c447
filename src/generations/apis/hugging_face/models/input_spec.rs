use serde::Serialize;

use crate::generations::models::generation_request::GenerationRequest;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub inputs: String,
    pub parameters: InputParameters,
}

#[derive(Debug, Serialize)]
pub struct InputParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub guidance_scale: f32,
    pub num_inference_steps: u16,
    pub width: u16,
    pub height: u16,
    pub seed: u64,
}

impl InputSpec {
    pub fn from_request(request: &GenerationRequest) -> Self {
        let negative_prompt = match request.negative_prompt.trim().is_empty() {
            true => None,
            false => Some(request.negative_prompt.to_string()),
        };

        Self {
            inputs: request.prompt.to_string(),
            parameters: InputParameters {
                negative_prompt,
                guidance_scale: request.guidance_scale,
                num_inference_steps: request.steps,
                width: request.width,
                height: request.height,
                seed: request.seed,
            },
        }
    }
}
