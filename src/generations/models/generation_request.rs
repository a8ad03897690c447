use crate::{
    app::models::api_error::ApiError,
    generations::{
        dtos::generate_images_dto::{GenerateImagesDto, RANDOM_SEED},
        errors::GenerationsApiError,
    },
};

/// Snapshot of the submitted form, taken once per generate action.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub prompt: String,
    pub model_id: String,
    pub negative_prompt: String,
    pub num_images: u8,
    pub width: u16,
    pub height: u16,
    pub guidance_scale: f32,
    pub steps: u16,
    /// `None` when every slot should draw its own seed.
    pub seed: Option<u64>,
}

impl GenerationSettings {
    pub fn from_dto(dto: &GenerateImagesDto) -> Result<Self, ApiError> {
        let seed = match dto.seed {
            RANDOM_SEED => None,
            seed if seed >= 0 => Some(seed as u64),
            _ => return Err(GenerationsApiError::SeedOutOfRange.value()),
        };

        Ok(Self {
            prompt: dto.prompt.to_string(),
            model_id: dto.model_id.trim().to_string(),
            negative_prompt: dto.negative_prompt.to_string(),
            num_images: dto.num_images,
            width: dto.width,
            height: dto.height,
            guidance_scale: dto.guidance_scale,
            steps: dto.steps,
            seed,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// 1-based position of this request within its batch.
    pub slot: u8,
    pub prompt: String,
    pub model_id: String,
    pub negative_prompt: String,
    pub width: u16,
    pub height: u16,
    pub guidance_scale: f32,
    pub steps: u16,
    pub seed: u64,
}

impl GenerationRequest {
    pub fn from_settings(slot: u8, seed: u64, settings: &GenerationSettings) -> Self {
        Self {
            slot,
            prompt: settings.prompt.to_string(),
            model_id: settings.model_id.to_string(),
            negative_prompt: settings.negative_prompt.to_string(),
            width: settings.width,
            height: settings.height,
            guidance_scale: settings.guidance_scale,
            steps: settings.steps,
            seed,
        }
    }

    pub fn file_name(&self) -> String {
        format!("generated_image_{}.png", self.slot)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn sentinel_seed_becomes_none() {
        let settings = GenerationSettings::from_dto(&GenerateImagesDto::default()).unwrap();
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn explicit_seed_is_kept() {
        let dto = GenerateImagesDto {
            seed: 42,
            ..Default::default()
        };
        let settings = GenerationSettings::from_dto(&dto).unwrap();
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn seed_below_sentinel_is_rejected() {
        let dto = GenerateImagesDto {
            seed: -2,
            ..Default::default()
        };
        let err = GenerationSettings::from_dto(&dto).unwrap_err();
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn file_name_uses_slot() {
        let settings = GenerationSettings::from_dto(&GenerateImagesDto::default()).unwrap();
        let request = GenerationRequest::from_settings(3, 7, &settings);
        assert_eq!(request.file_name(), "generated_image_3.png");
    }
}
