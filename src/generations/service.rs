use rand::Rng;
use uuid::Uuid;

use crate::app::models::api_error::ApiError;

use super::{
    apis::inference_provider::InferenceProvider,
    dtos::generate_images_dto::{GenerateImagesDto, MAX_SEED},
    errors::GenerationsApiError,
    models::{
        generation_request::{GenerationRequest, GenerationSettings},
        generation_result::{GeneratedImage, GenerationBatch, GenerationResult, SlotOutcome},
        share_links::ShareLinks,
    },
    util::png,
};

pub async fn generate_images(
    dto: &GenerateImagesDto,
    provider: &dyn InferenceProvider,
    app_url: &str,
) -> Result<GenerationBatch, ApiError> {
    let settings = GenerationSettings::from_dto(dto)?;
    let requests = build_requests(&settings)?;

    let batch_id = Uuid::new_v4();
    tracing::info!(
        "batch {}: generating {} images with {}",
        batch_id,
        requests.len(),
        settings.model_id
    );

    // slots run one after another; a failed slot never stops the rest
    let mut results = Vec::with_capacity(requests.len());
    for request in &requests {
        results.push(generate_slot(request, provider, app_url).await);
    }

    let succeeded = results.iter().filter(|r| r.is_image()).count();
    tracing::info!(
        "batch {}: {} of {} images generated",
        batch_id,
        succeeded,
        results.len()
    );

    Ok(GenerationBatch {
        id: batch_id,
        prompt: settings.prompt,
        model_id: settings.model_id,
        results,
    })
}

/// Builds one request per slot. Slots share every field except the seed,
/// which is drawn per slot when the settings leave it unset.
pub fn build_requests(settings: &GenerationSettings) -> Result<Vec<GenerationRequest>, ApiError> {
    if settings.prompt.trim().is_empty() {
        return Err(GenerationsApiError::EmptyPrompt.value());
    }

    let mut rng = rand::thread_rng();

    Ok((1..=settings.num_images)
        .map(|slot| {
            let seed = match settings.seed {
                Some(seed) => seed,
                None => rng.gen_range(0..=MAX_SEED as u64),
            };
            GenerationRequest::from_settings(slot, seed, settings)
        })
        .collect())
}

async fn generate_slot(
    request: &GenerationRequest,
    provider: &dyn InferenceProvider,
    app_url: &str,
) -> GenerationResult {
    let outcome = match provider.text_to_image(request).await {
        Ok(bytes) => match present_image(request, &bytes, app_url) {
            Ok(image) => SlotOutcome::Image(image),
            Err(e) => {
                tracing::error!("slot {} returned an unreadable image: {}", request.slot, e);
                failure(request, &e.to_string())
            }
        },
        Err(e) => {
            tracing::error!("slot {} failed: {}", request.slot, e);
            failure(request, &e.message)
        }
    };

    GenerationResult {
        slot: request.slot,
        outcome,
    }
}

pub fn present_image(
    request: &GenerationRequest,
    data: &[u8],
    app_url: &str,
) -> Result<GeneratedImage, image::ImageError> {
    let encoded = png::reencode_as_png(data)?;

    Ok(GeneratedImage {
        file_name: request.file_name(),
        mime_type: mime::IMAGE_PNG.to_string(),
        width: encoded.width,
        height: encoded.height,
        seed: request.seed,
        data: base64::encode(&encoded.bytes),
        share_links: ShareLinks::new(&request.prompt, app_url),
    })
}

fn failure(request: &GenerationRequest, message: &str) -> SlotOutcome {
    SlotOutcome::Failure {
        message: format!("Error generating image {}: {}", request.slot, message),
    }
}
