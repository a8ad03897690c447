use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_images_dto::GenerateImagesDto, models::generation_result::GenerationBatch,
    service,
};

pub async fn generate_images(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImagesDto>,
) -> Result<Json<GenerationBatch>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_images(&dto, state.provider.as_ref(), &state.envy.app_url)
            .await
        {
            Ok(batch) => Ok(Json(batch)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
