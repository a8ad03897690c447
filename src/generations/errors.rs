use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationsApiError {
    EmptyPrompt,
    SeedOutOfRange,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::EmptyPrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please enter a prompt!".to_string(),
            },
            Self::SeedOutOfRange => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "seed must be between -1 and 1000000.".to_string(),
            },
        }
    }
}
