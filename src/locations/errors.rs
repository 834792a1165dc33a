use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum LocationsApiError {
    LookupFailed,
}

impl LocationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::LookupFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to fetch location information.".to_string(),
            },
        }
    }
}
