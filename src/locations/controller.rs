use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{
        errors::DefaultApiError,
        models::{api_error::ApiError, json_from_request::JsonFromRequest},
    },
    AppState,
};

use super::{dtos::locate_dto::LocateDto, models::location_response::LocationResponse, service};

pub async fn locate(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<LocateDto>,
) -> Result<Json<LocationResponse>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let Some((latitude, longitude)) = dto.coordinates() else {
        return Err(DefaultApiError::InternalServerError.value());
    };

    match service::locate(latitude, longitude, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
