use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_phrases_dto::GeneratePhrasesDto,
    service::{self, GeneratedPhrases},
};

pub async fn generate_phrases(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GeneratePhrasesDto>,
) -> Result<Json<GeneratedPhrases>, ApiError> {
    let dto = dto.sanitized();

    match dto.validate() {
        Ok(_) => match service::generate_phrases(&dto, &state).await {
            Ok(generated) => Ok(Json(generated)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
