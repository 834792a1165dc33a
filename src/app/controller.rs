use axum::Json;
use serde_json::{json, Value};

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root() -> Result<(), ApiError> {
    Ok(())
}

pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}
