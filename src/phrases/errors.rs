use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

/// Failures talking to the phrase endpoint or reading what it returned.
#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("phrase request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api key cannot be sent as a header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("response body is not valid json: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response has no assistant message content")]
    MissingContent,

    #[error("assistant content is not phrase json: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("phrase {0} is missing phrase, translation or transliteration")]
    InvalidPhrase(usize),
}

#[derive(Debug)]
pub enum PhrasesApiError {
    GenerationFailed,
}

impl PhrasesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate phrases.".to_string(),
            },
        }
    }
}
