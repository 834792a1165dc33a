use serde::Serialize;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    client::IssueOutcome,
    decode,
    dtos::generate_phrases_dto::GeneratePhrasesDto,
    enums::conversation_mode::ConversationMode,
    errors::PhrasesApiError,
    models::{chat_message::ChatMessage, chat_payload::ChatPayload, phrase::Phrase},
};

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPhrases {
    pub response: String,
    pub phrases: Option<Vec<Phrase>>,
}

pub async fn generate_phrases(
    dto: &GeneratePhrasesDto,
    state: &AppState,
) -> Result<GeneratedPhrases, ApiError> {
    let user_message = ChatMessage::user(dto.user_content());

    // the lock is not held across the upstream call
    let messages = {
        let mut conversation = state.conversation.write().await;

        if ConversationMode::from_mode(dto.mode.as_deref()) == ConversationMode::New {
            conversation.reset();
        }

        conversation.with_message(user_message.clone())
    };

    let payload = ChatPayload::new(messages, state.generation_params);

    let body = match state.phrase_client.issue(&payload).await {
        Ok(IssueOutcome::Success(body)) => body,
        Ok(IssueOutcome::Failure { status, text }) => {
            tracing::error!(status, %text, "phrase endpoint returned an error");
            return Err(PhrasesApiError::GenerationFailed.value());
        }
        Err(e) => {
            tracing::error!(%e);
            return Err(PhrasesApiError::GenerationFailed.value());
        }
    };

    let content = match decode::assistant_content(&body) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(%e, %body);
            return Err(PhrasesApiError::GenerationFailed.value());
        }
    };

    // only answered turns are recorded
    {
        let mut conversation = state.conversation.write().await;
        conversation.push(user_message);
        conversation.push(ChatMessage::assistant(content.to_string()));
    }

    let phrases = match decode::parse_phrases(&content) {
        Ok(phrases) => Some(phrases),
        Err(e) => {
            tracing::warn!(%e, %content, "could not decode phrases");
            None
        }
    };

    Ok(GeneratedPhrases {
        response: content,
        phrases,
    })
}
