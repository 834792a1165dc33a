use serde::Deserialize;
use serde_json::Value;

use super::{
    errors::PhraseError,
    models::{chat_completion_response::ChatCompletionResponse, phrase::Phrase},
};

#[derive(Deserialize)]
#[serde(untagged)]
enum PhrasePayload {
    List(Vec<Phrase>),
    Wrapped { phrases: Vec<Phrase> },
    Single(Phrase),
}

/// Pulls `choices[0].message.content` out of a chat completion body.
pub fn assistant_content(body: &Value) -> Result<String, PhraseError> {
    let response = ChatCompletionResponse::deserialize(body).map_err(PhraseError::Decode)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(PhraseError::MissingContent)
}

/// Decodes assistant content into a phrase bundle.
///
/// Accepts a JSON array, a single phrase object or `{"phrases": [...]}`,
/// optionally wrapped in a markdown code fence.
pub fn parse_phrases(content: &str) -> Result<Vec<Phrase>, PhraseError> {
    let payload: PhrasePayload =
        serde_json::from_str(strip_code_fence(content)).map_err(PhraseError::InvalidJson)?;

    let phrases = match payload {
        PhrasePayload::List(phrases) => phrases,
        PhrasePayload::Wrapped { phrases } => phrases,
        PhrasePayload::Single(phrase) => vec![phrase],
    };

    if let Some(index) = phrases.iter().position(|phrase| !phrase.is_complete()) {
        return Err(PhraseError::InvalidPhrase(index));
    }

    Ok(phrases)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop the language tag line, e.g. ```json
    let inner = match inner.find('\n') {
        Some(index) => &inner[index + 1..],
        None => inner,
    };

    inner.trim_end().trim_end_matches("```").trim()
}
