use serde::Serialize;

use crate::phrases::prompts::{EXAMPLE_PLACE, SYSTEM_PROMPT};

use super::{chat_message::ChatMessage, generation_params::GenerationParams};

#[derive(Debug, Clone, Serialize)]
pub struct ChatPayload {
    pub messages: Vec<ChatMessage>,
    #[serde(flatten)]
    pub params: GenerationParams,
}

impl ChatPayload {
    pub fn new(messages: Vec<ChatMessage>, params: GenerationParams) -> Self {
        Self { messages, params }
    }

    /// The fixed system + user pair sent by the one-shot issuer.
    pub fn example() -> Self {
        Self::new(
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(EXAMPLE_PLACE),
            ],
            GenerationParams::default(),
        )
    }
}
