use super::models::chat_message::ChatMessage;

/// Message history shared by phrase requests on the server.
///
/// The first message is always the system prompt; `reset` drops everything
/// after it. Nothing else trims the history: every answered turn stays and is
/// sent again with each later request until the next reset.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system_prompt)],
        }
    }

    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// History plus `message`, without recording it.
    pub fn with_message(&self, message: ChatMessage) -> Vec<ChatMessage> {
        let mut messages = self.messages.clone();
        messages.push(message);

        messages
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
