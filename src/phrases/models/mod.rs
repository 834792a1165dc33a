pub mod chat_completion_response;
pub mod chat_message;
pub mod chat_payload;
pub mod generation_params;
pub mod phrase;
