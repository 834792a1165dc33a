pub mod chat_role;
pub mod conversation_mode;
