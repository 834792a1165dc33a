#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationMode {
    New,
    Append,
}

impl ConversationMode {
    /// Anything other than `"new"` keeps the existing history.
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some("new") => Self::New,
            _ => Self::Append,
        }
    }
}
