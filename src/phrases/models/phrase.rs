use serde::{Deserialize, Serialize};

/// One entry of a phrase bundle. Missing fields decode as empty strings so
/// that incomplete entries can be reported by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub transliteration: String,
}

impl Phrase {
    pub fn is_complete(&self) -> bool {
        !self.phrase.trim().is_empty()
            && !self.translation.trim().is_empty()
            && !self.transliteration.trim().is_empty()
    }
}
