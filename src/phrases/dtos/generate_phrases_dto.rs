use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::phrases::prompts::place_description;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePhrasesDto {
    #[validate(length(
        min = 1,
        max = 500,
        message = "name must be between 1 and 500 characters."
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 500,
        message = "category must be between 1 and 500 characters."
    ))]
    pub category: String,
    #[validate(length(
        min = 1,
        max = 500,
        message = "address must be between 1 and 500 characters."
    ))]
    pub address: String,
    pub mode: Option<String>,
}

impl GeneratePhrasesDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            address: self.address.trim().replace("\n", " ").replace("\r", ""),
            mode: self.mode.clone(),
        };
    }

    pub fn user_content(&self) -> String {
        place_description(&self.name, &self.category, &self.address)
    }
}

#[cfg(test)]
mod tests {
    use crate::phrases::enums::conversation_mode::ConversationMode;

    use super::*;

    fn dto(name: &str) -> GeneratePhrasesDto {
        GeneratePhrasesDto {
            name: name.to_string(),
            category: "음식점 > 카페".to_string(),
            address: "경북 포항시 남구 효자동 253-105".to_string(),
            mode: Some(" New ".to_string()),
        }
    }

    #[test]
    fn empty_name_fails_validation() {
        assert!(dto("").validate().is_err());
        assert!(dto("까오산").validate().is_ok());
    }

    #[test]
    fn user_content_lists_address_name_and_category() {
        let content = dto("까오산").sanitized().user_content();

        assert_eq!(
            content,
            "Address: 경북 포항시 남구 효자동 253-105, Name: 까오산, Category: 음식점 > 카페"
        );
    }

    #[test]
    fn sanitized_keeps_mode_as_sent() {
        let dto = dto("까오산").sanitized();

        assert_eq!(dto.mode.as_deref(), Some(" New "));
        assert_eq!(
            ConversationMode::from_mode(dto.mode.as_deref()),
            ConversationMode::Append
        );
    }
}
