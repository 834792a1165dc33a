pub mod generate_phrases_dto;
