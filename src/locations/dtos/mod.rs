pub mod locate_dto;
