pub mod client;
pub mod controller;
pub mod conversation;
pub mod decode;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod prompts;
pub mod service;
