pub mod apis;
pub mod config;
pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod util;
