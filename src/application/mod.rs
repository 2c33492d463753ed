pub mod dto;
pub mod services;
