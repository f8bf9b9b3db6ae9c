pub mod config_dto;
pub mod translation_dto;
