pub mod config_repository;
pub mod translation_repository;
