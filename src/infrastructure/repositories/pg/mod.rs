mod config_pg_repository;
mod translation_pg_repository;

pub use config_pg_repository::ConfigPgRepository;
pub use translation_pg_repository::TranslationPgRepository;
