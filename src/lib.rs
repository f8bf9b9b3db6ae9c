// Exportar los módulos principales del proyecto
pub mod common;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// Re-exportaciones públicas comunes
pub use application::services::config_resolution_service::ConfigResolutionService;
pub use application::services::translation_service::TranslationService;
pub use domain::services::language_resolver::LanguageResolver;
pub use infrastructure::services::redis_cache_adapter::RedisCacheAdapter;
