pub mod config_resolution_service;
pub mod translation_service;

#[cfg(test)]
mod translation_service_test;

// Re-exportar para facilitar acceso
pub use config_resolution_service::ConfigResolutionService;
pub use translation_service::TranslationService;
