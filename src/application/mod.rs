pub mod dtos;
pub mod ports;
pub mod services;

// Re-exportaciones para facilitar el acceso a los principales puertos
pub use ports::cache_ports::CachePort;
pub use ports::config_ports::ConfigResolutionUseCase;
pub use ports::translation_ports::TranslationUseCase;
