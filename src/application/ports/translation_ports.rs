use async_trait::async_trait;

use crate::application::dtos::translation_dto::{
    CreateTranslationDto, ResolvedTranslationDto, TranslationDto, UpdateTranslationDto,
};
use crate::common::errors::DomainError;

/// Puerto primario para contenido multilingüe de configuraciones
#[async_trait]
pub trait TranslationUseCase: Send + Sync + 'static {
    /// Negotiates the language for a request from its explicit parameter and preference header
    fn resolve_language(&self, explicit: Option<&str>, preference_header: Option<&str>) -> String;

    fn supported_languages(&self) -> Vec<String>;

    fn default_language(&self) -> String;

    /// Creates a translation; the language comes from the DTO
    async fn create_translation(&self, config_id: i64, dto: CreateTranslationDto) -> Result<TranslationDto, DomainError>;

    /// Applies a partial update to an existing translation
    async fn update_translation(
        &self,
        config_id: i64,
        language_code: &str,
        dto: UpdateTranslationDto,
    ) -> Result<TranslationDto, DomainError>;

    /// Reads one translation, cache first; `None` when it doesn't exist
    async fn get_translation(&self, config_id: i64, language_code: &str) -> Result<Option<TranslationDto>, DomainError>;

    /// Reads the requested language, falling back to the default language
    async fn get_translation_with_fallback(
        &self,
        config_id: i64,
        language_code: &str,
    ) -> Result<ResolvedTranslationDto, DomainError>;

    /// Every translation of a configuration, ordered by language code
    async fn get_all_translations(&self, config_id: i64) -> Result<Vec<TranslationDto>, DomainError>;

    /// Deletes a translation, protecting the default language
    async fn delete_translation(&self, config_id: i64, language_code: &str) -> Result<(), DomainError>;

    /// Drops every cached language of a configuration
    async fn invalidate_all_caches_for_config(&self, config_id: i64);
}
