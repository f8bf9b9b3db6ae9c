use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dtos::config_dto::ResolvedConfigDto;
use crate::application::ports::config_ports::ConfigResolutionUseCase;
use crate::application::ports::translation_ports::TranslationUseCase;
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::site_config::{normalize_hostname, SiteConfig};
use crate::domain::repositories::config_repository::ConfigRepository;

/// Merges a configuration's non-translatable fields with its translation
pub struct ConfigResolutionService {
    config_repository: Arc<dyn ConfigRepository>,
    /// `None` when multilingual support is unavailable
    translations: Option<Arc<dyn TranslationUseCase>>,
}

impl ConfigResolutionService {
    pub fn new(
        config_repository: Arc<dyn ConfigRepository>,
        translations: Option<Arc<dyn TranslationUseCase>>,
    ) -> Self {
        Self {
            config_repository,
            translations,
        }
    }

    async fn merge(
        &self,
        config: SiteConfig,
        explicit_language: Option<&str>,
        preference_header: Option<&str>,
    ) -> Result<ResolvedConfigDto> {
        let Some(translations) = &self.translations else {
            return Ok(ResolvedConfigDto::untranslated(config));
        };

        let language = translations.resolve_language(explicit_language, preference_header);
        let resolved = translations.get_translation_with_fallback(config.id, &language).await?;
        Ok(ResolvedConfigDto::translated(config, resolved))
    }
}

#[async_trait]
impl ConfigResolutionUseCase for ConfigResolutionService {
    async fn resolve_config(
        &self,
        config_id: i64,
        explicit_language: Option<&str>,
        preference_header: Option<&str>,
    ) -> Result<ResolvedConfigDto> {
        let config = self
            .config_repository
            .find_config(config_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Config", config_id.to_string()))?;

        self.merge(config, explicit_language, preference_header).await
    }

    async fn resolve_domain(
        &self,
        hostname: &str,
        explicit_language: Option<&str>,
        preference_header: Option<&str>,
    ) -> Result<ResolvedConfigDto> {
        let hostname = normalize_hostname(hostname);
        if hostname.is_empty() {
            return Err(DomainError::validation_error("Domain", "domain is required").with_fields(["domain"]));
        }

        let config = self
            .config_repository
            .find_config_by_domain(&hostname)
            .await?
            .ok_or_else(|| DomainError::not_found("Domain", hostname.clone()))?;

        self.merge(config, explicit_language, preference_header).await
    }

    async fn delete_config(&self, config_id: i64) -> Result<()> {
        if !self.config_repository.delete_config(config_id).await? {
            return Err(DomainError::not_found("Config", config_id.to_string()));
        }

        // La cascada del almacén no llega a la caché
        if let Some(translations) = &self.translations {
            translations.invalidate_all_caches_for_config(config_id).await;
        }

        tracing::info!("Deleted config {}", config_id);
        Ok(())
    }
}
