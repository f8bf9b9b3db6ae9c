use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dtos::translation_dto::{
    CreateTranslationDto, ResolvedTranslationDto, TranslationDto, UpdateTranslationDto,
};
use crate::application::ports::cache_ports::CachePort;
use crate::application::ports::translation_ports::TranslationUseCase;
use crate::common::errors::DomainError;
use crate::domain::entities::translation::{Translation, TranslationChanges, TranslationContent};
use crate::domain::repositories::translation_repository::{
    NewTranslationRecord, TranslationRecord, TranslationRecordChanges, TranslationRepository,
    TranslationRepositoryError,
};
use crate::domain::services::keyword_codec::{decode_keywords, encode_keywords};
use crate::domain::services::language_resolver::{normalize, LanguageResolver};

/// Expiry of every populated translation cache entry
pub const TRANSLATION_CACHE_TTL_SECS: u64 = 3600;

/// Cache slot of one (configuration, language) pair
pub fn translation_cache_key(config_id: i64, language_code: &str) -> String {
    format!("config:{}:lang:{}", config_id, language_code)
}

/// Glob matching every cached language of a configuration
pub fn config_cache_pattern(config_id: i64) -> String {
    format!("config:{}:lang:*", config_id)
}

/// Single authority for reading, writing and invalidating translations.
///
/// Reads populate the cache lazily on a miss; every write invalidates the
/// affected slot instead of updating it.
pub struct TranslationService {
    repository: Arc<dyn TranslationRepository>,
    cache: Arc<dyn CachePort>,
    resolver: Arc<LanguageResolver>,
}

impl TranslationService {
    pub fn new(
        repository: Arc<dyn TranslationRepository>,
        cache: Arc<dyn CachePort>,
        resolver: Arc<LanguageResolver>,
    ) -> Self {
        Self {
            repository,
            cache,
            resolver,
        }
    }

    fn to_dto(record: TranslationRecord) -> TranslationDto {
        TranslationDto::from(Translation {
            id: record.id,
            config_id: record.config_id,
            keywords: decode_keywords(&record.keywords),
            language_code: record.language_code,
            title: record.title,
            author: record.author,
            description: record.description,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    fn conflict(config_id: i64, language_code: &str) -> DomainError {
        DomainError::already_exists(
            "Translation",
            format!("config {} already has a '{}' translation", config_id, language_code),
        )
        .with_fields(["language_code"])
    }

    fn missing(config_id: i64, language_code: &str) -> DomainError {
        DomainError::not_found("Translation", format!("config {} language '{}'", config_id, language_code))
    }

    /// Validates the language of a new translation; `None` when acceptable
    fn language_problem(&self, language_code: &str) -> Option<String> {
        if language_code.is_empty() {
            Some("language_code is required".to_string())
        } else if !self.resolver.is_supported(language_code) {
            Some(format!("unsupported language code: {}", language_code))
        } else {
            None
        }
    }

    async fn read_cached(&self, key: &str) -> Option<TranslationDto> {
        let value = self.cache.get(key).await?;
        match serde_json::from_value(value) {
            Ok(dto) => Some(dto),
            Err(e) => {
                tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn store_cached(&self, key: &str, dto: &TranslationDto) {
        match serde_json::to_value(dto) {
            Ok(value) => self.cache.set(key, &value, TRANSLATION_CACHE_TTL_SECS).await,
            Err(e) => tracing::warn!("Could not encode translation for cache {}: {}", key, e),
        }
    }
}

#[async_trait]
impl TranslationUseCase for TranslationService {
    fn resolve_language(&self, explicit: Option<&str>, preference_header: Option<&str>) -> String {
        self.resolver.resolve(explicit, preference_header)
    }

    fn supported_languages(&self) -> Vec<String> {
        self.resolver.supported_languages().to_vec()
    }

    fn default_language(&self) -> String {
        self.resolver.default_language().to_string()
    }

    async fn create_translation(&self, config_id: i64, dto: CreateTranslationDto) -> Result<TranslationDto, DomainError> {
        let language_code = normalize(dto.language_code.as_deref().unwrap_or_default());

        let language_problem = self.language_problem(&language_code);
        let content = TranslationContent::new(dto.title, dto.author, dto.description, dto.keywords);
        let content = match (language_problem, content) {
            (None, Ok(content)) => content,
            (Some(message), Ok(_)) => {
                return Err(DomainError::validation_error("Translation", message).with_fields(["language_code"]));
            }
            (problem, Err(err)) => {
                let mut err = DomainError::from(err);
                if let Some(message) = problem {
                    err.message = format!("{}; {}", message, err.message);
                    err.fields.insert(0, "language_code".to_string());
                }
                return Err(err);
            }
        };

        if self.repository.find_translation(config_id, &language_code).await?.is_some() {
            return Err(Self::conflict(config_id, &language_code));
        }

        let record = NewTranslationRecord {
            config_id,
            language_code: language_code.clone(),
            title: content.title,
            author: content.author,
            description: content.description,
            keywords: encode_keywords(&content.keywords),
        };

        // The store's unique constraint backs up the pre-check under concurrent creates
        let created = self
            .repository
            .create_translation(record)
            .await
            .map_err(|err| match err {
                TranslationRepositoryError::UniqueViolation(_) => Self::conflict(config_id, &language_code),
                other => DomainError::from(other),
            })?;

        self.cache.delete(&translation_cache_key(config_id, &language_code)).await;
        tracing::info!("Created translation {} for config {} ({})", created.id, config_id, language_code);

        Ok(Self::to_dto(created))
    }

    async fn update_translation(
        &self,
        config_id: i64,
        language_code: &str,
        dto: UpdateTranslationDto,
    ) -> Result<TranslationDto, DomainError> {
        let language_code = normalize(language_code);
        let changes = TranslationChanges::from(dto);
        changes.validate()?;

        let existing = self
            .repository
            .find_translation(config_id, &language_code)
            .await?
            .ok_or_else(|| Self::missing(config_id, &language_code))?;

        let record_changes = TranslationRecordChanges {
            title: changes.title,
            author: changes.author,
            description: changes.description,
            keywords: changes.keywords.as_deref().map(encode_keywords),
        };

        let updated = self
            .repository
            .update_translation(existing.id, record_changes)
            .await
            .map_err(|err| match err {
                TranslationRepositoryError::NotFound(_) => Self::missing(config_id, &language_code),
                other => DomainError::from(other),
            })?;

        self.cache.delete(&translation_cache_key(config_id, &language_code)).await;
        tracing::info!("Updated translation {} for config {} ({})", updated.id, config_id, language_code);

        Ok(Self::to_dto(updated))
    }

    async fn get_translation(&self, config_id: i64, language_code: &str) -> Result<Option<TranslationDto>, DomainError> {
        let language_code = normalize(language_code);
        let key = translation_cache_key(config_id, &language_code);

        if let Some(dto) = self.read_cached(&key).await {
            tracing::debug!("Cache hit for {}", key);
            return Ok(Some(dto));
        }
        tracing::debug!("Cache miss for {}", key);

        match self.repository.find_translation(config_id, &language_code).await? {
            Some(record) => {
                let dto = Self::to_dto(record);
                self.store_cached(&key, &dto).await;
                Ok(Some(dto))
            }
            None => Ok(None),
        }
    }

    async fn get_translation_with_fallback(
        &self,
        config_id: i64,
        language_code: &str,
    ) -> Result<ResolvedTranslationDto, DomainError> {
        let requested = normalize(language_code);

        if let Some(translation) = self.get_translation(config_id, &requested).await? {
            return Ok(ResolvedTranslationDto {
                translation,
                actual_language: requested,
                fallback_used: false,
            });
        }

        // Two levels only: requested, then default
        let default_language = self.resolver.default_language();
        if requested != default_language {
            if let Some(translation) = self.get_translation(config_id, default_language).await? {
                tracing::info!(
                    config_id,
                    requested_language = %requested,
                    returned_language = %default_language,
                    "Serving default-language translation as fallback"
                );
                return Ok(ResolvedTranslationDto {
                    translation,
                    actual_language: default_language.to_string(),
                    fallback_used: true,
                });
            }
        }

        Err(Self::missing(config_id, &requested))
    }

    async fn get_all_translations(&self, config_id: i64) -> Result<Vec<TranslationDto>, DomainError> {
        let mut translations: Vec<TranslationDto> = self
            .repository
            .list_translations(config_id)
            .await?
            .into_iter()
            .map(Self::to_dto)
            .collect();

        translations.sort_by(|a, b| a.language_code.cmp(&b.language_code));
        Ok(translations)
    }

    async fn delete_translation(&self, config_id: i64, language_code: &str) -> Result<(), DomainError> {
        let language_code = normalize(language_code);

        if language_code == self.resolver.default_language() {
            let count = self.repository.count_translations(config_id).await?;
            if count > 1 {
                return Err(DomainError::validation_error(
                    "Translation",
                    format!(
                        "the default language ({}) translation can only be deleted when it is the last one; {} translations exist",
                        language_code, count
                    ),
                )
                .with_id(config_id.to_string())
                .with_fields(["language_code"]));
            }
        }

        if !self.repository.delete_translation(config_id, &language_code).await? {
            return Err(Self::missing(config_id, &language_code));
        }

        self.cache.delete(&translation_cache_key(config_id, &language_code)).await;
        tracing::info!("Deleted translation for config {} ({})", config_id, language_code);

        Ok(())
    }

    async fn invalidate_all_caches_for_config(&self, config_id: i64) {
        self.cache.delete_by_prefix(&config_cache_pattern(config_id)).await;
        tracing::info!("Invalidated every cached language of config {}", config_id);
    }
}
