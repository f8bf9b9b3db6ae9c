use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::translation::{Translation, TranslationChanges};

/// Translation as returned by the API and stored in the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationDto {
    pub id: i64,
    pub config_id: i64,
    pub language_code: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Translation> for TranslationDto {
    fn from(translation: Translation) -> Self {
        Self {
            id: translation.id,
            config_id: translation.config_id,
            language_code: translation.language_code,
            title: translation.title,
            author: translation.author,
            description: translation.description,
            keywords: translation.keywords,
            created_at: translation.created_at,
            updated_at: translation.updated_at,
        }
    }
}

/// Request body for creating a translation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTranslationDto {
    pub language_code: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Request body for a partial update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTranslationDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl From<UpdateTranslationDto> for TranslationChanges {
    fn from(dto: UpdateTranslationDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            description: dto.description,
            keywords: dto.keywords,
        }
    }
}

/// A translation together with the language actually served
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTranslationDto {
    pub translation: TranslationDto,
    pub actual_language: String,
    pub fallback_used: bool,
}

/// Capabilities: languages the service can serve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagesDto {
    pub default_language: String,
    pub supported_languages: Vec<String>,
}
