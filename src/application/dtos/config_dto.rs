use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::dtos::translation_dto::ResolvedTranslationDto;
use crate::domain::entities::site_config::SiteConfig;

/// A configuration merged with the translation served for the request.
///
/// The translatable fields are absent when multilingual support is off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfigDto {
    pub config_id: i64,
    pub links: Value,
    pub permissions: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Language actually served
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub fallback_used: bool,
}

impl ResolvedConfigDto {
    /// Non-translatable fields only
    pub fn untranslated(config: SiteConfig) -> Self {
        Self {
            config_id: config.id,
            links: config.links,
            permissions: config.permissions,
            title: None,
            author: None,
            description: None,
            keywords: None,
            language: None,
            fallback_used: false,
        }
    }

    pub fn translated(config: SiteConfig, resolved: ResolvedTranslationDto) -> Self {
        let translation = resolved.translation;
        Self {
            title: Some(translation.title),
            author: Some(translation.author),
            description: Some(translation.description),
            keywords: Some(translation.keywords),
            language: Some(resolved.actual_language),
            fallback_used: resolved.fallback_used,
            ..Self::untranslated(config)
        }
    }
}
