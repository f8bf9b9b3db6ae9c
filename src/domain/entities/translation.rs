use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::errors::DomainError;

/// Longitudes máximas (en caracteres) de los campos traducibles
pub const TITLE_MAX_CHARS: usize = 200;
pub const AUTHOR_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("{message}")]
    Validation { message: String, fields: Vec<String> },
}

pub type TranslationResult<T> = Result<T, TranslationError>;

impl From<TranslationError> for DomainError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Validation { message, fields } => {
                DomainError::validation_error("Translation", message).with_fields(fields)
            }
        }
    }
}

/// One language variant of a configuration's human-readable content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
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

/// Complete, validated translatable content for a new translation
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationContent {
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl TranslationContent {
    /// Validates that every field is present, non-empty and within its cap.
    ///
    /// All offending fields are reported together.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        description: Option<String>,
        keywords: Option<Vec<String>>,
    ) -> TranslationResult<Self> {
        let mut problems = FieldProblems::default();

        let title = problems.required_text("title", title, TITLE_MAX_CHARS);
        let author = problems.required_text("author", author, AUTHOR_MAX_CHARS);
        let description = problems.required_text("description", description, DESCRIPTION_MAX_CHARS);
        let keywords = problems.required_keywords(keywords);

        problems.into_result()?;

        Ok(Self {
            title: title.unwrap_or_default(),
            author: author.unwrap_or_default(),
            description: description.unwrap_or_default(),
            keywords: keywords.unwrap_or_default(),
        })
    }
}

/// Partial update of translatable content; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl TranslationChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.description.is_none() && self.keywords.is_none()
    }

    /// Validates only the supplied fields, with the same rules as creation
    pub fn validate(&self) -> TranslationResult<()> {
        if self.is_empty() {
            return Err(TranslationError::Validation {
                message: "at least one of title, author, description, keywords must be supplied".to_string(),
                fields: vec![
                    "title".to_string(),
                    "author".to_string(),
                    "description".to_string(),
                    "keywords".to_string(),
                ],
            });
        }

        let mut problems = FieldProblems::default();
        if self.title.is_some() {
            problems.required_text("title", self.title.clone(), TITLE_MAX_CHARS);
        }
        if self.author.is_some() {
            problems.required_text("author", self.author.clone(), AUTHOR_MAX_CHARS);
        }
        if self.description.is_some() {
            problems.required_text("description", self.description.clone(), DESCRIPTION_MAX_CHARS);
        }
        if self.keywords.is_some() {
            problems.required_keywords(self.keywords.clone());
        }
        problems.into_result()
    }
}

/// Collects validation problems so a caller sees every bad field at once
#[derive(Default)]
struct FieldProblems {
    messages: Vec<String>,
    fields: Vec<String>,
}

impl FieldProblems {
    fn push(&mut self, field: &str, message: String) {
        self.fields.push(field.to_string());
        self.messages.push(message);
    }

    fn required_text(&mut self, field: &str, value: Option<String>, max_chars: usize) -> Option<String> {
        match value {
            None => {
                self.push(field, format!("{} is required", field));
                None
            }
            Some(text) if text.trim().is_empty() => {
                self.push(field, format!("{} must not be empty", field));
                None
            }
            Some(text) if text.chars().count() > max_chars => {
                self.push(field, format!("{} must be at most {} characters", field, max_chars));
                None
            }
            Some(text) => Some(text),
        }
    }

    fn required_keywords(&mut self, value: Option<Vec<String>>) -> Option<Vec<String>> {
        match value {
            None => {
                self.push("keywords", "keywords is required".to_string());
                None
            }
            Some(keywords) if keywords.is_empty() => {
                self.push("keywords", "keywords must be a non-empty list of strings".to_string());
                None
            }
            Some(keywords) => Some(keywords),
        }
    }

    fn into_result(self) -> TranslationResult<()> {
        if self.fields.is_empty() {
            return Ok(());
        }
        Err(TranslationError::Validation {
            message: self.messages.join("; "),
            fields: self.fields,
        })
    }
}
