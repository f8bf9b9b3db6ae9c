use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationRepositoryError {
    #[error("Traducción no encontrada: {0}")]
    NotFound(String),

    #[error("Traducción ya existe: {0}")]
    UniqueViolation(String),

    #[error("Configuración referenciada no existe: {0}")]
    ForeignKeyViolation(String),

    #[error("Error de base de datos: {0}")]
    DatabaseError(String),
}

pub type TranslationRepositoryResult<T> = Result<T, TranslationRepositoryError>;

// Conversión de TranslationRepositoryError a DomainError
impl From<TranslationRepositoryError> for DomainError {
    fn from(err: TranslationRepositoryError) -> Self {
        match err {
            TranslationRepositoryError::NotFound(msg) => DomainError::not_found("Translation", msg),
            TranslationRepositoryError::UniqueViolation(msg) => DomainError::already_exists("Translation", msg),
            TranslationRepositoryError::ForeignKeyViolation(msg) => DomainError::not_found("Config", msg),
            TranslationRepositoryError::DatabaseError(msg) => DomainError::internal_error("Database", msg),
        }
    }
}

/// Fila almacenada de una traducción; `keywords` va codificado como texto
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRecord {
    pub id: i64,
    pub config_id: i64,
    pub language_code: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Datos para insertar una traducción nueva
#[derive(Debug, Clone, PartialEq)]
pub struct NewTranslationRecord {
    pub config_id: i64,
    pub language_code: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: String,
}

/// Cambios parciales; los campos `None` se conservan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationRecordChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Almacén de traducciones (fuente de verdad)
#[async_trait]
pub trait TranslationRepository: Send + Sync + 'static {
    /// Busca la traducción de una configuración en un idioma
    async fn find_translation(
        &self,
        config_id: i64,
        language_code: &str,
    ) -> TranslationRepositoryResult<Option<TranslationRecord>>;

    /// Inserta una traducción nueva
    async fn create_translation(&self, record: NewTranslationRecord) -> TranslationRepositoryResult<TranslationRecord>;

    /// Aplica cambios parciales a una traducción existente
    async fn update_translation(
        &self,
        id: i64,
        changes: TranslationRecordChanges,
    ) -> TranslationRepositoryResult<TranslationRecord>;

    /// Elimina una traducción; devuelve `false` si no existía
    async fn delete_translation(&self, config_id: i64, language_code: &str) -> TranslationRepositoryResult<bool>;

    /// Cuenta las traducciones de una configuración
    async fn count_translations(&self, config_id: i64) -> TranslationRepositoryResult<i64>;

    /// Lista las traducciones de una configuración ordenadas por idioma
    async fn list_translations(&self, config_id: i64) -> TranslationRepositoryResult<Vec<TranslationRecord>>;
}
