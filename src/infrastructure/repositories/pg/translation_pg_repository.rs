use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::repositories::translation_repository::{
    NewTranslationRecord, TranslationRecord, TranslationRecordChanges, TranslationRepository,
    TranslationRepositoryError, TranslationRepositoryResult,
};

const TRANSLATION_COLUMNS: &str =
    "id, config_id, language_code, title, author, description, keywords, created_at, updated_at";

pub struct TranslationPgRepository {
    pool: Arc<PgPool>,
}

impl TranslationPgRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    // Método auxiliar para mapear errores SQL a errores de repositorio
    fn map_sqlx_error(err: sqlx::Error) -> TranslationRepositoryError {
        match err {
            sqlx::Error::RowNotFound => {
                TranslationRepositoryError::NotFound("Traducción no encontrada".to_string())
            },
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // Violación de unicidad (config_id, language_code)
                Some("23505") => TranslationRepositoryError::UniqueViolation(db_err.message().to_string()),
                // La configuración referenciada no existe
                Some("23503") => TranslationRepositoryError::ForeignKeyViolation(db_err.message().to_string()),
                _ => TranslationRepositoryError::DatabaseError(format!("Error de base de datos: {}", db_err)),
            },
            _ => TranslationRepositoryError::DatabaseError(format!("Error de base de datos: {}", err)),
        }
    }

    fn row_to_record(row: &PgRow) -> TranslationRecord {
        TranslationRecord {
            id: row.get("id"),
            config_id: row.get("config_id"),
            language_code: row.get("language_code"),
            title: row.get("title"),
            author: row.get("author"),
            description: row.get("description"),
            keywords: row.get("keywords"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl TranslationRepository for TranslationPgRepository {
    async fn find_translation(
        &self,
        config_id: i64,
        language_code: &str,
    ) -> TranslationRepositoryResult<Option<TranslationRecord>> {
        let sql = format!(
            "SELECT {} FROM config_translations WHERE config_id = $1 AND language_code = $2",
            TRANSLATION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(config_id)
            .bind(language_code)
            .fetch_optional(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(row.as_ref().map(Self::row_to_record))
    }

    async fn create_translation(&self, record: NewTranslationRecord) -> TranslationRepositoryResult<TranslationRecord> {
        let sql = format!(
            r#"
            INSERT INTO config_translations (
                config_id, language_code, title, author, description, keywords,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING {}
            "#,
            TRANSLATION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(record.config_id)
            .bind(&record.language_code)
            .bind(&record.title)
            .bind(&record.author)
            .bind(&record.description)
            .bind(&record.keywords)
            .fetch_one(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(Self::row_to_record(&row))
    }

    async fn update_translation(
        &self,
        id: i64,
        changes: TranslationRecordChanges,
    ) -> TranslationRepositoryResult<TranslationRecord> {
        // Los campos NULL conservan el valor actual
        let sql = format!(
            r#"
            UPDATE config_translations SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                description = COALESCE($4, description),
                keywords = COALESCE($5, keywords),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            TRANSLATION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(changes.title)
            .bind(changes.author)
            .bind(changes.description)
            .bind(changes.keywords)
            .fetch_one(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(Self::row_to_record(&row))
    }

    async fn delete_translation(&self, config_id: i64, language_code: &str) -> TranslationRepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM config_translations WHERE config_id = $1 AND language_code = $2")
            .bind(config_id)
            .bind(language_code)
            .execute(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_translations(&self, config_id: i64) -> TranslationRepositoryResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM config_translations WHERE config_id = $1")
            .bind(config_id)
            .fetch_one(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(row.get("total"))
    }

    async fn list_translations(&self, config_id: i64) -> TranslationRepositoryResult<Vec<TranslationRecord>> {
        let sql = format!(
            "SELECT {} FROM config_translations WHERE config_id = $1 ORDER BY language_code",
            TRANSLATION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(config_id)
            .fetch_all(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(rows.iter().map(Self::row_to_record).collect())
    }
}
