use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::site_config::SiteConfig;
use crate::domain::repositories::config_repository::{
    ConfigRepository, ConfigRepositoryError, ConfigRepositoryResult,
};

pub struct ConfigPgRepository {
    pool: Arc<PgPool>,
}

impl ConfigPgRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn map_sqlx_error(err: sqlx::Error) -> ConfigRepositoryError {
        ConfigRepositoryError::DatabaseError(format!("Error de base de datos: {}", err))
    }

    fn row_to_config(row: &PgRow) -> SiteConfig {
        SiteConfig {
            id: row.get("id"),
            links: row.get("links"),
            permissions: row.get("permissions"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl ConfigRepository for ConfigPgRepository {
    async fn find_config(&self, config_id: i64) -> ConfigRepositoryResult<Option<SiteConfig>> {
        let row = sqlx::query(
            r#"
            SELECT id, links, permissions, created_at, updated_at
            FROM site_configs
            WHERE id = $1
            "#,
        )
        .bind(config_id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(Self::map_sqlx_error)?;

        Ok(row.as_ref().map(Self::row_to_config))
    }

    async fn find_config_by_domain(&self, hostname: &str) -> ConfigRepositoryResult<Option<SiteConfig>> {
        let row = sqlx::query(
            r#"
            SELECT c.id, c.links, c.permissions, c.created_at, c.updated_at
            FROM site_configs c
            JOIN site_domains d ON d.config_id = c.id
            WHERE d.hostname = $1
            "#,
        )
        .bind(hostname)
        .fetch_optional(&*self.pool)
        .await
        .map_err(Self::map_sqlx_error)?;

        Ok(row.as_ref().map(Self::row_to_config))
    }

    async fn delete_config(&self, config_id: i64) -> ConfigRepositoryResult<bool> {
        // Dominios y traducciones se eliminan en cascada
        let result = sqlx::query("DELETE FROM site_configs WHERE id = $1")
            .bind(config_id)
            .execute(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
