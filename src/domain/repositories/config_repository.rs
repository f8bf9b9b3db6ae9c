use async_trait::async_trait;

use crate::common::errors::DomainError;
use crate::domain::entities::site_config::SiteConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigRepositoryError {
    #[error("Error de base de datos: {0}")]
    DatabaseError(String),
}

pub type ConfigRepositoryResult<T> = Result<T, ConfigRepositoryError>;

impl From<ConfigRepositoryError> for DomainError {
    fn from(err: ConfigRepositoryError) -> Self {
        match err {
            ConfigRepositoryError::DatabaseError(msg) => DomainError::internal_error("Database", msg),
        }
    }
}

/// Almacén de configuraciones y de los dominios que las usan
#[async_trait]
pub trait ConfigRepository: Send + Sync + 'static {
    /// Obtiene una configuración por ID
    async fn find_config(&self, config_id: i64) -> ConfigRepositoryResult<Option<SiteConfig>>;

    /// Obtiene la configuración asociada a un hostname ya normalizado
    async fn find_config_by_domain(&self, hostname: &str) -> ConfigRepositoryResult<Option<SiteConfig>>;

    /// Elimina una configuración (y en cascada sus dominios y traducciones)
    async fn delete_config(&self, config_id: i64) -> ConfigRepositoryResult<bool>;
}
