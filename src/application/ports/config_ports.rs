use async_trait::async_trait;

use crate::application::dtos::config_dto::ResolvedConfigDto;
use crate::common::errors::Result;

/// Port for reading and deleting whole site configurations
#[async_trait]
pub trait ConfigResolutionUseCase: Send + Sync + 'static {
    /// Resolves a configuration by id in the negotiated language
    async fn resolve_config(
        &self,
        config_id: i64,
        explicit_language: Option<&str>,
        preference_header: Option<&str>,
    ) -> Result<ResolvedConfigDto>;

    /// Resolves the configuration serving a hostname
    async fn resolve_domain(
        &self,
        hostname: &str,
        explicit_language: Option<&str>,
        preference_header: Option<&str>,
    ) -> Result<ResolvedConfigDto>;

    /// Deletes a configuration together with its domains, translations and cached entries
    async fn delete_config(&self, config_id: i64) -> Result<()>;
}
