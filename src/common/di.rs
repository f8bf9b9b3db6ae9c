use std::sync::Arc;
use sqlx::PgPool;

use crate::application::ports::cache_ports::CachePort;
use crate::application::ports::config_ports::ConfigResolutionUseCase;
use crate::application::ports::translation_ports::TranslationUseCase;
use crate::application::services::config_resolution_service::ConfigResolutionService;
use crate::application::services::translation_service::TranslationService;
use crate::common::config::AppConfig;
use crate::domain::repositories::config_repository::ConfigRepository;
use crate::domain::repositories::translation_repository::TranslationRepository;
use crate::domain::services::language_resolver::LanguageResolver;
use crate::infrastructure::repositories::pg::{ConfigPgRepository, TranslationPgRepository};
use crate::infrastructure::services::redis_cache_adapter::RedisCacheAdapter;

/// Si el contenido multilingüe puede servirse, decidido una vez al arrancar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultilingualCapability {
    Available,
    Unavailable,
}

/// Fábrica para los diferentes componentes de la aplicación
pub struct AppServiceFactory {
    config: AppConfig,
}

impl AppServiceFactory {
    /// Crea una nueva fábrica de servicios con configuración personalizada
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Resolver de idiomas a partir de la configuración i18n
    pub fn create_language_resolver(&self) -> Arc<LanguageResolver> {
        Arc::new(LanguageResolver::new(
            &self.config.i18n.default_language,
            &self.config.i18n.supported_languages,
        ))
    }

    /// Conecta con Redis y comprueba que responde; `None` si no está disponible
    pub async fn connect_cache(&self) -> Option<Arc<dyn CachePort>> {
        let adapter = match RedisCacheAdapter::connect(&self.config.cache.redis_url).await {
            Ok(adapter) => adapter,
            Err(e) => {
                tracing::warn!("Redis unavailable, multilingual support disabled: {}", e);
                return None;
            }
        };

        if !adapter.ping().await {
            tracing::warn!("Redis did not answer PING, multilingual support disabled");
            return None;
        }

        Some(Arc::new(adapter))
    }

    /// Construye el estado de la aplicación sobre repositorios y caché ya creados
    pub fn create_app_state(
        &self,
        config_repository: Arc<dyn ConfigRepository>,
        translation_repository: Arc<dyn TranslationRepository>,
        cache: Option<Arc<dyn CachePort>>,
    ) -> AppState {
        let translation_service: Option<Arc<dyn TranslationUseCase>> = cache.map(|cache| {
            Arc::new(TranslationService::new(
                translation_repository,
                cache,
                self.create_language_resolver(),
            )) as Arc<dyn TranslationUseCase>
        });

        let capability = if translation_service.is_some() {
            MultilingualCapability::Available
        } else {
            MultilingualCapability::Unavailable
        };
        tracing::info!("Multilingual capability: {:?}", capability);

        let config_service: Arc<dyn ConfigResolutionUseCase> = Arc::new(ConfigResolutionService::new(
            config_repository,
            translation_service.clone(),
        ));

        AppState {
            config: self.config.clone(),
            config_service,
            translation_service,
            capability,
        }
    }

    /// Cablea los repositorios PostgreSQL y la caché Redis
    pub async fn create_services(&self, pool: Arc<PgPool>) -> AppState {
        let config_repository = Arc::new(ConfigPgRepository::new(pool.clone()));
        let translation_repository = Arc::new(TranslationPgRepository::new(pool));
        let cache = self.connect_cache().await;
        self.create_app_state(config_repository, translation_repository, cache)
    }
}

/// Estado global de la aplicación para inyección de dependencias
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub config_service: Arc<dyn ConfigResolutionUseCase>,
    /// Presente solo cuando la capacidad multilingüe está disponible
    pub translation_service: Option<Arc<dyn TranslationUseCase>>,
    pub capability: MultilingualCapability,
}
