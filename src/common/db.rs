use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use anyhow::Result;
use std::time::Duration;
use crate::common::config::AppConfig;

const MAX_ATTEMPTS: usize = 3;

/// Esquema mínimo; idempotente para poder ejecutarse en cada arranque
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS site_configs (
        id BIGSERIAL PRIMARY KEY,
        links JSONB NOT NULL DEFAULT '{}'::jsonb,
        permissions JSONB NOT NULL DEFAULT '{}'::jsonb,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );

    CREATE TABLE IF NOT EXISTS site_domains (
        id BIGSERIAL PRIMARY KEY,
        hostname VARCHAR(255) NOT NULL UNIQUE,
        config_id BIGINT NOT NULL REFERENCES site_configs(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );

    CREATE INDEX IF NOT EXISTS idx_site_domains_config_id ON site_domains(config_id);

    CREATE TABLE IF NOT EXISTS config_translations (
        id BIGSERIAL PRIMARY KEY,
        config_id BIGINT NOT NULL REFERENCES site_configs(id) ON DELETE CASCADE,
        language_code VARCHAR(16) NOT NULL,
        title VARCHAR(200) NOT NULL,
        author VARCHAR(100) NOT NULL,
        description VARCHAR(1000) NOT NULL,
        keywords TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (config_id, language_code)
    );
"#;

/// Oculta las credenciales de una URL de conexión antes de registrarla
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}[user]:[pass]{}", &url[..scheme_end + 3], &url[at..])
        },
        _ => url.to_string(),
    }
}

pub async fn create_database_pool(config: &AppConfig) -> Result<PgPool> {
    tracing::info!("Inicializando conexión a PostgreSQL con URL: {}",
                  redact_url(&config.database.connection_string));

    let mut attempt = 0;
    let mut last_error = None;

    while attempt < MAX_ATTEMPTS {
        attempt += 1;
        tracing::info!("Intento de conexión a PostgreSQL #{}", attempt);

        // Crear el pool de conexiones con las opciones de configuración
        match PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.database.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.database.max_lifetime_secs))
            .connect(&config.database.connection_string)
            .await {
                Ok(pool) => {
                    // Sin parámetros: protocolo simple, admite varias sentencias
                    pool.execute(SCHEMA).await
                        .map_err(|e| anyhow::anyhow!("Error al crear tablas: {}", e))?;
                    tracing::info!("Conexión a PostgreSQL establecida y esquema verificado");
                    return Ok(pool);
                },
                Err(e) => {
                    tracing::error!("Error al conectar a PostgreSQL: {}", e);
                    last_error = Some(e);
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                    }
                }
            }
    }

    Err(anyhow::anyhow!(
        "No se pudo establecer la conexión a PostgreSQL después de {} intentos: {}",
        MAX_ATTEMPTS,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}
