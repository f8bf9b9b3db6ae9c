use async_trait::async_trait;
use serde_json::Value;

/// Puerto secundario para una caché clave-valor con TTL
///
/// Implementations are fail-soft: backend or serialization failures are
/// logged by the adapter and never reach the caller. A failed `get` is a
/// miss; a failed mutation is a no-op.
#[async_trait]
pub trait CachePort: Send + Sync + 'static {
    /// Lee un valor; `None` en caso de fallo o ausencia
    async fn get(&self, key: &str) -> Option<Value>;

    /// Escribe un valor con expiración en segundos desde ahora
    async fn set(&self, key: &str, value: &Value, ttl_seconds: u64);

    /// Elimina una clave
    async fn delete(&self, key: &str);

    /// Elimina todas las claves que coinciden con un patrón glob (`*`, `?`)
    async fn delete_by_prefix(&self, pattern: &str);
}
