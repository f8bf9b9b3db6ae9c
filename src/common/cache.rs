use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::application::ports::cache_ports::CachePort;

/// Entrada de caché con tiempo de expiración
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expiry: Instant,
}

impl CacheEntry {
    fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            expiry: Instant::now() + ttl,
        }
    }

    /// Verifica si la entrada ha expirado
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expiry
    }
}

/// Caché en memoria del proceso con TTL por entrada
///
/// Backs the cache port in tests and in single-process embeddings built
/// through `AppServiceFactory::create_app_state`. Entries are local to the
/// process, so invalidations are not seen by other instances.
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    max_entries: usize,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_entries: max_entries.max(1),
        }
    }

    /// Obtiene el número de entradas en la caché (incluidas las expiradas)
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Limpia las entradas expiradas de la caché
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let initial_len = entries.len();

        entries.retain(|_, v| !v.is_expired());

        let removed = initial_len - entries.len();
        if removed > 0 {
            tracing::debug!("Removed {} expired cache entries", removed);
        }

        removed
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(10_000)
    }
}

#[async_trait]
impl CachePort for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expirada: se elimina al leerla
        self.entries.write().await.remove(key);
        None
    }

    async fn set(&self, key: &str, value: &Value, ttl_seconds: u64) {
        let mut entries = self.entries.write().await;

        // Si alcanzamos el límite, eliminar una expirada o, si no hay, una cualquiera
        if entries.len() >= self.max_entries && !entries.contains_key(key) {
            let victim = entries
                .iter()
                .find(|(_, v)| v.is_expired())
                .map(|(k, _)| k.clone())
                .or_else(|| entries.keys().next().cloned());
            if let Some(victim) = victim {
                entries.remove(&victim);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry::new(value.clone(), Duration::from_secs(ttl_seconds)),
        );
    }

    async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
        tracing::debug!("Cache entry invalidated for key: {}", key);
    }

    async fn delete_by_prefix(&self, pattern: &str) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !glob_matches(pattern, key));
        tracing::debug!("Removed {} cache entries matching {}", before - entries.len(), pattern);
    }
}

/// Coincidencia glob al estilo Redis limitada a `*` y `?`
pub fn glob_matches(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut star: Option<usize> = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(s) = star {
            p = s + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}
