//! In-memory stand-ins for the PostgreSQL repositories, shared by the
//! service and handler tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::application::ports::cache_ports::CachePort;
use crate::domain::entities::site_config::SiteConfig;
use crate::domain::repositories::config_repository::{ConfigRepository, ConfigRepositoryResult};
use crate::domain::repositories::translation_repository::{
    NewTranslationRecord, TranslationRecord, TranslationRecordChanges, TranslationRepository,
    TranslationRepositoryError, TranslationRepositoryResult,
};

pub struct MockTranslationRepository {
    records: Mutex<HashMap<(i64, String), TranslationRecord>>,
    existing_configs: Mutex<HashSet<i64>>,
    next_id: AtomicUsize,
    find_calls: AtomicUsize,
    /// Simulates a concurrent create: `find` misses but the insert collides
    racing_insert: AtomicBool,
}

impl MockTranslationRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            existing_configs: Mutex::new(HashSet::new()),
            next_id: AtomicUsize::new(1),
            find_calls: AtomicUsize::new(0),
            racing_insert: AtomicBool::new(false),
        }
    }

    /// Repository whose configuration table already holds `config_ids`
    pub fn with_configs(config_ids: &[i64]) -> Self {
        let repo = Self::new();
        repo.existing_configs.lock().unwrap().extend(config_ids.iter().copied());
        repo
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn set_racing_insert(&self, racing: bool) {
        self.racing_insert.store(racing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Stores a row bypassing the service, e.g. with legacy keyword text
    pub fn insert_raw(&self, config_id: i64, language_code: &str, keywords: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let now = Utc::now();
        self.existing_configs.lock().unwrap().insert(config_id);
        self.records.lock().unwrap().insert(
            (config_id, language_code.to_string()),
            TranslationRecord {
                id,
                config_id,
                language_code: language_code.to_string(),
                title: format!("Title {}", language_code),
                author: format!("Author {}", language_code),
                description: format!("Description {}", language_code),
                keywords: keywords.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
    }

    /// Cascade performed by the store when a configuration is deleted
    pub fn remove_config(&self, config_id: i64) {
        self.existing_configs.lock().unwrap().remove(&config_id);
        self.records.lock().unwrap().retain(|(cid, _), _| *cid != config_id);
    }
}

#[async_trait]
impl TranslationRepository for MockTranslationRepository {
    async fn find_translation(
        &self,
        config_id: i64,
        language_code: &str,
    ) -> TranslationRepositoryResult<Option<TranslationRecord>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.racing_insert.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let records = self.records.lock().unwrap();
        Ok(records.get(&(config_id, language_code.to_string())).cloned())
    }

    async fn create_translation(&self, record: NewTranslationRecord) -> TranslationRepositoryResult<TranslationRecord> {
        if !self.existing_configs.lock().unwrap().contains(&record.config_id) {
            return Err(TranslationRepositoryError::ForeignKeyViolation(format!(
                "config {}",
                record.config_id
            )));
        }

        let mut records = self.records.lock().unwrap();
        let key = (record.config_id, record.language_code.clone());
        if self.racing_insert.load(Ordering::SeqCst) || records.contains_key(&key) {
            return Err(TranslationRepositoryError::UniqueViolation(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }

        let now = Utc::now();
        let stored = TranslationRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) as i64,
            config_id: record.config_id,
            language_code: record.language_code,
            title: record.title,
            author: record.author,
            description: record.description,
            keywords: record.keywords,
            created_at: now,
            updated_at: now,
        };
        records.insert(key, stored.clone());
        Ok(stored)
    }

    async fn update_translation(
        &self,
        id: i64,
        changes: TranslationRecordChanges,
    ) -> TranslationRepositoryResult<TranslationRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .values_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| TranslationRepositoryError::NotFound(id.to_string()))?;

        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(author) = changes.author {
            record.author = author;
        }
        if let Some(description) = changes.description {
            record.description = description;
        }
        if let Some(keywords) = changes.keywords {
            record.keywords = keywords;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_translation(&self, config_id: i64, language_code: &str) -> TranslationRepositoryResult<bool> {
        let mut records = self.records.lock().unwrap();
        Ok(records.remove(&(config_id, language_code.to_string())).is_some())
    }

    async fn count_translations(&self, config_id: i64) -> TranslationRepositoryResult<i64> {
        let records = self.records.lock().unwrap();
        Ok(records.keys().filter(|(cid, _)| *cid == config_id).count() as i64)
    }

    async fn list_translations(&self, config_id: i64) -> TranslationRepositoryResult<Vec<TranslationRecord>> {
        let records = self.records.lock().unwrap();
        let mut list: Vec<TranslationRecord> = records
            .values()
            .filter(|r| r.config_id == config_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.language_code.cmp(&b.language_code));
        Ok(list)
    }
}

pub struct MockConfigRepository {
    configs: Mutex<HashMap<i64, SiteConfig>>,
    domains: Mutex<HashMap<String, i64>>,
}

impl MockConfigRepository {
    pub fn new() -> Self {
        Self {
            configs: Mutex::new(HashMap::new()),
            domains: Mutex::new(HashMap::new()),
        }
    }

    pub fn add_config(&self, id: i64, hostnames: &[&str]) {
        let now = Utc::now();
        self.configs.lock().unwrap().insert(
            id,
            SiteConfig {
                id,
                links: json!({"home": format!("https://site{}.example", id)}),
                permissions: json!({"public": true}),
                created_at: now,
                updated_at: now,
            },
        );
        let mut domains = self.domains.lock().unwrap();
        for host in hostnames {
            domains.insert(host.to_string(), id);
        }
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepository {
    async fn find_config(&self, config_id: i64) -> ConfigRepositoryResult<Option<SiteConfig>> {
        Ok(self.configs.lock().unwrap().get(&config_id).cloned())
    }

    async fn find_config_by_domain(&self, hostname: &str) -> ConfigRepositoryResult<Option<SiteConfig>> {
        let config_id = self.domains.lock().unwrap().get(hostname).copied();
        Ok(config_id.and_then(|id| self.configs.lock().unwrap().get(&id).cloned()))
    }

    async fn delete_config(&self, config_id: i64) -> ConfigRepositoryResult<bool> {
        self.domains.lock().unwrap().retain(|_, id| *id != config_id);
        Ok(self.configs.lock().unwrap().remove(&config_id).is_some())
    }
}

/// Cache backend that is always unreachable: every read misses
pub struct UnreachableCache;

#[async_trait]
impl CachePort for UnreachableCache {
    async fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn set(&self, _key: &str, _value: &Value, _ttl_seconds: u64) {}

    async fn delete(&self, _key: &str) {}

    async fn delete_by_prefix(&self, _pattern: &str) {}
}
