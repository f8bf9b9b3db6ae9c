use std::sync::Arc;

use serde_json::json;

use crate::application::dtos::translation_dto::{CreateTranslationDto, TranslationDto, UpdateTranslationDto};
use crate::application::ports::cache_ports::CachePort;
use crate::application::ports::translation_ports::TranslationUseCase;
use crate::application::services::translation_service::{translation_cache_key, TranslationService};
use crate::common::cache::MemoryCache;
use crate::common::errors::ErrorKind;
use crate::common::test_support::{MockTranslationRepository, UnreachableCache};
use crate::domain::services::language_resolver::LanguageResolver;

fn resolver() -> Arc<LanguageResolver> {
    Arc::new(LanguageResolver::new("zh-cn", ["zh-cn", "en-us", "ja-jp"]))
}

fn setup(config_ids: &[i64]) -> (TranslationService, Arc<MockTranslationRepository>, Arc<MemoryCache>) {
    let repo = Arc::new(MockTranslationRepository::with_configs(config_ids));
    let cache = Arc::new(MemoryCache::new(100));
    let service = TranslationService::new(repo.clone(), cache.clone(), resolver());
    (service, repo, cache)
}

fn create_dto(language_code: &str, title: &str) -> CreateTranslationDto {
    CreateTranslationDto {
        language_code: Some(language_code.to_string()),
        title: Some(title.to_string()),
        author: Some("Author".to_string()),
        description: Some("Description".to_string()),
        keywords: Some(vec!["rust".to_string(), "web".to_string()]),
    }
}

async fn cached(cache: &MemoryCache, config_id: i64, language_code: &str) -> Option<TranslationDto> {
    cache
        .get(&translation_cache_key(config_id, language_code))
        .await
        .map(|value| serde_json::from_value(value).unwrap())
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (service, _repo, _cache) = setup(&[1]);

    let created = service.create_translation(1, create_dto("EN_us", "Hello")).await.unwrap();
    assert_eq!(created.language_code, "en-us");

    let fetched = service.get_translation(1, "en-us").await.unwrap().unwrap();
    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.author, "Author");
    assert_eq!(fetched.description, "Description");
    assert_eq!(fetched.keywords, vec!["rust".to_string(), "web".to_string()]);
}

#[tokio::test]
async fn test_create_rejects_unsupported_language() {
    let (service, repo, _cache) = setup(&[1]);

    let err = service.create_translation(1, create_dto("fr-fr", "Bonjour")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(err.fields, vec!["language_code".to_string()]);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_create_reports_language_and_content_problems_together() {
    let (service, _repo, _cache) = setup(&[1]);

    let dto = CreateTranslationDto {
        language_code: None,
        title: Some("".to_string()),
        keywords: Some(vec![]),
        ..create_dto("en-us", "x")
    };
    let err = service.create_translation(1, dto).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(err.fields, vec!["language_code", "title", "keywords"]);
}

#[tokio::test]
async fn test_create_rejects_overlong_title() {
    let (service, _repo, _cache) = setup(&[1]);

    let err = service
        .create_translation(1, create_dto("en-us", &"t".repeat(201)))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(err.fields, vec!["title".to_string()]);
}

#[tokio::test]
async fn test_duplicate_create_is_always_a_conflict() {
    let (service, repo, _cache) = setup(&[1]);

    service.create_translation(1, create_dto("en-us", "First")).await.unwrap();
    let err = service.create_translation(1, create_dto("en_US", "Second")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_unique_violation_from_store_maps_to_conflict() {
    let (service, repo, _cache) = setup(&[1]);
    repo.set_racing_insert(true);

    let err = service.create_translation(1, create_dto("en-us", "Racing")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(err.code(), "CONFLICT");
}

#[tokio::test]
async fn test_create_for_missing_config_is_not_found() {
    let (service, _repo, _cache) = setup(&[]);

    let err = service.create_translation(99, create_dto("en-us", "Orphan")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.entity_type, "Config");
}

#[tokio::test]
async fn test_create_invalidates_instead_of_populating() {
    let (service, _repo, cache) = setup(&[1]);
    // Entrada obsoleta de una traducción anterior
    cache
        .set(&translation_cache_key(1, "en-us"), &json!({"stale": true}), 3600)
        .await;

    service.create_translation(1, create_dto("en-us", "Fresh")).await.unwrap();
    assert!(cache.get(&translation_cache_key(1, "en-us")).await.is_none());
}

#[tokio::test]
async fn test_get_populates_cache_and_hit_skips_store() {
    let (service, repo, cache) = setup(&[1]);
    service.create_translation(1, create_dto("en-us", "Hello")).await.unwrap();

    let calls_before = repo.find_calls();
    service.get_translation(1, "en-us").await.unwrap().unwrap();
    assert_eq!(repo.find_calls(), calls_before + 1);
    assert_eq!(cached(&cache, 1, "en-us").await.unwrap().title, "Hello");

    service.get_translation(1, "EN-US").await.unwrap().unwrap();
    assert_eq!(repo.find_calls(), calls_before + 1);
}

#[tokio::test]
async fn test_get_absent_is_none_and_not_cached() {
    let (service, _repo, cache) = setup(&[1]);

    assert!(service.get_translation(1, "ja-jp").await.unwrap().is_none());
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_update_invalidates_cache() {
    let (service, _repo, cache) = setup(&[1]);
    service.create_translation(1, create_dto("en-us", "Old title")).await.unwrap();
    service.get_translation(1, "en-us").await.unwrap();
    assert!(cached(&cache, 1, "en-us").await.is_some());

    let update = UpdateTranslationDto {
        title: Some("New title".to_string()),
        ..Default::default()
    };
    let updated = service.update_translation(1, "en-us", update).await.unwrap();
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.author, "Author");
    assert!(cached(&cache, 1, "en-us").await.is_none());

    let fetched = service.get_translation(1, "en-us").await.unwrap().unwrap();
    assert_eq!(fetched.title, "New title");
}

#[tokio::test]
async fn test_update_keywords_only() {
    let (service, _repo, _cache) = setup(&[1]);
    service.create_translation(1, create_dto("en-us", "Title")).await.unwrap();

    let update = UpdateTranslationDto {
        keywords: Some(vec!["new".to_string()]),
        ..Default::default()
    };
    let updated = service.update_translation(1, "en-us", update).await.unwrap();
    assert_eq!(updated.keywords, vec!["new".to_string()]);
    assert_eq!(updated.title, "Title");
}

#[tokio::test]
async fn test_update_absent_is_not_found() {
    let (service, _repo, _cache) = setup(&[1]);

    let update = UpdateTranslationDto {
        title: Some("x".to_string()),
        ..Default::default()
    };
    let err = service.update_translation(1, "en-us", update).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_rejects_empty_supplied_field_and_empty_body() {
    let (service, _repo, _cache) = setup(&[1]);
    service.create_translation(1, create_dto("en-us", "Title")).await.unwrap();

    let update = UpdateTranslationDto {
        description: Some("   ".to_string()),
        ..Default::default()
    };
    let err = service.update_translation(1, "en-us", update).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(err.fields, vec!["description".to_string()]);

    let err = service
        .update_translation(1, "en-us", UpdateTranslationDto::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_fallback_to_default_language() {
    let (service, _repo, _cache) = setup(&[1]);
    service.create_translation(1, create_dto("zh-cn", "标题")).await.unwrap();

    let resolved = service.get_translation_with_fallback(1, "fr-fr").await.unwrap();
    assert!(resolved.fallback_used);
    assert_eq!(resolved.actual_language, "zh-cn");
    assert_eq!(resolved.translation.title, "标题");

    let resolved = service.get_translation_with_fallback(1, "zh_CN").await.unwrap();
    assert!(!resolved.fallback_used);
}

#[tokio::test]
async fn test_fallback_is_two_level_only() {
    let (service, _repo, _cache) = setup(&[1]);
    service.create_translation(1, create_dto("ja-jp", "タイトル")).await.unwrap();

    // Ni en-us ni el idioma por defecto existen: ja-jp no se usa
    let err = service.get_translation_with_fallback(1, "en-us").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_get_all_ordered_by_language_code() {
    let (service, _repo, _cache) = setup(&[1, 2]);
    service.create_translation(1, create_dto("zh-cn", "a")).await.unwrap();
    service.create_translation(1, create_dto("en-us", "b")).await.unwrap();
    service.create_translation(1, create_dto("ja-jp", "c")).await.unwrap();
    service.create_translation(2, create_dto("en-us", "other")).await.unwrap();

    let codes: Vec<String> = service
        .get_all_translations(1)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.language_code)
        .collect();
    assert_eq!(codes, vec!["en-us", "ja-jp", "zh-cn"]);

    assert!(service.get_all_translations(3).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_default_language_protection() {
    let (service, repo, _cache) = setup(&[1]);
    service.create_translation(1, create_dto("zh-cn", "默认")).await.unwrap();
    service.create_translation(1, create_dto("en-us", "English")).await.unwrap();

    let err = service.delete_translation(1, "zh-cn").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(repo.len(), 2);

    service.delete_translation(1, "en-us").await.unwrap();
    service.delete_translation(1, "zh-cn").await.unwrap();
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_delete_absent_is_not_found() {
    let (service, _repo, _cache) = setup(&[1]);

    let err = service.delete_translation(1, "en-us").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_invalidates_cache() {
    let (service, _repo, cache) = setup(&[1]);
    service.create_translation(1, create_dto("en-us", "Bye")).await.unwrap();
    service.get_translation(1, "en-us").await.unwrap();

    service.delete_translation(1, "en-us").await.unwrap();
    assert!(cached(&cache, 1, "en-us").await.is_none());
    assert!(service.get_translation(1, "en-us").await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalidate_all_caches_for_config() {
    let (service, _repo, cache) = setup(&[1, 2]);
    for code in ["zh-cn", "en-us", "ja-jp"] {
        service.create_translation(1, create_dto(code, code)).await.unwrap();
        service.get_translation(1, code).await.unwrap();
    }
    service.create_translation(2, create_dto("en-us", "other")).await.unwrap();
    service.get_translation(2, "en-us").await.unwrap();

    service.invalidate_all_caches_for_config(1).await;

    for code in ["zh-cn", "en-us", "ja-jp"] {
        assert!(cached(&cache, 1, code).await.is_none());
    }
    assert!(cached(&cache, 2, "en-us").await.is_some());
}

#[tokio::test]
async fn test_unreachable_cache_degrades_to_store_reads() {
    let repo = Arc::new(MockTranslationRepository::with_configs(&[1]));
    let service = TranslationService::new(repo.clone(), Arc::new(UnreachableCache), resolver());
    service.create_translation(1, create_dto("en-us", "Hello")).await.unwrap();

    let before = repo.find_calls();
    assert_eq!(service.get_translation(1, "en-us").await.unwrap().unwrap().title, "Hello");
    assert_eq!(service.get_translation(1, "en-us").await.unwrap().unwrap().title, "Hello");
    assert_eq!(repo.find_calls(), before + 2);
}

#[tokio::test]
async fn test_undecodable_cache_entry_is_a_miss() {
    let (service, _repo, cache) = setup(&[1]);
    service.create_translation(1, create_dto("en-us", "Hello")).await.unwrap();
    cache
        .set(&translation_cache_key(1, "en-us"), &json!({"unexpected": "shape"}), 3600)
        .await;

    let fetched = service.get_translation(1, "en-us").await.unwrap().unwrap();
    assert_eq!(fetched.title, "Hello");
}

#[tokio::test]
async fn test_legacy_comma_keywords_are_readable() {
    let (service, repo, _cache) = setup(&[]);
    repo.insert_raw(5, "en-us", "alpha, beta,,gamma");

    let fetched = service.get_translation(5, "en-us").await.unwrap().unwrap();
    assert_eq!(fetched.keywords, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_resolver_accessors_are_exposed() {
    let (service, _repo, _cache) = setup(&[]);
    assert_eq!(service.default_language(), "zh-cn");
    assert_eq!(service.supported_languages(), vec!["zh-cn", "en-us", "ja-jp"]);
    assert_eq!(
        service.resolve_language(None, Some("fr-FR;q=0.9,zh-CN;q=0.8,en-US;q=0.7")),
        "zh-cn"
    );
    assert_eq!(service.resolve_language(Some("ja_JP"), Some("en-US")), "ja-jp");
}
