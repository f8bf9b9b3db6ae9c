use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use crate::application::dtos::config_dto::ResolvedConfigDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{error_response, path_rejection_response, query_rejection_response};

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub domain: String,
    pub lang: Option<String>,
}

fn accept_language(headers: &HeaderMap) -> Option<&str> {
    headers.get(ACCEPT_LANGUAGE).and_then(|value| value.to_str().ok())
}

/// Respuesta con `Content-Language` cuando se sirvió una traducción
fn resolved_response(resolved: ResolvedConfigDto) -> Response {
    let language = resolved
        .language
        .as_deref()
        .and_then(|language| HeaderValue::from_str(language).ok());

    let mut response = (StatusCode::OK, Json(resolved)).into_response();
    if let Some(language) = language {
        response.headers_mut().insert(CONTENT_LANGUAGE, language);
    }
    response
}

/// Resuelve una configuración por ID
#[instrument(skip(state, path, query, headers))]
pub async fn get_config(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let Path(config_id) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(rejection),
    };

    match state
        .config_service
        .resolve_config(config_id, query.lang.as_deref(), accept_language(&headers))
        .await
    {
        Ok(resolved) => resolved_response(resolved),
        Err(err) => error_response(err),
    }
}

/// Resuelve la configuración que sirve un dominio
#[instrument(skip(state, query, headers))]
pub async fn lookup_domain(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(rejection),
    };

    match state
        .config_service
        .resolve_domain(&query.domain, query.lang.as_deref(), accept_language(&headers))
        .await
    {
        Ok(resolved) => resolved_response(resolved),
        Err(err) => error_response(err),
    }
}

/// Elimina una configuración y todo su contenido cacheado
#[instrument(skip(state, path))]
pub async fn delete_config(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(config_id) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };

    match state.config_service.delete_config(config_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
