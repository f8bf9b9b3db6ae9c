use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, instrument};

use crate::application::dtos::translation_dto::{CreateTranslationDto, UpdateTranslationDto};
use crate::application::ports::translation_ports::TranslationUseCase;
use crate::common::di::AppState;
use crate::common::errors::DomainError;
use crate::interfaces::api::handlers::{error_response, json_rejection_response, path_rejection_response};

/// Servicio de traducciones; sin él, la funcionalidad no existe
fn translation_service(state: &AppState) -> Result<&Arc<dyn TranslationUseCase>, Response> {
    state
        .translation_service
        .as_ref()
        .ok_or_else(|| error_response(DomainError::not_found("Feature", "multilingual support")))
}

/// Lista todas las traducciones de una configuración
#[instrument(skip(state, path))]
pub async fn list_translations(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let service = match translation_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };
    let Path(config_id) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };

    match service.get_all_translations(config_id).await {
        Ok(translations) => (StatusCode::OK, Json(translations)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Crea una traducción; el idioma viene en el cuerpo
#[instrument(skip(state, path, payload))]
pub async fn create_translation(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateTranslationDto>, JsonRejection>,
) -> Response {
    let service = match translation_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };
    let Path(config_id) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };
    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match service.create_translation(config_id, dto).await {
        Ok(translation) => (StatusCode::CREATED, Json(translation)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Obtiene la traducción exacta de un idioma, sin idioma de reserva
#[instrument(skip(state, path))]
pub async fn get_translation(
    State(state): State<AppState>,
    path: Result<Path<(i64, String)>, PathRejection>,
) -> Response {
    let service = match translation_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };
    let Path((config_id, language_code)) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };

    match service.get_translation(config_id, &language_code).await {
        Ok(Some(translation)) => (StatusCode::OK, Json(translation)).into_response(),
        Ok(None) => error_response(DomainError::not_found(
            "Translation",
            format!("config {} language '{}'", config_id, language_code),
        )),
        Err(err) => error_response(err),
    }
}

/// Actualiza parcialmente una traducción
#[instrument(skip(state, path, payload))]
pub async fn update_translation(
    State(state): State<AppState>,
    path: Result<Path<(i64, String)>, PathRejection>,
    payload: Result<Json<UpdateTranslationDto>, JsonRejection>,
) -> Response {
    let service = match translation_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };
    let Path((config_id, language_code)) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };
    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match service.update_translation(config_id, &language_code, dto).await {
        Ok(translation) => (StatusCode::OK, Json(translation)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Elimina una traducción
#[instrument(skip(state, path))]
pub async fn delete_translation(
    State(state): State<AppState>,
    path: Result<Path<(i64, String)>, PathRejection>,
) -> Response {
    let service = match translation_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };
    let Path((config_id, language_code)) = match path {
        Ok(path) => path,
        Err(rejection) => return path_rejection_response(rejection),
    };

    match service.delete_translation(config_id, &language_code).await {
        Ok(()) => {
            debug!("Translation {} of config {} deleted", language_code, config_id);
            StatusCode::NO_CONTENT.into_response()
        },
        Err(err) => error_response(err),
    }
}
