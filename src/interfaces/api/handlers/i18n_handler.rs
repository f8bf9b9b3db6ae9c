use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::dtos::translation_dto::LanguagesDto;
use crate::common::di::AppState;
use crate::common::errors::DomainError;
use crate::interfaces::api::handlers::error_response;

/// Idiomas que el servicio puede servir
pub async fn get_languages(State(state): State<AppState>) -> Response {
    let Some(service) = state.translation_service.as_ref() else {
        return error_response(DomainError::not_found("Feature", "multilingual support"));
    };

    let languages = LanguagesDto {
        default_language: service.default_language(),
        supported_languages: service.supported_languages(),
    };
    (StatusCode::OK, Json(languages)).into_response()
}
