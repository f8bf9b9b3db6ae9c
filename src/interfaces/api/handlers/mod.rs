pub mod config_handler;
pub mod i18n_handler;
pub mod translation_handler;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::common::errors::{DomainError, ErrorKind};

/// Convierte un error de dominio en la respuesta JSON de error de la API
pub fn error_response(err: DomainError) -> Response {
    let status = match err.kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // El detalle interno solo va al log
    if err.kind == ErrorKind::InternalError {
        tracing::error!("Internal error on {}: {:?}", err.entity_type, err);
    }

    (status, Json(json!({
        "error": {
            "code": err.code(),
            "message": err.public_message(),
            "fields": err.fields,
        }
    }))).into_response()
}

/// Un cuerpo JSON mal formado o con tipos incorrectos es un error de validación
pub fn json_rejection_response(rejection: JsonRejection) -> Response {
    error_response(DomainError::validation_error("Request", rejection.body_text()))
}

/// Un identificador de ruta que no se puede interpretar es un error de validación
pub fn path_rejection_response(rejection: PathRejection) -> Response {
    error_response(DomainError::validation_error("Request", rejection.body_text()).with_fields(["id"]))
}

pub fn query_rejection_response(rejection: QueryRejection) -> Response {
    error_response(DomainError::validation_error("Request", rejection.body_text()))
}
