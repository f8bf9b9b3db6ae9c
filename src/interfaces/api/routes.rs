use axum::{
    routing::get,
    Router,
};
use tower_http::{
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::common::di::AppState;
use crate::interfaces::api::handlers::{config_handler, i18n_handler, translation_handler};

/// Creates API routes for the application, mounted under `/api`
pub fn create_api_routes(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/lookup", get(config_handler::lookup_domain))
        .route(
            "/configs/{id}",
            get(config_handler::get_config).delete(config_handler::delete_config),
        );

    // Translation routes only exist when the cache backend answered at startup
    if state.translation_service.is_some() {
        tracing::info!("Setting up multilingual routes");
        router = router
            .route("/i18n/languages", get(i18n_handler::get_languages))
            .route(
                "/configs/{id}/translations",
                get(translation_handler::list_translations).post(translation_handler::create_translation),
            )
            .route(
                "/configs/{id}/translations/{lang}",
                get(translation_handler::get_translation)
                    .put(translation_handler::update_translation)
                    .delete(translation_handler::delete_translation),
            );
    } else {
        tracing::warn!("Multilingual support unavailable, translation routes not mounted");
    }

    let timeout = state.config.server.request_timeout();

    Router::new()
        .nest("/api", router)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}
