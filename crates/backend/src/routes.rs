use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SELECTION FORM
        // ========================================
        .route(
            "/api/selection-form/session",
            post(handlers::selection_form::create_session),
        )
        .route(
            "/api/selection-form/:id",
            get(handlers::selection_form::get_snapshot)
                .delete(handlers::selection_form::delete_session),
        )
        .route(
            "/api/selection-form/:id/submit",
            post(handlers::selection_form::submit),
        )
        .route(
            "/api/selection-form/:id/category",
            post(handlers::selection_form::switch_category),
        )
        // Notification chips
        .route(
            "/api/selection-form/:id/notifications/toggle",
            post(handlers::selection_form::toggle_notification),
        )
        .route(
            "/api/selection-form/:id/notifications/select-all",
            post(handlers::selection_form::select_all_notifications),
        )
        .route(
            "/api/selection-form/:id/notifications/clear-all",
            post(handlers::selection_form::clear_all_notifications),
        )
        .route(
            "/api/selection-form/:id/suggestions",
            get(handlers::selection_form::suggestions),
        )
}
