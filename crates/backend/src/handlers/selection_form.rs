use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    Json,
};
use contracts::shared::selection_form::{
    FormSnapshot, SessionCreatedResponse, SubmitSelectionsRequest, SuggestionQuery,
    SummaryResponse, SwitchCategoryRequest, ToggleRequest,
};
use uuid::Uuid;

use crate::domain::form_session::FormSession;
use crate::system::session::{self, SessionError};

fn status_for(error: SessionError) -> StatusCode {
    match error {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        e => {
            tracing::error!("Session store failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, StatusCode> {
    Uuid::parse_str(id).map_err(|_| StatusCode::BAD_REQUEST)
}

fn with_session<T>(id: &str, f: impl FnOnce(&mut FormSession) -> T) -> Result<T, StatusCode> {
    let id = parse_id(id)?;
    let store = session::get_store().map_err(status_for)?;
    store.with_session(id, f).map_err(status_for)
}

/// POST /api/selection-form/session
pub async fn create_session() -> Result<Json<SessionCreatedResponse>, StatusCode> {
    let store = session::get_store().map_err(status_for)?;
    let session_id = store.create().map_err(status_for)?;
    Ok(Json(SessionCreatedResponse { session_id }))
}

/// GET /api/selection-form/:id
pub async fn get_snapshot(Path(id): Path<String>) -> Result<Json<FormSnapshot>, StatusCode> {
    with_session(&id, |s| s.snapshot()).map(Json)
}

/// DELETE /api/selection-form/:id
pub async fn delete_session(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = parse_id(&id)?;
    let store = session::get_store().map_err(status_for)?;
    match store.remove(uuid) {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(status_for(e)),
    }
}

/// POST /api/selection-form/:id/submit
///
/// Раскодирует переданные скрытые поля и строит сводку.
pub async fn submit(
    Path(id): Path<String>,
    Json(request): Json<SubmitSelectionsRequest>,
) -> Result<Json<SummaryResponse>, StatusCode> {
    with_session(&id, |s| {
        if let Some(stores) = request.stores.as_deref() {
            s.set_stores_string(Some(stores));
        }
        if let Some(codes) = request.event_codes.as_deref() {
            s.set_event_codes_string(Some(codes));
        }
        if let Some(types) = request.pickup_types.as_deref() {
            s.set_pickup_types_string(Some(types));
        }
        if let Some(notifications) = request.notifications.as_deref() {
            s.set_notifications_string(Some(notifications));
        }
        SummaryResponse {
            summary: s.print_selections().to_string(),
        }
    })
    .map(Json)
}

/// POST /api/selection-form/:id/category
///
/// Неизвестный тип оставляет форму как есть.
pub async fn switch_category(
    Path(id): Path<String>,
    Json(request): Json<SwitchCategoryRequest>,
) -> Result<Json<FormSnapshot>, StatusCode> {
    with_session(&id, |s| {
        s.set_event_category(&request.category);
        s.snapshot()
    })
    .map(Json)
}

/// POST /api/selection-form/:id/notifications/toggle
pub async fn toggle_notification(
    Path(id): Path<String>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<FormSnapshot>, StatusCode> {
    with_session(&id, |s| {
        s.toggle_notification(&request.label, request.checked);
        s.snapshot()
    })
    .map(Json)
}

/// POST /api/selection-form/:id/notifications/select-all
pub async fn select_all_notifications(
    Path(id): Path<String>,
) -> Result<Json<FormSnapshot>, StatusCode> {
    with_session(&id, |s| {
        s.select_all_notifications();
        s.snapshot()
    })
    .map(Json)
}

/// POST /api/selection-form/:id/notifications/clear-all
pub async fn clear_all_notifications(
    Path(id): Path<String>,
) -> Result<Json<FormSnapshot>, StatusCode> {
    with_session(&id, |s| {
        s.clear_all_notifications();
        s.snapshot()
    })
    .map(Json)
}

/// GET /api/selection-form/:id/suggestions?q=
///
/// Тело ответа — JSON-массив строк, без обёртки.
pub async fn suggestions(
    Path(id): Path<String>,
    Query(query): Query<SuggestionQuery>,
) -> Result<([(header::HeaderName, &'static str); 1], String), StatusCode> {
    let payload = with_session(&id, |s| {
        s.set_chip_query(query.q.as_deref());
        s.fetch_suggestions()
    })?;
    Ok(([(header::CONTENT_TYPE, "application/json")], payload))
}
