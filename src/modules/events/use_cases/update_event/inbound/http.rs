use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::http::{EventBody, event_id_from_path};
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<EventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(id) = event_id_from_path(id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let body = EventBody::or_empty(body);
    let command = UpdateEvent {
        id,
        title: body.title,
    };

    match state.update_handler.handle(command).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
