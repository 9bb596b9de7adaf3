use axum::{
    extract::rejection::PathRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::http::event_id_from_path;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> impl IntoResponse {
    let Some(id) = event_id_from_path(id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.delete_handler.handle(id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
