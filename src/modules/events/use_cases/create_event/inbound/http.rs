use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::http::EventBody;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EventBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = EventBody::or_empty(body);
    let command = CreateEvent { title: body.title };

    match state.create_handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
