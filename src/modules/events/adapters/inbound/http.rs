// Shared HTTP plumbing for the events inbound adapters.
//
// - Request bodies degrade to an empty object on any extraction failure.
// - Path ids match only ASCII digit runs; anything else is a routing miss.
// - Application errors map to a status code and an `{"error": ...}` body.

use axum::{
    Json,
    extract::Path,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::EventId;
use crate::modules::events::use_cases::errors::ApplicationError;

#[derive(Debug, Default, Deserialize)]
pub struct EventBody {
    #[serde(default)]
    pub title: Option<String>,
}

impl EventBody {
    /// Missing, malformed, or mistyped JSON yields an empty body.
    pub fn or_empty(body: Result<Json<EventBody>, JsonRejection>) -> Self {
        match body {
            Ok(Json(body)) => body,
            Err(rejection) => {
                tracing::debug!(%rejection, "treating request body as empty");
                Self::default()
            }
        }
    }
}

/// `None` unless the segment is one or more ASCII digits that fit an `EventId`.
pub fn event_id_from_path(
    segment: Result<Path<String>, PathRejection>,
) -> Option<EventId> {
    let Path(segment) = segment.ok()?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Domain(EventError::MissingTitle) => StatusCode::BAD_REQUEST,
            ApplicationError::Domain(EventError::NotFound) => StatusCode::NOT_FOUND,
            ApplicationError::Store(e) => {
                tracing::error!(error = %e, "event store failure");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Internal server error")),
                )
                    .into_response();
            }
        };
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
