#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventError {
    #[error("Missing required field: title")]
    MissingTitle,

    #[error("Event not found")]
    NotFound,
}
