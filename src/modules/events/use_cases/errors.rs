use crate::modules::events::adapters::outbound::event_store::EventStoreError;
use crate::modules::events::core::errors::EventError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] EventError),

    #[error(transparent)]
    Store(#[from] EventStoreError),
}
