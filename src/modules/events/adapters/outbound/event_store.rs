// Port for the event collection.
//
// Every method is one store operation and must run under a single lock in
// implementations that share state across requests.

use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::title::EventTitle;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError>;

    async fn find(&self, id: EventId) -> Result<Option<Event>, EventStoreError>;

    /// Assigns the next id and appends the new event in one step.
    async fn insert(&self, title: EventTitle) -> Result<Event, EventStoreError>;

    /// Replaces the title of an existing event. `None` when the id is unknown.
    async fn rename(
        &self,
        id: EventId,
        title: EventTitle,
    ) -> Result<Option<Event>, EventStoreError>;

    async fn remove(&self, id: EventId) -> Result<Option<Event>, EventStoreError>;
}
