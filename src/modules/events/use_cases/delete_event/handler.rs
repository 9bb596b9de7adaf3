use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, id: EventId) -> Result<Event, ApplicationError> {
        let event = self
            .event_store
            .remove(id)
            .await?
            .ok_or(EventError::NotFound)?;
        tracing::info!(id = event.id, "event deleted");
        Ok(event)
    }
}
