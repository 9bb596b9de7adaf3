use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self) -> Result<Vec<Event>, ApplicationError> {
        Ok(self.event_store.list().await?)
    }
}
