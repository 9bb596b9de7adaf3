use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::title::EventTitle;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let title = EventTitle::parse(command.title)?;
        let event = self.event_store.insert(title).await?;
        tracing::info!(id = event.id, "event created");
        Ok(event)
    }
}
