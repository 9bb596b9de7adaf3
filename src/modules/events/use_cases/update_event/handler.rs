use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::title::EventTitle;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use std::sync::Arc;

pub struct UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Unknown ids are reported before the title is validated.
    pub async fn handle(&self, command: UpdateEvent) -> Result<Event, ApplicationError> {
        if self.event_store.find(command.id).await?.is_none() {
            return Err(EventError::NotFound.into());
        }
        let title = EventTitle::parse(command.title)?;
        // the event may have been removed between the lookup and the write
        let event = self
            .event_store
            .rename(command.id, title)
            .await?
            .ok_or(EventError::NotFound)?;
        tracing::info!(id = event.id, "event updated");
        Ok(event)
    }
}
