// In memory implementation of the EventStore port.
//
// Purpose
// - Hold the event collection for the lifetime of the process.
// - Support handler tests without shared global state.
//
// Responsibilities
// - Serialize every operation behind one RwLock.
// - Simulate an unavailable backend when toggled offline.

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::event_list::EventList;
use crate::modules::events::core::title::EventTitle;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    inner: RwLock<EventList>,
    offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(EventList::seeded()),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.list().to_vec())
    }

    async fn find(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.find(id).cloned())
    }

    async fn insert(&self, title: EventTitle) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let event = Event::new(guard.next_id(), title.into_inner());
        guard.append(event.clone());
        Ok(event)
    }

    async fn rename(
        &self,
        id: EventId,
        title: EventTitle,
    ) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        Ok(guard.find_mut(id).map(|event| {
            event.title = title.into_inner();
            event.clone()
        }))
    }

    async fn remove(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.write().await.remove(id))
    }
}
