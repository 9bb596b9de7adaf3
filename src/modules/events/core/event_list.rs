use crate::modules::events::core::event::{Event, EventId};

/// Ordered collection of events, kept in insertion order.
///
/// Lookups are linear. Ids are handed out as `max + 1`, so removing the
/// highest id and inserting again reuses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            events: vec![
                Event::new(1, "Tech Meetup"),
                Event::new(2, "Python Workshop"),
            ],
        }
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    pub fn next_id(&self) -> EventId {
        self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let position = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(position))
    }
}
