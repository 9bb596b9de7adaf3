use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListEventsHandler<InMemoryEventStore>>,
    pub create_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub update_handler: Arc<UpdateEventHandler<InMemoryEventStore>>,
    pub delete_handler: Arc<DeleteEventHandler<InMemoryEventStore>>,
}

impl AppState {
    pub fn new(event_store: Arc<InMemoryEventStore>) -> Self {
        Self {
            list_handler: Arc::new(ListEventsHandler::new(event_store.clone())),
            create_handler: Arc::new(CreateEventHandler::new(event_store.clone())),
            update_handler: Arc::new(UpdateEventHandler::new(event_store.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(event_store)),
        }
    }
}
