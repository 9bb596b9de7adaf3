// Composition root for the events API.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the event store and wire it into the use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
