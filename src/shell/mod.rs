// Composition root for the trackings service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store and wire it into the use case handlers.
// - Spawn background workers (expiry sweeper).
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
pub mod workers;
