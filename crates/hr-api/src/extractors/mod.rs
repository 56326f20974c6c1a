//! Axum extractors for request handling
//!
//! Custom extractors for actor identity and validated JSON bodies.

mod actor;
mod validated;

pub use actor::{ActorIdentity, AdminActor};
pub use validated::ValidatedJson;
