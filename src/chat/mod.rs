//! Chat orchestration: retrieve -> assemble prompt -> generate with retry
//!
//! This is the only part of the service with decision logic. Everything it
//! composes (similarity search, text generation) is owned by an external
//! collaborator behind a trait.

pub mod prompt;
pub mod service;

pub use service::ChatService;
pub use service::ServiceState;
