//! HTTP boundary for the chat service

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use server::serve;
