pub mod api;
pub mod chat;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod models;
pub mod vector_store;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod models_tests;
#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
