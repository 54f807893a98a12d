use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngresError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Vector store error: {0}")]
    Upstream(String),

    /// The generation provider answered with a terminal non-success status.
    /// Status code and raw body are kept for the HTTP boundary to pass through.
    #[error("Generation request failed ({status}): {body}")]
    GenerationRejected { status: u16, body: String },

    /// The provider returned a success status but the payload carried no
    /// usable candidate text.
    #[error("Malformed generation response: {0}")]
    MalformedGeneration(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngresError>;
