use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

pub fn default_enable_cors() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreConfig {
    /// Base URL of the Chroma server holding the groundwater index
    pub endpoint: String,
    /// Collection name, populated by the offline indexing pipeline
    pub collection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Optional file-based credential; the GEMINI_API_KEY environment
    /// variable takes priority when both are set
    #[serde(default)]
    pub api_key: Option<String>,
}

pub fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub vector_store: VectorStoreConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::IngresError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::IngresError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::IngresError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Get server bind host
    pub fn server_host(&self) -> &str {
        &self.server.host
    }

    /// Get server port
    pub fn server_port(&self) -> u16 {
        self.server.port
    }

    /// Check if permissive CORS is enabled
    pub fn cors_enabled(&self) -> bool {
        self.server.enable_cors
    }

    /// Get vector store endpoint
    pub fn vector_store_endpoint(&self) -> &str {
        &self.vector_store.endpoint
    }

    /// Get vector store collection name
    pub fn vector_store_collection(&self) -> &str {
        &self.vector_store.collection
    }

    /// Get LLM endpoint
    pub fn llm_endpoint(&self) -> &str {
        &self.llm.endpoint
    }

    /// Get LLM model
    pub fn llm_model(&self) -> &str {
        &self.llm.model
    }

    /// Resolve the generation API credential.
    ///
    /// The GEMINI_API_KEY environment variable wins over the config file.
    /// Returns None when neither source provides a non-empty value; the
    /// service then starts in a degraded, not-ready state.
    pub fn api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                self.llm
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
            })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                enable_cors: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            vector_store: VectorStoreConfig {
                endpoint: "http://localhost:8001".to_string(),
                collection: "groundwater_data".to_string(),
            },
            llm: LlmConfig {
                endpoint: "https://generativelanguage.googleapis.com".to_string(),
                model: default_llm_model(),
                api_key: None,
            },
        }
    }
}
