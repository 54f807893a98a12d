//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and credential
//! resolution.

#[cfg(test)]
mod tests {
    use crate::config::*;

    // ====== Default Value Tests ======

    #[test]
    fn test_default_llm_model() {
        assert_eq!(default_llm_model(), "gemini-2.5-flash");
    }

    #[test]
    fn test_default_config_values() {
        let config = AppConfig::default();

        assert_eq!(config.server_host(), "0.0.0.0");
        assert_eq!(config.server_port(), 8000);
        assert!(config.cors_enabled());
        assert_eq!(config.vector_store_collection(), "groundwater_data");
        assert_eq!(config.llm_model(), "gemini-2.5-flash");
    }

    // ====== Parsing Tests ======

    #[test]
    fn test_parse_minimal_config() {
        let toml_str = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [logging]
            level = "debug"
            backtrace = false

            [vector_store]
            endpoint = "http://chroma:8001"
            collection = "groundwater_data"

            [llm]
            endpoint = "https://generativelanguage.googleapis.com"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.server_host(), "127.0.0.1");
        assert_eq!(config.server_port(), 9000);
        // Omitted fields fall back to defaults
        assert!(config.cors_enabled());
        assert_eq!(config.llm_model(), "gemini-2.5-flash");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_parse_rejects_missing_sections() {
        let toml_str = r#"
            [server]
            host = "127.0.0.1"
            port = 9000
        "#;

        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    // ====== Credential Resolution Tests ======

    #[test]
    fn test_api_key_from_config_file() {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("file-key".to_string());

        // Only meaningful when the env var is absent; tests run in a clean env
        if std::env::var("GEMINI_API_KEY").is_err() {
            assert_eq!(config.api_key(), Some("file-key".to_string()));
        }
    }

    #[test]
    fn test_api_key_blank_config_value_is_none() {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("   ".to_string());

        if std::env::var("GEMINI_API_KEY").is_err() {
            assert_eq!(config.api_key(), None);
        }
    }

    #[test]
    fn test_api_key_missing_everywhere_is_none() {
        let config = AppConfig::default();

        if std::env::var("GEMINI_API_KEY").is_err() {
            assert_eq!(config.api_key(), None);
        }
    }
}
