//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.

use std::env;

/// Terminal application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tracing filter directive (BISTRO_LOG).
    pub log_filter: String,

    /// Also print the finalized receipt as pretty JSON
    /// (BISTRO_RECEIPT_JSON=true).
    pub receipt_json: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        AppConfig {
            log_filter: env::var("BISTRO_LOG")
                .unwrap_or_else(|_| "info,bistro_core=debug,bistro_cli=debug".to_string()),

            receipt_json: env::var("BISTRO_RECEIPT_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: "info".to_string(),
            receipt_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter, "info");
        assert!(!config.receipt_json);
    }
}
