//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default tracing filter when `LOG_LEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the auth backend
    /// Example: https://api.smartjects.com
    /// When unset the front-end runs against the built-in mock backend.
    pub api_url: Option<String>,

    /// Tracing filter directive, e.g. `info` or `smartjects=debug`
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SMARTJECTS_API_URL").ok(),
            std::env::var("LOG_LEVEL").ok(),
        )
    }

    fn from_vars(api_url: Option<String>, log_level: Option<String>) -> Self {
        Self {
            api_url: api_url.filter(|url| !url.trim().is_empty()),
            log_level: log_level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Check if a real backend is configured
    pub fn has_api(&self) -> bool {
        self.api_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_without_vars() {
        let config = Config::from_vars(None, None);

        assert!(config.api_url.is_none());
        assert!(!config.has_api());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = Config::from_vars(
            Some("https://api.smartjects.com".to_string()),
            Some("smartjects=debug".to_string()),
        );

        assert_eq!(
            config.api_url,
            Some("https://api.smartjects.com".to_string())
        );
        assert!(config.has_api());
        assert_eq!(config.log_level, "smartjects=debug");
    }

    #[test]
    fn test_config_blank_values_fall_back() {
        let config = Config::from_vars(Some("   ".to_string()), Some("".to_string()));

        assert!(!config.has_api());
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_config_debug() {
        let config = Config::from_vars(Some("http://localhost:8080".to_string()), None);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("api_url"));
        assert!(debug_str.contains("http://localhost:8080"));
    }
}
