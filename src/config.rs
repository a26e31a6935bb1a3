//! Application Configuration
//!
//! Fixed endpoints and storage keys, provided to components via context.

use leptos::prelude::*;

/// Demo API serving the seed task list
pub const SEED_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";
/// Number of seed tasks requested on first load
pub const SEED_LIMIT: u32 = 7;
/// Local storage key for the serialized task list
pub const TASKS_KEY: &str = "todos";
/// Local storage key for the theme string
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_endpoint: String,
    pub seed_limit: u32,
    pub tasks_key: String,
    pub theme_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_endpoint: SEED_ENDPOINT.to_string(),
            seed_limit: SEED_LIMIT,
            tasks_key: TASKS_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Full GET url for the seed request
    pub fn seed_url(&self) -> String {
        format!("{}?_limit={}", self.seed_endpoint, self.seed_limit)
    }
}

/// Get the config from context, falling back to defaults outside `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_url() {
        let config = AppConfig::default();
        assert_eq!(config.seed_url(), "https://jsonplaceholder.typicode.com/todos?_limit=7");
        assert_eq!(config.tasks_key, "todos");
        assert_eq!(config.theme_key, "theme");
    }
}
