//! Environment-based configuration.
//!
//! ## Environment Variables
//!
//! ### `PETPAGE_SEARCH_BASE`
//!
//! Base URL of the site serving the search endpoint. The search request path
//! (`/pets/search/`) is appended to it. Default: `http://127.0.0.1:8000`.

use std::env;

/// Name of the search-base environment variable.
pub const SEARCH_BASE_VAR: &str = "PETPAGE_SEARCH_BASE";

const DEFAULT_SEARCH_BASE: &str = "http://127.0.0.1:8000";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Base URL the search client is pointed at.
    pub search_base: String,
}

impl UiConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for unset or empty values.
    pub fn from_env() -> Self {
        let search_base = env::var(SEARCH_BASE_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_BASE.to_string());
        UiConfig { search_base }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            search_base: DEFAULT_SEARCH_BASE.to_string(),
        }
    }
}
