//! Runtime configuration.
//!
//! Desktop reads `.env.local` / `.env` from the repo root, then the process
//! environment. The browser build bakes the API URL in at compile time.

use scoutdesk_domain::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Build from a key lookup. Blank values and unparseable or zero
    /// numbers fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_base_url: get("SCOUTDESK_API_URL").unwrap_or(defaults.api_base_url),
            page_size: get("SCOUTDESK_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.page_size),
            request_timeout_secs: get("SCOUTDESK_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "SCOUTDESK_API_URL" => option_env!("SCOUTDESK_API_URL").map(str::to_string),
            "SCOUTDESK_PAGE_SIZE" => option_env!("SCOUTDESK_PAGE_SIZE").map(str::to_string),
            _ => None,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCOUTDESK_API_URL", "https://api.scoutdesk.io"),
            ("SCOUTDESK_PAGE_SIZE", "50"),
            ("SCOUTDESK_REQUEST_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.api_base_url, "https://api.scoutdesk.io");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCOUTDESK_API_URL", "  "),
            ("SCOUTDESK_PAGE_SIZE", "0"),
            ("SCOUTDESK_REQUEST_TIMEOUT_SECS", "soon"),
        ]));

        assert_eq!(config, AppConfig::default());
    }
}
