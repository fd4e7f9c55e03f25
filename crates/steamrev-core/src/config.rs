use crate::app_config::{
    CollectorConfig, DEFAULT_COMMUNITY_BASE_URL, DEFAULT_REVIEW_LANGUAGE,
    DEFAULT_SEARCH_FILTER, DEFAULT_STORE_BASE_URL, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load collector configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_config() -> Result<CollectorConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load collector configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_config_from_env() -> Result<CollectorConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build collector configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables fall back to the storefront
/// defaults in [`crate::app_config`].
fn build_config<F>(lookup: F) -> Result<CollectorConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let base_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw.trim_end_matches('/').to_string())
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("\"{raw}\" is not an http(s) URL"),
            })
        }
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let store_base_url = base_url("STEAMREV_STORE_BASE_URL", DEFAULT_STORE_BASE_URL)?;
    let community_base_url = base_url("STEAMREV_COMMUNITY_BASE_URL", DEFAULT_COMMUNITY_BASE_URL)?;

    let user_agent = non_empty("STEAMREV_USER_AGENT", DEFAULT_USER_AGENT)?;
    let review_language = non_empty("STEAMREV_REVIEW_LANGUAGE", DEFAULT_REVIEW_LANGUAGE)?;
    let search_filter = non_empty("STEAMREV_SEARCH_FILTER", DEFAULT_SEARCH_FILTER)?;

    Ok(CollectorConfig {
        store_base_url,
        community_base_url,
        user_agent,
        review_language,
        search_filter,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
