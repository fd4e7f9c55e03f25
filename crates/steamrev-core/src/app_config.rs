/// Browser identity sent with every storefront request. The store serves a
/// reduced page to clients that do not look like a desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1.2 Safari/605.1.15";

pub const DEFAULT_STORE_BASE_URL: &str = "https://store.steampowered.com";
pub const DEFAULT_COMMUNITY_BASE_URL: &str = "https://steamcommunity.com";

/// Language sentinel meaning "whatever the viewer's account is set to".
pub const DEFAULT_REVIEW_LANGUAGE: &str = "default";

pub const DEFAULT_SEARCH_FILTER: &str = "topsellers";

/// Settings for a review collector session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Origin of the storefront (app pages and search results).
    pub store_base_url: String,
    /// Origin of the community hub that serves review cards.
    pub community_base_url: String,
    pub user_agent: String,
    /// Review language used when the caller does not pass one.
    pub review_language: String,
    /// Search filter used by the top-sellers listing when none is given.
    pub search_filter: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            community_base_url: DEFAULT_COMMUNITY_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            review_language: DEFAULT_REVIEW_LANGUAGE.to_string(),
            search_filter: DEFAULT_SEARCH_FILTER.to_string(),
        }
    }
}
