//! Review collector for a storefront's public store and community pages.

mod count;
mod reviews;
mod search;

use steamrev_core::CollectorConfig;

use crate::error::ScraperError;
use crate::fetch::{HttpFetcher, PageFetcher};

/// Search category that restricts results to games.
pub(super) const GAMES_CATEGORY: &str = "998";

/// Entry point for the four collector operations.
///
/// Every operation owns its own accumulation state and issues its requests
/// strictly one after another through the [`PageFetcher`]. On any failure the
/// rows gathered so far are dropped and the error is returned.
#[derive(Debug, Clone)]
pub struct ReviewCollector<F = HttpFetcher> {
    fetcher: F,
    store_base_url: String,
    community_base_url: String,
    default_language: String,
    default_filter: String,
}

impl ReviewCollector<HttpFetcher> {
    /// Creates a collector that talks to the network with the configured
    /// user agent and base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &CollectorConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(&config.user_agent)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: PageFetcher> ReviewCollector<F> {
    /// Creates a collector on top of an arbitrary [`PageFetcher`].
    #[must_use]
    pub fn with_fetcher(fetcher: F, config: &CollectorConfig) -> Self {
        Self {
            fetcher,
            store_base_url: config.store_base_url.trim_end_matches('/').to_owned(),
            community_base_url: config.community_base_url.trim_end_matches('/').to_owned(),
            default_language: config.review_language.clone(),
            default_filter: config.search_filter.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Store page for one app, e.g. `https://store.steampowered.com/app/730`.
    fn app_page_url(&self, app_id: u64) -> String {
        format!("{}/app/{app_id}", self.store_base_url)
    }

    fn search_url(&self) -> String {
        format!("{}/search/", self.store_base_url)
    }

    /// Community hub review feed for one app.
    fn reviews_url(&self, app_id: u64) -> String {
        format!("{}/app/{app_id}/homecontent/", self.community_base_url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
