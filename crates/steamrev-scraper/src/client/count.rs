use crate::error::ScraperError;
use crate::fetch::PageFetcher;
use crate::parse::parse_review_count;

use super::ReviewCollector;

impl<F: PageFetcher> ReviewCollector<F> {
    /// Returns the number of reviews an app has in the viewer's default
    /// review language, as shown on its store page.
    ///
    /// `app_id` is the numeric id from the store URL or from
    /// [`steamrev_core::GameIdentity::id`]; callers holding the id as text
    /// parse it with `str::parse::<u64>()` first.
    ///
    /// # Errors
    ///
    /// - Any fetch error from the [`PageFetcher`].
    /// - [`ScraperError::MissingElement`] — the page has no review language
    ///   count (unknown app, changed markup, or no reviews in that language).
    /// - [`ScraperError::InvalidNumber`] — the count text does not parse.
    pub async fn review_count(&self, app_id: u64) -> Result<u64, ScraperError> {
        let url = self.app_page_url(app_id);
        let html = self.fetcher.fetch(&url, &[]).await?;
        let count = parse_review_count(&html)?;
        tracing::info!(app_id, count, "read review count");
        Ok(count)
    }
}
