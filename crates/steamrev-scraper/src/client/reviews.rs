//! The paginated review feed.

use chrono::Datelike;
use steamrev_core::Review;

use crate::error::ScraperError;
use crate::fetch::PageFetcher;
use crate::pagination::review_query;
use crate::parse::parse_review_page;

use super::ReviewCollector;

impl<F: PageFetcher> ReviewCollector<F> {
    /// Collects every review of an app in `language` (`None` uses the
    /// configured default, normally the viewer's account language).
    ///
    /// `app_id` is numeric; ids held as text must be parsed to `u64` first.
    ///
    /// Pages are fetched one at a time, each request echoing the cursor from
    /// the previous response. The loop ends at the first page with no review
    /// cards and at no other point. If a page carries no cursor the next
    /// request goes out without one and the endpoint answers with the first
    /// page again, so the feed repeats for as long as that keeps happening.
    ///
    /// Reviews are returned page by page, top to bottom within a page.
    ///
    /// # Errors
    ///
    /// - Any fetch error from the [`PageFetcher`].
    /// - Any extraction error from [`crate::parse::parse_review_card`].
    ///
    /// Reviews from pages before the failing one are discarded.
    pub async fn fetch_reviews(
        &self,
        app_id: u64,
        language: Option<&str>,
    ) -> Result<Vec<Review>, ScraperError> {
        let language = language.unwrap_or(&self.default_language);
        let url = self.reviews_url(app_id);
        let mut all_reviews: Vec<Review> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page = 0u32;

        loop {
            let query = review_query(app_id, page, language, cursor.as_deref());
            let html = self.fetcher.fetch(&url, &query).await?;
            let parsed = parse_review_page(&html, chrono::Local::now().year())?;

            if parsed.reviews.is_empty() {
                break;
            }

            tracing::debug!(
                app_id,
                page,
                reviews = parsed.reviews.len(),
                "parsed reviews page"
            );
            if parsed.cursor.is_none() {
                tracing::warn!(
                    app_id,
                    page,
                    "reviews page has no userreviewscursor; next request will repeat the first page"
                );
            }

            all_reviews.extend(parsed.reviews);
            cursor = parsed.cursor;
            page += 1;
        }

        tracing::info!(
            app_id,
            language,
            pages = page,
            count = all_reviews.len(),
            "collected reviews"
        );
        Ok(all_reviews)
    }
}
