//! Search-result listing: id lookup by term and filtered top lists.

use steamrev_core::GameIdentity;

use crate::error::ScraperError;
use crate::fetch::{PageFetcher, QueryParams};
use crate::parse::{parse_first_search_row, parse_search_rows};

use super::{ReviewCollector, GAMES_CATEGORY};

/// The one search parameter that distinguishes a listing: a free-text
/// `term` or a named ordering `filter`.
#[derive(Debug, Clone, Copy)]
enum SearchKind<'a> {
    Term(&'a str),
    Filter(&'a str),
}

fn search_query(kind: SearchKind<'_>, page: u32) -> QueryParams {
    let (name, value) = match kind {
        SearchKind::Term(term) => ("term", term),
        SearchKind::Filter(filter) => ("filter", filter),
    };
    vec![
        ("category1", GAMES_CATEGORY.to_owned()),
        ("page", page.to_string()),
        (name, value.to_owned()),
    ]
}

impl<F: PageFetcher> ReviewCollector<F> {
    /// Resolves a search term to app ids.
    ///
    /// With `all_results == false` only the first row of the first results
    /// page is returned. Otherwise every results page is walked until one
    /// comes back empty, and all rows are returned in page order without
    /// de-duplication.
    ///
    /// # Errors
    ///
    /// - Any fetch error from the [`PageFetcher`].
    /// - [`ScraperError::MissingElement`] — `all_results == false` and the
    ///   search has no results, or a row lacks its title.
    /// - [`ScraperError::MissingAttribute`] / [`ScraperError::InvalidNumber`] —
    ///   a row's app id is absent or not numeric.
    pub async fn search_game_id(
        &self,
        term: &str,
        all_results: bool,
    ) -> Result<Vec<GameIdentity>, ScraperError> {
        if all_results {
            let games = self
                .paginate_search(SearchKind::Term(term), |_| false)
                .await?;
            tracing::info!(term, count = games.len(), "resolved all search results");
            return Ok(games);
        }

        let url = self.search_url();
        let html = self
            .fetcher
            .fetch(&url, &search_query(SearchKind::Term(term), 1))
            .await?;
        let first = parse_first_search_row(&html)?.ok_or_else(|| ScraperError::MissingElement {
            selector: ".search_result_row",
            context: format!("search results for \"{term}\""),
        })?;
        tracing::info!(term, id = first.id, "resolved first search result");
        Ok(vec![first])
    }

    /// Lists the first `n` games of a filtered search ordering, e.g.
    /// `"topsellers"`. `None` uses the configured default filter.
    ///
    /// Stops early when a results page comes back empty, so fewer than `n`
    /// rows are returned only when the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Same extraction errors as [`Self::search_game_id`], plus any fetch error.
    pub async fn list_game_ids(
        &self,
        n: usize,
        filter: Option<&str>,
    ) -> Result<Vec<GameIdentity>, ScraperError> {
        let filter = filter.unwrap_or(&self.default_filter);
        let mut games = self
            .paginate_search(SearchKind::Filter(filter), |collected| collected.len() >= n)
            .await?;
        games.truncate(n);
        tracing::info!(filter, requested = n, count = games.len(), "listed games");
        Ok(games)
    }

    /// Walks search result pages from page 1, accumulating rows until a page
    /// has no rows or `done` reports enough has been collected. `done` is
    /// consulted before every fetch.
    async fn paginate_search<D>(
        &self,
        kind: SearchKind<'_>,
        mut done: D,
    ) -> Result<Vec<GameIdentity>, ScraperError>
    where
        D: FnMut(&[GameIdentity]) -> bool,
    {
        let url = self.search_url();
        let mut collected: Vec<GameIdentity> = Vec::new();
        let mut page = 1u32;

        while !done(collected.as_slice()) {
            let html = self.fetcher.fetch(&url, &search_query(kind, page)).await?;
            let rows = parse_search_rows(&html)?;
            tracing::debug!(page, rows = rows.len(), "parsed search results page");
            if rows.is_empty() {
                break;
            }
            collected.extend(rows);
            page += 1;
        }

        Ok(collected)
    }
}
