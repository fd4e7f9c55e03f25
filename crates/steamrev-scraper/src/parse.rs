//! Structural extraction of storefront and community-hub markup.
//!
//! Each page kind has a fixed set of CSS-class-tagged fragments. A missing
//! required fragment is a [`ScraperError::MissingElement`]; nothing is
//! guessed or skipped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use steamrev_core::{GameIdentity, Review};

use crate::error::ScraperError;
use crate::normalize::{
    clean_post_date_in_year, parse_helpful_count, parse_playtime, parse_review_total,
};
use crate::pagination::extract_review_cursor;

const REVIEW_COUNT_LABEL: &str = r#"label[for="review_language_mine"]"#;
const REVIEW_COUNT_SPAN: &str = "span";
const SEARCH_ROW: &str = ".search_result_row";
const SEARCH_TITLE: &str = "span.title";
const APP_ID_ATTR: &str = "data-ds-appid";
const REVIEW_CARD: &str = "div.apphub_Card";
const AUTHOR_LINK: &str = "div.apphub_CardContentAuthorName a";
const RECOMMEND_TITLE: &str = "div.title";
const HOURS: &str = "div.hours";
const FOUND_HELPFUL: &str = "div.found_helpful";
const CARD_TEXT: &str = "div.apphub_CardTextContent";
const DATE_POSTED: &str = "div.date_posted";
const EARLY_ACCESS: &str = "div.early_access_review";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid static selector")
}

static REVIEW_COUNT_LABEL_SEL: LazyLock<Selector> = LazyLock::new(|| selector(REVIEW_COUNT_LABEL));
static REVIEW_COUNT_SPAN_SEL: LazyLock<Selector> = LazyLock::new(|| selector(REVIEW_COUNT_SPAN));
static SEARCH_ROW_SEL: LazyLock<Selector> = LazyLock::new(|| selector(SEARCH_ROW));
static SEARCH_TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(SEARCH_TITLE));
static REVIEW_CARD_SEL: LazyLock<Selector> = LazyLock::new(|| selector(REVIEW_CARD));
static AUTHOR_LINK_SEL: LazyLock<Selector> = LazyLock::new(|| selector(AUTHOR_LINK));
static RECOMMEND_TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(RECOMMEND_TITLE));
static HOURS_SEL: LazyLock<Selector> = LazyLock::new(|| selector(HOURS));
static FOUND_HELPFUL_SEL: LazyLock<Selector> = LazyLock::new(|| selector(FOUND_HELPFUL));
static CARD_TEXT_SEL: LazyLock<Selector> = LazyLock::new(|| selector(CARD_TEXT));
static DATE_POSTED_SEL: LazyLock<Selector> = LazyLock::new(|| selector(DATE_POSTED));
static EARLY_ACCESS_SEL: LazyLock<Selector> = LazyLock::new(|| selector(EARLY_ACCESS));

/// Review cards and follow-up cursor extracted from one reviews page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    /// Cursor to send with the next request, if the page carried one.
    pub cursor: Option<String>,
}

/// Reads the default-language review total from a store app page.
///
/// # Errors
///
/// - [`ScraperError::MissingElement`] — the language label or its count span is absent.
/// - [`ScraperError::InvalidNumber`] — the count text is not an integer.
pub fn parse_review_count(html: &str) -> Result<u64, ScraperError> {
    let document = Html::parse_document(html);
    let label = document
        .select(&REVIEW_COUNT_LABEL_SEL)
        .next()
        .ok_or_else(|| missing(REVIEW_COUNT_LABEL, "store app page"))?;
    let span = label
        .select(&REVIEW_COUNT_SPAN_SEL)
        .next()
        .ok_or_else(|| missing(REVIEW_COUNT_SPAN, "review language label"))?;
    parse_review_total(&text_of(span))
}

/// Extracts every `(title, app id)` row from a search results page, in
/// page order. An empty vector means the page had no result rows.
///
/// # Errors
///
/// - [`ScraperError::MissingElement`] — a row has no title span.
/// - [`ScraperError::MissingAttribute`] — a row has no app id.
/// - [`ScraperError::InvalidNumber`] — an app id is not an integer.
pub fn parse_search_rows(html: &str) -> Result<Vec<GameIdentity>, ScraperError> {
    let document = Html::parse_document(html);
    document
        .select(&SEARCH_ROW_SEL)
        .enumerate()
        .map(|(idx, row)| parse_search_row(row, idx))
        .collect()
}

/// Extracts only the first result row of a search results page.
///
/// Rows after the first are not inspected. Returns `Ok(None)` when the
/// page has no result rows.
///
/// # Errors
///
/// Same as [`parse_search_rows`], for the first row only.
pub fn parse_first_search_row(html: &str) -> Result<Option<GameIdentity>, ScraperError> {
    let document = Html::parse_document(html);
    document
        .select(&SEARCH_ROW_SEL)
        .next()
        .map(|row| parse_search_row(row, 0))
        .transpose()
}

fn parse_search_row(row: ElementRef<'_>, idx: usize) -> Result<GameIdentity, ScraperError> {
    let context = || format!("search result row {idx}");

    let game = row
        .select(&SEARCH_TITLE_SEL)
        .next()
        .map(text_of)
        .ok_or_else(|| missing(SEARCH_TITLE, context()))?;

    let raw_id = row
        .value()
        .attr(APP_ID_ATTR)
        .ok_or_else(|| ScraperError::MissingAttribute {
            attribute: APP_ID_ATTR,
            selector: SEARCH_ROW,
            context: context(),
        })?;
    let id = raw_id
        .trim()
        .parse::<u64>()
        .map_err(|_| ScraperError::InvalidNumber {
            field: "app id",
            value: raw_id.to_owned(),
        })?;

    Ok(GameIdentity { game, id })
}

/// Extracts all review cards and the next-page cursor from a reviews page.
///
/// Dates without a year are completed with `year`.
///
/// # Errors
///
/// Returns the first extraction failure of any card; see [`parse_review_card`].
pub fn parse_review_page(html: &str, year: i32) -> Result<ReviewPage, ScraperError> {
    let document = Html::parse_document(html);
    let reviews = document
        .select(&REVIEW_CARD_SEL)
        .enumerate()
        .map(|(idx, card)| parse_review_card(card, idx, year))
        .collect::<Result<Vec<_>, _>>()?;
    let cursor = extract_review_cursor(&document);
    Ok(ReviewPage { reviews, cursor })
}

/// Extracts one [`Review`] from an `apphub_Card` element.
///
/// Playtime and the early-access marker are optional; every other field
/// must be present.
///
/// # Errors
///
/// - [`ScraperError::MissingElement`] — author link, recommendation, helpful
///   line, text content, or post date is absent.
/// - [`ScraperError::MissingAttribute`] — the author link has no `href`.
/// - [`ScraperError::InvalidNumber`] — playtime or helpfulness does not parse.
pub fn parse_review_card(
    card: ElementRef<'_>,
    idx: usize,
    year: i32,
) -> Result<Review, ScraperError> {
    let context = || format!("review card {idx}");

    let author = card
        .select(&AUTHOR_LINK_SEL)
        .next()
        .ok_or_else(|| missing(AUTHOR_LINK, context()))?;
    let user = text_of(author);
    let user_url = author
        .value()
        .attr("href")
        .map(str::to_owned)
        .ok_or_else(|| ScraperError::MissingAttribute {
            attribute: "href",
            selector: AUTHOR_LINK,
            context: context(),
        })?;

    let recommend = card
        .select(&RECOMMEND_TITLE_SEL)
        .next()
        .map(text_of)
        .ok_or_else(|| missing(RECOMMEND_TITLE, context()))?;

    let playtime = card
        .select(&HOURS_SEL)
        .next()
        .map(|hours| parse_playtime(&text_of(hours)))
        .transpose()?;

    let helpful = card
        .select(&FOUND_HELPFUL_SEL)
        .next()
        .ok_or_else(|| missing(FOUND_HELPFUL, context()))?;
    let helpfulness = parse_helpful_count(&text_of(helpful))?;

    let content = card
        .select(&CARD_TEXT_SEL)
        .next()
        .ok_or_else(|| missing(CARD_TEXT, context()))?;
    let raw_date = content
        .select(&DATE_POSTED_SEL)
        .next()
        .map(text_of)
        .ok_or_else(|| missing(DATE_POSTED, context()))?;
    let early_access_review = content.select(&EARLY_ACCESS_SEL).next().map(text_of);

    Ok(Review {
        user,
        playtime,
        user_url,
        post_date: clean_post_date_in_year(&raw_date, year),
        helpfulness,
        review: own_text(content),
        recommend,
        early_access_review,
    })
}

/// All descendant text of `element`, trimmed.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Text nodes that are direct children of `element`, skipping nested
/// elements such as the date line, concatenated and trimmed.
fn own_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect::<String>()
        .trim()
        .to_owned()
}

fn missing(selector: &'static str, context: impl Into<String>) -> ScraperError {
    ScraperError::MissingElement {
        selector,
        context: context.into(),
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
