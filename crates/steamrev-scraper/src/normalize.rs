//! Field cleanup for values lifted out of storefront markup.
//!
//! Every function here takes text exactly as extracted by [`crate::parse`]
//! and turns it into the typed value stored on a record.

use chrono::{Datelike, NaiveDate};
use steamrev_core::records::POST_DATE_FORMAT;

use crate::error::ScraperError;

/// Token the helpfulness line starts with when nobody voted, as in
/// `"No one has rated this review as helpful yet"`.
const NO_VOTES_TOKEN: &str = "No";

/// Strips the `"Posted:"` label from a raw review date and makes sure the
/// result carries a year.
///
/// Reviews from the current calendar year are rendered without one
/// (`"Posted: May 6"`), so the local year at call time is appended.
///
/// ```
/// # use steamrev_scraper::clean_post_date;
/// assert_eq!(clean_post_date("Posted: March 3, 2019"), "March 3, 2019");
/// ```
#[must_use]
pub fn clean_post_date(raw: &str) -> String {
    clean_post_date_in_year(raw, chrono::Local::now().year())
}

/// [`clean_post_date`] with an explicit fallback year.
#[must_use]
pub fn clean_post_date_in_year(raw: &str, year: i32) -> String {
    let raw = raw.trim();
    let date = raw.split_once(' ').map_or(raw, |(_, rest)| rest.trim());

    if NaiveDate::parse_from_str(date, POST_DATE_FORMAT).is_ok() {
        date.to_owned()
    } else {
        format!("{date}, {year}")
    }
}

/// Parses the helpful-vote count from a `found_helpful` line.
///
/// Only the first token matters: `"12 people found this review helpful"`
/// yields 12 and the no-votes wording yields 0.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidNumber`] if the first token is neither
/// `"No"` nor an integer.
pub fn parse_helpful_count(text: &str) -> Result<u64, ScraperError> {
    let token = first_token(text);
    if token == NO_VOTES_TOKEN {
        return Ok(0);
    }
    strip_thousands(token)
        .parse::<u64>()
        .map_err(|_| ScraperError::InvalidNumber {
            field: "helpfulness",
            value: text.trim().to_owned(),
        })
}

/// Parses hours on record from an `hours` line such as
/// `"1,024.3 hrs on record"`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidNumber`] if the first token is not a number.
pub fn parse_playtime(text: &str) -> Result<f64, ScraperError> {
    strip_thousands(first_token(text))
        .parse::<f64>()
        .map_err(|_| ScraperError::InvalidNumber {
            field: "playtime",
            value: text.trim().to_owned(),
        })
}

/// Parses a parenthesised review total such as `"(1,234)"`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidNumber`] if what remains after stripping
/// the parentheses and separators is not an integer.
pub fn parse_review_total(text: &str) -> Result<u64, ScraperError> {
    let inner = text.trim().trim_matches(|c| c == '(' || c == ')');
    strip_thousands(inner)
        .parse::<u64>()
        .map_err(|_| ScraperError::InvalidNumber {
            field: "review count",
            value: text.trim().to_owned(),
        })
}

fn first_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or_default()
}

fn strip_thousands(token: &str) -> String {
    token.replace(',', "")
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
