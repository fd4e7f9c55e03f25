use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of a normalized review post date, e.g. `"May 6, 2021"`.
pub const POST_DATE_FORMAT: &str = "%B %d, %Y";

/// A storefront product as listed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIdentity {
    /// Display title from the result row.
    pub game: String,
    /// Numeric product (app) id, usable as input to the review collector.
    pub id: u64,
}

/// One user's review of one product, as rendered on a community review card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Author display name.
    pub user: String,
    /// Hours on record; `None` when the card does not show playtime.
    pub playtime: Option<f64>,
    /// Author profile URL.
    pub user_url: String,
    /// Post date, always with a year, e.g. `"May 6, 2021"`.
    pub post_date: String,
    /// Number of people who marked the review helpful.
    pub helpfulness: u64,
    /// Free-text review body.
    pub review: String,
    /// Recommendation label, e.g. `"Recommended"` or `"Not Recommended"`.
    pub recommend: String,
    /// Early-access marker text when the review was written pre-release.
    pub early_access_review: Option<String>,
}

impl Review {
    /// Parses [`Review::post_date`] into a calendar date.
    ///
    /// Returns `None` if the text is not in `Month Day, Year` form.
    #[must_use]
    pub fn post_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.post_date, POST_DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_review(post_date: &str) -> Review {
        Review {
            user: "gaben".to_owned(),
            playtime: Some(12.5),
            user_url: "https://steamcommunity.com/id/gaben/".to_owned(),
            post_date: post_date.to_owned(),
            helpfulness: 3,
            review: "Great game.".to_owned(),
            recommend: "Recommended".to_owned(),
            early_access_review: None,
        }
    }

    #[test]
    fn post_date_parsed_reads_full_date() {
        let review = make_review("May 6, 2021");
        assert_eq!(
            review.post_date_parsed(),
            NaiveDate::from_ymd_opt(2021, 5, 6)
        );
    }

    #[test]
    fn post_date_parsed_rejects_date_without_year() {
        assert!(make_review("May 6").post_date_parsed().is_none());
    }

    #[test]
    fn review_serializes_with_column_names() {
        let value = serde_json::to_value(make_review("May 6, 2021")).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for column in [
            "user",
            "playtime",
            "user_url",
            "post_date",
            "helpfulness",
            "review",
            "recommend",
            "early_access_review",
        ] {
            assert!(keys.contains(&column), "missing column {column}");
        }
    }

    #[test]
    fn missing_playtime_serializes_as_null() {
        let mut review = make_review("May 6, 2021");
        review.playtime = None;
        let value = serde_json::to_value(review).unwrap();
        assert!(value["playtime"].is_null());
    }

    #[test]
    fn game_identity_serializes_with_column_names() {
        let identity = GameIdentity {
            game: "Counter-Strike 2".to_owned(),
            id: 730,
        };
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["game"], "Counter-Strike 2");
        assert_eq!(value["id"], 730);
    }
}
