//! Cursor-based pagination for the community hub reviews endpoint.
//!
//! The `homecontent` endpoint serves reviews, workshop items, guides and
//! discussions through one shared set of page parameters. Only the review
//! parameters change what comes back, but the endpoint expects the full set.
//!
//! Each response embeds the cursor for the next page in a hidden form field:
//!
//! ```text
//! <form method="GET" id="MoreContentForm1" ...>
//!     <input type="hidden" name="userreviewscursor" value="AoJ4...">
//! </form>
//! ```
//!
//! The cursor must be echoed back as `userreviewscursor`. A request without
//! it is answered with the first page again.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::fetch::QueryParams;

/// Reviews per page; the endpoint ignores larger values.
pub const REVIEWS_PER_PAGE: u32 = 10;

pub const CURSOR_PARAM: &str = "userreviewscursor";

/// Page-number parameters of content types that share the endpoint with
/// reviews. All of them track the review page.
pub(crate) const SHARED_PAGE_PARAMS: [&str; 12] = [
    "p",
    "workshopitemspage",
    "readytouseitemspage",
    "mtxitemspage",
    "itemspage",
    "screenshotspage",
    "videospage",
    "artpage",
    "allguidepage",
    "webguidepage",
    "integeratedguidepage",
    "discussionspage",
];

static FORM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("form").expect("valid static selector"));
static CURSOR_INPUT_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"input[name="userreviewscursor"]"#).expect("valid static selector")
});

/// Builds the query for zero-based review page `page`.
///
/// `cursor` is only sent from the second page on, and only when the
/// previous page supplied one.
#[must_use]
pub fn review_query(app_id: u64, page: u32, language: &str, cursor: Option<&str>) -> QueryParams {
    let page_number = (page + 1).to_string();

    let mut params: QueryParams = Vec::with_capacity(SHARED_PAGE_PARAMS.len() + 11);
    params.push((
        "userreviewsoffset",
        (u64::from(page) * u64::from(REVIEWS_PER_PAGE)).to_string(),
    ));
    for name in SHARED_PAGE_PARAMS {
        params.push((name, page_number.clone()));
    }
    params.extend([
        ("numperpage", REVIEWS_PER_PAGE.to_string()),
        ("browsefilter", "toprated".to_owned()),
        ("appid", app_id.to_string()),
        ("appHubSubSection", "10".to_owned()),
        ("l", "english".to_owned()),
        ("filterLanguage", language.to_owned()),
        ("searchText", String::new()),
        ("forceanon", "1".to_owned()),
        ("maxInappropriateScore", "50".to_owned()),
    ]);

    if page > 0 {
        if let Some(cursor) = cursor {
            params.push((CURSOR_PARAM, cursor.to_owned()));
        }
    }

    params
}

/// Reads the next-page cursor from the first form on a reviews page.
///
/// Returns `None` if the page has no form, the form has no cursor input,
/// or the input has no `value`.
#[must_use]
pub fn extract_review_cursor(document: &Html) -> Option<String> {
    let form = document.select(&FORM_SEL).next()?;
    let input = form.select(&CURSOR_INPUT_SEL).next()?;
    input.value().attr("value").map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn first_page_query_has_no_cursor() {
        let params = review_query(730, 0, "default", Some("ignored"));
        assert!(value_of(&params, CURSOR_PARAM).is_none());
        assert_eq!(value_of(&params, "userreviewsoffset"), Some("0"));
        assert_eq!(value_of(&params, "p"), Some("1"));
    }

    #[test]
    fn later_page_query_carries_cursor() {
        let params = review_query(730, 2, "english", Some("AoJ4abc"));
        assert_eq!(value_of(&params, CURSOR_PARAM), Some("AoJ4abc"));
        assert_eq!(value_of(&params, "userreviewsoffset"), Some("20"));
        assert_eq!(value_of(&params, "filterLanguage"), Some("english"));
    }

    #[test]
    fn later_page_without_cursor_omits_param() {
        let params = review_query(730, 1, "default", None);
        assert!(value_of(&params, CURSOR_PARAM).is_none());
    }

    #[test]
    fn shared_page_params_track_review_page() {
        let params = review_query(440, 4, "default", None);
        for name in SHARED_PAGE_PARAMS {
            assert_eq!(value_of(&params, name), Some("5"), "param {name}");
        }
    }

    #[test]
    fn fixed_params_are_present() {
        let params = review_query(440, 0, "schinese", None);
        assert_eq!(value_of(&params, "numperpage"), Some("10"));
        assert_eq!(value_of(&params, "browsefilter"), Some("toprated"));
        assert_eq!(value_of(&params, "appid"), Some("440"));
        assert_eq!(value_of(&params, "appHubSubSection"), Some("10"));
        assert_eq!(value_of(&params, "l"), Some("english"));
        assert_eq!(value_of(&params, "searchText"), Some(""));
        assert_eq!(value_of(&params, "forceanon"), Some("1"));
        assert_eq!(value_of(&params, "maxInappropriateScore"), Some("50"));
    }

    #[test]
    fn extracts_cursor_from_first_form() {
        let html = r#"
            <form id="MoreContentForm1">
                <input type="hidden" name="appid" value="730">
                <input type="hidden" name="userreviewscursor" value="AoJ4cursor">
            </form>
            <form id="Other"><input name="userreviewscursor" value="WRONG"></form>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_review_cursor(&document).as_deref(),
            Some("AoJ4cursor")
        );
    }

    #[test]
    fn cursor_outside_first_form_is_ignored() {
        let html = r#"
            <form id="search"><input name="q" value=""></form>
            <form><input name="userreviewscursor" value="late"></form>
        "#;
        let document = Html::parse_document(html);
        assert!(extract_review_cursor(&document).is_none());
    }

    #[test]
    fn no_form_means_no_cursor() {
        let document = Html::parse_document("<div class=\"apphub_Card\"></div>");
        assert!(extract_review_cursor(&document).is_none());
    }

    #[test]
    fn cursor_input_without_value_means_no_cursor() {
        let document =
            Html::parse_document(r#"<form><input name="userreviewscursor"></form>"#);
        assert!(extract_review_cursor(&document).is_none());
    }
}
