use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no element matching `{selector}` in {context}")]
    MissingElement {
        selector: &'static str,
        context: String,
    },

    #[error("element `{selector}` in {context} has no `{attribute}` attribute")]
    MissingAttribute {
        attribute: &'static str,
        selector: &'static str,
        context: String,
    },

    #[error("could not parse {field} from \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
}
