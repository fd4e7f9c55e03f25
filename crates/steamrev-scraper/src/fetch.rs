//! The single HTTP primitive every collector operation is built on.

use std::future::Future;

use reqwest::Client;

use crate::error::ScraperError;

/// Query pairs for one request, in the order they are appended to the URL.
pub type QueryParams = Vec<(&'static str, String)>;

/// Fetches one page of raw HTML.
///
/// [`crate::ReviewCollector`] depends only on this seam, so tests can feed it
/// scripted pages instead of talking to the network.
pub trait PageFetcher {
    /// Issues one GET for `url` with `query` appended and returns the body text.
    ///
    /// # Errors
    ///
    /// Implementations return [`ScraperError`] on transport failure or a
    /// non-2xx response. Nothing is retried.
    fn fetch(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// `reqwest`-backed [`PageFetcher`] that identifies itself as a desktop browser.
///
/// No timeout is configured: a stalled endpoint stalls the calling operation.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates an `HttpFetcher` that sends `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] — `url` does not parse.
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network or TLS failure, or an unreadable body.
    async fn fetch(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<String, ScraperError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url, params = query.len(), "GET");
        let response = self.client.get(parsed).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: response.url().to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
