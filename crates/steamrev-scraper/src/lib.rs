pub mod client;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod pagination;
pub mod parse;

pub use client::ReviewCollector;
pub use error::ScraperError;
pub use fetch::{HttpFetcher, PageFetcher, QueryParams};
pub use normalize::clean_post_date;
pub use steamrev_core::{GameIdentity, Review};
