use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {url}: {source}")]
    Deserialize {
        url: String,
        /// Leading slice of the response body, for diagnosing what came back.
        body_excerpt: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid store domain \"{domain}\": {reason}")]
    InvalidDomain { domain: String, reason: String },
}
