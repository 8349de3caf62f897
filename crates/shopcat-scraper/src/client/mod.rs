//! HTTP client for Shopify's public `products.json` endpoint.

mod endpoint;
mod fetch_all;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::types::{ShopifyProduct, ShopifyProductsResponse};

pub use endpoint::products_endpoint;
// Re-export for test visibility via `use super::*`
#[cfg(test)]
use endpoint::extract_domain;

/// Maximum number of pages to fetch for one store.
/// Stops stores that ignore the `page` parameter from looping forever.
pub(super) const MAX_PAGES: u32 = 200;

/// Number of body characters kept on a decode failure.
pub(super) const BODY_EXCERPT_CHARS: usize = 500;

/// HTTP client for Shopify's public `products.json` endpoint.
///
/// One request per call, no retries. Non-2xx responses and undecodable bodies
/// come back as typed errors; [`ShopifyClient::fetch_all_products`] turns them
/// into log events and stops paging.
pub struct ShopifyClient {
    pub(super) client: Client,
}

impl ShopifyClient {
    /// Creates a `ShopifyClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one page of products.
    ///
    /// A body without a `products` key yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — network, timeout or TLS failure.
    /// - [`ScraperError::Deserialize`] — response body is not valid JSON of
    ///   the expected shape.
    pub async fn fetch_products_page(
        &self,
        endpoint: &str,
        limit: u32,
        page: u32,
    ) -> Result<Vec<ShopifyProduct>, ScraperError> {
        let url = Self::page_url(endpoint, limit, page);

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::ACCEPT,
                "application/json,text/html;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ShopifyProductsResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                body_excerpt: body_excerpt(&body),
                url: url.clone(),
                source: e,
            }
        })?;

        Ok(parsed.products.unwrap_or_default())
    }

    /// Builds the URL for one page: `<endpoint>?limit=<limit>&page=<page>`.
    #[must_use]
    pub fn page_url(endpoint: &str, limit: u32, page: u32) -> String {
        format!("{endpoint}?limit={limit}&page={page}")
    }
}

/// First [`BODY_EXCERPT_CHARS`] characters of `body`, with `...` appended
/// when truncated.
fn body_excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_owned(),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
