//! Multi-page product fetch loop for `ShopifyClient`.

use std::time::Duration;

use crate::error::ScraperError;
use crate::types::ShopifyProduct;

use super::endpoint::extract_domain;
use super::ShopifyClient;
use super::MAX_PAGES;

impl ShopifyClient {
    /// Fetches every product from a store by requesting numbered pages.
    ///
    /// Starts at page 1 and stops when a page holds fewer than `limit`
    /// products, when a page is empty or has no `products` key, or when
    /// [`MAX_PAGES`] pages have been read.
    ///
    /// `inter_request_delay_ms` is slept between consecutive page requests.
    ///
    /// **Partial semantics**: a failed page (transport error, non-2xx, bad
    /// JSON) is logged and ends paging for this store; products from the
    /// pages before it are returned. Nothing is retried.
    pub async fn fetch_all_products(
        &self,
        endpoint: &str,
        limit: u32,
        inter_request_delay_ms: u64,
    ) -> Vec<ShopifyProduct> {
        let domain = extract_domain(endpoint);
        let page_size = usize::try_from(limit).unwrap_or(usize::MAX);
        let mut all_products: Vec<ShopifyProduct> = Vec::new();
        let mut page = 1u32;

        loop {
            if page > MAX_PAGES {
                tracing::warn!(
                    domain = %domain,
                    max_pages = MAX_PAGES,
                    total = all_products.len(),
                    "page limit reached — store may be ignoring the page parameter"
                );
                break;
            }

            tracing::info!(url = %Self::page_url(endpoint, limit, page), "fetching products page");

            match self.fetch_products_page(endpoint, limit, page).await {
                Ok(products) if products.is_empty() => {
                    tracing::info!(domain = %domain, page, "no more products");
                    break;
                }
                Ok(products) => {
                    let count = products.len();
                    all_products.extend(products);
                    tracing::info!(
                        domain = %domain,
                        page,
                        count,
                        total = all_products.len(),
                        "fetched products page"
                    );
                    if count < page_size {
                        break;
                    }
                }
                Err(e) => {
                    log_page_failure(&e, &domain, page);
                    break;
                }
            }

            page += 1;
            if inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }
        }

        all_products
    }
}

fn log_page_failure(err: &ScraperError, domain: &str, page: u32) {
    match err {
        ScraperError::Deserialize {
            url,
            body_excerpt,
            source,
        } => {
            tracing::error!(
                domain,
                page,
                url = %url,
                error = %source,
                body_excerpt = %body_excerpt,
                "could not decode products page — abandoning store"
            );
        }
        other => {
            tracing::error!(
                domain,
                page,
                error = %other,
                "failed to fetch products page — abandoning store"
            );
        }
    }
}
