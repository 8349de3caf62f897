//! The `collect` command: fetch, flatten and append every configured store.
//!
//! Stores are processed one at a time in configured order. Per-store failures
//! are logged and skipped rather than propagated so a single bad store does
//! not abort the full run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use shopcat_core::AppConfig;
use shopcat_csv::append_rows;
use shopcat_scraper::{flatten_products, products_endpoint, ShopifyClient};

/// Page size and politeness delays for one run.
#[derive(Debug, Clone)]
pub(crate) struct Pacing {
    pub page_limit: u32,
    pub page_delay_ms: u64,
    pub domain_delay_ms: u64,
}

impl Pacing {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            page_limit: config.scraper_page_limit,
            page_delay_ms: config.scraper_page_delay_ms,
            domain_delay_ms: config.scraper_domain_delay_ms,
        }
    }
}

/// What happened to a single store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreOutcome {
    InvalidDomain,
    NoProducts,
    SinkFailed,
    Written(usize),
}

/// Run totals, logged when the run completes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CollectionSummary {
    pub stores: usize,
    pub invalid_domains: usize,
    pub empty_stores: usize,
    pub sink_failures: usize,
    pub rows_written: usize,
}

impl CollectionSummary {
    fn record(&mut self, outcome: StoreOutcome) {
        self.stores += 1;
        match outcome {
            StoreOutcome::InvalidDomain => self.invalid_domains += 1,
            StoreOutcome::NoProducts => self.empty_stores += 1,
            StoreOutcome::SinkFailed => self.sink_failures += 1,
            StoreOutcome::Written(rows) => self.rows_written += rows,
        }
    }
}

/// Picks the stores to process.
///
/// An empty `requested` list selects every configured store. Otherwise the
/// configured stores matching `requested` (case-insensitive) are returned in
/// configured order.
///
/// # Errors
///
/// Returns an error if a requested store is not in the configured list.
pub(crate) fn select_stores(
    configured: &[String],
    requested: &[String],
) -> anyhow::Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(configured.to_vec());
    }

    let requested_lower: Vec<String> = requested.iter().map(|s| s.to_lowercase()).collect();
    for (raw, lower) in requested.iter().zip(&requested_lower) {
        if !configured.iter().any(|c| c.to_lowercase() == *lower) {
            anyhow::bail!("store '{raw}' is not configured; add it to the stores file first");
        }
    }

    Ok(configured
        .iter()
        .filter(|c| requested_lower.contains(&c.to_lowercase()))
        .cloned()
        .collect())
}

/// Entry point for the `collect` command.
///
/// When `dry_run` is `true` the function prints what would be collected and
/// returns without touching the network or the output file.
///
/// # Errors
///
/// Returns an error if the store filter names an unknown store or the
/// Shopify client cannot be constructed. Per-store failures are logged, not
/// propagated.
pub(crate) async fn run_collect(
    config: &AppConfig,
    configured: &[String],
    requested: &[String],
    output: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let stores = select_stores(configured, requested)?;
    let output_path = output.unwrap_or_else(|| config.output_path.clone());

    if dry_run {
        println!(
            "dry-run: would collect {} stores into {}: [{}]",
            stores.len(),
            output_path.display(),
            stores.join(", ")
        );
        return Ok(());
    }

    let client =
        ShopifyClient::new(config.scraper_request_timeout_secs, &config.scraper_user_agent)
            .map_err(|e| anyhow::anyhow!("failed to build Shopify client: {e}"))?;

    let summary = run_collection(&client, &stores, &output_path, &Pacing::from_config(config)).await;

    tracing::info!(
        stores = summary.stores,
        rows_written = summary.rows_written,
        invalid_domains = summary.invalid_domains,
        empty_stores = summary.empty_stores,
        sink_failures = summary.sink_failures,
        path = %output_path.display(),
        "data fetching complete"
    );

    Ok(())
}

/// Processes `stores` in order, appending each store's rows to `output_path`.
///
/// Sleeps `pacing.domain_delay_ms` between stores. Never fails; the returned
/// summary records what happened to each store.
pub(crate) async fn run_collection(
    client: &ShopifyClient,
    stores: &[String],
    output_path: &Path,
    pacing: &Pacing,
) -> CollectionSummary {
    if output_path.exists() {
        tracing::warn!(
            path = %output_path.display(),
            "output file exists — appending; delete it manually for a fresh start"
        );
    }

    let mut summary = CollectionSummary::default();

    for (idx, domain) in stores.iter().enumerate() {
        if idx > 0 && pacing.domain_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(pacing.domain_delay_ms)).await;
        }

        let outcome = collect_store(client, domain, output_path, pacing).await;
        summary.record(outcome);
    }

    summary
}

async fn collect_store(
    client: &ShopifyClient,
    domain: &str,
    output_path: &Path,
    pacing: &Pacing,
) -> StoreOutcome {
    tracing::info!(domain, "processing store");

    let endpoint = match products_endpoint(domain) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            tracing::error!(domain, error = %e, "skipping store — could not build products endpoint");
            return StoreOutcome::InvalidDomain;
        }
    };

    let products = client
        .fetch_all_products(&endpoint, pacing.page_limit, pacing.page_delay_ms)
        .await;
    if products.is_empty() {
        tracing::warn!(domain, "no products retrieved");
        return StoreOutcome::NoProducts;
    }
    tracing::info!(domain, count = products.len(), "fetched all products");

    let rows = flatten_products(&products, domain);
    match append_rows(output_path, &rows) {
        Ok(written) => {
            tracing::info!(
                domain,
                rows = written,
                path = %output_path.display(),
                "appended rows"
            );
            StoreOutcome::Written(written)
        }
        Err(e) => {
            tracing::error!(domain, error = %e, "failed to write rows — dropping batch");
            StoreOutcome::SinkFailed
        }
    }
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
