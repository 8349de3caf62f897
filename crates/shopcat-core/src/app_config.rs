use std::path::PathBuf;

/// Largest page size the public `products.json` endpoint honors.
pub const MAX_PAGE_LIMIT: u32 = 250;

/// Desktop browser `User-Agent`. Some storefronts reject requests that do not
/// look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stores_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Products requested per page, `1..=MAX_PAGE_LIMIT`.
    pub scraper_page_limit: u32,
    pub scraper_page_delay_ms: u64,
    pub scraper_domain_delay_ms: u64,
}
