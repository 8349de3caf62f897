use crate::app_config::{AppConfig, DEFAULT_USER_AGENT, MAX_PAGE_LIMIT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so parsing can be
/// tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let stores_path = PathBuf::from(or_default("SHOPCAT_STORES_PATH", "./config/stores.yaml"));
    let output_path = PathBuf::from(or_default("SHOPCAT_OUTPUT_PATH", "products_data.csv"));
    let log_level = or_default("SHOPCAT_LOG_LEVEL", "info");

    let scraper_request_timeout_secs = parse_u64("SHOPCAT_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default("SHOPCAT_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_page_limit = parse_u32("SHOPCAT_SCRAPER_PAGE_LIMIT", "250")?;
    if !(1..=MAX_PAGE_LIMIT).contains(&scraper_page_limit) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPCAT_SCRAPER_PAGE_LIMIT".to_string(),
            reason: format!("{scraper_page_limit} is outside 1..={MAX_PAGE_LIMIT}"),
        });
    }
    let scraper_page_delay_ms = parse_u64("SHOPCAT_SCRAPER_PAGE_DELAY_MS", "1500")?;
    let scraper_domain_delay_ms = parse_u64("SHOPCAT_SCRAPER_DOMAIN_DELAY_MS", "2000")?;

    Ok(AppConfig {
        stores_path,
        output_path,
        log_level,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_page_limit,
        scraper_page_delay_ms,
        scraper_domain_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
