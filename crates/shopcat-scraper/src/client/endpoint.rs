//! Store domain to `products.json` endpoint resolution.

use reqwest::Url;

use crate::error::ScraperError;

/// Builds the canonical `products.json` endpoint for a store domain.
///
/// Given `"allbirds.com"`, returns `"https://allbirds.com/products.json"`.
/// A bare domain gets `https`; an explicit `http://` or `https://` prefix is
/// kept, as is an explicit port. Any path, query, fragment or credentials in
/// the input are dropped.
///
/// The host is normalized by URL parsing: it is lowercased, and an
/// internationalized name is converted to its punycode (`xn--`) form. The
/// `store_domain` column keeps the configured string, so only the request
/// URL is affected.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidDomain`] if the input has no host (e.g. the
/// empty string), cannot be parsed, or uses a scheme other than `http`/`https`.
pub fn products_endpoint(domain: &str) -> Result<String, ScraperError> {
    let trimmed = domain.trim();
    let invalid = |reason: String| ScraperError::InvalidDomain {
        domain: domain.to_owned(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("domain is empty".to_owned()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let mut url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme \"{other}\""))),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("no host component".to_owned()));
    }

    url.set_path("/products.json");
    url.set_query(None);
    url.set_fragment(None);
    // Only fails for URLs that cannot carry credentials, which excludes http(s).
    let _ = url.set_username("");
    let _ = url.set_password(None);

    Ok(url.to_string())
}

/// Extracts the hostname from an endpoint URL for log fields.
///
/// Falls back to the full string if parsing fails.
pub(super) fn extract_domain(endpoint: &str) -> String {
    Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| endpoint.to_owned())
}
