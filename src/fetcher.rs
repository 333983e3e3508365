use anyhow::{Context, Result};
use url::Url;

/// A target URL after scheme defaulting, plus its `host[:port]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub domain: String,
}

/// Prepends `https://` when the input has no http(s) scheme and derives the
/// domain. The domain is empty when the URL cannot be parsed.
pub fn normalize_target(input: &str) -> Target {
    let trimmed = input.trim();
    let url = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let domain = Url::parse(&url)
        .ok()
        .and_then(|parsed| {
            parsed.host_str().map(|host| match parsed.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            })
        })
        .unwrap_or_default();

    Target { url, domain }
}

/// Fetches the raw body of `url`. Non-2xx responses are errors.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid URL: {}", url))?;

    let response = client
        .get(parsed)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("{} returned an error status", url))?;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    if let Some(ct) = content_type
        && !ct.contains("text/html")
        && !ct.contains("application/xhtml")
    {
        tracing::warn!(
            url = %url,
            content_type = %ct,
            "Non-HTML content type detected, analysis may be unreliable"
        );
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}
