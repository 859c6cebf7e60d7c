//! Link validation and display helpers. None of these touch the network.

use url::Url;

pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
pub const FALLBACK_ICON: &str = "assets/link-icon.png";

/// True when `raw` parses as an absolute `http` or `https` URL.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Host of `raw` without a leading `www.`, or `raw` itself when it does
/// not parse.
pub fn display_domain(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => {
            let host = url.host_str().unwrap_or_default();
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(_) => raw.to_string(),
    }
}

pub fn favicon_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => format!(
            "{FAVICON_SERVICE}?domain={}&sz=32",
            url.host_str().unwrap_or_default()
        ),
        Err(_) => FALLBACK_ICON.to_string(),
    }
}
