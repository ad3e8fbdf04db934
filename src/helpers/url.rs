//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/site.css") // -> "/news/css/site.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/news/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = url_for(config, path);

    // Avoid double slashes
    if path.starts_with('/') && base.ends_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{}{}", base, path)
    }
}

/// Encode a URL path
pub fn encode_url(path: &str) -> String {
    percent_encoding::utf8_percent_encode(path, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Build a `wa.me` enquiry link from the configured contact details
///
/// The phone number is reduced to its digits, a single leading zero is
/// dropped and the country calling code is prefixed. The configured
/// message is pre-filled with `{title}` replaced by the given title.
/// Returns `None` when no phone number is configured.
pub fn whatsapp_link(config: &SiteConfig, title: &str) -> Option<String> {
    let digits: String = config
        .contact
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }

    let national = digits.strip_prefix('0').unwrap_or(&digits);
    let message = config.contact.whatsapp_message.replace("{title}", title);

    Some(format!(
        "https://wa.me/{}{}?text={}",
        config.contact.country_code,
        national,
        encode_url(&message)
    ))
}
