//! HTML rendering
//!
//! Every page is a self-contained document assembled from plain
//! string builders: a shared shell in `page`, JSON-LD builders in
//! `jsonld`, and one body builder per page kind.

mod article;
mod gallery;
mod jsonld;
mod listing;
mod page;

pub use article::render_article;
pub use gallery::{gallery_widget, Slide};
pub use jsonld::{news_article, organization, real_estate_listing, script_block, web_site};
pub use listing::render_listing;
pub use page::{document, site_nav, PageMeta};

/// Uppercase the first character, for category labels
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("news"), "News");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("guides"), "Guides");
    }
}
