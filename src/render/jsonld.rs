//! JSON-LD structured-data builders

use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::date_xml;
use crate::listings::Listing;

/// Wrap a structured-data value in a script element
///
/// `</` becomes `<\/` in the serialized JSON so embedded text can
/// never terminate the script element early.
pub fn script_block(data: &Value) -> String {
    let serialized = serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string());
    let serialized = serialized.replace("</", "<\\/");
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        serialized
    )
}

/// The publisher block nested into every page's structured data
pub fn organization(config: &SiteConfig) -> Value {
    let mut org = Map::new();
    org.insert("@type".to_string(), json!("Organization"));
    org.insert("name".to_string(), json!(config.organization.name));
    org.insert("url".to_string(), json!(config.url));
    if !config.organization.logo.is_empty() {
        org.insert(
            "logo".to_string(),
            json!({"@type": "ImageObject", "url": config.organization.logo}),
        );
    }
    if !config.organization.same_as.is_empty() {
        org.insert("sameAs".to_string(), json!(config.organization.same_as));
    }
    Value::Object(org)
}

/// `WebSite` block for the home and about pages
pub fn web_site(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.title,
        "url": config.url,
        "publisher": organization(config),
    })
}

/// `NewsArticle` block for an article page
pub fn news_article(config: &SiteConfig, post: &Post) -> Value {
    let mut article = json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": post.title,
        "datePublished": date_xml(&post.date),
        "author": {"@type": "Person", "name": post.author},
        "publisher": organization(config),
        "mainEntityOfPage": post.permalink,
        "articleSection": post.category,
    });

    if let Some(obj) = article.as_object_mut() {
        if let Some(updated) = &post.updated {
            obj.insert("dateModified".to_string(), json!(date_xml(updated)));
        }
        if !post.summary.is_empty() {
            obj.insert("description".to_string(), json!(post.summary));
        }
        if let Some(image) = &post.image {
            obj.insert("image".to_string(), json!([image]));
        }
        if !post.tags.is_empty() {
            obj.insert("keywords".to_string(), json!(post.tags.join(", ")));
        }
    }

    article
}

/// `RealEstateListing` block for a listing page
pub fn real_estate_listing(config: &SiteConfig, listing: &Listing, url: &str) -> Value {
    let mut page = json!({
        "@context": "https://schema.org",
        "@type": "RealEstateListing",
        "name": listing.title.clone().unwrap_or_default(),
        "url": url,
        "provider": organization(config),
    });

    if let Some(obj) = page.as_object_mut() {
        if let Some(description) = &listing.description {
            obj.insert("description".to_string(), json!(description));
        }
        if let Some(image) = &listing.image {
            obj.insert("image".to_string(), json!([image]));
        }
        if let Some(price) = listing.price.filter(|p| *p > 0.0) {
            let price_value = if price.fract() == 0.0 {
                json!(price as i64)
            } else {
                json!(price)
            };
            obj.insert(
                "offers".to_string(),
                json!({
                    "@type": "Offer",
                    "price": price_value,
                    "priceCurrency": config.listings.currency,
                }),
            );
        }

        let mut address = Map::new();
        if let Some(city) = &listing.city {
            address.insert("addressLocality".to_string(), json!(city));
        }
        if let Some(state) = &listing.state {
            address.insert("addressRegion".to_string(), json!(state));
        }
        if !address.is_empty() {
            address.insert("@type".to_string(), json!("PostalAddress"));
            obj.insert("address".to_string(), Value::Object(address));
        }
    }

    page
}
