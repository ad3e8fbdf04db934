//! Listing page rendering
//!
//! Every field on a feed record is optional, so each block and detail
//! row is emitted only when its source value carries something.

use crate::config::SiteConfig;
use crate::helpers::{
    format_completion, format_thousands, full_url_for, html_escape, whatsapp_link,
};
use crate::listings::Listing;

use super::gallery::{gallery_widget, Slide};
use super::jsonld;
use super::page::{document, PageMeta};

/// Render a complete listing page
pub fn render_listing(config: &SiteConfig, listing: &Listing, slug: &str) -> String {
    let title = listing.title.as_deref().unwrap_or("Untitled").trim();
    let canonical = full_url_for(
        config,
        &format!("{}/{}.html", config.projects_dir.trim_matches('/'), slug),
    );
    let location = location_line(listing);
    let description = match &listing.description {
        Some(text) => text.clone(),
        None if !location.is_empty() => format!("{} in {}", title, location),
        None => title.to_string(),
    };

    let meta = PageMeta {
        title: title.to_string(),
        description,
        canonical: canonical.clone(),
        image: listing.image.clone().or_else(|| listing.images.first().cloned()),
        og_type: "website".to_string(),
        jsonld: Some(jsonld::real_estate_listing(config, listing, &canonical)),
    };

    let mut body = String::new();
    body.push_str(r#"<article class="listing">"#);
    body.push_str(&format!("<h1>{}</h1>", html_escape(title)));

    if !location.is_empty() {
        body.push_str(&format!(
            r#"<p class="listing-location">{}</p>"#,
            html_escape(&location)
        ));
    }

    if let Some(price) = listing.price.filter(|p| *p > 0.0) {
        body.push_str(&format!(
            r#"<p class="listing-price">{} {}</p>"#,
            html_escape(&config.listings.currency),
            format_thousands(price.round() as i64)
        ));
    }

    let details = detail_rows(config, listing);
    if !details.is_empty() {
        body.push_str(&format!(r#"<dl class="listing-details">{}</dl>"#, details));
    }

    if !listing.facilities.is_empty() {
        let items: Vec<String> = listing
            .facilities
            .iter()
            .map(|f| format!("<li>{}</li>", html_escape(f)))
            .collect();
        body.push_str(&format!(
            r#"<ul class="listing-facilities">{}</ul>"#,
            items.join("")
        ));
    }

    if let Some(text) = &listing.description {
        let paragraphs: Vec<String> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| format!("<p>{}</p>", html_escape(line)))
            .collect();
        if !paragraphs.is_empty() {
            body.push_str(&format!(
                r#"<div class="listing-description">{}</div>"#,
                paragraphs.join("")
            ));
        }
    }

    if !listing.images.is_empty() {
        let slides: Vec<Slide> = listing
            .images
            .iter()
            .map(|src| Slide {
                src: src.clone(),
                alt: title.to_string(),
                caption: None,
            })
            .collect();
        body.push_str(&gallery_widget(&slides));
    }

    if let Some(link) = whatsapp_link(config, title) {
        body.push_str(&format!(
            r#"<p class="listing-cta"><a class="button" href="{}">Enquire on WhatsApp</a></p>"#,
            html_escape(&link)
        ));
    }

    body.push_str("</article>");

    document(config, &meta, &body)
}

/// Join the non-empty location parts from fine to coarse
fn location_line(listing: &Listing) -> String {
    [&listing.location, &listing.city, &listing.state]
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn detail_rows(config: &SiteConfig, listing: &Listing) -> String {
    let unit = &config.listings.area_unit;
    let currency = &config.listings.currency;

    let area_value = |area: Option<f64>| {
        area.filter(|a| *a > 0.0)
            .map(|a| format!("{} {}", format_thousands(a.round() as i64), unit))
    };

    let mut rows = String::new();
    let mut row = |label: &str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            rows.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>",
                html_escape(label),
                html_escape(&value)
            ));
        }
    };

    row("Developer", listing.developer.clone());
    row("Type", listing.property_type.clone());
    row("Tenure", listing.tenure.clone());
    row("Built-up", area_value(listing.built_up));
    row("Land area", area_value(listing.land_area));
    row("Bedrooms", listing.bedrooms.clone());
    row("Bathrooms", listing.bathrooms.clone());
    row(
        &format!("Price per {}", unit),
        listing
            .price_per_area()
            .map(|psf| format!("{} {}", currency, format_thousands(psf))),
    );
    row(
        "Completion",
        listing.completion.as_deref().map(format_completion),
    );
    row(
        "Total units",
        listing
            .units
            .filter(|u| *u > 0.0)
            .map(|u| format_thousands(u.round() as i64)),
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listing() -> Listing {
        Listing {
            title: Some("Skyline Residences".to_string()),
            developer: Some("Apex Land".to_string()),
            location: Some("Mont Kiara".to_string()),
            city: Some("Kuala Lumpur".to_string()),
            property_type: Some("Serviced Apartment".to_string()),
            price: Some(500000.0),
            built_up: Some(1000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_listing_page_basics() {
        let config = SiteConfig::default();
        let html = render_listing(&config, &sample_listing(), "skyline-residences");
        assert!(html.contains("<h1>Skyline Residences</h1>"));
        assert!(html.contains("Mont Kiara, Kuala Lumpur"));
        assert!(html.contains(r#"property="og:type" content="website""#));
        assert!(html.contains(r#""@type":"RealEstateListing""#));
        assert!(html.contains("/projects/skyline-residences.html"));
    }

    #[test]
    fn test_listing_price_and_per_area_row() {
        let config = SiteConfig::default();
        let html = render_listing(&config, &sample_listing(), "skyline-residences");
        assert!(html.contains(r#"<p class="listing-price">RM 500,000</p>"#));
        assert!(html.contains("<dt>Price per sq ft</dt><dd>RM 500</dd>"));
        assert!(html.contains("<dt>Built-up</dt><dd>1,000 sq ft</dd>"));
    }

    #[test]
    fn test_listing_rows_omitted_when_absent() {
        let config = SiteConfig::default();
        let listing = Listing {
            title: Some("Bare Minimum".to_string()),
            ..Default::default()
        };
        let html = render_listing(&config, &listing, "bare-minimum");
        assert!(!html.contains("<dt>"));
        assert!(!html.contains("listing-price"));
        assert!(!html.contains("listing-location"));
        assert!(!html.contains(r#"id="gallery""#));
    }

    #[test]
    fn test_listing_completion_formatted() {
        let config = SiteConfig::default();
        let listing = Listing {
            completion: Some("2027-06".to_string()),
            ..sample_listing()
        };
        let html = render_listing(&config, &listing, "skyline-residences");
        assert!(html.contains("<dt>Completion</dt><dd>Jun 2027</dd>"));
    }

    #[test]
    fn test_listing_whatsapp_cta() {
        let mut config = SiteConfig::default();
        config.contact.phone = "012-345 6789".to_string();
        let html = render_listing(&config, &sample_listing(), "skyline-residences");
        assert!(html.contains("https://wa.me/60123456789?text="));
        assert!(html.contains("Skyline%20Residences"));
        assert!(html.contains(">Enquire on WhatsApp</a>"));
    }

    #[test]
    fn test_listing_no_cta_without_phone() {
        let config = SiteConfig::default();
        let html = render_listing(&config, &sample_listing(), "skyline-residences");
        assert!(!html.contains("wa.me"));
    }

    #[test]
    fn test_listing_gallery_and_facilities() {
        let config = SiteConfig::default();
        let listing = Listing {
            facilities: vec!["Pool".to_string(), "Gym".to_string()],
            images: vec!["/img/a.jpg".to_string(), "/img/b.jpg".to_string()],
            ..sample_listing()
        };
        let html = render_listing(&config, &listing, "skyline-residences");
        assert!(html.contains("<li>Pool</li><li>Gym</li>"));
        assert!(html.contains(r#"id="gallery""#));
        assert!(html.contains("1 / 2"));
    }

    #[test]
    fn test_listing_description_paragraphs() {
        let config = SiteConfig::default();
        let listing = Listing {
            description: Some("First line & more.\nSecond line.".to_string()),
            ..sample_listing()
        };
        let html = render_listing(&config, &listing, "skyline-residences");
        assert!(html.contains("<p>First line &amp; more.</p><p>Second line.</p>"));
    }
}
