//! Document shell shared by every generated page

use chrono::Datelike;

use crate::config::SiteConfig;
use crate::helpers::{html_escape, meta_generator, url_for};

use super::{capitalize, jsonld};

/// Head metadata for one page
pub struct PageMeta {
    /// Page title, composed into `<title>{title} | {site}</title>`
    pub title: String,
    pub description: String,
    /// Canonical absolute URL
    pub canonical: String,
    pub image: Option<String>,
    /// Open Graph object type ("article" or "website")
    pub og_type: String,
    /// Structured-data block, serialized into a script tag
    pub jsonld: Option<serde_json::Value>,
}

/// Assemble a complete HTML document around a body fragment
pub fn document(config: &SiteConfig, meta: &PageMeta, body: &str) -> String {
    // The index shell passes an empty title and gets the bare site title
    let title = if meta.title.is_empty() {
        html_escape(&config.title)
    } else {
        html_escape(&meta.title)
    };
    let description = html_escape(&meta.description);
    let canonical = html_escape(&meta.canonical);

    let mut head = vec![if meta.title.is_empty() {
        format!("<title>{}</title>", title)
    } else {
        format!("<title>{} | {}</title>", title, html_escape(&config.title))
    }];

    if !meta.description.is_empty() {
        head.push(format!(
            r#"<meta name="description" content="{}">"#,
            description
        ));
    }
    if let Some(keywords) = &config.keywords {
        if !keywords.is_empty() {
            head.push(format!(
                r#"<meta name="keywords" content="{}">"#,
                html_escape(&keywords.join(", "))
            ));
        }
    }
    head.push(meta_generator());
    head.push(format!(r#"<link rel="canonical" href="{}">"#, canonical));

    // Open Graph
    head.push(format!(
        r#"<meta property="og:type" content="{}">"#,
        html_escape(&meta.og_type)
    ));
    head.push(format!(r#"<meta property="og:title" content="{}">"#, title));
    if !meta.description.is_empty() {
        head.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            description
        ));
    }
    head.push(format!(r#"<meta property="og:url" content="{}">"#, canonical));
    head.push(format!(
        r#"<meta property="og:site_name" content="{}">"#,
        html_escape(&config.title)
    ));
    if let Some(image) = &meta.image {
        head.push(format!(
            r#"<meta property="og:image" content="{}">"#,
            html_escape(image)
        ));
    }

    // Twitter card
    let card = if meta.image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };
    head.push(format!(r#"<meta name="twitter:card" content="{}">"#, card));
    head.push(format!(r#"<meta name="twitter:title" content="{}">"#, title));
    if !meta.description.is_empty() {
        head.push(format!(
            r#"<meta name="twitter:description" content="{}">"#,
            description
        ));
    }
    if let Some(image) = &meta.image {
        head.push(format!(
            r#"<meta name="twitter:image" content="{}">"#,
            html_escape(image)
        ));
    }

    head.push(format!(
        r#"<link rel="alternate" href="{}" title="{}" type="application/atom+xml">"#,
        url_for(config, "atom.xml"),
        html_escape(&config.title)
    ));
    head.push(format!(
        r#"<link rel="stylesheet" href="{}">"#,
        url_for(config, "css/site.css")
    ));

    if let Some(data) = &meta.jsonld {
        head.push(jsonld::script_block(data));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}
</head>
<body>
{nav}
<main class="site-main">
{body}
</main>
{footer}
</body>
</html>
"#,
        lang = html_escape(&config.language),
        head = head.join("\n"),
        nav = site_nav(config),
        body = body,
        footer = site_footer(config),
    )
}

/// Site-wide navigation bar
///
/// Category, market and about links point into the hash router on the
/// home page so they work from any generated document.
pub fn site_nav(config: &SiteConfig) -> String {
    let home = url_for(config, "");
    let mut links = String::new();

    for category in &config.categories {
        links.push_str(&format!(
            r#"<a href="{}#/category/{}">{}</a>"#,
            home,
            html_escape(category),
            html_escape(&capitalize(category))
        ));
    }
    links.push_str(&format!(r#"<a href="{}#/market">Market</a>"#, home));
    links.push_str(&format!(
        r#"<a href="{}/">Projects</a>"#,
        url_for(config, &config.projects_dir).trim_end_matches('/')
    ));
    links.push_str(&format!(r#"<a href="{}#/about">About</a>"#, home));

    format!(
        r#"<header class="site-header"><nav class="site-nav"><a class="site-title" href="{}">{}</a>{}</nav></header>"#,
        home,
        html_escape(&config.title),
        links
    )
}

fn site_footer(config: &SiteConfig) -> String {
    format!(
        r#"<footer class="site-footer"><p>&copy; {} {}</p></footer>"#,
        chrono::Local::now().year(),
        html_escape(&config.organization.name)
    )
}
