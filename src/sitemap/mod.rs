//! sitemap.xml and robots.txt emission
//!
//! The sitemap is written in two passes: `write` lays down the full
//! document for static pages and articles, and `append` later splices
//! listing URLs in front of the closing tag. Appending is a plain text
//! replacement, so a build whose listings fetch failed leaves the
//! first-pass file byte-identical.

use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;

use crate::helpers::escape_xml;

const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;
const URLSET_CLOSE: &str = "</urlset>";

/// One `<url>` entry
#[derive(Debug, Clone, Default)]
pub struct SitemapEntry {
    pub loc: String,
    /// `YYYY-MM-DD`
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
}

impl SitemapEntry {
    pub fn new(loc: &str) -> Self {
        Self {
            loc: loc.to_string(),
            ..Default::default()
        }
    }

    pub fn lastmod(mut self, date: &str) -> Self {
        self.lastmod = Some(date.to_string());
        self
    }

    pub fn changefreq(mut self, value: &str) -> Self {
        self.changefreq = Some(value.to_string());
        self
    }

    pub fn priority(mut self, value: &str) -> Self {
        self.priority = Some(value.to_string());
        self
    }
}

fn format_entry(entry: &SitemapEntry) -> String {
    let mut xml = String::new();
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
    if let Some(lastmod) = &entry.lastmod {
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
    }
    if let Some(changefreq) = &entry.changefreq {
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            escape_xml(changefreq)
        ));
    }
    if let Some(priority) = &entry.priority {
        xml.push_str(&format!(
            "    <priority>{}</priority>\n",
            escape_xml(priority)
        ));
    }
    xml.push_str("  </url>\n");
    xml
}

/// Write a complete sitemap document
pub fn write(path: &Path, entries: &[SitemapEntry]) -> Result<()> {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');
    for entry in entries {
        xml.push_str(&format_entry(entry));
    }
    xml.push_str(URLSET_CLOSE);
    xml.push('\n');

    fs::write(path, xml)?;
    Ok(())
}

/// Append entries to an existing sitemap before its closing tag
///
/// Appending nothing leaves the file untouched.
pub fn append(path: &Path, entries: &[SitemapEntry]) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let existing = fs::read_to_string(path)?;
    let pos = existing
        .rfind(URLSET_CLOSE)
        .ok_or_else(|| anyhow!("No closing urlset tag in {:?}", path))?;

    let mut tail = String::new();
    for entry in entries {
        tail.push_str(&format_entry(entry));
    }
    tail.push_str(URLSET_CLOSE);

    let updated = format!(
        "{}{}{}",
        &existing[..pos],
        tail,
        &existing[pos + URLSET_CLOSE.len()..]
    );
    fs::write(path, updated)?;
    Ok(())
}

/// Write a robots.txt that allows everything and names the sitemap
pub fn write_robots(path: &Path, sitemap_url: &str) -> Result<()> {
    let robots = format!("User-agent: *\nAllow: /\n\nSitemap: {}\n", sitemap_url);
    fs::write(path, robots)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        let entries = vec![
            SitemapEntry::new("https://example.com/")
                .lastmod("2026-01-15")
                .changefreq("daily")
                .priority("1.0"),
            SitemapEntry::new("https://example.com/about.html"),
        ];
        write(&path, &entries).unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<lastmod>2026-01-15</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_append_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        write(
            &path,
            &[
                SitemapEntry::new("https://example.com/"),
                SitemapEntry::new("https://example.com/articles/news/launch.html"),
            ],
        )
        .unwrap();
        append(
            &path,
            &[SitemapEntry::new(
                "https://example.com/projects/skyline.html",
            )],
        )
        .unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</urlset>").count(), 1);

        let article = xml.find("articles/news/launch.html").unwrap();
        let project = xml.find("projects/skyline.html").unwrap();
        assert!(article < project);
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_append_nothing_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        write(&path, &[SitemapEntry::new("https://example.com/")]).unwrap();
        let before = fs::read(&path).unwrap();

        append(&path, &[]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_append_escapes_loc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        write(&path, &[]).unwrap();
        append(
            &path,
            &[SitemapEntry::new("https://example.com/?a=1&b=2")],
        )
        .unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_append_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        fs::write(&path, "not a sitemap").unwrap();

        let result = append(&path, &[SitemapEntry::new("https://example.com/")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_robots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robots.txt");

        write_robots(&path, "https://example.com/sitemap.xml").unwrap();

        let robots = fs::read_to_string(&path).unwrap();
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Allow: /"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
