//! Initialize a new estatic site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::Estatic;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let defaults = SiteConfig::default();

    // Create directory structure: one content directory per category
    fs::create_dir_all(target_dir)?;
    let content_dir = target_dir.join(&defaults.content_dir);
    for category in &defaults.categories {
        fs::create_dir_all(content_dir.join(category))?;
    }
    fs::create_dir_all(content_dir.join("images"))?;

    // Create default estatic.yml
    let config_content = r#"# estatic configuration

# Site
title: Estatic
description: ''
language: en

# URL
url: http://example.com
root: /

# Publisher, used for bylines and structured data
organization:
  name: Estatic Media
  logo: ''
  same_as: []

# Contact details for the WhatsApp enquiry links
contact:
  phone: ''
  country_code: '60'
  whatsapp_message: 'Hi, I would like to enquire about {title}'

# Project listings feed; leave feed_url empty to build without listings
listings:
  feed_url: ''
  currency: RM
  area_unit: sq ft

# Directories
content_dir: content
public_dir: public
articles_dir: articles
projects_dir: projects

# Article categories, each one a directory under content/
categories:
  - news
  - guides
  - market
"#;

    fs::write(target_dir.join("estatic.yml"), config_content)?;

    // Create a sample article in the first category
    let now = chrono::Local::now();
    let sample_article = format!(
        r#"---
title: Welcome to your new site
date: {}
tags: getting started
summary: A first article to confirm the site builds end to end.
---

This site is generated by estatic. Articles live under `content/`, one
directory per category, and project listings arrive from the feed URL in
`estatic.yml`.

## Next steps

Create a new article:

```bash
$ estatic new "My first market report" --category market
```

Build the site into `public/`:

```bash
$ estatic build
```

Preview it with live reload:

```bash
$ estatic serve
```
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    let first_category = defaults
        .categories
        .first()
        .map(String::as_str)
        .unwrap_or("news");
    fs::write(
        content_dir.join(first_category).join("welcome.md"),
        sample_article,
    )?;

    Ok(())
}

/// Run the init command against an existing instance
pub fn run(site: &Estatic) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_scaffolds_layout() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        assert!(tmp.path().join("estatic.yml").exists());
        assert!(tmp.path().join("content/news").is_dir());
        assert!(tmp.path().join("content/guides").is_dir());
        assert!(tmp.path().join("content/market").is_dir());
        assert!(tmp.path().join("content/news/welcome.md").exists());
    }

    #[test]
    fn test_scaffolded_config_loads() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        let site = crate::Estatic::new(tmp.path()).unwrap();
        assert_eq!(site.config.title, "Estatic");
        assert_eq!(site.config.listings.currency, "RM");
        assert_eq!(site.config.categories, vec!["news", "guides", "market"]);
    }

    #[test]
    fn test_sample_article_has_front_matter() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        let raw = fs::read_to_string(tmp.path().join("content/news/welcome.md")).unwrap();
        assert!(raw.starts_with("---\n"));
        assert!(raw.contains("title: Welcome to your new site"));
    }
}
