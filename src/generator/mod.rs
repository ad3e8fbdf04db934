//! Generator module - turns content and listings into the output tree
//!
//! One build is a fixed sequence: client assets and copied files,
//! article pages plus posts.json, the shell pages, sitemap/robots/atom,
//! then the listings section. Listings arrive pre-fetched from the
//! build command; a failed fetch shows up here as an empty slice, which
//! produces zero listing pages and leaves the first-pass sitemap alone.

use anyhow::Result;
use chrono::Local;
use indexmap::IndexMap;
use std::fs;
use walkdir::WalkDir;

use crate::assets;
use crate::content::{ContentLoader, Post};
use crate::helpers::{escape_xml, format_thousands, full_url_for, html_escape, url_for, SlugRegistry};
use crate::listings::Listing;
use crate::render;
use crate::sitemap::{self, SitemapEntry};
use crate::Estatic;

/// Static site generator
pub struct Generator {
    site: Estatic,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Estatic) -> Self {
        Self { site: site.clone() }
    }

    /// Generate the entire site
    pub fn generate(&self, listings: &[Listing]) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        // Client assets and copied source files
        assets::write_assets(&self.site.public_dir)?;
        self.copy_source_assets()?;

        // Slugs are unique across one whole run, articles and listings alike
        let mut slugs = SlugRegistry::new();

        // Load and render articles
        let loader = ContentLoader::new(&self.site);
        let posts_by_category = loader.load_all(&mut slugs)?;
        self.generate_article_pages(&posts_by_category)?;
        self.write_posts_json(&posts_by_category)?;

        // Shell pages
        self.write_index_page()?;
        self.write_about_page()?;
        self.write_projects_page()?;

        // First sitemap pass covers everything that exists without the feed
        let entries = self.sitemap_entries(&posts_by_category);
        sitemap::write(&self.site.public_dir.join("sitemap.xml"), &entries)?;
        sitemap::write_robots(
            &self.site.public_dir.join("robots.txt"),
            &full_url_for(&self.site.config, "sitemap.xml"),
        )?;
        self.generate_atom_feed(&posts_by_category)?;

        // Listings section; empty input means zero pages and no append
        let listing_slugs = self.generate_listing_pages(listings, &mut slugs)?;
        self.write_listings_json(listings, &listing_slugs)?;
        sitemap::append(
            &self.site.public_dir.join("sitemap.xml"),
            &self.listing_sitemap_entries(&listing_slugs),
        )?;

        Ok(())
    }

    /// Render one HTML page per article
    fn generate_article_pages(&self, posts_by_category: &IndexMap<String, Vec<Post>>) -> Result<()> {
        let mut count = 0;

        for posts in posts_by_category.values() {
            for post in posts {
                let html = render::render_article(&self.site.config, post);

                let output_path = self.site.public_dir.join(&post.path);
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
                }
                fs::write(&output_path, html)
                    .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
                tracing::debug!("Generated article: {:?}", output_path);
                count += 1;
            }
        }

        tracing::info!("Generated {} article pages", count);
        Ok(())
    }

    /// Write all posts, keyed by category in configured order
    fn write_posts_json(&self, posts_by_category: &IndexMap<String, Vec<Post>>) -> Result<()> {
        let json = serde_json::to_string_pretty(posts_by_category)?;
        fs::write(self.site.public_dir.join("posts.json"), json)?;
        tracing::info!("Generated posts.json");
        Ok(())
    }

    /// Render one HTML page per listing, returning the slug given to each
    fn generate_listing_pages(
        &self,
        listings: &[Listing],
        slugs: &mut SlugRegistry,
    ) -> Result<Vec<String>> {
        let projects_dir = self.site.public_dir.join(&self.site.config.projects_dir);
        let mut assigned = Vec::with_capacity(listings.len());

        for listing in listings {
            let slug = slugs.claim(listing.title.as_deref().unwrap_or_default());
            let html = render::render_listing(&self.site.config, listing, &slug);

            let output_path = projects_dir.join(format!("{}.html", slug));
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated listing: {:?}", output_path);
            assigned.push(slug);
        }

        if !assigned.is_empty() {
            tracing::info!("Generated {} listing pages", assigned.len());
        }
        Ok(assigned)
    }

    /// Write the records the filter page consumes
    ///
    /// Always written, so the projects page never fetches a 404; a
    /// degraded build produces an empty array.
    fn write_listings_json(&self, listings: &[Listing], slugs: &[String]) -> Result<()> {
        let config = &self.site.config;
        let mut records = Vec::with_capacity(listings.len());

        for (listing, slug) in listings.iter().zip(slugs) {
            let mut value = serde_json::to_value(listing)?;
            if let Some(map) = value.as_object_mut() {
                map.insert("slug".to_string(), serde_json::json!(slug));
                map.insert(
                    "url".to_string(),
                    serde_json::json!(url_for(
                        config,
                        &format!("{}/{}.html", config.projects_dir.trim_matches('/'), slug)
                    )),
                );
                if let Some(price) = listing.price.filter(|p| *p > 0.0) {
                    map.insert(
                        "price_display".to_string(),
                        serde_json::json!(format!(
                            "{} {}",
                            config.listings.currency,
                            format_thousands(price.round() as i64)
                        )),
                    );
                }
            }
            records.push(value);
        }

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(self.site.public_dir.join("listings.json"), json)?;
        tracing::info!("Generated listings.json with {} records", records.len());
        Ok(())
    }

    /// The hash-routed reading shell
    fn write_index_page(&self) -> Result<()> {
        let config = &self.site.config;
        let meta = render::PageMeta {
            title: String::new(),
            description: config.description.clone(),
            canonical: full_url_for(config, ""),
            image: None,
            og_type: "website".to_string(),
            jsonld: Some(render::web_site(config)),
        };

        let body = format!(
            "<div id=\"app\"><noscript><p>Browse the <a href=\"{}/\">projects page</a> or the <a href=\"{}\">about page</a>; articles need JavaScript enabled.</p></noscript></div>\n{}\n<script src=\"{}\"></script>",
            url_for(config, &config.projects_dir).trim_end_matches('/'),
            url_for(config, "about.html"),
            self.site_config_script(),
            url_for(config, "js/router.js"),
        );

        let html = render::document(config, &meta, &body);
        fs::write(self.site.public_dir.join("index.html"), html)?;
        tracing::info!("Generated index.html");
        Ok(())
    }

    /// Static about page mirroring the router's about view
    fn write_about_page(&self) -> Result<()> {
        let config = &self.site.config;
        let meta = render::PageMeta {
            title: "About".to_string(),
            description: config.description.clone(),
            canonical: full_url_for(config, "about.html"),
            image: None,
            og_type: "website".to_string(),
            jsonld: Some(render::organization(config)),
        };

        let mut body = String::from(r#"<section class="about">"#);
        body.push_str(&format!(
            "<h1>About {}</h1>",
            html_escape(&config.organization.name)
        ));
        if !config.description.is_empty() {
            body.push_str(&format!("<p>{}</p>", html_escape(&config.description)));
        }
        if !config.contact.phone.is_empty() {
            body.push_str(&format!(
                r#"<p class="about-contact">Phone: {}</p>"#,
                html_escape(&config.contact.phone)
            ));
        }
        if !config.organization.same_as.is_empty() {
            let links: Vec<String> = config
                .organization
                .same_as
                .iter()
                .map(|u| {
                    format!(
                        r#"<li><a href="{}" rel="noopener">{}</a></li>"#,
                        html_escape(u),
                        html_escape(u)
                    )
                })
                .collect();
            body.push_str(&format!(
                r#"<ul class="about-links">{}</ul>"#,
                links.join("")
            ));
        }
        body.push_str("</section>");

        let html = render::document(config, &meta, &body);
        fs::write(self.site.public_dir.join("about.html"), html)?;
        tracing::info!("Generated about.html");
        Ok(())
    }

    /// The filterable projects page
    fn write_projects_page(&self) -> Result<()> {
        let config = &self.site.config;
        let meta = render::PageMeta {
            title: "Projects".to_string(),
            description: format!("Property projects from {}", config.organization.name),
            canonical: full_url_for(
                config,
                &format!("{}/", config.projects_dir.trim_matches('/')),
            ),
            image: None,
            og_type: "website".to_string(),
            jsonld: Some(render::organization(config)),
        };

        let body = format!(
            r#"<section class="projects">
<h1>Projects</h1>
<form id="project-filters" class="filter-bar">
<select name="location" aria-label="Location"><option value="">All locations</option></select>
<select name="type" aria-label="Type"><option value="">All types</option></select>
<input type="number" name="minPrice" min="0" placeholder="Min price">
<input type="number" name="maxPrice" min="0" placeholder="Max price">
<input type="search" name="keyword" placeholder="Search projects">
<button type="submit" id="filter-search">Search</button>
<button type="button" id="filter-reset" class="secondary">Reset</button>
</form>
<p id="project-count" class="project-count"></p>
<div id="project-grid"></div>
</section>
{config_script}
<script src="{filter_js}"></script>"#,
            config_script = self.site_config_script(),
            filter_js = url_for(config, "js/filter.js"),
        );

        let html = render::document(config, &meta, &body);
        let projects_dir = self.site.public_dir.join(&config.projects_dir);
        fs::create_dir_all(&projects_dir)?;
        fs::write(projects_dir.join("index.html"), html)?;
        tracing::info!("Generated projects index");
        Ok(())
    }

    /// Inline configuration consumed by the client scripts
    fn site_config_script(&self) -> String {
        let config = &self.site.config;
        let data = serde_json::json!({
            "root": config.root,
            "title": config.title,
            "description": config.description,
            "organization": config.organization.name,
            "currency": config.listings.currency,
        });
        let json = serde_json::to_string(&data).unwrap_or_else(|_| "{}".to_string());
        // Keep a literal </script> inside values from closing the tag early
        format!("<script>window.ESTATIC = {};</script>", json.replace("</", "<\\/"))
    }

    /// Entries for the first sitemap pass: static pages, then articles
    fn sitemap_entries(&self, posts_by_category: &IndexMap<String, Vec<Post>>) -> Vec<SitemapEntry> {
        let config = &self.site.config;
        let mut entries = vec![
            SitemapEntry::new(&full_url_for(config, ""))
                .changefreq("daily")
                .priority("1.0"),
            SitemapEntry::new(&full_url_for(config, "about.html"))
                .changefreq("monthly")
                .priority("0.5"),
            SitemapEntry::new(&full_url_for(
                config,
                &format!("{}/", config.projects_dir.trim_matches('/')),
            ))
            .changefreq("daily")
            .priority("0.8"),
        ];

        for posts in posts_by_category.values() {
            for post in posts {
                let lastmod = post
                    .updated
                    .unwrap_or(post.date)
                    .format("%Y-%m-%d")
                    .to_string();
                entries.push(
                    SitemapEntry::new(&post.permalink)
                        .lastmod(&lastmod)
                        .changefreq("monthly")
                        .priority("0.6"),
                );
            }
        }

        entries
    }

    /// Entries appended by the listings pass
    fn listing_sitemap_entries(&self, slugs: &[String]) -> Vec<SitemapEntry> {
        let config = &self.site.config;
        slugs
            .iter()
            .map(|slug| {
                SitemapEntry::new(&full_url_for(
                    config,
                    &format!("{}/{}.html", config.projects_dir.trim_matches('/'), slug),
                ))
                .changefreq("weekly")
                .priority("0.7")
            })
            .collect()
    }

    /// Generate the Atom feed over the most recent articles
    fn generate_atom_feed(&self, posts_by_category: &IndexMap<String, Vec<Post>>) -> Result<()> {
        let config = &self.site.config;

        let mut recent: Vec<&Post> = posts_by_category.values().flatten().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        feed.push('\n');
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}\" rel=\"self\"/>\n",
            full_url_for(config, "atom.xml")
        ));
        feed.push_str(&format!("  <link href=\"{}\"/>\n", full_url_for(config, "")));
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            Local::now().to_rfc3339()
        ));
        feed.push_str(&format!("  <id>{}</id>\n", full_url_for(config, "")));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.organization.name)
        ));

        for post in recent.iter().take(20) {
            feed.push_str("  <entry>\n");
            feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", post.permalink));
            feed.push_str(&format!("    <id>{}</id>\n", post.permalink));
            feed.push_str(&format!(
                "    <published>{}</published>\n",
                post.date.to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <updated>{}</updated>\n",
                post.updated.unwrap_or(post.date).to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&post.summary)
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        fs::write(self.site.public_dir.join("atom.xml"), feed)?;
        tracing::info!("Generated atom.xml");
        Ok(())
    }

    /// Copy non-markdown files from the content tree into the output
    fn copy_source_assets(&self) -> Result<()> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                let ext = path.extension().and_then(|e| e.to_str());

                // Markdown files become pages, not copies
                if matches!(ext, Some("md") | Some("markdown")) {
                    continue;
                }

                let relative = path.strip_prefix(content_dir)?;
                let dest = self.site.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}
