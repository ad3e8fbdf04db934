//! Article page rendering

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_xml, full_date, html_escape, url_for, video_embed};

use super::gallery::{gallery_widget, Slide};
use super::page::{document, PageMeta};
use super::{capitalize, jsonld};

/// Render a complete article page
pub fn render_article(config: &SiteConfig, post: &Post) -> String {
    let meta = PageMeta {
        title: post.title.clone(),
        description: post.summary.clone(),
        canonical: post.permalink.clone(),
        image: post.image.clone(),
        og_type: "article".to_string(),
        jsonld: Some(jsonld::news_article(config, post)),
    };

    let home = url_for(config, "");
    let mut body = String::new();
    body.push_str(r#"<article class="article">"#);

    // Category label links back into the router view for that section
    body.push_str(&format!(
        r#"<p class="article-category"><a href="{}#/category/{}">{}</a></p>"#,
        home,
        html_escape(&post.category),
        html_escape(&capitalize(&post.category))
    ));

    body.push_str(&format!("<h1>{}</h1>", html_escape(&post.title)));
    body.push_str(&format!(
        r#"<p class="article-byline">By {} &middot; <time datetime="{}">{}</time></p>"#,
        html_escape(&post.author),
        date_xml(&post.date),
        full_date(&post.date)
    ));

    if let Some(image) = &post.image {
        body.push_str(&format!(
            r#"<figure class="article-cover"><img src="{}" alt="{}"></figure>"#,
            html_escape(image),
            html_escape(&post.title)
        ));
    }

    if !post.tags.is_empty() {
        let items: Vec<String> = post
            .tags
            .iter()
            .map(|t| format!("<li>{}</li>", html_escape(t)))
            .collect();
        body.push_str(&format!(
            r#"<ul class="article-tags">{}</ul>"#,
            items.join("")
        ));
    }

    // Markdown output is trusted; escaping happened around it
    body.push_str(&format!(
        r#"<div class="article-body">{}</div>"#,
        post.content
    ));

    if !post.gallery.is_empty() {
        let slides: Vec<Slide> = post
            .gallery
            .iter()
            .map(|item| Slide {
                src: item.image.clone(),
                alt: item.alt.clone().unwrap_or_else(|| post.title.clone()),
                caption: item.caption.clone(),
            })
            .collect();
        body.push_str(&gallery_widget(&slides));
    }

    if let Some(video) = &post.video {
        body.push_str(&video_embed(video, &post.title));
    }

    if let Some(pdf) = &post.pdf {
        body.push_str(&format!(
            r#"<p class="pdf-link"><a href="{}" target="_blank" rel="noopener">View the PDF</a></p>"#,
            html_escape(pdf)
        ));
    }

    if let Some(cta) = &post.cta {
        body.push_str(&format!(
            r#"<p class="article-cta"><a class="button" href="{}">{}</a></p>"#,
            html_escape(&cta.url),
            html_escape(&cta.text)
        ));
    }

    body.push_str("</article>");

    document(config, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CallToAction, GalleryImage};
    use chrono::Local;

    fn sample_post() -> Post {
        let mut post = Post::new(
            "launch".to_string(),
            "Skyline & Co Launch".to_string(),
            Local::now(),
        );
        post.slug = "skyline-co-launch".to_string();
        post.category = "news".to_string();
        post.summary = "A new launch in the city centre.".to_string();
        post.author = "Prime Property Media".to_string();
        post.path = "articles/news/skyline-co-launch.html".to_string();
        post.permalink = "https://example.com/articles/news/skyline-co-launch.html".to_string();
        post.content = "<p>Body text.</p>".to_string();
        post
    }

    #[test]
    fn test_article_escapes_title() {
        let config = SiteConfig::default();
        let html = render_article(&config, &sample_post());
        assert!(html.contains("<h1>Skyline &amp; Co Launch</h1>"));
        assert!(html.contains("<title>Skyline &amp; Co Launch | "));
        assert!(html.contains(r#"property="og:title" content="Skyline &amp; Co Launch""#));
        assert!(html.contains(r#"property="og:type" content="article""#));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_article_carries_structured_data() {
        let config = SiteConfig::default();
        let html = render_article(&config, &sample_post());
        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#""@type":"NewsArticle""#));
    }

    #[test]
    fn test_article_category_link_targets_router() {
        let config = SiteConfig::default();
        let html = render_article(&config, &sample_post());
        assert!(html.contains(r##"<a href="/#/category/news">News</a>"##));
    }

    #[test]
    fn test_article_gallery_only_when_images_exist() {
        let config = SiteConfig::default();
        let mut post = sample_post();
        assert!(!render_article(&config, &post).contains(r#"id="gallery""#));

        post.gallery = vec![GalleryImage {
            image: "/images/tower.jpg".to_string(),
            alt: None,
            caption: None,
        }];
        let html = render_article(&config, &post);
        assert!(html.contains(r#"id="gallery""#));
        // Alt text falls back to the post title
        assert!(html.contains(r#"alt="Skyline &amp; Co Launch""#));
    }

    #[test]
    fn test_article_optional_blocks() {
        let config = SiteConfig::default();
        let mut post = sample_post();
        post.video = Some("dQw4w9WgXcQ".to_string());
        post.pdf = Some("/docs/brochure.pdf".to_string());
        post.cta = Some(CallToAction {
            text: "Book a viewing".to_string(),
            url: "https://example.com/contact".to_string(),
        });

        let html = render_article(&config, &post);
        assert!(html.contains("youtube.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains(r#"href="/docs/brochure.pdf""#));
        assert!(html.contains(">Book a viewing</a>"));
    }

    #[test]
    fn test_article_tags_rendered() {
        let config = SiteConfig::default();
        let mut post = sample_post();
        post.tags = vec!["launch".to_string(), "kl".to_string()];
        let html = render_article(&config, &post);
        assert!(html.contains("<li>launch</li><li>kl</li>"));
    }
}
