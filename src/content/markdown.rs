//! Markdown rendering with embed token expansion

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

use crate::helpers::{html_escape, video_embed};

lazy_static! {
    /// A `{% video|image|pdf target [label] %}` token on its own line
    static ref EMBED_RE: Regex =
        Regex::new(r"(?m)^[ \t]*\{%\s*(video|image|pdf)\s+(\S+)(?:[ \t]+([^%\r\n]+?))?\s*%\}[ \t]*$")
            .expect("embed token regex");
}

/// Markdown renderer
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Enable most options but NOT YAML metadata blocks
        // Front-matter is handled separately in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let expanded = expand_embeds(markdown);
        let parser = Parser::new_ext(&expanded, self.options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace embed tokens with raw HTML blocks before the markdown pass
///
/// Each replacement stays on one line starting with a known block tag,
/// so the markdown parser passes it through untouched.
fn expand_embeds(markdown: &str) -> String {
    EMBED_RE
        .replace_all(markdown, |caps: &Captures| {
            let target = caps[2].trim();
            let label = caps
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty());

            match &caps[1] {
                "video" => video_embed(target, label.unwrap_or("Video")),
                "image" => {
                    let caption = label
                        .map(|l| format!("<figcaption>{}</figcaption>", html_escape(l)))
                        .unwrap_or_default();
                    format!(
                        r#"<figure class="article-figure"><img src="{}" alt="{}" loading="lazy">{}</figure>"#,
                        html_escape(target),
                        html_escape(label.unwrap_or("")),
                        caption
                    )
                }
                // pdf
                _ => format!(
                    r#"<p class="pdf-link"><a href="{}" target="_blank" rel="noopener">{}</a></p>"#,
                    html_escape(target),
                    html_escape(label.unwrap_or("View the PDF"))
                ),
            }
        })
        .into_owned()
}
