//! HTML helper functions

/// Escape HTML special characters
///
/// Safe for both element bodies and double-quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Format an integer with thousands separators for display
///
/// # Examples
/// ```ignore
/// format_thousands(1250000) // -> "1,250,000"
/// ```
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if n < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Build an embedded video player
///
/// A bare token is treated as a YouTube video id; anything with a
/// scheme is used as the iframe source directly.
pub fn video_embed(target: &str, title: &str) -> String {
    let src = if target.contains("://") {
        target.to_string()
    } else {
        format!("https://www.youtube.com/embed/{}", target)
    };
    format!(
        r#"<div class="video-embed"><iframe src="{}" title="{}" loading="lazy" allowfullscreen></iframe></div>"#,
        html_escape(&src),
        html_escape(title)
    )
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="estatic {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}
