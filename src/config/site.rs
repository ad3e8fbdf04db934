//! Site configuration (estatic.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub keywords: Option<Vec<String>>,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Publisher block used in page metadata and structured data
    #[serde(default)]
    pub organization: OrganizationConfig,

    // Contact details used for the WhatsApp enquiry link
    #[serde(default)]
    pub contact: ContactConfig,

    // Remote listings feed
    #[serde(default)]
    pub listings: ListingsConfig,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub articles_dir: String,
    pub projects_dir: String,

    // Article categories, in display order
    pub categories: Vec<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Estatic".to_string(),
            description: String::new(),
            keywords: None,
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            organization: OrganizationConfig::default(),
            contact: ContactConfig::default(),
            listings: ListingsConfig::default(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            articles_dir: "articles".to_string(),
            projects_dir: "projects".to_string(),

            categories: vec![
                "news".to_string(),
                "guides".to_string(),
                "market".to_string(),
            ],

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Organization details emitted as the publisher block of every page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub same_as: Vec<String>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "Estatic Media".to_string(),
            logo: String::new(),
            same_as: Vec::new(),
        }
    }
}

/// Contact configuration for enquiry links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Phone number as written by a human; non-digits are stripped
    pub phone: String,
    /// Country calling code without the plus sign
    pub country_code: String,
    /// Pre-filled enquiry message; `{title}` is replaced per page
    pub whatsapp_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: String::new(),
            country_code: "60".to_string(),
            whatsapp_message: "Hi, I would like to enquire about {title}".to_string(),
        }
    }
}

/// Remote listings feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingsConfig {
    /// Feed URL returning a JSON array; empty disables the listings pass
    pub feed_url: String,
    /// Currency prefix for displayed prices
    pub currency: String,
    /// Unit label for built-up and land areas
    pub area_unit: String,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            feed_url: String::new(),
            currency: "RM".to_string(),
            area_unit: "sq ft".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Estatic");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.categories, vec!["news", "guides", "market"]);
        assert!(config.listings.feed_url.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Prime Property News
url: https://primeproperty.example
organization:
  name: Prime Property Media
  logo: https://primeproperty.example/logo.png
contact:
  phone: 012-345 6789
  country_code: "60"
listings:
  feed_url: https://script.example/feed
categories:
  - news
  - insights
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Prime Property News");
        assert_eq!(config.organization.name, "Prime Property Media");
        assert_eq!(config.contact.phone, "012-345 6789");
        assert_eq!(config.listings.feed_url, "https://script.example/feed");
        assert_eq!(config.categories, vec!["news", "insights"]);
        // Untouched sections keep their defaults
        assert_eq!(config.listings.currency, "RM");
        assert_eq!(config.root, "/");
    }

    #[test]
    fn test_partial_override_keeps_message_default() {
        let yaml = r#"
contact:
  phone: "+60 11 2233 4455"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.contact.country_code, "60");
        assert!(config.contact.whatsapp_message.contains("{title}"));
    }
}
