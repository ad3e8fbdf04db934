//! Listing record from the remote feed
//!
//! The feed is a spreadsheet export with no schema: every field is
//! optional and the same column may arrive as a number or a string.
//! Deserialization accepts whatever shape the sheet produces.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One property listing as published by the feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Project name; records without one are dropped after fetch
    #[serde(alias = "name", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    /// Neighbourhood-level location
    #[serde(alias = "area", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,

    #[serde(deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Built-up area in the configured unit
    #[serde(
        alias = "builtUp",
        deserialize_with = "loose_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub built_up: Option<f64>,

    #[serde(
        alias = "landArea",
        deserialize_with = "loose_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub land_area: Option<f64>,

    /// Bedroom count, kept verbatim ("3+1" is a valid value)
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<String>,

    #[serde(deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<String>,

    #[serde(deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,

    /// Expected completion, usually "YYYY-MM" but free-form
    #[serde(
        alias = "completionDate",
        deserialize_with = "loose_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion: Option<String>,

    #[serde(deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<String>,

    #[serde(alias = "cover", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Columns this build does not know about
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Listing {
    /// Whether the record carries a usable title
    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    /// Price per unit of built-up area, rounded to a whole number
    ///
    /// Present only when both price and built-up area are positive.
    pub fn price_per_area(&self) -> Option<i64> {
        match (self.price, self.built_up) {
            (Some(price), Some(area)) if price > 0.0 && area > 0.0 => {
                Some((price / area).round() as i64)
            }
            _ => None,
        }
    }
}

/// Accept a number, a numeric string (commas allowed), or null
fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LooseNumber;

    impl<'de> Visitor<'de> for LooseNumber {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, a numeric string, or null")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let cleaned: String = value
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .collect();
            Ok(cleaned.parse::<f64>().ok())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LooseNumber)
}

/// Accept a string, a number rendered as a string, or null
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LooseString;

    impl<'de> Visitor<'de> for LooseString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number, or null")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            if value.fract() == 0.0 && value.is_finite() {
                Ok(Some(format!("{}", value as i64)))
            } else {
                Ok(Some(value.to_string()))
            }
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LooseString)
}

/// Accept a list of strings, one comma-separated string, or null
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringList;

    impl<'de> Visitor<'de> for StringList {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of strings, a comma-separated string, or null")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                let trimmed = item.trim().to_string();
                if !trimmed.is_empty() {
                    items.push(trimmed);
                }
            }
            Ok(items)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringList)
}
