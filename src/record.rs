//! Page records, as read from crawled files and as written after cleaning.
use serde::{Deserialize, Deserializer, Serialize};

/// A single crawled page.
///
/// `url` and `title` may be absent or `null` in the source file.
/// Absent or `null` content is read as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl PageRecord {
    pub fn new(url: Option<String>, title: Option<String>, content: String) -> Self {
        Self {
            url,
            title,
            content,
        }
    }
}

/// A page once cleaned and split into sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub url: Option<String>,
    pub title: Option<String>,
    pub segments: Vec<String>,
}

impl CleanedRecord {
    pub fn new(url: Option<String>, title: Option<String>, segments: Vec<String>) -> Self {
        Self {
            url,
            title,
            segments,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
