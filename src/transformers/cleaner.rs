//! Removes inline styles and markup from crawled content.
//!
//! Crawled content often carries the page's stylesheet and tags along with the text.
//! Cleaning is done in three steps:
//!
//! 1. Style blocks are removed, pattern by pattern, in declaration order.
//!    Patterns may span multiple lines.
//! 2. Anything between angle brackets is removed.
//! 3. Whitespace runs are collapsed into a single space and the result is trimmed.
//!
//! This is not an HTML parser: malformed markup can be under or over stripped.
//!
//! Example:
//! ```text
//! <style>.elementor-1 { color: red; }</style>
//! <div>مهاجرت   به
//! کانادا</div>
//! ```
//!
//! will be transformed into
//!
//! ```text
//! مهاجرت به کانادا
//! ```
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::error::Error;

use super::Transform;

/// Style patterns removed by default.
pub const DEFAULT_STYLE_PATTERNS: [&str; 6] = [
    r"\.elementor[^{}]*\{[^}]*\}",
    r"body\.rtl\s*[^{}]*\{[^}]*\}",
    r"\.hm_boxlink\s*[^{}]*\{[^}]*\}",
    r"@media\s*\([^{}]*\)\s*\{[^}]*\}",
    r"body\s*:\s*not\s*\(\.rtl\)[^{}]*\{[^}]*\}",
    r"(\.[a-zA-Z0-9_-]+\s*\{[^}]*\}){2,}",
];

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, Clone)]
pub struct ContentCleaner {
    patterns: Vec<Regex>,
}

impl ContentCleaner {
    /// Use already compiled style patterns.
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    /// Compile custom style patterns.
    /// `.` also matches newlines.
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, Error> {
        let patterns = patterns
            .iter()
            .map(|p| RegexBuilder::new(p).dot_matches_new_line(true).build())
            .collect::<Result<Vec<Regex>, regex::Error>>()?;

        Ok(Self::new(patterns))
    }

    /// Get a reference to the style patterns.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn clean(&self, content: &str) -> String {
        let mut content = content.to_string();
        for pattern in &self.patterns {
            content = pattern.replace_all(&content, "").into_owned();
        }

        let content = TAG.replace_all(&content, "");
        let content = WHITESPACE.replace_all(&content, " ");
        content.trim().to_string()
    }
}

impl Transform for ContentCleaner {
    fn transform_own(&self, text: String) -> String {
        self.clean(&text)
    }
}

impl Default for ContentCleaner {
    fn default() -> Self {
        lazy_static! {
            static ref DEFAULT_PATTERNS: Vec<Regex> = DEFAULT_STYLE_PATTERNS
                .iter()
                .map(|p| RegexBuilder::new(p)
                    .dot_matches_new_line(true)
                    .build()
                    .unwrap())
                .collect();
        }

        Self::new(DEFAULT_PATTERNS.clone())
    }
}
