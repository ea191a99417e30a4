//! Script restriction.
//!
//! Keeps the chars of a single Unicode block, plus whitespace.
//! Everything else (punctuation outside the block, digits, other scripts) is deleted, not replaced.
use std::ops::RangeInclusive;

use super::Filter;

/// Arabic block, that holds the Persian alphabet.
pub const ARABIC_BLOCK: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

#[derive(Debug, Clone)]
pub struct ScriptFilter {
    block: RangeInclusive<char>,
}

impl ScriptFilter {
    /// Use a custom block.
    pub fn new(block: RangeInclusive<char>) -> Self {
        Self { block }
    }

    /// Get a reference to the kept block.
    pub fn block(&self) -> &RangeInclusive<char> {
        &self.block
    }

    /// Remove every char that is not detected.
    pub fn restrict(&self, text: &str) -> String {
        text.chars().filter(|c| self.detect(*c)).collect()
    }
}

impl Filter<char> for ScriptFilter {
    fn detect(&self, c: char) -> bool {
        self.block.contains(&c) || c.is_whitespace()
    }
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self::new(ARABIC_BLOCK)
    }
}
