/*! Topical categorization

A [Categorizer] holds an ordered list of [Category], each one being a label and a pattern.
Content gets the label of the first matching category, in declaration order,
or the default label (`other`) if no category matches.

Categories can be loaded from a JSON file:

```json
[
    { "label": "immigration", "phrases": ["مهاجرت", "مهاجرت و اقامت"] },
    { "label": "study", "phrases": ["تحصیل", "دانشگاه"] }
]
```

Each phrase is matched literally, between word boundaries.
A word character is a letter, a number or `_`: combining marks (such as the ezafe kasra)
and the zero-width non-joiner are not, so `مهاجرتِ` and `دانشگاه‌ها` hold a match
for `مهاجرت` and `دانشگاه`.
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use unic_ucd::GeneralCategory;

use crate::error::Error;
use crate::record::PageRecord;

pub const DEFAULT_LABEL: &str = "other";

const WORD_CHAR: &str = r"[\p{L}\p{N}_]";
const NON_WORD_CHAR: &str = r"[^\p{L}\p{N}_]";

lazy_static! {
    static ref DEFAULT_CATEGORIES: Vec<Category> = [
        ("immigration", vec!["مهاجرت", "مهاجرت و اقامت"]),
        ("study", vec!["تحصیل", "دانشگاه"]),
        ("work", vec!["مهاجرت کاری"]),
        ("investment", vec!["سرمایه گذاری"]),
    ]
    .iter()
    .map(|(label, phrases)| {
        let phrases: Vec<String> = phrases.iter().map(|p| p.to_string()).collect();
        Category::from_phrases(label, &phrases).unwrap()
    })
    .collect();
}

fn is_word_char(c: char) -> bool {
    c == '_' || GeneralCategory::of(c).is_letter() || GeneralCategory::of(c).is_number()
}

/// Pattern matching `phrase` between word boundaries.
///
/// Boundary characters are consumed, not asserted.
fn bounded(phrase: &str) -> String {
    let escaped = regex::escape(phrase);
    let lead = match phrase.chars().next() {
        Some(c) if is_word_char(c) => format!("(?:^|{})", NON_WORD_CHAR),
        _ => WORD_CHAR.to_string(),
    };
    let trail = match phrase.chars().last() {
        Some(c) if is_word_char(c) => format!("(?:{}|$)", NON_WORD_CHAR),
        _ => WORD_CHAR.to_string(),
    };
    format!("{}{}{}", lead, escaped, trail)
}

/// Label and phrases of a category, as found in category files.
#[derive(Debug, Deserialize)]
pub struct CategoryDef {
    pub label: String,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Category {
    label: String,
    pattern: Regex,
}

impl Category {
    pub fn new(label: &str, pattern: &str) -> Result<Self, Error> {
        Ok(Self {
            label: label.to_string(),
            pattern: Regex::new(pattern)?,
        })
    }

    /// Build a category matching any of the `phrases`, each anchored on word boundaries.
    pub fn from_phrases(label: &str, phrases: &[String]) -> Result<Self, Error> {
        if label.is_empty() {
            return Err(Error::Custom("category with an empty label".to_string()));
        }
        if label.contains(['/', '\\']) {
            return Err(Error::Custom(format!(
                "category label {} can't be used as a file name",
                label
            )));
        }
        if label == DEFAULT_LABEL {
            return Err(Error::Custom(format!(
                "{} is reserved for uncategorized content",
                DEFAULT_LABEL
            )));
        }
        if phrases.is_empty() {
            return Err(Error::Custom(format!("category {} has no phrase", label)));
        }
        if phrases.iter().any(|phrase| phrase.is_empty()) {
            return Err(Error::Custom(format!("category {} has an empty phrase", label)));
        }

        let pattern = phrases.iter().map(|phrase| bounded(phrase)).join("|");

        Self::new(label, &pattern)
    }

    /// Get a reference to the category's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

#[derive(Debug, Clone)]
pub struct Categorizer {
    categories: Vec<Category>,
    default_label: String,
}

impl Categorizer {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            default_label: DEFAULT_LABEL.to_string(),
        }
    }

    /// Load categories from a JSON file. Declaration order is kept.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        debug!("loading categories from {:?}", path);
        let f = File::open(path)?;
        let defs: Vec<CategoryDef> = serde_json::from_reader(BufReader::new(f))?;
        Self::from_defs(&defs)
    }

    pub fn from_defs(defs: &[CategoryDef]) -> Result<Self, Error> {
        let categories = defs
            .iter()
            .map(|def| Category::from_phrases(&def.label, &def.phrases))
            .collect::<Result<Vec<Category>, Error>>()?;
        Ok(Self::new(categories))
    }

    /// Get a reference to the categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the label of the first matching category, or the default label.
    pub fn categorize(&self, content: &str) -> &str {
        self.categories
            .iter()
            .find(|category| category.is_match(content))
            .map(Category::label)
            .unwrap_or(self.default_label.as_str())
    }

    /// Bucket records by category.
    ///
    /// Buckets are ordered by first appearance, and records keep their order within buckets.
    pub fn group(&self, records: Vec<PageRecord>) -> Vec<(String, Vec<PageRecord>)> {
        let mut groups: Vec<(String, Vec<PageRecord>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let label = self.categorize(&record.content).to_string();
            match index.get(&label) {
                Some(idx) => groups[*idx].1.push(record),
                None => {
                    index.insert(label.clone(), groups.len());
                    groups.push((label, vec![record]));
                }
            }
        }

        groups
    }
}

impl Default for Categorizer {
    /// Immigration-related Persian categories.
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.clone())
    }
}
