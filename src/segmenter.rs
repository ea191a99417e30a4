/*! Sentence segmentation

Two segmenters are available:

- [PunctuationSegmenter] ends a sentence after a run of terminal punctuation (`.`, `!`, `?`, `⸮`, `؟`)
  followed by spaces or newlines. This is the usual rule for Persian text.
- [UnicodeSegmenter] uses the sentence boundaries of [UAX #29](https://unicode.org/reports/tr29/).

Both trim the produced sentences and discard the ones rejected by a [Length] filter
(by default, empty ones).
!*/
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;
use crate::filtering::{Filter, Length};

/// Splits text into trimmed, non-empty sentences, in text order.
pub trait Segment {
    fn segment(&self, text: &str) -> Vec<String>;
}

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"([!.?⸮؟]+)[ \n]+").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct PunctuationSegmenter {
    filter: Length,
}

impl PunctuationSegmenter {
    pub fn new(filter: Length) -> Self {
        Self { filter }
    }
}

impl Segment for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let marked = SENTENCE_END.replace_all(text, "${1}\n\n");
        marked
            .split("\n\n")
            .map(|sentence| sentence.replace('\n', " ").trim().to_string())
            .filter(|sentence| self.filter.detect(sentence.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnicodeSegmenter {
    filter: Length,
}

impl UnicodeSegmenter {
    pub fn new(filter: Length) -> Self {
        Self { filter }
    }
}

impl Segment for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| self.filter.detect(*sentence))
            .map(String::from)
            .collect()
    }
}

/// Segmenter selection, usable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmenterKind {
    #[default]
    Punctuation,
    Unicode,
}

impl SegmenterKind {
    /// Build the segmenter, using `filter` to discard sentences.
    pub fn build(&self, filter: Length) -> Box<dyn Segment + Sync + Send> {
        match self {
            Self::Punctuation => Box::new(PunctuationSegmenter::new(filter)),
            Self::Unicode => Box::new(UnicodeSegmenter::new(filter)),
        }
    }
}

impl FromStr for SegmenterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "punctuation" => Ok(Self::Punctuation),
            "unicode" => Ok(Self::Unicode),
            other => Err(Error::Custom(format!(
                "unknown segmenter {}, expected punctuation or unicode",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        let s = PunctuationSegmenter::default();
        assert_eq!(s.segment("مهاجرت به کانادا"), vec!["مهاجرت به کانادا"]);
    }

    #[test]
    fn test_punctuation() {
        let s = PunctuationSegmenter::default();
        assert_eq!(
            s.segment("اولین جمله است. دومین جمله؟ سومین!!\nچهارم"),
            vec!["اولین جمله است.", "دومین جمله؟", "سومین!!", "چهارم"]
        );
    }

    #[test]
    fn test_no_space_after_punctuation() {
        let s = PunctuationSegmenter::default();
        assert_eq!(s.segment("نسخه ۲.۱ آمد"), vec!["نسخه ۲.۱ آمد"]);
    }

    #[test]
    fn test_inner_newline() {
        let s = PunctuationSegmenter::default();
        assert_eq!(s.segment("یک\nدو"), vec!["یک دو"]);
    }

    #[test]
    fn test_never_empty() {
        let inputs = ["", "   ", "؟ ؟ ", "\n\n\n", ". . .", "الف.  \n\n  ب"];
        for kind in [SegmenterKind::Punctuation, SegmenterKind::Unicode] {
            let s = kind.build(Length::default());
            for input in inputs {
                for sentence in s.segment(input) {
                    assert!(!sentence.trim().is_empty());
                    assert_eq!(sentence.trim(), sentence);
                }
            }
        }
    }

    #[test]
    fn test_restartable() {
        let s = PunctuationSegmenter::default();
        let text = "یک. دو. سه.";
        assert_eq!(s.segment(text), s.segment(text));
    }

    #[test]
    fn test_min_length() {
        let s = PunctuationSegmenter::new(Length::with_min_size(4));
        assert_eq!(s.segment("بله. این جمله بلند است."), vec!["این جمله بلند است."]);
    }

    #[test]
    fn test_unicode() {
        let s = UnicodeSegmenter::default();
        assert_eq!(
            s.segment("First sentence. Second one? Third!"),
            vec!["First sentence.", "Second one?", "Third!"]
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "punctuation".parse::<SegmenterKind>().unwrap(),
            SegmenterKind::Punctuation
        );
        assert_eq!(
            "unicode".parse::<SegmenterKind>().unwrap(),
            SegmenterKind::Unicode
        );
        assert!("hazm".parse::<SegmenterKind>().is_err());
    }
}
