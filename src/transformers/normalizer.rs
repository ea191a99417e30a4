/*! Persian text normalization.

Canonicalizes characters so that the same Persian text always has the same codepoints:

1. Compatibility normalization (NFKC) folds Arabic presentation forms back into base letters.
1. Arabic variants of letters are mapped to their Persian counterparts (`ي`→`ی`, `ك`→`ک`, …),
   digits are written with Persian digits and tatweels are dropped.
1. Diacritics (harakat) are removed. Hamza marks are kept.
1. Spacing is fixed around punctuation and zero-width non-joiners.

Some characters are moved *into* the Arabic block (Latin digits for example),
so normalization has to be done before script filtering.
!*/
use lazy_static::lazy_static;
use regex::Regex;
use unic_ucd::GeneralCategory;
use unicode_normalization::UnicodeNormalization;

use super::Transform;

const ZWNJ: char = '\u{200C}';
const HAMZA_ABOVE: char = '\u{0654}';
const HAMZA_BELOW: char = '\u{0655}';

lazy_static! {
    static ref SPACES: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r" +([.،؛:!؟])").unwrap();
    static ref ZWNJ_RUN: Regex = Regex::new("\u{200C}{2,}").unwrap();
    static ref ZWNJ_AROUND_SPACE: Regex = Regex::new("\u{200C}* \u{200C}*").unwrap();
}

#[derive(Debug, Clone)]
pub struct PersianNormalizer {
    persian_digits: bool,
    remove_diacritics: bool,
}

impl PersianNormalizer {
    pub fn new(persian_digits: bool, remove_diacritics: bool) -> Self {
        Self {
            persian_digits,
            remove_diacritics,
        }
    }

    /// Map a single char to its Persian counterpart, or drop it.
    #[inline]
    fn unify(&self, c: char) -> Option<char> {
        match c {
            'ي' | 'ى' => Some('ی'),
            'ك' => Some('ک'),
            'ە' => Some('ه'),
            'ـ' => None,
            '0'..='9' if self.persian_digits => {
                char::from_u32('۰' as u32 + (c as u32 - '0' as u32))
            }
            '٠'..='٩' if self.persian_digits => {
                char::from_u32('۰' as u32 + (c as u32 - '٠' as u32))
            }
            c if self.remove_diacritics && is_diacritic(c) => None,
            c => Some(c),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let text: String = text
            .nfkc()
            .collect::<String>()
            .replace("\u{0647}\u{0654}", "\u{06C0}")
            .chars()
            .filter_map(|c| self.unify(c))
            .collect();

        let text = SPACES.replace_all(&text, " ");
        let text = SPACE_BEFORE_PUNCT.replace_all(&text, "${1}");
        let text = ZWNJ_RUN.replace_all(&text, ZWNJ.to_string().as_str());
        let text = ZWNJ_AROUND_SPACE.replace_all(&text, " ");

        text.trim_matches(|c: char| c == ZWNJ || c.is_whitespace())
            .to_string()
    }
}

/// Nonspacing marks, apart from hamzas that are part of the letter.
fn is_diacritic(c: char) -> bool {
    c != HAMZA_ABOVE
        && c != HAMZA_BELOW
        && GeneralCategory::of(c) == GeneralCategory::NonspacingMark
}

impl Transform for PersianNormalizer {
    fn transform_own(&self, text: String) -> String {
        self.normalize(&text)
    }
}

impl Default for PersianNormalizer {
    /// Persian digits and diacritic removal are both enabled.
    fn default() -> Self {
        Self::new(true, true)
    }
}
