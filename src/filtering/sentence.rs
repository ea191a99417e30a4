//! sentence-level filtering
use super::Filter;

/// Simple length filter.
/// Returns `false` if provided sentence is not longer than [Length::min_size] unicode codepoints,
/// surrounding whitespace excluded.
///
/// [Length::min_size] is 0 by default, so that only empty sentences are rejected.
#[derive(Debug, Clone)]
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, sentence: &str) -> bool {
        sentence.trim().chars().count() > self.min_size
    }
}

impl Default for Length {
    fn default() -> Self {
        Length { min_size: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Length};

    #[test]
    fn length_default() {
        let f = Length::default();
        assert_eq!(f.min_size(), &0);
        assert!(f.detect("ب"));
        assert!(!f.detect(""));
        assert!(!f.detect(" \n\t "));
    }

    #[test]
    fn length_min_size() {
        let valid: String = ['ز'; 11].iter().collect();
        let invalid: String = ['ز'; 10].iter().collect();

        let f = Length::with_min_size(10);
        assert!(f.detect(valid.as_str()));
        assert!(!f.detect(invalid.as_str()));
    }
}
