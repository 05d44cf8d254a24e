// src/domain/slug/pattern.rs
use crate::domain::errors::{DomainError, DomainResult};
use regex::{Regex, RegexBuilder};

/// Matches `base` and `base-<n>`, case-insensitively and anchored at both ends.
#[derive(Debug, Clone)]
pub struct SlugPattern {
    base: String,
    regex: Regex,
}

impl SlugPattern {
    pub fn new(base: &str) -> DomainResult<Self> {
        let regex = RegexBuilder::new(&format!(r"^{}(?:-([0-9]+))?$", regex::escape(base)))
            .case_insensitive(true)
            .build()
            .map_err(|err| DomainError::Validation(format!("invalid slug pattern: {err}")))?;
        Ok(Self {
            base: base.to_string(),
            regex,
        })
    }

    /// POSIX flavour of the pattern for stores that match server-side; pair it with a
    /// case-insensitive operator.
    pub fn posix(&self) -> String {
        format!("^{}(-[0-9]+)?$", regex::escape(&self.base))
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Numeric suffix of a matching candidate as canonical decimal digits, without
    /// leading zeros. The bare base counts as `"0"`.
    pub fn suffix_of<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        let captures = self.regex.captures(candidate)?;
        match captures.get(1) {
            None => Some("0"),
            Some(digits) => Some(canonical(digits.as_str())),
        }
    }

    /// One above the largest suffix among `existing`. Suffixes are compared as
    /// decimal strings, so there is no upper bound.
    pub fn next_suffix<'a>(&self, existing: impl IntoIterator<Item = &'a str>) -> String {
        let max = existing
            .into_iter()
            .filter_map(|candidate| self.suffix_of(candidate))
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .unwrap_or("0");
        increment(max)
    }
}

fn canonical(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_base_counts_as_zero() {
        let pattern = SlugPattern::new("my-book").unwrap();
        assert_eq!(pattern.suffix_of("my-book"), Some("0"));
        assert_eq!(pattern.suffix_of("my-book-12"), Some("12"));
        assert_eq!(pattern.suffix_of("MY-BOOK-3"), Some("3"));
        assert_eq!(pattern.suffix_of("my-book-007"), Some("7"));
    }

    #[test]
    fn unrelated_slugs_do_not_match() {
        let pattern = SlugPattern::new("my-book").unwrap();
        assert!(!pattern.is_match("my-books"));
        assert!(!pattern.is_match("old-my-book"));
        assert!(!pattern.is_match("my-book-two"));
        assert!(!pattern.is_match("my-book-"));
    }

    #[test]
    fn next_suffix_skips_gaps() {
        let pattern = SlugPattern::new("my-book").unwrap();
        let existing = ["my-book", "my-book-1", "my-book-3", "my-booklet-9"];
        assert_eq!(pattern.next_suffix(existing), "4");
    }

    #[test]
    fn base_ending_in_digits_keeps_its_own_number() {
        let pattern = SlugPattern::new("room-101").unwrap();
        assert_eq!(pattern.suffix_of("room-101"), Some("0"));
        assert_eq!(pattern.suffix_of("room-101-2"), Some("2"));
        assert_eq!(pattern.suffix_of("room-102"), None);
    }

    #[test]
    fn suffix_past_u64_max_still_advances() {
        let pattern = SlugPattern::new("my-book").unwrap();
        let existing = ["my-book", "my-book-18446744073709551615"];
        assert_eq!(pattern.next_suffix(existing), "18446744073709551616");
        assert_eq!(
            pattern.next_suffix(["my-book-2", "my-book-99999999999999999999999", "my-book-5"]),
            "100000000000000000000000"
        );
    }

    #[test]
    fn suffixes_compare_numerically_not_lexically() {
        let pattern = SlugPattern::new("a").unwrap();
        assert_eq!(pattern.next_suffix(["a", "a-9", "a-10"]), "11");
        assert_eq!(pattern.next_suffix(["a", "a-0009"]), "10");
        assert_eq!(pattern.next_suffix(["a-199", "a-1000"]), "1001");
        assert_eq!(pattern.next_suffix(std::iter::empty()), "1");
    }

    #[test]
    fn posix_form_escapes_the_base() {
        let pattern = SlugPattern::new("c.d").unwrap();
        assert_eq!(pattern.posix(), r"^c\.d(-[0-9]+)?$");
    }
}
