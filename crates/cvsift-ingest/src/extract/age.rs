//! Age extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel returned when no age-like pattern matches.
pub const AGE_NOT_FOUND: &str = "Not Found";

// Matches "Age: 29", "29 years old", or any bare two-digit number. The
// bare-number branch is a known false-positive source (zip-code fragments,
// phone-number segments); first match wins.
static AGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:Age[:\s]*)?(\d{2})\b(?:\s*years\s*old)?").unwrap());

/// Extract an age from resume text; sentinel [`AGE_NOT_FOUND`] otherwise.
pub fn extract_age(text: &str) -> String {
    AGE_RE
        .captures(text)
        .map(|cap| cap[1].to_string())
        .unwrap_or_else(|| AGE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_label() {
        assert_eq!(extract_age("Age: 29"), "29");
    }

    #[test]
    fn test_years_old() {
        assert_eq!(extract_age("I am 34 years old."), "34");
    }

    #[test]
    fn test_case_insensitive_label() {
        assert_eq!(extract_age("age: 41"), "41");
    }

    #[test]
    fn test_no_two_digit_number() {
        assert_eq!(extract_age("born in 1990, lives in town"), AGE_NOT_FOUND);
    }

    #[test]
    fn test_first_match_wins_even_if_not_an_age() {
        // Documented fragility: a bare two-digit number matches.
        assert_eq!(extract_age("Suite 12, Main Street. Age: 30"), "12");
    }
}
