//! Text Normalization.
//!
//! Cleans a raw question before analysis: whitespace is collapsed, Bengali
//! digits become ASCII digits and math operators are standardized so that
//! `২x + ৫ = ১৩` and `2x + 5 = 13` look the same to every later step.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

// "2 x 3" -> "2*3"
static LETTER_X_PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9])\s*x\s*([0-9])").expect("Invalid regex: letter x product")
});

// "2 * x" -> "2*x"
static SPACED_PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9])\s*\*\s*([a-zA-Z])").expect("Invalid regex: spaced product")
});

/// Map a Bengali digit (০..৯) to its ASCII counterpart
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '০'..='৯' => {
            let offset = c as u32 - '০' as u32;
            char::from_digit(offset, 10)
        }
        _ => None,
    }
}

/// Normalize a question for mathematical processing.
///
/// Digit transliteration runs before the numeric patterns so Bengali
/// numerals collapse exactly like Latin ones.
pub fn normalize_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");

    let transliterated: String = collapsed
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            other => ascii_digit(other).unwrap_or(other),
        })
        .collect();

    // A single pass leaves every second link of "2 x 3 x 4" untouched
    let mut normalized = transliterated;
    while LETTER_X_PRODUCT.is_match(&normalized) {
        normalized = LETTER_X_PRODUCT
            .replace_all(&normalized, "${1}*${2}")
            .into_owned();
    }

    SPACED_PRODUCT
        .replace_all(&normalized, "${1}*${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize_text("  what   is\t\n gravity  "), "what is gravity");
    }

    #[test]
    fn test_bengali_digits() {
        assert_eq!(normalize_text("১২৩"), "123");
        assert_eq!(normalize_text("০৪৫৬৭৮৯"), "0456789");
    }

    #[test]
    fn test_operator_standardization() {
        assert_eq!(normalize_text("6 × 7 ÷ 2 − 1"), "6 * 7 / 2 - 1");
    }

    #[test]
    fn test_letter_x_multiplication() {
        assert_eq!(normalize_text("2 x 3"), "2*3");
        assert_eq!(normalize_text("2 x 3 x 4"), "2*3*4");
        // a variable next to a digit is not a product
        assert_eq!(normalize_text("2x + 5 = 13"), "2x + 5 = 13");
    }

    #[test]
    fn test_spaced_multiplication_with_variable() {
        assert_eq!(normalize_text("3 * y + 1"), "3*y + 1");
    }

    #[test]
    fn test_bengali_equation_matches_latin() {
        assert_eq!(normalize_text("২x + ৫ = ১৩"), normalize_text("2x + 5 = 13"));
    }

    #[test]
    fn test_idempotent() {
        for text in ["  ২ x ৩   ×  y ", "5 × x", "2 x 3 x 4 x 5", ""] {
            let once = normalize_text(text);
            assert_eq!(normalize_text(&once), once, "not idempotent for '{}'", text);
        }
    }
}
