//! Tools Tests
//!
//! Calculator safety, definition lookup and query fingerprints.

use crate::analysis::Language;
use crate::error::TutorError;
use crate::tools::{describe_term, evaluate, lookup_definition, query_fingerprint, simple_calculator, CalcError};

#[cfg(test)]
mod calculator_tests {
    use super::*;

    #[test]
    fn test_tool_replies() {
        let cases = vec![
            ("15 * 8", "15 * 8 = 120"),
            ("(1 + 2) * 3", "(1 + 2) * 3 = 9"),
            ("10 / 4", "10 / 4 = 2.5"),
            ("2 - 5", "2 - 5 = -3"),
        ];

        for (input, expected) in cases {
            assert_eq!(simple_calculator(input), expected, "Reply for '{}'", input);
        }
    }

    #[test]
    fn test_injection_attempts_are_rejected() {
        let attempts = vec![
            "__import__('os').system('ls')",
            "open('/etc/passwd')",
            "2 ** 10",
            "1; 2",
            "x = 5",
        ];

        for attempt in attempts {
            assert!(evaluate(attempt).is_err(), "Expected rejection of '{}'", attempt);
        }
    }

    #[test]
    fn test_error_positions() {
        assert_eq!(
            evaluate("1 + 2 $ 3").unwrap_err(),
            CalcError::UnexpectedCharacter { ch: '$', position: 6 }
        );
        assert_eq!(
            evaluate("1 + )").unwrap_err(),
            CalcError::UnexpectedToken {
                found: ")".to_string(),
                position: 4
            }
        );
    }

    #[test]
    fn test_errors_lift_into_tutor_error() {
        let err: TutorError = evaluate("1 / 0").unwrap_err().into();
        assert_eq!(err.to_string(), "Calculation error: Division by zero");
    }
}

#[cfg(test)]
mod definition_tests {
    use super::*;

    #[test]
    fn test_all_terms_present() {
        for term in [
            "algebra",
            "geometry",
            "calculus",
            "photosynthesis",
            "gravity",
            "atom",
            "hypothesis",
            "analysis",
        ] {
            assert!(lookup_definition(term).is_some(), "Missing definition for '{}'", term);
        }
    }

    #[test]
    fn test_describe_term() {
        assert_eq!(
            describe_term(" calculus "),
            "calculus: Advanced mathematics involving rates of change and accumulation of quantities."
        );
    }
}

#[cfg(test)]
mod fingerprint_tests {
    use super::*;

    #[test]
    fn test_same_question_same_key() {
        let a = query_fingerprint("Solve 2x + 5 = 13", Some(Language::English));
        let b = query_fingerprint("solve 2x + 5 = 13 ", Some(Language::English));
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_language_is_unknown() {
        // "unknown" is not a Language label, so no language collides with it
        for language in [Language::Bengali, Language::English, Language::Mixed] {
            assert_ne!(
                query_fingerprint("atom", None),
                query_fingerprint("atom", Some(language))
            );
        }
    }
}
