//! Property-based tests for key naming
//!
//! Field names in the generated code are Dart identifiers, so the strategies here
//! produce identifier-shaped strings rather than arbitrary text.

use dtogen_core::NamingStyle;
use dtogen_core::naming::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
use proptest::prelude::*;

// Strategy: camelCase identifiers made of letter-only words
fn arb_camel_identifier() -> impl Strategy<Value = String> {
    "[a-z]{1,8}([A-Z][a-z]{1,8}){0,4}"
}

// Strategy: anything that can appear in a Dart field name
fn arb_identifier_chars() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,30}"
}

proptest! {
    /// Property: snake_case then camelCase restores a camelCase name
    #[test]
    fn proptest_snake_then_camel_roundtrip(name in arb_camel_identifier()) {
        prop_assert_eq!(to_camel_case(&to_snake_case(&name)), name);
    }

    /// Property: snake_case output has no uppercase letters
    #[test]
    fn proptest_snake_case_is_lowercase(name in arb_identifier_chars()) {
        let snake = to_snake_case(&name);
        prop_assert!(!snake.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Property: kebab-case differs from snake_case only in the separator
    #[test]
    fn proptest_kebab_matches_snake_separators(name in arb_camel_identifier()) {
        prop_assert_eq!(to_kebab_case(&name), to_snake_case(&name).replace('_', "-"));
    }

    /// Property: PascalCase of the snake form capitalizes the camel form
    #[test]
    fn proptest_pascal_from_snake_capitalizes_camel(name in arb_camel_identifier()) {
        let mut expected = name[..1].to_uppercase();
        expected.push_str(&name[1..]);
        prop_assert_eq!(to_pascal_case(&to_snake_case(&name)), expected);
    }

    /// Property: every style is stable when applied twice
    #[test]
    fn proptest_styles_are_idempotent(name in arb_identifier_chars()) {
        for style in NamingStyle::ALL {
            let once = style.convert(&name);
            prop_assert_eq!(style.convert(&once), once.clone(), "style {}", style);
        }
    }

    /// Property: conversions never drop letters
    #[test]
    fn proptest_styles_keep_letter_count(name in arb_camel_identifier()) {
        let letters = name.chars().filter(|c| c.is_ascii_alphabetic()).count();
        for style in NamingStyle::ALL {
            let converted = style.convert(&name);
            prop_assert_eq!(
                converted.chars().filter(|c| c.is_ascii_alphabetic()).count(),
                letters
            );
        }
    }
}
