#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// to_camel_case tests

#[test]
fn to_camel_case___converts_snake_case() {
    assert_eq!(to_camel_case("hello_world"), "helloWorld");
    assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
}

#[test]
fn to_camel_case___keeps_underscore_before_non_lowercase() {
    assert_eq!(to_camel_case("foo__bar"), "foo_Bar");
    assert_eq!(to_camel_case("item_2"), "item_2");
    assert_eq!(to_camel_case("trailing_"), "trailing_");
}

#[test]
fn to_camel_case___handles_simple_words() {
    assert_eq!(to_camel_case("simple"), "simple");
    assert_eq!(to_camel_case(""), "");
}

// to_snake_case / to_kebab_case tests

#[test]
fn to_snake_case___splits_lower_upper_boundaries() {
    assert_eq!(to_snake_case("displayName"), "display_name");
    assert_eq!(to_snake_case("UserId"), "user_id");
}

#[test]
fn to_snake_case___lowercases_acronym_runs_without_splitting() {
    assert_eq!(to_snake_case("userID"), "user_id");
    assert_eq!(to_snake_case("HTTPCode"), "httpcode");
}

#[test]
fn to_kebab_case___splits_lower_upper_boundaries() {
    assert_eq!(to_kebab_case("displayName"), "display-name");
    assert_eq!(to_kebab_case("createdAtUtc"), "created-at-utc");
}

// to_pascal_case tests

#[test]
fn to_pascal_case___converts_snake_case() {
    assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
    assert_eq!(to_pascal_case("display_name"), "DisplayName");
}

#[test]
fn to_pascal_case___capitalizes_camel_case() {
    assert_eq!(to_pascal_case("userId"), "UserId");
}

#[test]
fn to_pascal_case___handles_empty() {
    assert_eq!(to_pascal_case(""), "");
}

// Idempotence on canonical input

#[test_case(NamingStyle::CamelCase, "userId")]
#[test_case(NamingStyle::SnakeCase, "user_id")]
#[test_case(NamingStyle::PascalCase, "UserId")]
#[test_case(NamingStyle::KebabCase, "user-id")]
#[test_case(NamingStyle::Original, "user_Id")]
fn NamingStyle___canonical_input___is_unchanged(style: NamingStyle, name: &str) {
    assert_eq!(style.convert(name), name);
}

// NamingStyle parsing

#[test_case("camelCase", NamingStyle::CamelCase)]
#[test_case("snake_case", NamingStyle::SnakeCase)]
#[test_case("PascalCase", NamingStyle::PascalCase)]
#[test_case("kebab-case", NamingStyle::KebabCase)]
#[test_case("original", NamingStyle::Original)]
fn NamingStyle___from_str___parses_label(label: &str, expected: NamingStyle) {
    let style: NamingStyle = label.parse().unwrap();

    assert_eq!(style, expected);
    assert_eq!(style.to_string(), label);
}

#[test]
fn NamingStyle___from_str___rejects_unknown_label() {
    let result = "SCREAMING_CASE".parse::<NamingStyle>();

    assert!(matches!(result, Err(GenerateError::UnknownNamingStyle(_))));
}

#[test]
fn NamingStyle___default___is_original() {
    assert_eq!(NamingStyle::default(), NamingStyle::Original);
}
