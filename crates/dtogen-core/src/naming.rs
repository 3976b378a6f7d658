//! Naming convention utilities for map keys.
//!
//! Every generated map/JSON key is the source field name run through one of these
//! converters. The conversions are single-pass heuristics: they handle one kind of
//! word boundary each and do not normalize acronyms or mixed input.
//!
//! | Style | Function | `userId` / `user_id` |
//! |-------|----------|----------------------|
//! | `camelCase` | [`to_camel_case`] | `userId` / `userId` |
//! | `snake_case` | [`to_snake_case`] | `user_id` / `user_id` |
//! | `PascalCase` | [`to_pascal_case`] | `UserId` / `UserId` |
//! | `kebab-case` | [`to_kebab_case`] | `user-id` / `user_id` |
//! | `original` | identity | `userId` / `user_id` |

use crate::error::GenerateError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static UNDERSCORE_LOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([a-z])").unwrap());

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Naming style applied to every field's external key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NamingStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[default]
    #[serde(rename = "original")]
    Original,
}

impl NamingStyle {
    /// All styles, in the order they are offered to the user.
    pub const ALL: [NamingStyle; 5] = [
        NamingStyle::CamelCase,
        NamingStyle::SnakeCase,
        NamingStyle::PascalCase,
        NamingStyle::KebabCase,
        NamingStyle::Original,
    ];

    /// Canonical label, also used in config files and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::SnakeCase => "snake_case",
            NamingStyle::PascalCase => "PascalCase",
            NamingStyle::KebabCase => "kebab-case",
            NamingStyle::Original => "original",
        }
    }

    /// Convert `name` to this style.
    pub fn convert(self, name: &str) -> String {
        match self {
            NamingStyle::CamelCase => to_camel_case(name),
            NamingStyle::SnakeCase => to_snake_case(name),
            NamingStyle::PascalCase => to_pascal_case(name),
            NamingStyle::KebabCase => to_kebab_case(name),
            NamingStyle::Original => name.to_string(),
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NamingStyle {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamingStyle::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| GenerateError::UnknownNamingStyle(s.to_string()))
    }
}

/// Convert snake_case to camelCase.
///
/// Only `_` followed by a lowercase ASCII letter is a boundary; other underscores
/// are kept.
///
/// ```
/// use dtogen_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("display_name"), "displayName");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    UNDERSCORE_LOWER
        .replace_all(s, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Convert camelCase or PascalCase to snake_case.
///
/// ```
/// use dtogen_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("displayName"), "display_name");
/// assert_eq!(to_snake_case("user_id"), "user_id");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_case_boundaries(s, '_')
}

/// Convert camelCase or PascalCase to kebab-case.
///
/// ```
/// use dtogen_core::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("displayName"), "display-name");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    split_case_boundaries(s, '-')
}

/// Convert snake_case or camelCase to PascalCase.
///
/// The first character and every character after `_` are uppercased and the
/// underscores dropped.
///
/// ```
/// use dtogen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user_id"), "UserId");
/// assert_eq!(to_pascal_case("userId"), "UserId");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

fn split_case_boundaries(s: &str, separator: char) -> String {
    let replacement = format!("${{1}}{separator}${{2}}");
    LOWER_UPPER
        .replace_all(s, replacement.as_str())
        .to_lowercase()
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
