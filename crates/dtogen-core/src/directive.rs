//! Field directives carried in comments.
//!
//! A directive is one comment line of the form `Key: payload`. Two are understood:
//!
//! - `Type: enum` marks the field as enum-valued
//! - `Parsing: <fromExpr>, <toExpr>` supplies decode/encode templates in which the
//!   word `value` stands for the value being converted
//!
//! Parsing works on comment *text*; stripping the host's comment markers is the
//! caller's job (see [`crate::extract`]).

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z]+)\s*:\s*(.*?)\s*$").unwrap());

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bvalue\b").unwrap());

/// A single parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `Type: enum`
    EnumMarker,
    /// `Parsing: from, to`
    CustomParsing { from: String, to: String },
}

impl Directive {
    /// Parse one comment line. Returns `None` for ordinary comments.
    pub fn parse(comment: &str) -> Option<Directive> {
        let caps = DIRECTIVE.captures(comment)?;
        let key = &caps[1];
        let payload = &caps[2];

        if key.eq_ignore_ascii_case("type") {
            payload
                .eq_ignore_ascii_case("enum")
                .then_some(Directive::EnumMarker)
        } else if key.eq_ignore_ascii_case("parsing") {
            let (from, to) = split_top_level_comma(payload)?;
            if from.is_empty() || to.is_empty() {
                return None;
            }
            Some(Directive::CustomParsing {
                from: from.to_string(),
                to: to.to_string(),
            })
        } else {
            None
        }
    }
}

/// Custom decode/encode expression templates for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomParsing {
    /// Template producing the field value from the external value.
    pub from_external: Option<String>,
    /// Template producing the external value from the field value.
    pub to_external: Option<String>,
}

impl CustomParsing {
    /// Whether no template is set.
    pub fn is_empty(&self) -> bool {
        self.from_external.is_none() && self.to_external.is_none()
    }

    /// Decode expression with `value` replaced by `map_access`.
    pub fn decode_expr(&self, map_access: &str) -> Option<String> {
        self.from_external
            .as_deref()
            .map(|template| substitute_value(template, map_access))
    }

    /// Encode expression with `value` replaced by `field_access`.
    pub fn encode_expr(&self, field_access: &str) -> Option<String> {
        self.to_external
            .as_deref()
            .map(|template| substitute_value(template, field_access))
    }
}

/// Directives found for one field, folded together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMetadata {
    pub is_enum: bool,
    pub custom_parsing: CustomParsing,
}

impl FieldMetadata {
    /// Fold the directives found in `comments`.
    ///
    /// The first `Parsing:` directive wins; later ones are ignored.
    pub fn from_comments<'a>(comments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut metadata = FieldMetadata::default();

        for directive in comments.into_iter().filter_map(Directive::parse) {
            match directive {
                Directive::EnumMarker => metadata.is_enum = true,
                Directive::CustomParsing { from, to } => {
                    if metadata.custom_parsing.from_external.is_none() {
                        metadata.custom_parsing = CustomParsing {
                            from_external: Some(from),
                            to_external: Some(to),
                        };
                    }
                }
            }
        }

        metadata
    }
}

/// Replace every whole-word `value` in `template` with `replacement`.
pub fn substitute_value(template: &str, replacement: &str) -> String {
    PLACEHOLDER
        .replace_all(template, NoExpand(replacement))
        .into_owned()
}

/// Split at the first comma that is not nested in brackets or quotes.
fn split_top_level_comma(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(' | '[' | '{' | '<') => depth += 1,
            (None, ')' | ']' | '}' | '>') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => return Some((s[..i].trim(), s[i + 1..].trim())),
            _ => {}
        }
    }

    None
}
