//! Class declaration discovery.
//!
//! [`ClassLocator`] yields [`ClassDecl`]s lazily from a text blob:
//!
//! - [`DiscoveryMode::Single`] takes the first `class` keyword; the declaration and
//!   its body run to the end of the text
//! - [`DiscoveryMode::Multi`] matches `class Name ... { ... }` repeatedly, ending each
//!   body at the first `}`
//!
//! Braces are not balanced. A `}` inside a field type, a default value, or a method
//! body ends a multi-mode match early. That is a limit of this scanner, and callers
//! get no signal when it happens. In particular, multi mode needs classes without
//! brace-delimited constructors: with `A({required this.b})` the span ends inside
//! the parameter list, and the generated class is inserted there.

use crate::config::DiscoveryMode;
use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use std::ops::Range;

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static CLASS_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+([A-Za-z_$][\w$]*)([^{]*)").unwrap());

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static CLASS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+([A-Za-z_$][\w$]*)([^{]*)\{([^}]*)\}").unwrap());

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static EQUALITY_MIXIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bEquatableMixin\b|\bextends\s+Equatable\b").unwrap());

/// A class declaration found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl<'a> {
    /// Class name.
    pub name: &'a str,

    /// Text between the name and the opening brace (`extends`, `with`, ...).
    pub header: &'a str,

    /// Text inside the braces.
    pub body: &'a str,

    /// Byte range this declaration occupies in the source text.
    pub range: Range<usize>,
}

impl ClassDecl<'_> {
    /// Whether the header mixes in value equality.
    pub fn uses_equality_mixin(&self) -> bool {
        EQUALITY_MIXIN.is_match(self.header)
    }
}

/// Lazy iterator over the class declarations in a text.
pub struct ClassLocator<'a> {
    inner: Inner<'a>,
}

enum Inner<'a> {
    Single(Option<ClassDecl<'a>>),
    Multi(CaptureMatches<'static, 'a>),
}

impl<'a> ClassLocator<'a> {
    pub fn new(text: &'a str, mode: DiscoveryMode) -> Self {
        let inner = match mode {
            DiscoveryMode::Single => Inner::Single(first_class(text)),
            DiscoveryMode::Multi => Inner::Multi(CLASS_BLOCK.captures_iter(text)),
        };
        Self { inner }
    }
}

impl<'a> Iterator for ClassLocator<'a> {
    type Item = ClassDecl<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Single(decl) => decl.take(),
            Inner::Multi(matches) => {
                let caps = matches.next()?;
                let whole = caps.get(0)?;
                Some(ClassDecl {
                    name: caps.get(1)?.as_str(),
                    header: caps.get(2).map_or("", |m| m.as_str()),
                    body: caps.get(3).map_or("", |m| m.as_str()),
                    range: whole.start()..whole.end(),
                })
            }
        }
    }
}

fn first_class(text: &str) -> Option<ClassDecl<'_>> {
    let caps = CLASS_KEYWORD.captures(text)?;
    let start = caps.get(0)?.start();
    let header = caps.get(2).map_or("", |m| m.as_str());
    let header_end = caps.get(2).map_or(text.len(), |m| m.end());
    // `[^{]*` stops at the brace or runs to the end of the text.
    let body = text.get(header_end + 1..).unwrap_or("");

    Some(ClassDecl {
        name: caps.get(1)?.as_str(),
        header,
        body,
        range: start..text.len(),
    })
}

#[cfg(test)]
#[path = "locator/locator_tests.rs"]
mod locator_tests;
