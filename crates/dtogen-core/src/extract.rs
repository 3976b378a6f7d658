//! Field extraction from a class body.
//!
//! Fields are found line by line with a declaration pattern (`Type name;`). Two modes:
//!
//! - [`ExtractionMode::DirectiveAware`] requires a `final` modifier and walks the
//!   surrounding lines to collect the comment block above each field, its trailing
//!   comment and the `//` lines directly below it
//! - [`ExtractionMode::Permissive`] accepts any `Type name;` line and ignores comments
//!
//! This is not a parser. Method bodies, multi-line declarations and block comments
//! are not understood, and lines that do not fit the pattern are skipped silently.

use crate::config::ExtractionMode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<mods>(?:(?:final|late|static|const|var|covariant|external)\s+)*)(?P<ty>[A-Za-z_$][\w$.]*(?:<[^;=]*>)?)(?P<q>\?)?\s+(?P<name>[A-Za-z_$][\w$]*)\s*;(?P<rest>.*)$",
    )
    .unwrap()
});

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static REQUIRED_THIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\brequired\s+this\.([A-Za-z_$][\w$]*)").unwrap());

/// Words that can start a `word word;` statement without being a type.
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "throw", "await", "yield", "else", "case", "break", "continue", "assert",
    "new", "import", "export", "part", "library", "typedef", "get", "set", "operator",
    "final", "late", "var", "const", "static",
];

/// A field declaration as captured from source, before directives are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    /// Declared type without a trailing `?`.
    pub declared_type: String,

    /// Field name.
    pub name: String,

    /// Whether the declared type carried a `?`.
    pub type_nullable: bool,

    /// Comment block directly above the declaration, markers stripped.
    pub leading_comments: Vec<String>,

    /// Trailing comment on the declaration line plus the `//` comment lines right
    /// below it.
    pub trailing_comments: Vec<String>,
}

/// Parameters of the class's unnamed constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorParams {
    required: HashSet<String>,
}

impl ConstructorParams {
    /// Whether the parameter list contains `required this.<name>`.
    pub fn requires(&self, name: &str) -> bool {
        self.required.contains(name)
    }
}

/// Extract field declarations from `body`, in declaration order.
pub fn extract_fields(body: &str, mode: ExtractionMode) -> Vec<RawField> {
    match mode {
        ExtractionMode::DirectiveAware => extract_with_comments(body),
        ExtractionMode::Permissive => body
            .lines()
            .filter_map(|line| {
                let decl = Declaration::parse(line)?;
                Some(decl.into_raw(Vec::new(), Vec::new()))
            })
            .collect(),
    }
}

fn extract_with_comments(body: &str) -> Vec<RawField> {
    let lines: Vec<&str> = body.lines().collect();
    let mut fields = Vec::new();
    // Lines before this index already belong to an earlier field.
    let mut claimed = 0;

    for (i, line) in lines.iter().enumerate() {
        let Some(decl) = Declaration::parse(line) else {
            continue;
        };
        if !decl.is_final {
            continue;
        }

        let mut leading = Vec::new();
        let mut above = i;
        while above > claimed {
            let Some(text) = comment_text(lines[above - 1]) else {
                break;
            };
            leading.push(text.to_string());
            above -= 1;
        }
        leading.reverse();

        let mut trailing = Vec::new();
        if let Some(text) = comment_text(decl.rest) {
            trailing.push(text.to_string());
        }
        let mut below = i + 1;
        while let Some(text) = lines.get(below).and_then(|l| directive_comment_text(l)) {
            trailing.push(text.to_string());
            below += 1;
        }
        claimed = below;

        fields.push(decl.into_raw(leading, trailing));
    }

    fields
}

/// Find the unnamed constructor `ClassName(...)` in `body` and read its parameters.
///
/// Returns `None` when no such call-shaped occurrence exists. The first occurrence
/// wins, even if it is actually an invocation.
pub fn find_constructor(body: &str, class_name: &str) -> Option<ConstructorParams> {
    let pattern = format!(r"(?:^|[^\w$.]){}\s*\(", regex::escape(class_name));
    let re = Regex::new(&pattern).ok()?;
    let open = re.find(body)?.end();

    let mut depth = 1usize;
    let mut close = body.len();
    for (offset, c) in body[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    close = open + offset;
                    break;
                }
            }
            _ => {}
        }
    }

    let required = REQUIRED_THIS
        .captures_iter(&body[open..close])
        .map(|caps| caps[1].to_string())
        .collect();

    Some(ConstructorParams { required })
}

/// Text of a `//` or `///` line comment, or `None` if `line` is not a comment.
pub fn comment_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let text = trimmed.strip_prefix("//")?;
    Some(text.trim_start_matches('/').trim())
}

/// Text of a `//` line comment that is not a `///` doc comment.
///
/// Doc comments below a field document the next declaration, so they never carry
/// the field's directives.
fn directive_comment_text(line: &str) -> Option<&str> {
    if line.trim_start().starts_with("///") {
        return None;
    }
    comment_text(line)
}

struct Declaration<'a> {
    declared_type: &'a str,
    name: &'a str,
    type_nullable: bool,
    is_final: bool,
    rest: &'a str,
}

impl<'a> Declaration<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let caps = DECLARATION.captures(line)?;
        let mods = caps.name("mods").map_or("", |m| m.as_str());
        let declared_type = caps.name("ty")?.as_str();

        let mut is_final = false;
        for word in mods.split_whitespace() {
            match word {
                "static" | "const" | "late" => return None,
                "final" => is_final = true,
                _ => {}
            }
        }
        if STATEMENT_KEYWORDS.contains(&declared_type) {
            return None;
        }

        Some(Declaration {
            declared_type,
            name: caps.name("name")?.as_str(),
            type_nullable: caps.name("q").is_some(),
            is_final,
            rest: caps.name("rest").map_or("", |m| m.as_str()),
        })
    }

    fn into_raw(self, leading_comments: Vec<String>, trailing_comments: Vec<String>) -> RawField {
        RawField {
            declared_type: self.declared_type.to_string(),
            name: self.name.to_string(),
            type_nullable: self.type_nullable,
            leading_comments,
            trailing_comments,
        }
    }
}
