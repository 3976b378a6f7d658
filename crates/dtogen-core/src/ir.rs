//! Intermediate representation shared by the scanners and the synthesizer.
//!
//! - [`SourceField`]: one resolved field, with its external key and value kind
//! - [`ClassUnit`]: one located class plus its fields, the unit of generation
//!
//! Both are built once per generation pass and not mutated afterwards.

use crate::directive::CustomParsing;
use std::ops::Range;

/// Type names that are copied through maps as plain values.
///
/// Anything else is assumed to be a generated-style class unless marked as an enum.
pub const BUILTIN_TYPES: &[&str] = &[
    "String", "int", "double", "num", "bool", "dynamic", "Object", "List", "Map",
];

/// How a field's value crosses the map boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Built-in type, stored as-is.
    Plain,
    /// Enum, converted through `<name>FromString` / `<name>ToString`.
    Enum,
    /// Another generated class, converted through `fromMap` / `toMap`.
    Nested,
}

/// A field in a source class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceField {
    /// Declared type with any trailing `?` removed.
    pub declared_type: String,

    /// Field name as declared.
    pub name: String,

    /// Whether the generated field is nullable.
    pub nullable: bool,

    /// External map/JSON key.
    pub converted_name: String,

    /// Value kind after applying directives.
    pub kind: ValueKind,

    /// Custom decode/encode templates from a `Parsing:` directive.
    pub custom_parsing: CustomParsing,

    /// Preceding comment lines that are not directives.
    pub docs: Vec<String>,
}

impl SourceField {
    pub fn is_enum_valued(&self) -> bool {
        self.kind == ValueKind::Enum
    }

    pub fn is_nested_class_valued(&self) -> bool {
        self.kind == ValueKind::Nested
    }

    /// Declared type as it appears in generated code.
    ///
    /// Nested types are renamed to their generated counterpart unless a `Parsing:`
    /// directive converts them, and `?` is added back for nullable fields.
    pub fn generated_type(&self, suffix: &str) -> String {
        let base = if self.is_nested_class_valued() && self.custom_parsing.is_empty() {
            self.companion_type(suffix)
        } else {
            self.declared_type.clone()
        };

        if self.nullable && !is_implicitly_nullable(&base) {
            format!("{base}?")
        } else {
            base
        }
    }

    /// Name of the generated class for a nested type: `suffix` goes before any
    /// generic arguments.
    pub fn companion_type(&self, suffix: &str) -> String {
        match self.declared_type.split_once('<') {
            Some((name, args)) => format!("{name}{suffix}<{args}"),
            None => format!("{}{}", self.declared_type, suffix),
        }
    }
}

/// Classify a declared type (without `?`) before directives are applied.
pub fn default_value_kind(declared_type: &str) -> ValueKind {
    if BUILTIN_TYPES.contains(&base_type_name(declared_type)) {
        ValueKind::Plain
    } else {
        ValueKind::Nested
    }
}

/// Type name with generic arguments and any library prefix removed.
///
/// `Map<String, dynamic>` is `Map`, `core.int` is `int`.
pub fn base_type_name(declared_type: &str) -> &str {
    let without_args = declared_type
        .split('<')
        .next()
        .unwrap_or(declared_type)
        .trim();
    without_args.rsplit('.').next().unwrap_or(without_args)
}

fn is_implicitly_nullable(ty: &str) -> bool {
    ty == "dynamic"
}

/// A located class together with its resolved fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassUnit {
    /// Class name.
    pub name: String,

    /// Text of the class body as captured by the locator.
    pub body_text: String,

    /// Byte range of the captured declaration in the source text.
    pub source_range: Range<usize>,

    /// Whether the class mixes in value equality (`EquatableMixin` / `Equatable`).
    pub uses_equality_mixin: bool,

    /// Fields in declaration order.
    pub fields: Vec<SourceField>,
}
