//! Generation pipeline
//!
//! [`run`] asks for preferences, then for each located class: extract fields, apply
//! directives, convert key names, synthesize the transfer class, and produce one
//! [`EditOperation`] replacing the class span. The host applies the result with
//! [`Generation::apply`].

use crate::config::{Config, DiscoveryMode, GenerationConfig, NullabilityPolicy};
use crate::directive::{Directive, FieldMetadata};
use crate::edit::{EditOperation, apply_edits};
use crate::error::{GenerateError, GenerateResult};
use crate::extract::{ConstructorParams, RawField, extract_fields, find_constructor};
use crate::ir::{ClassUnit, SourceField, ValueKind, default_value_kind};
use crate::locator::{ClassDecl, ClassLocator};
use crate::naming::NamingStyle;
use crate::synth::{generate_class, required_imports};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

#[allow(clippy::unwrap_used)] // Safe: literal pattern
static IMPORT_ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:import|library)\b[^\n]*").unwrap());

/// Source of the two preferences a run needs.
///
/// Both questions are asked, in order, before any text is scanned. Returning `None`
/// cancels the run.
pub trait Prompter {
    /// Suffix for generated class names. `default` is offered pre-filled.
    fn suffix(&mut self, default: &str) -> Option<String>;

    /// Naming style for map keys, chosen from `choices`.
    fn naming_style(&mut self, choices: &[NamingStyle]) -> Option<NamingStyle>;
}

/// A class that could not be generated in multi-class mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub class: String,
    pub error: GenerateError,
}

/// Result of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// One edit per generated class, in source order.
    pub edits: Vec<EditOperation>,

    /// Insertion of imports the generated code needs and the text lacks.
    pub import_edit: Option<EditOperation>,

    /// The classes that were generated.
    pub units: Vec<ClassUnit>,

    /// Classes skipped in multi-class mode.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    /// All edits, imports first.
    pub fn all_edits(&self) -> Vec<EditOperation> {
        self.import_edit
            .iter()
            .chain(self.edits.iter())
            .cloned()
            .collect()
    }

    /// Apply every edit to `text` in one pass.
    pub fn apply(&self, text: &str) -> GenerateResult<String> {
        apply_edits(text, &self.all_edits())
    }
}

/// Resolve preferences: config file values first, prompts for the rest.
pub fn collect_config(prompter: &mut dyn Prompter, config: &Config) -> GenerateResult<GenerationConfig> {
    let section = &config.generation;

    let suffix = match &section.suffix {
        Some(suffix) => suffix.clone(),
        None => prompter
            .suffix(&section.default_suffix)
            .ok_or(GenerateError::SuffixCancelled)?,
    };
    let naming_style = match section.naming_style {
        Some(style) => style,
        None => prompter
            .naming_style(&NamingStyle::ALL)
            .ok_or(GenerateError::StyleCancelled)?,
    };

    Ok(config.generation_config(suffix, naming_style))
}

/// Full pipeline: check the target, collect preferences, generate.
pub fn run(
    target: Option<&str>,
    prompter: &mut dyn Prompter,
    config: &Config,
) -> GenerateResult<Generation> {
    let text = target.ok_or(GenerateError::NoActiveTarget)?;
    let generation_config = collect_config(prompter, config)?;
    generate(text, &generation_config)
}

/// Generate transfer classes for the classes in `text`.
///
/// In single mode any failure aborts the run. In multi mode a class without fields is
/// recorded in [`Generation::diagnostics`] and the others are still generated.
pub fn generate(text: &str, config: &GenerationConfig) -> GenerateResult<Generation> {
    let mut generation = Generation::default();
    let mut found_class = false;

    for decl in ClassLocator::new(text, config.discovery) {
        found_class = true;

        match build_unit(&decl, config) {
            Ok(unit) => {
                debug!(
                    class = %unit.name,
                    fields = unit.fields.len(),
                    "generating transfer class"
                );
                generation.edits.push(class_edit(&unit, text, config));
                generation.units.push(unit);
            }
            Err(error) if config.discovery == DiscoveryMode::Multi => {
                warn!(class = %decl.name, %error, "skipping class");
                generation.diagnostics.push(Diagnostic {
                    class: decl.name.to_string(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    if !found_class {
        return Err(GenerateError::NoClassFound);
    }

    generation.import_edit = import_edit(text, &generation.units, config);
    Ok(generation)
}

fn build_unit(decl: &ClassDecl<'_>, config: &GenerationConfig) -> GenerateResult<ClassUnit> {
    let raw_fields = extract_fields(decl.body, config.extraction);
    if raw_fields.is_empty() {
        return Err(GenerateError::NoFieldsFound {
            class: decl.name.to_string(),
        });
    }

    let constructor = match config.nullability {
        NullabilityPolicy::Constructor => find_constructor(decl.body, decl.name),
        NullabilityPolicy::TypeMarker => None,
    };

    let fields = raw_fields
        .into_iter()
        .map(|raw| resolve_field(raw, constructor.as_ref(), config))
        .collect();

    Ok(ClassUnit {
        name: decl.name.to_string(),
        body_text: decl.body.to_string(),
        source_range: decl.range.clone(),
        uses_equality_mixin: decl.uses_equality_mixin(),
        fields,
    })
}

fn resolve_field(
    raw: RawField,
    constructor: Option<&ConstructorParams>,
    config: &GenerationConfig,
) -> SourceField {
    let comments = raw
        .leading_comments
        .iter()
        .chain(raw.trailing_comments.iter())
        .map(String::as_str);
    let metadata = FieldMetadata::from_comments(comments);

    let nullable = constructor.map_or(raw.type_nullable, |ctor| !ctor.requires(&raw.name));
    let kind = if metadata.is_enum {
        ValueKind::Enum
    } else {
        default_value_kind(&raw.declared_type)
    };
    let docs = raw
        .leading_comments
        .into_iter()
        .filter(|line| Directive::parse(line).is_none())
        .collect();

    debug!(field = %raw.name, ?kind, nullable, "resolved field");

    SourceField {
        converted_name: config.naming_style.convert(&raw.name),
        declared_type: raw.declared_type,
        name: raw.name,
        nullable,
        kind,
        custom_parsing: metadata.custom_parsing,
        docs,
    }
}

/// Replacement for one class span.
///
/// With a suffix the source class is kept and the transfer class follows it. Without
/// one the transfer class would reuse the source name, so it replaces the source.
fn class_edit(unit: &ClassUnit, text: &str, config: &GenerationConfig) -> EditOperation {
    let original = &text[unit.source_range.clone()];
    let kept = original.trim_end();
    let trailing = &original[kept.len()..];
    let generated = generate_class(unit, config);

    let replacement = if config.suffix.is_empty() {
        format!("{}{trailing}", generated.trim_end())
    } else {
        format!("{kept}\n\n{}{trailing}", generated.trim_end())
    };

    EditOperation::new(unit.source_range.clone(), replacement)
}

/// Insert missing imports after the last `import`/`library` line above the first
/// generated class, or at the top of the text.
fn import_edit(text: &str, units: &[ClassUnit], config: &GenerationConfig) -> Option<EditOperation> {
    let first = units.iter().map(|u| u.source_range.start).min()?;
    let missing: Vec<&str> = required_imports(units, config)
        .into_iter()
        .filter(|import| !text.contains(import))
        .collect();
    if missing.is_empty() {
        return None;
    }

    let lines = missing.join("\n");
    let edit = match IMPORT_ANCHOR.find_iter(&text[..first]).last() {
        Some(anchor) => EditOperation::insert(anchor.end(), format!("\n{lines}")),
        None => EditOperation::insert(0, format!("{lines}\n\n")),
    };
    Some(edit)
}
