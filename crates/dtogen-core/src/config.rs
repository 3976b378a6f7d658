//! Generation configuration
//!
//! [`GenerationConfig`] is what one generation run needs. [`Config`] is the optional
//! `dtogen.toml` file that supplies defaults for it:
//!
//! ```toml
//! [generation]
//! suffix = "DTO"
//! naming_style = "snake_case"
//! discovery = "multi"
//! extraction = "directive-aware"
//! nullability = "constructor"
//! copy_with = true
//! equality = true
//! ```
//!
//! Every key is optional. A missing `suffix` or `naming_style` is asked for through a
//! [`Prompter`](crate::generate::Prompter).

use crate::error::{GenerateError, GenerateResult};
use crate::naming::NamingStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name looked up by hosts.
pub const CONFIG_FILE_NAME: &str = "dtogen.toml";

/// How classes are discovered in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryMode {
    /// First class only; its body is the rest of the text.
    #[default]
    Single,
    /// Every `class Name { ... }` block in the text.
    Multi,
}

/// How field declarations are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMode {
    /// `final Type name;` lines, with comment directives.
    #[default]
    DirectiveAware,
    /// Any `Type name;` line, comments ignored.
    Permissive,
}

/// Which signal decides nullability when both are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullabilityPolicy {
    /// A found constructor decides: nullable unless `required this.<field>` is present.
    #[default]
    Constructor,
    /// Only the `?` on the declared type decides.
    TypeMarker,
}

/// Settings for one generation run, shared by every class in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Appended to the source class name to name the generated class.
    pub suffix: String,
    /// Style for map/JSON keys.
    pub naming_style: NamingStyle,
    pub discovery: DiscoveryMode,
    pub extraction: ExtractionMode,
    pub nullability: NullabilityPolicy,
    /// Emit `copyWith`.
    pub copy_with: bool,
    /// Emit `props` or `operator ==` / `hashCode`.
    pub equality: bool,
}

impl GenerationConfig {
    /// Config with the given prompt answers and default capabilities.
    pub fn new(suffix: impl Into<String>, naming_style: NamingStyle) -> Self {
        Self {
            suffix: suffix.into(),
            naming_style,
            discovery: DiscoveryMode::default(),
            extraction: ExtractionMode::default(),
            nullability: NullabilityPolicy::default(),
            copy_with: true,
            equality: true,
        }
    }

    pub fn with_discovery(mut self, discovery: DiscoveryMode) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn with_extraction(mut self, extraction: ExtractionMode) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn with_nullability(mut self, nullability: NullabilityPolicy) -> Self {
        self.nullability = nullability;
        self
    }
}

/// Contents of a `dtogen.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationSection,
}

/// The `[generation]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSection {
    /// Fixed suffix; skips the suffix prompt when set.
    #[serde(default)]
    pub suffix: Option<String>,

    /// Suffix offered as the prompt default.
    #[serde(default = "default_suffix")]
    pub default_suffix: String,

    /// Fixed naming style; skips the style prompt when set.
    #[serde(default)]
    pub naming_style: Option<NamingStyle>,

    #[serde(default)]
    pub discovery: DiscoveryMode,

    #[serde(default)]
    pub extraction: ExtractionMode,

    #[serde(default)]
    pub nullability: NullabilityPolicy,

    #[serde(default = "default_true")]
    pub copy_with: bool,

    #[serde(default = "default_true")]
    pub equality: bool,
}

fn default_suffix() -> String {
    "DTO".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            suffix: None,
            default_suffix: default_suffix(),
            naming_style: None,
            discovery: DiscoveryMode::default(),
            extraction: ExtractionMode::default(),
            nullability: NullabilityPolicy::default(),
            copy_with: default_true(),
            equality: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenerateError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> GenerateResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that suffixes can be appended to a class name
    pub fn validate(&self) -> GenerateResult<()> {
        let section = &self.generation;
        let suffixes = section
            .suffix
            .iter()
            .chain(std::iter::once(&section.default_suffix));

        for suffix in suffixes {
            if !is_identifier_tail(suffix) {
                return Err(GenerateError::Config(format!(
                    "suffix {suffix:?} must contain only letters, digits, '_' or '$'"
                )));
            }
        }

        Ok(())
    }

    /// Build a run configuration from the prompt answers.
    pub fn generation_config(&self, suffix: String, naming_style: NamingStyle) -> GenerationConfig {
        let section = &self.generation;
        GenerationConfig {
            suffix,
            naming_style,
            discovery: section.discovery,
            extraction: section.extraction,
            nullability: section.nullability,
            copy_with: section.copy_with,
            equality: section.equality,
        }
    }
}

/// Whether `s` can follow an identifier without breaking it.
pub fn is_identifier_tail(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
