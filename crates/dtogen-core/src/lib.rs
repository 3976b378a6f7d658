//! dtogen-core - Transfer-class generation for Dart data classes
//!
//! Turns a Dart class such as
//!
//! ```dart
//! class User {
//!   final String name;
//!   final int? age;
//!
//!   User({required this.name, this.age});
//! }
//! ```
//!
//! into a companion `UserDTO` with map/JSON conversion, `copyWith`, `toString` and
//! value equality. The scan is textual: classes and fields are found with patterns,
//! not with a Dart parser.
//!
//! The pipeline, in order:
//! - [`locator`] finds class declarations
//! - [`extract`] finds field declarations and their comments
//! - [`directive`] reads `Type: enum` and `Parsing: from, to` comments
//! - [`naming`] converts field names into map keys
//! - [`synth`] writes the generated class
//! - [`generate`] ties them together and returns [`EditOperation`]s

pub mod config;
pub mod directive;
pub mod edit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod ir;
pub mod locator;
pub mod naming;
pub mod synth;

pub use config::{
    CONFIG_FILE_NAME, Config, DiscoveryMode, ExtractionMode, GenerationConfig, NullabilityPolicy,
};
pub use edit::{EditOperation, apply_edits};
pub use error::{ErrorKind, GenerateError, GenerateResult};
pub use generate::{Diagnostic, Generation, Prompter, collect_config, generate, run};
pub use ir::{ClassUnit, SourceField, ValueKind};
pub use naming::NamingStyle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Config, EditOperation, GenerateError, GenerateResult, Generation, GenerationConfig,
        NamingStyle, Prompter,
    };
}
