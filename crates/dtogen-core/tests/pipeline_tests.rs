//! End-to-end tests: Dart source in, edited Dart source out.

#![allow(non_snake_case)]

use dtogen_core::{
    Config, DiscoveryMode, GenerateError, GenerationConfig, NamingStyle, Prompter, generate, run,
};
use test_case::test_case;

const MODELS: &str = r#"import 'package:equatable/equatable.dart';

enum Status { active, banned }

class Address {
  final String street;
  final String? zipCode;
}

class Account with EquatableMixin {
  /// Login handle.
  final String userName;
  final Status status; // Type: enum
  final Address? homeAddress;
  final DateTime createdAt; // Parsing: DateTime.parse(value), value.toIso8601String()
}
"#;

struct Answers(&'static str, NamingStyle);

impl Prompter for Answers {
    fn suffix(&mut self, _default: &str) -> Option<String> {
        Some(self.0.to_string())
    }

    fn naming_style(&mut self, _choices: &[NamingStyle]) -> Option<NamingStyle> {
        Some(self.1)
    }
}

fn multi(style: NamingStyle) -> GenerationConfig {
    GenerationConfig::new("DTO", style).with_discovery(DiscoveryMode::Multi)
}

#[test]
fn generate___models_file___emits_one_dto_per_class() {
    let generation = generate(MODELS, &multi(NamingStyle::SnakeCase)).unwrap();

    assert_eq!(generation.edits.len(), 2);
    assert!(generation.diagnostics.is_empty());

    let output = generation.apply(MODELS).unwrap();
    assert!(output.starts_with(
        "import 'package:equatable/equatable.dart';\nimport 'dart:convert';\n\nenum Status"
    ));
    assert!(output.contains("class AddressDTO {\n"));
    assert!(output.contains("class AccountDTO with EquatableMixin {\n"));
    assert!(output.contains("  /// Login handle.\n  final String userName;\n"));
    assert!(output.contains("  final AddressDTO? homeAddress;\n"));
    assert!(output.contains(
        "      homeAddress: map['home_address'] != null ? AddressDTO.fromMap(map['home_address']) : null,\n"
    ));
    assert!(output.contains("      'home_address': homeAddress?.toMap(),\n"));
    assert!(output.contains("      status: statusFromString(map['status']),\n"));
    assert!(output.contains("      'created_at': createdAt.toIso8601String(),\n"));
    assert!(output.contains("  List<Object?> get props => [userName, status, homeAddress, createdAt];\n"));
}

#[test]
fn generate___source_classes___survive_unchanged() {
    let output = generate(MODELS, &multi(NamingStyle::Original))
        .unwrap()
        .apply(MODELS)
        .unwrap();

    assert!(output.contains("class Address {\n  final String street;\n  final String? zipCode;\n}\n\nclass AddressDTO {"));
    assert!(output.contains("enum Status { active, banned }\n"));
}

#[test_case(NamingStyle::CamelCase, "zipCode" ; "camel case")]
#[test_case(NamingStyle::SnakeCase, "zip_code" ; "snake case")]
#[test_case(NamingStyle::PascalCase, "ZipCode" ; "pascal case")]
#[test_case(NamingStyle::KebabCase, "zip-code" ; "kebab case")]
#[test_case(NamingStyle::Original, "zipCode" ; "original")]
fn generate___naming_style___keys_both_directions(style: NamingStyle, key: &str) {
    let output = generate(MODELS, &multi(style))
        .unwrap()
        .apply(MODELS)
        .unwrap();

    assert!(output.contains(&format!("      zipCode: map['{key}'],\n")));
    assert!(output.contains(&format!("      '{key}': zipCode,\n")));
}

#[test]
fn generate___every_field___has_matching_keys() {
    let generation = generate(MODELS, &multi(NamingStyle::KebabCase)).unwrap();
    let output = generation.apply(MODELS).unwrap();

    for unit in &generation.units {
        for field in &unit.fields {
            let read = format!("map['{}']", field.converted_name);
            let written = format!("'{}': ", field.converted_name);
            assert!(output.contains(&read), "{} is never read", field.name);
            assert!(output.contains(&written), "{} is never written", field.name);
        }
    }
}

#[test]
fn generate___single_class___adds_dto_and_import() {
    let config = GenerationConfig::new("DTO", NamingStyle::Original);
    let source = "class Tag {\n  final String label;\n}\n";

    let once = generate(source, &config).unwrap().apply(source).unwrap();

    assert_eq!(once.matches("class TagDTO {").count(), 1);
    assert!(once.contains("import 'dart:convert';"));
}

#[test]
fn run___config_file___fixes_suffix_and_style() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dtogen.toml");
    std::fs::write(
        &path,
        "[generation]\nsuffix = \"Model\"\nnaming_style = \"snake_case\"\ndiscovery = \"multi\"\n",
    )
    .unwrap();
    let config = Config::from_file(&path).unwrap();
    let mut answers = Answers("Ignored", NamingStyle::PascalCase);

    let output = run(Some(MODELS), &mut answers, &config)
        .unwrap()
        .apply(MODELS)
        .unwrap();

    assert!(output.contains("class AddressModel {"));
    assert!(output.contains("class AccountModel with EquatableMixin {"));
    assert!(output.contains("'zip_code': zipCode,"));
}

#[test]
fn run___unparseable_text___leaves_nothing_to_apply() {
    let mut answers = Answers("DTO", NamingStyle::Original);

    let result = run(Some("void main() {}\n"), &mut answers, &Config::default());

    assert_eq!(result.unwrap_err(), GenerateError::NoClassFound);
}
