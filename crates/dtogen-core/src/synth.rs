//! Dart transfer-class generation from a [`ClassUnit`].
//!
//! The generated class contains, in this order:
//!
//! 1. field declarations
//! 2. a named-parameter constructor (`required` for non-nullable fields)
//! 3. `fromMap` / `fromJson` factories
//! 4. `copyWith` (optional)
//! 5. `toMap` / `toJson`
//! 6. `toString`
//! 7. `props` when the source used an equality mixin, otherwise `operator ==` and
//!    `hashCode` (optional)
//!
//! # Conversion priority
//!
//! | Priority | Decode (`fromMap`) | Encode (`toMap`) |
//! |----------|--------------------|------------------|
//! | 1 | `Parsing:` from-template | `Parsing:` to-template |
//! | 2 | `<name>FromString(map['key'])` | `<name>ToString(<name>)` |
//! | 3 | `TypeSuffix.fromMap(...)`, null-checked | `<name>.toMap()` / `<name>?.toMap()` |
//! | 4 | `map['key']` | `<name>` |
//!
//! Inputs are trusted. Contradictory metadata produces code in priority order rather
//! than an error.

use crate::config::GenerationConfig;
use crate::ir::{ClassUnit, SourceField, ValueKind};

/// Import for `json.encode` / `json.decode`.
pub const CONVERT_IMPORT: &str = "import 'dart:convert';";

/// Import for `EquatableMixin`.
pub const EQUATABLE_IMPORT: &str = "import 'package:equatable/equatable.dart';";

/// Seed terminating the `hashCode` fold.
pub const HASH_SEED: u32 = 17;

const MAP_TYPE: &str = "Map<String, dynamic>";

/// Name of the generated class for `class_name`.
pub fn dto_name(class_name: &str, config: &GenerationConfig) -> String {
    format!("{}{}", class_name, config.suffix)
}

/// Imports the generated code for `units` relies on, in emission order.
pub fn required_imports(units: &[ClassUnit], config: &GenerationConfig) -> Vec<&'static str> {
    let mut imports = vec![CONVERT_IMPORT];
    if config.equality && units.iter().any(|u| u.uses_equality_mixin) {
        imports.push(EQUATABLE_IMPORT);
    }
    imports
}

/// Map access expression for a field's external key.
pub fn map_access(field: &SourceField) -> String {
    format!("map['{}']", field.converted_name)
}

/// Expression reading `field` out of `map`.
pub fn decode_expr(field: &SourceField, config: &GenerationConfig) -> String {
    let access = map_access(field);

    if let Some(custom) = field.custom_parsing.decode_expr(&access) {
        return custom;
    }

    match field.kind {
        ValueKind::Enum => format!("{}FromString({access})", field.name),
        ValueKind::Nested => {
            let fallback = if field.nullable {
                "null".to_string()
            } else {
                format!("throw ArgumentError.notNull('{}')", field.converted_name)
            };
            format!(
                "{access} != null ? {}.fromMap({access}) : {fallback}",
                field.companion_type(&config.suffix)
            )
        }
        ValueKind::Plain => access,
    }
}

/// Expression producing the external value of `field`.
pub fn encode_expr(field: &SourceField) -> String {
    if let Some(custom) = field.custom_parsing.encode_expr(&field.name) {
        return custom;
    }

    match field.kind {
        ValueKind::Enum => format!("{0}ToString({0})", field.name),
        ValueKind::Nested if field.nullable => format!("{}?.toMap()", field.name),
        ValueKind::Nested => format!("{}.toMap()", field.name),
        ValueKind::Plain => field.name.clone(),
    }
}

/// Generate the transfer class for `unit`.
pub fn generate_class(unit: &ClassUnit, config: &GenerationConfig) -> String {
    let name = dto_name(&unit.name, config);
    let fields = &unit.fields;
    let props_style = config.equality && unit.uses_equality_mixin;
    let mut code = String::new();

    if props_style {
        code.push_str(&format!("class {name} with EquatableMixin {{\n"));
    } else {
        code.push_str(&format!("class {name} {{\n"));
    }

    // Fields
    for field in fields {
        for doc in &field.docs {
            code.push_str(&format!("  /// {doc}\n"));
        }
        code.push_str(&format!(
            "  final {} {};\n",
            field.generated_type(&config.suffix),
            field.name
        ));
    }

    push_constructor(&mut code, &name, fields);
    push_from_map(&mut code, &name, fields, config);
    if config.copy_with {
        push_copy_with(&mut code, &name, fields, config);
    }
    push_to_map(&mut code, fields);
    push_to_string(&mut code, &name, fields);
    if config.equality {
        if props_style {
            push_props(&mut code, fields);
        } else {
            push_equality(&mut code, &name, fields);
        }
    }

    code.push_str("}\n");
    code
}

fn push_constructor(code: &mut String, name: &str, fields: &[SourceField]) {
    if fields.is_empty() {
        code.push_str(&format!("\n  const {name}();\n"));
        return;
    }

    code.push_str(&format!("\n  const {name}({{\n"));
    for field in fields {
        if field.nullable {
            code.push_str(&format!("    this.{},\n", field.name));
        } else {
            code.push_str(&format!("    required this.{},\n", field.name));
        }
    }
    code.push_str("  });\n");
}

fn push_from_map(code: &mut String, name: &str, fields: &[SourceField], config: &GenerationConfig) {
    code.push_str(&format!(
        "\n  factory {name}.fromMap({MAP_TYPE} map) {{\n    return {name}(\n"
    ));
    for field in fields {
        code.push_str(&format!(
            "      {}: {},\n",
            field.name,
            decode_expr(field, config)
        ));
    }
    code.push_str("    );\n  }\n");

    code.push_str(&format!(
        "\n  factory {name}.fromJson(String source) =>\n      {name}.fromMap(json.decode(source) as {MAP_TYPE});\n"
    ));
}

fn push_copy_with(code: &mut String, name: &str, fields: &[SourceField], config: &GenerationConfig) {
    if fields.is_empty() {
        code.push_str(&format!("\n  {name} copyWith() => {name}();\n"));
        return;
    }

    code.push_str(&format!("\n  {name} copyWith({{\n"));
    for field in fields {
        let ty = field.generated_type(&config.suffix);
        let param_ty = if ty.ends_with('?') || ty == "dynamic" {
            ty
        } else {
            format!("{ty}?")
        };
        code.push_str(&format!("    {param_ty} {},\n", field.name));
    }
    code.push_str(&format!("  }}) {{\n    return {name}(\n"));
    for field in fields {
        code.push_str(&format!("      {0}: {0} ?? this.{0},\n", field.name));
    }
    code.push_str("    );\n  }\n");
}

fn push_to_map(code: &mut String, fields: &[SourceField]) {
    code.push_str(&format!("\n  {MAP_TYPE} toMap() {{\n    return {{\n"));
    for field in fields {
        code.push_str(&format!(
            "      '{}': {},\n",
            field.converted_name,
            encode_expr(field)
        ));
    }
    code.push_str("    };\n  }\n");

    code.push_str("\n  String toJson() => json.encode(toMap());\n");
}

fn push_to_string(code: &mut String, name: &str, fields: &[SourceField]) {
    let parts: Vec<String> = fields
        .iter()
        .map(|f| format!("{0}: ${{{0}}}", f.name))
        .collect();

    code.push_str("\n  @override\n");
    code.push_str(&format!(
        "  String toString() => '{name}({})';\n",
        parts.join(", ")
    ));
}

fn push_props(code: &mut String, fields: &[SourceField]) {
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();

    code.push_str("\n  @override\n");
    code.push_str(&format!(
        "  List<Object?> get props => [{}];\n",
        names.join(", ")
    ));
}

fn push_equality(code: &mut String, name: &str, fields: &[SourceField]) {
    code.push_str("\n  @override\n  bool operator ==(Object other) {\n");
    code.push_str("    if (identical(this, other)) return true;\n\n");
    code.push_str(&format!("    return other is {name}"));
    for field in fields {
        code.push_str(&format!(" &&\n        other.{0} == {0}", field.name));
    }
    code.push_str(";\n  }\n");

    code.push_str("\n  @override\n  int get hashCode =>\n");
    for field in fields {
        code.push_str(&format!("      {}.hashCode ^\n", field.name));
    }
    code.push_str(&format!("      {HASH_SEED};\n"));
}
