#![allow(non_snake_case)]

use super::*;

const TWO_CLASSES: &str = r#"import 'package:meta/meta.dart';

class Address {
  final String street;
}

class Person extends Base with EquatableMixin {
  final String name;
}
"#;

// Single mode

#[test]
fn ClassLocator___single___takes_first_class_and_rest_of_text() {
    let decls: Vec<_> = ClassLocator::new(TWO_CLASSES, DiscoveryMode::Single).collect();

    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name, "Address");
    let start = TWO_CLASSES.find("class Address").unwrap();
    assert_eq!(decls[0].range, start..TWO_CLASSES.len());
    assert!(decls[0].body.contains("final String street;"));
    assert!(decls[0].body.contains("final String name;"));
}

#[test]
fn ClassLocator___single___class_without_brace___has_empty_body() {
    let decls: Vec<_> = ClassLocator::new("abstract class Marker", DiscoveryMode::Single).collect();

    assert_eq!(decls[0].name, "Marker");
    assert_eq!(decls[0].body, "");
}

#[test]
fn ClassLocator___single___no_class___yields_nothing() {
    let mut locator = ClassLocator::new("enum Kind { a, b }", DiscoveryMode::Single);

    assert!(locator.next().is_none());
}

#[test]
fn ClassLocator___keyword_inside_identifier___is_not_a_class() {
    let mut locator = ClassLocator::new("final subclass = 3;", DiscoveryMode::Multi);

    assert!(locator.next().is_none());
}

// Multi mode

#[test]
fn ClassLocator___multi___finds_every_class_with_ranges() {
    let decls: Vec<_> = ClassLocator::new(TWO_CLASSES, DiscoveryMode::Multi).collect();

    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].name, "Address");
    assert_eq!(decls[1].name, "Person");
    assert!(TWO_CLASSES[decls[0].range.clone()].starts_with("class Address {"));
    assert!(TWO_CLASSES[decls[1].range.clone()].ends_with('}'));
    assert!(!decls[0].body.contains("name"));
}

#[test]
fn ClassLocator___multi___stops_body_at_first_closing_brace() {
    let text = "class A {\n  final B b;\n  A({required this.b});\n  final C c;\n}\n";

    let decls: Vec<_> = ClassLocator::new(text, DiscoveryMode::Multi).collect();

    assert_eq!(decls.len(), 1);
    assert!(decls[0].body.contains("final B b;"));
    assert!(!decls[0].body.contains("final C c;"));
}

#[test]
fn ClassLocator___multi_with_named_constructor___ends_span_inside_parameters() {
    let text = "class A {\n  final B b;\n  A({required this.b});\n}\n";

    let decls: Vec<_> = ClassLocator::new(text, DiscoveryMode::Multi).collect();

    let end = decls[0].range.end;
    assert_eq!(&text[..end], "class A {\n  final B b;\n  A({required this.b}");
}

#[test]
fn ClassLocator___is_lazy_and_finite() {
    let mut locator = ClassLocator::new(TWO_CLASSES, DiscoveryMode::Multi);

    assert_eq!(locator.next().map(|d| d.name), Some("Address"));
    assert_eq!(locator.next().map(|d| d.name), Some("Person"));
    assert!(locator.next().is_none());
    assert!(locator.next().is_none());
}

// Equality mixin detection

#[test]
fn ClassDecl___uses_equality_mixin___detects_mixin_and_base_class() {
    let decls: Vec<_> = ClassLocator::new(TWO_CLASSES, DiscoveryMode::Multi).collect();
    let extends = ClassLocator::new("class P extends Equatable { }", DiscoveryMode::Multi)
        .next()
        .unwrap();

    assert!(!decls[0].uses_equality_mixin());
    assert!(decls[1].uses_equality_mixin());
    assert!(extends.uses_equality_mixin());
}
