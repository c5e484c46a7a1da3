use bencode_gen_core::{SeqKind, TypeDesc};
use indoc::indoc;

use crate::Error;
use crate::diagnostics::DiagnosticKind;
use crate::schema::Schema;

fn schema_errors(json: &str) -> String {
    match Schema::parse(json) {
        Ok(_) => panic!("expected schema errors"),
        Err(Error::Schema(diagnostics)) => diagnostics.render(),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn forward_references_resolve() {
    let schema = Schema::parse(indoc! {r#"
        {
            "module": "tracker",
            "types": [
                {"name": "Response", "struct": [{"name": "Peers", "type": "Vec<Peer>"}]},
                {"name": "Peer", "struct": [{"name": "Ip", "type": "str"}]}
            ]
        }
    "#})
    .unwrap();

    assert_eq!(schema.module(), Some("tracker"));
    let table = schema.table();
    let response = schema.lookup("Response").unwrap();
    let peer = schema.lookup("Peer").unwrap();

    let TypeDesc::Struct(fields) = table.get(table.underlying(response)) else {
        panic!("Response should be a struct");
    };
    assert_eq!(fields[0].name, "Peers");
    assert_eq!(
        table.get(fields[0].ty),
        &TypeDesc::Sequence {
            elem: peer,
            kind: SeqKind::Slice
        }
    );
}

#[test]
fn native_types_may_be_opaque() {
    let schema = Schema::parse(indoc! {r#"
        {"types": [
            {"name": "Signature", "native": true},
            {"name": "InfoHash", "type": "str", "native": true}
        ]}
    "#})
    .unwrap();
    let table = schema.table();
    let sig = schema.lookup("Signature").unwrap();
    let hash = schema.lookup("InfoHash").unwrap();

    assert!(table.is_native(sig) && table.is_native(hash));
    assert_eq!(table.underlying(sig), sig);
    assert_ne!(table.underlying(hash), hash);
}

#[test]
fn invalid_json_is_a_json_error() {
    assert!(matches!(Schema::parse("{"), Err(Error::Json(_))));
}

#[test]
fn unknown_type_points_into_expression() {
    insta::assert_snapshot!(schema_errors(r#"{"types": [{"name": "A", "struct": [{"name": "Peers", "type": "Vec<Peer>"}]}]}"#), @r"
    error: A.Peers: `Peer` is not declared
      |
    1 | Vec<Peer>
      |     ^^^^ not declared
    ");
}

#[test]
fn malformed_expression() {
    insta::assert_snapshot!(schema_errors(r#"{"types": [{"name": "A", "type": "Map<str>"}]}"#), @r"
    error: A: malformed type expression: expected `,`, found `>`
      |
    1 | Map<str>
      |        ^ here
    ");
}

#[test]
fn duplicates_and_bad_names() {
    insta::assert_snapshot!(schema_errors(indoc! {r#"
        {"types": [
            {"name": "A", "type": "str"},
            {"name": "A", "type": "i64"},
            {"name": "str", "type": "i64"},
            {"name": "B", "struct": [
                {"name": "X", "type": "str"},
                {"name": "X", "type": "str"},
                {"name": "not valid", "type": "str"}
            ]}
        ]}
    "#}), @r"
    error: schema: `A` is already declared

    error: schema: `str` is not a valid name

    error: B: field `X` is declared twice

    error: B: `not valid` is not a valid name
    ");
}

#[test]
fn declaration_shape() {
    insta::assert_snapshot!(schema_errors(indoc! {r#"
        {"types": [
            {"name": "Both", "type": "str", "struct": []},
            {"name": "Neither"}
        ]}
    "#}), @r"
    error: Both: invalid declaration: has both a struct body and a type expression

    error: Neither: invalid declaration: needs a struct body or a type expression
    ");
}

#[test]
fn alias_cycles_are_rejected() {
    let err = Schema::parse(indoc! {r#"
        {"types": [
            {"name": "A", "type": "B"},
            {"name": "B", "type": "A"},
            {"name": "C", "type": "A"}
        ]}
    "#})
    .unwrap_err();
    let Error::Schema(diagnostics) = err else {
        panic!("expected schema diagnostics");
    };
    assert_eq!(diagnostics.error_count(), 2);
    assert!(diagnostics.has_kind(DiagnosticKind::AliasCycle));
    insta::assert_snapshot!(diagnostics.render(), @r"
    error: A: type alias cycle: A -> B -> A

    error: B: type alias cycle: B -> A -> B
    ");
}

#[test]
fn recursion_through_structure_is_allowed_in_schema() {
    let schema = Schema::parse(
        r#"{"types": [{"name": "Node", "struct": [{"name": "Next", "type": "Option<Node>"}]}]}"#,
    );
    assert!(schema.is_ok());
}
