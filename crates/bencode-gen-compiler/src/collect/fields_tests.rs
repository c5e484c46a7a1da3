use bencode_gen_plan::Selector;
use indoc::indoc;

use super::*;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::test_utils::{TORRENT, schema};

fn collect(json: &str, name: &str) -> (Vec<Field>, Diagnostics) {
    let schema = schema(json);
    let mut diagnostics = Diagnostics::new();
    let ty = schema.lookup(name).unwrap();
    let fields = collect_fields(schema.table(), name, ty, &mut diagnostics);
    (fields, diagnostics)
}

fn describe(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| {
            let omit = if f.omit_empty() { " omitempty" } else { "" };
            format!("{} -> {:?}{omit}\n", f.selector(&Selector::Root), f.output_name())
        })
        .collect()
}

#[test]
fn embedded_members_are_flattened_in_place() {
    let (fields, diagnostics) = collect(TORRENT, "Torrent");
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(describe(&fields), @r#"
    x.Announce -> "announce"
    x.Info.PieceLength -> "piece length"
    x.Info.Files -> "files"
    x.Peers -> "peers" omitempty
    x.Private -> "private"
    x.Ttl -> "ttl"
    x.Sig -> "sig"
    "#);
}

#[test]
fn embedding_through_alias_and_nesting() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Base", "struct": [{"name": "CreatedBy", "type": "str", "tag": "created by"}]},
            {"name": "Middle", "struct": [
                {"name": "Base", "type": "Base", "embedded": true},
                {"name": "Comment", "type": "str"}
            ]},
            {"name": "Alias", "type": "Middle"},
            {"name": "Top", "struct": [{"name": "Alias", "type": "Alias", "embedded": true}]}
        ]}
    "#};
    let (fields, diagnostics) = collect(json, "Top");
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(describe(&fields), @r#"
    x.Alias.Base.CreatedBy -> "created by"
    x.Alias.Comment -> "comment"
    "#);
}

#[test]
fn malformed_tag_is_ignored_with_warning() {
    let json = indoc! {r#"
        {"types": [{"name": "Odd", "struct": [
            {"name": "Size", "type": "i64", "tag": "size,required"}
        ]}]}
    "#};
    let (fields, diagnostics) = collect(json, "Odd");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].tag, None);
    assert_eq!(fields[0].output_name(), "size");
    assert!(diagnostics.has_kind(DiagnosticKind::MalformedTag));
    assert!(!diagnostics.has_errors());
}

#[test]
fn non_struct_embedding_is_skipped() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Raw", "type": "str"},
            {"name": "Outer", "struct": [
                {"name": "Raw", "type": "Raw", "embedded": true},
                {"name": "Id", "type": "i64", "tag": "id"}
            ]}
        ]}
    "#};
    let (fields, diagnostics) = collect(json, "Outer");
    assert_eq!(describe(&fields), "x.Id -> \"id\"\n");
    insta::assert_snapshot!(diagnostics.render(), @"warning: Outer.Raw: unsupported embedding: `Raw` is not a struct");
}

#[test]
fn self_embedding_is_skipped() {
    let json = indoc! {r#"
        {"types": [{"name": "Loop", "struct": [
            {"name": "Loop", "type": "Loop", "embedded": true},
            {"name": "Id", "type": "i64"}
        ]}]}
    "#};
    let (fields, diagnostics) = collect(json, "Loop");
    assert_eq!(fields.len(), 1);
    insta::assert_snapshot!(diagnostics.render(), @"warning: Loop.Loop: unsupported embedding: `Loop` embeds itself");
}

#[test]
fn tag_on_embedded_member_is_ignored() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Inner", "struct": [{"name": "Id", "type": "i64"}]},
            {"name": "Outer", "struct": [
                {"name": "Inner", "type": "Inner", "embedded": true, "tag": "inner"}
            ]}
        ]}
    "#};
    let (fields, diagnostics) = collect(json, "Outer");
    assert_eq!(describe(&fields), "x.Inner.Id -> \"id\"\n");
    insta::assert_snapshot!(diagnostics.render(), @"warning: Outer.Inner: tag on embedded field is ignored");
}

#[test]
fn tagged_field_detection() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Plain", "struct": [{"name": "Id", "type": "i64"}]},
            {"name": "Tagged", "struct": [{"name": "Id", "type": "i64", "tag": ",omitempty"}]},
            {"name": "Wrapper", "struct": [{"name": "Tagged", "type": "Tagged", "embedded": true}]}
        ]}
    "#};
    let schema = schema(json);
    let mut diagnostics = Diagnostics::new();
    let tagged = |name: &str, diagnostics: &mut Diagnostics| {
        has_tagged_field(schema.table(), name, schema.lookup(name).unwrap(), diagnostics)
    };
    assert!(!tagged("Plain", &mut diagnostics));
    assert!(tagged("Tagged", &mut diagnostics));
    assert!(tagged("Wrapper", &mut diagnostics));
}
