use bencode_gen_core::{TypeDesc, TypeTable};
use bencode_gen_plan::EmptinessTest;
use indoc::indoc;

use crate::compile::{CompileError, emptiness_test};
use crate::test_utils::{ITEM, TORRENT, dump_plans, dump_unfolded, generate, schema};

#[test]
fn omitempty_int_and_plain_string() {
    insta::assert_snapshot!(dump_unfolded(ITEM, &["Item"]), @r#"
    Item
      literal "d"
      if      x.Count != 0
        literal "5:count"
        literal "i"
        int     x.Count
        literal "e"
      literal "4:name"
      string  x.Name
      literal "e"
    "#);
}

#[test]
fn folded_item() {
    insta::assert_snapshot!(dump_plans(ITEM, &["Item"]), @r#"
    Item
      literal "d"
      if      x.Count != 0
        literal "5:counti"
        int     x.Count
        literal "e"
      literal "4:name"
      string  x.Name
      literal "e"
    "#);
}

#[test]
fn every_descriptor_variant() {
    insta::assert_snapshot!(dump_plans(TORRENT, &["Torrent"]), @r#"
    Torrent
      literal "d8:announce"
      string  x.Announce
      literal "5:filesd"
      map     k0 in sorted(x.Info.Files) as PeerId
        string  k0
        literal "i"
        int     x.Info.Files[k0]
        literal "e"
      literal "e"
      if      len(x.Peers) != 0
        literal "5:peersl"
        for     i0 in x.Peers
          literal "d2:ip"
          string  (*i0).Ip
          literal "4:porti"
          int     (*i0).Port
          literal "ee"
        literal "e"
      literal "12:piece lengthi"
      int     x.Info.PieceLength
      literal "e7:privatei"
      bool    x.Private
      literal "e3:sig"
      native  x.Sig
      literal "3:ttli"
      int     x.Ttl.seconds()
      literal "ee"
    "#);
}

#[test]
fn fields_sort_by_declared_name_not_output_name() {
    let json = indoc! {r#"
        {"types": [{"name": "Keys", "struct": [
            {"name": "Zeta", "type": "str", "tag": "a"},
            {"name": "Alpha", "type": "str", "tag": "z"}
        ]}]}
    "#};
    insta::assert_snapshot!(dump_plans(json, &["Keys"]), @r#"
    Keys
      literal "d1:z"
      string  x.Alpha
      literal "1:a"
      string  x.Zeta
      literal "e"
    "#);
}

#[test]
fn nested_maps_use_distinct_keys() {
    let json = indoc! {r#"
        {"types": [{"name": "Deep", "struct": [
            {"name": "Nested", "type": "Map<str, Map<str, i64>>"}
        ]}]}
    "#};
    insta::assert_snapshot!(dump_plans(json, &["Deep"]), @r#"
    Deep
      literal "d6:nestedd"
      map     k0 in sorted(x.Nested)
        string  k0
        literal "d"
        map     k1 in sorted(x.Nested[k0])
          string  k1
          literal "i"
          int     x.Nested[k0][k1]
          literal "e"
        literal "e"
      literal "ee"
    "#);
}

#[test]
fn nested_lists_use_distinct_elements() {
    let json = r#"{"types": [{"name": "Grid", "type": "Vec<[bool; 2]>"}]}"#;
    insta::assert_snapshot!(dump_plans(json, &["Grid"]), @r#"
    Grid
      literal "l"
      for     i0 in x
        literal "l"
        for     i1 in i0
          literal "i"
          bool    i1
          literal "e"
        literal "e"
      literal "e"
    "#);
}

#[test]
fn aliases_unwrap_to_their_body() {
    let json = indoc! {r#"
        {"types": [
            {"name": "PeerId", "type": "str"},
            {"name": "Ttl", "type": "duration"},
            {"name": "Maybe", "type": "Option<i32>"}
        ]}
    "#};
    insta::assert_snapshot!(dump_plans(json, &["PeerId", "Ttl", "Maybe"]), @r#"
    Maybe
      literal "i"
      int     (*x)
      literal "e"

    PeerId
      string  x

    Ttl
      literal "i"
      int     x.seconds()
      literal "e"
    "#);
}

#[test]
fn native_short_circuits_structure() {
    let json = indoc! {r#"
        {"types": [
            {"name": "InfoHash", "type": "Vec<u8>", "native": true},
            {"name": "Meta", "struct": [
                {"name": "Hash", "type": "InfoHash", "tag": "info hash"},
                {"name": "Hashes", "type": "Vec<InfoHash>", "tag": "hashes,omitempty"}
            ]}
        ]}
    "#};
    insta::assert_snapshot!(dump_plans(json, &["Meta"]), @r#"
    Meta
      literal "d9:info hash"
      native  x.Hash
      if      len(x.Hashes) != 0
        literal "6:hashesl"
        for     i0 in x.Hashes
          native  i0
        literal "e"
      literal "e"
    "#);
}

#[test]
fn omitempty_on_every_emptiness_kind() {
    let json = indoc! {r#"
        {"types": [{"name": "Opt", "struct": [
            {"name": "A", "type": "bool", "tag": ",omitempty"},
            {"name": "B", "type": "Option<str>", "tag": ",omitempty"},
            {"name": "C", "type": "duration", "tag": ",omitempty"},
            {"name": "D", "type": "[u8; 4]", "tag": ",omitempty"}
        ]}]}
    "#};
    insta::assert_snapshot!(dump_plans(json, &["Opt"]), @r#"
    Opt
      literal "d"
      if      x.A
        literal "1:ai"
        bool    x.A
        literal "e"
      if      x.B != nil
        literal "1:b"
        string  (*x.B)
      if      x.C != 0
        literal "1:ci"
        int     x.C.seconds()
        literal "e"
      if      len(x.D) != 0
        literal "1:dl"
        for     i0 in x.D
          literal "i"
          int     i0
          literal "e"
        literal "e"
      literal "e"
    "#);
}

#[test]
fn unsupported_type_fails_whole_type() {
    let json = r#"{"types": [{"name": "Bad", "struct": [
        {"name": "Ok", "type": "str"},
        {"name": "Ratio", "type": "f64"}
    ]}]}"#;
    let output = generate(json, &["Bad"]);
    assert!(output.types.is_empty());
    assert_eq!(
        output.failures[0].error,
        CompileError::UnsupportedType { ty: "f64".into() }
    );
}

#[test]
fn map_keys_must_be_strings() {
    let json = r#"{"types": [{"name": "Scores", "type": "Map<i64, str>"}]}"#;
    let output = generate(json, &["Scores"]);
    assert_eq!(
        output.failures[0].error,
        CompileError::NonStringMapKey {
            map: "Map<i64, str>".into(),
            key: "i64".into(),
        }
    );
}

#[test]
fn omitempty_struct_is_rejected() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Peer", "struct": [{"name": "Ip", "type": "str"}]},
            {"name": "Holder", "struct": [{"name": "Peer", "type": "Peer", "tag": "peer,omitempty"}]}
        ]}
    "#};
    let output = generate(json, &["Holder"]);
    assert_eq!(
        output.failures[0].error,
        CompileError::OmitEmptyUnsupported {
            field: "Holder.Peer".into(),
            ty: "Peer".into(),
        }
    );
    insta::assert_snapshot!(output.diagnostics.render(), @"error: Holder: field `Holder.Peer` has omitempty but `Peer` has no empty value");
}

#[test]
fn value_errors_win_over_omitempty_errors() {
    let json = r#"{"types": [{"name": "Both", "struct": [
        {"name": "X", "type": "f32", "tag": ",omitempty"}
    ]}]}"#;
    let output = generate(json, &["Both"]);
    assert!(matches!(
        output.failures[0].error,
        CompileError::UnsupportedType { .. }
    ));
}

#[test]
fn recursive_types_are_rejected() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Node", "struct": [
                {"name": "Value", "type": "i64"},
                {"name": "Next", "type": "Option<Node>", "tag": "next,omitempty"}
            ]},
            {"name": "Tree", "type": "Vec<Tree>"}
        ]}
    "#};
    let output = generate(json, &["Node", "Tree"]);
    let errors: Vec<_> = output.failures.iter().map(|f| f.error.to_string()).collect();
    assert_eq!(errors, ["`Node` contains itself", "`Tree` contains itself"]);
}

#[test]
fn repeated_struct_is_not_recursion() {
    let json = indoc! {r#"
        {"types": [
            {"name": "Point", "struct": [{"name": "X", "type": "i32"}]},
            {"name": "Line", "struct": [
                {"name": "From", "type": "Point"},
                {"name": "To", "type": "Point"}
            ]}
        ]}
    "#};
    insta::assert_snapshot!(dump_plans(json, &["Line"]), @r#"
    Line
      literal "d4:fromd1:xi"
      int     x.From.X
      literal "ee2:tod1:xi"
      int     x.To.X
      literal "eee"
    "#);
}

#[test]
fn emptiness_follows_underlying_type() {
    let schema = schema(indoc! {r#"
        {"types": [
            {"name": "Name", "type": "str"},
            {"name": "Blob", "native": true},
            {"name": "Wrapped", "type": "Vec<u8>", "native": true},
            {"name": "S", "struct": []}
        ]}
    "#});
    let table: &TypeTable = schema.table();
    let test = |name: &str| emptiness_test(table, schema.lookup(name).unwrap());

    assert_eq!(test("Name"), Some(EmptinessTest::Len));
    assert_eq!(test("Wrapped"), Some(EmptinessTest::Len));
    assert_eq!(test("Blob"), None);
    assert_eq!(test("S"), None);
    assert!(matches!(
        table.get(table.underlying(schema.lookup("S").unwrap())),
        TypeDesc::Struct(_)
    ));
}
