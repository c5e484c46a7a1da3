use indoc::indoc;

use crate::schema::parse_schema;

#[test]
fn parses_struct_and_alias_declarations() {
    let schema = parse_schema(indoc! {r#"
        {
            "module": "torrent::meta",
            "types": [
                {
                    "name": "Torrent",
                    "struct": [
                        {"name": "Announce", "type": "str"},
                        {"name": "Comment", "type": "str", "tag": "comment,omitempty"},
                        {"name": "Info", "type": "Info", "embedded": true}
                    ]
                },
                {"name": "PeerId", "type": "str"},
                {"name": "Signature", "native": true}
            ]
        }
    "#})
    .unwrap();

    assert_eq!(schema.module.as_deref(), Some("torrent::meta"));
    assert_eq!(schema.types.len(), 3);

    let torrent = schema.find("Torrent").unwrap();
    let fields = torrent.fields.as_ref().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].tag, None);
    assert_eq!(fields[1].tag.as_deref(), Some("comment,omitempty"));
    assert!(fields[2].embedded);
    assert!(!torrent.native);

    let peer_id = schema.find("PeerId").unwrap();
    assert_eq!(peer_id.body.as_deref(), Some("str"));
    assert!(peer_id.fields.is_none());

    let signature = schema.find("Signature").unwrap();
    assert!(signature.native);
    assert!(signature.body.is_none() && signature.fields.is_none());
}

#[test]
fn empty_document_has_no_types() {
    let schema = parse_schema("{}").unwrap();
    assert!(schema.module.is_none());
    assert!(schema.types.is_empty());
}

#[test]
fn rejects_unknown_keys() {
    let err = parse_schema(r#"{"types": [{"name": "A", "struct": [], "extra": 1}]}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `extra`"));
}

#[test]
fn rejects_field_without_type() {
    let err = parse_schema(r#"{"types": [{"name": "A", "struct": [{"name": "X"}]}]}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `type`"));
}
