use super::tag::{Tag, parse_tag};

fn named(name: &str, omit_empty: bool) -> Tag {
    Tag {
        name: Some(name.to_string()),
        omit_empty,
    }
}

#[test]
fn name_only() {
    assert_eq!(parse_tag("announce").unwrap(), named("announce", false));
    assert_eq!(parse_tag("piece length").unwrap(), named("piece length", false));
}

#[test]
fn omitempty_option() {
    assert_eq!(parse_tag("comment,omitempty").unwrap(), named("comment", true));
    assert_eq!(
        parse_tag("a,omitempty,omitempty").unwrap(),
        named("a", true)
    );
}

#[test]
fn empty_name_falls_back() {
    assert_eq!(parse_tag("").unwrap(), Tag::default());
    assert_eq!(
        parse_tag(",omitempty").unwrap(),
        Tag {
            name: None,
            omit_empty: true,
        }
    );
}

#[test]
fn unknown_option() {
    let err = parse_tag("count,omitempt").unwrap_err();
    assert_eq!(err.message, "unknown option `omitempt`");
    assert_eq!(err.range, 6..14);
}

#[test]
fn empty_option() {
    let err = parse_tag("count,").unwrap_err();
    assert_eq!(err.message, "empty option");
    assert_eq!(err.range, 5..6);

    let err = parse_tag("a,omitempty,").unwrap_err();
    assert_eq!(err.range, 11..12);
}

#[test]
fn control_characters_and_quotes() {
    let err = parse_tag("na\"me").unwrap_err();
    assert!(err.message.starts_with("unexpected character"));
    assert_eq!(err.range, 2..3);

    let err = parse_tag("a\tb").unwrap_err();
    assert_eq!(err.range, 1..2);
}
