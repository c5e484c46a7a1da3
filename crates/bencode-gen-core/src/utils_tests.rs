use super::utils::*;

#[test]
fn output_name_splits_lower_upper_boundaries() {
    assert_eq!(derive_output_name("Name"), "name");
    assert_eq!(derive_output_name("CreationDate"), "creation date");
    assert_eq!(derive_output_name("PieceLength"), "piece length");
    assert_eq!(derive_output_name("createdBy"), "created by");
}

#[test]
fn output_name_keeps_acronyms_together() {
    assert_eq!(derive_output_name("URLList"), "urllist");
    assert_eq!(derive_output_name("InfoHash2"), "info hash2");
    assert_eq!(derive_output_name("ID"), "id");
}

#[test]
fn output_name_only_splits_after_lowercase() {
    assert_eq!(derive_output_name("a1B"), "a1b");
    assert_eq!(derive_output_name("_Private"), "_private");
    assert_eq!(derive_output_name("already spaced"), "already spaced");
}

#[test]
fn encode_key_counts_bytes() {
    assert_eq!(encode_key("name"), b"4:name");
    assert_eq!(encode_key(""), b"0:");
    assert_eq!(encode_key("é"), "2:é".as_bytes());
}

#[test]
fn escape_bytes_handles_quotes_and_binary() {
    assert_eq!(escape_bytes(b"d4:name"), "d4:name");
    assert_eq!(escape_bytes(b"a\"b\\c"), "a\\\"b\\\\c");
    assert_eq!(escape_bytes(&[0x00, 0xff, b'\n']), "\\0\\xff\\n");
}

#[test]
fn identifiers() {
    assert!(is_identifier("Torrent"));
    assert!(is_identifier("_raw"));
    assert!(is_identifier("piece_length2"));
    assert!(!is_identifier("_"));
    assert!(!is_identifier("2fast"));
    assert!(!is_identifier("with space"));
    assert!(!is_identifier(""));
}
