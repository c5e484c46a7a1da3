/// Derive the dictionary key for a field from its declared name.
///
/// A space goes between every lowercase letter and the uppercase letter that
/// follows it, then the whole name is lowercased. Runs of capitals stay
/// together, so acronyms survive as one word.
///
/// # Examples
/// ```
/// use bencode_gen_core::utils::derive_output_name;
/// assert_eq!(derive_output_name("CreationDate"), "creation date");
/// assert_eq!(derive_output_name("URLList"), "urllist");
/// assert_eq!(derive_output_name("pieceLength"), "piece length");
/// ```
pub fn derive_output_name(declared: &str) -> String {
    let mut result = String::with_capacity(declared.len() + 4);
    let mut prev_lower = false;
    for c in declared.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push(' ');
        }
        prev_lower = c.is_ascii_lowercase();
        result.extend(c.to_lowercase());
    }
    result
}

/// Encode a dictionary key the way it appears on the wire: `<len>:<bytes>`.
///
/// The length counts bytes, not characters.
pub fn encode_key(name: &str) -> Vec<u8> {
    let mut out = format!("{}:", name.len()).into_bytes();
    out.extend_from_slice(name.as_bytes());
    out
}

/// Escape bytes for a double-quoted literal.
///
/// The result is valid inside both a Rust byte string (`b"..."`) and the
/// plan dump. Printable ASCII passes through, everything else is `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'\0' => out.push_str("\\0"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out
}

/// Check that `name` is usable as a Rust identifier in generated code.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
