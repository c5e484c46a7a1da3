//! Runtime support for generated encoders.
//!
//! Generated code calls these helpers directly. The reference VM uses the
//! same functions so both paths produce identical bytes.

use std::fmt::Display;
use std::io::{self, Write};

/// A value that knows how to write its own bencode representation.
///
/// Implemented by generated code for every selected type, and by hand for
/// types declared `native` in the schema.
pub trait Bencode {
    fn write_bencode(&self, w: &mut dyn Write) -> io::Result<()>;
}

impl<T: Bencode + ?Sized> Bencode for &T {
    fn write_bencode(&self, w: &mut dyn Write) -> io::Result<()> {
        (**self).write_bencode(w)
    }
}

impl<T: Bencode + ?Sized> Bencode for Box<T> {
    fn write_bencode(&self, w: &mut dyn Write) -> io::Result<()> {
        (**self).write_bencode(w)
    }
}

/// Encode a value as a byte vector.
pub fn to_bytes<T: Bencode + ?Sized>(value: &T) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    value.write_bencode(&mut out)?;
    Ok(out)
}

/// Write the canonical decimal form of an integer (no `i`/`e` framing).
pub fn write_int(w: &mut dyn Write, n: impl Display) -> io::Result<()> {
    write!(w, "{n}")
}

/// Write a length-prefixed byte string: `<len>:<bytes>`.
pub fn write_string(w: &mut dyn Write, s: impl AsRef<[u8]>) -> io::Result<()> {
    let bytes = s.as_ref();
    write!(w, "{}:", bytes.len())?;
    w.write_all(bytes)
}

pub fn write_bool(w: &mut dyn Write, b: bool) -> io::Result<()> {
    w.write_all(if b { b"1" } else { b"0" })
}

/// Follow an optional reference, failing on an absent value.
pub fn deref<T>(value: &Option<T>) -> io::Result<&T> {
    value.as_ref().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            "cannot encode an absent value without omitempty",
        )
    })
}

/// Collect map keys in ascending byte order.
pub fn sorted_keys<'a, K, I>(keys: I) -> Vec<&'a K>
where
    K: AsRef<[u8]> + ?Sized + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut keys: Vec<&K> = keys.into_iter().collect();
    keys.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
    keys
}
