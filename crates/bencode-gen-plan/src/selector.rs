//! Selectors: access paths from the value being encoded.
//!
//! Loop variables are numbered by nesting depth, so a map inside a map binds
//! `k0` and then `k1` and neither shadows the other.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The value being encoded.
    Root,
    Field(Box<Selector>, String),
    /// Follow a possibly-absent reference.
    Deref(Box<Selector>),
    /// Whole seconds of a duration.
    Seconds(Box<Selector>),
    /// Current element of the list loop at this depth.
    Elem(u16),
    /// Current key of the map loop at this depth.
    Key(u16),
    /// Map value indexed by the key bound at this depth.
    Value(Box<Selector>, u16),
}

impl Selector {
    pub fn field(self, name: impl Into<String>) -> Self {
        Selector::Field(Box::new(self), name.into())
    }

    pub fn deref(self) -> Self {
        Selector::Deref(Box::new(self))
    }

    pub fn seconds(self) -> Self {
        Selector::Seconds(Box::new(self))
    }

    pub fn value(self, depth: u16) -> Self {
        Selector::Value(Box::new(self), depth)
    }

    /// Loop variable this selector names directly, if any.
    pub fn binding(&self) -> Option<String> {
        match self {
            Selector::Elem(depth) => Some(format!("i{depth}")),
            Selector::Key(depth) => Some(format!("k{depth}")),
            _ => None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Root => f.write_str("x"),
            Selector::Field(base, name) => write!(f, "{base}.{name}"),
            Selector::Deref(base) => write!(f, "(*{base})"),
            Selector::Seconds(base) => write!(f, "{base}.seconds()"),
            Selector::Elem(depth) => write!(f, "i{depth}"),
            Selector::Key(depth) => write!(f, "k{depth}"),
            Selector::Value(base, depth) => write!(f, "{base}[k{depth}]"),
        }
    }
}
