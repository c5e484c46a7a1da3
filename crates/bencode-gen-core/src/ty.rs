//! Type descriptor model.
//!
//! Descriptors are immutable once built and live in a [`TypeTable`] arena.
//! Structural types (pointers, sequences, maps, struct bodies) are interned,
//! so two structurally identical types share one [`TypeId`]. Declared types
//! are unique per declaration and may be created before their body is known,
//! which lets declarations refer to each other in any order.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

/// Index of a descriptor in its [`TypeTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntKind {
    const ALL: [(&'static str, IntKind); 10] = [
        ("i8", IntKind::I8),
        ("i16", IntKind::I16),
        ("i32", IntKind::I32),
        ("i64", IntKind::I64),
        ("isize", IntKind::Isize),
        ("u8", IntKind::U8),
        ("u16", IntKind::U16),
        ("u32", IntKind::U32),
        ("u64", IntKind::U64),
        ("usize", IntKind::Usize),
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(n, _)| *n)
            .unwrap_or("int")
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64 | IntKind::Isize
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int(IntKind),
    /// Accepted by the schema, rejected by the compiler.
    Float(FloatKind),
    Str,
}

impl ScalarKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(ScalarKind::Bool),
            "str" => Some(ScalarKind::Str),
            "f32" => Some(ScalarKind::Float(FloatKind::F32)),
            "f64" => Some(ScalarKind::Float(FloatKind::F64)),
            _ => IntKind::from_name(name).map(ScalarKind::Int),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Str => "str",
            ScalarKind::Float(FloatKind::F32) => "f32",
            ScalarKind::Float(FloatKind::F64) => "f64",
            ScalarKind::Int(kind) => kind.name(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Slice,
    Array(usize),
}

/// A field of a struct body, as declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDesc {
    pub name: String,
    pub ty: TypeId,
    /// Raw tag text; parsed later by the field collector.
    pub tag: Option<String>,
    pub embedded: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedDesc {
    pub name: String,
    /// `None` until defined; stays `None` for opaque native types.
    pub body: Option<TypeId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    Scalar(ScalarKind),
    /// The standard duration type. Encoded as whole seconds.
    Duration,
    /// Possibly-absent reference.
    Pointer(TypeId),
    Struct(Vec<FieldDesc>),
    Sequence {
        elem: TypeId,
        kind: SeqKind,
    },
    Mapping {
        key: TypeId,
        value: TypeId,
    },
    Named(NamedDesc),
    /// Declared type that writes its own encoding.
    Native(NamedDesc),
}

impl TypeDesc {
    pub fn is_declared(&self) -> bool {
        matches!(self, TypeDesc::Named(_) | TypeDesc::Native(_))
    }

    pub fn declared(&self) -> Option<&NamedDesc> {
        match self {
            TypeDesc::Named(named) | TypeDesc::Native(named) => Some(named),
            _ => None,
        }
    }
}

/// Arena of type descriptors.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: Vec<TypeDesc>,
    interned: HashMap<TypeDesc, TypeId>,
    /// Declared names in declaration order.
    names: IndexMap<String, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn push(&mut self, desc: TypeDesc) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(desc);
        id
    }

    /// Return the id of a structural type, adding it if not seen before.
    pub fn intern(&mut self, desc: TypeDesc) -> TypeId {
        if let Some(&id) = self.interned.get(&desc) {
            return id;
        }
        let id = self.push(desc.clone());
        self.interned.insert(desc, id);
        id
    }

    /// Create a declared type without a body. Returns `None` if the name is taken.
    pub fn declare(&mut self, name: &str, native: bool) -> Option<TypeId> {
        if self.names.contains_key(name) {
            return None;
        }
        let named = NamedDesc {
            name: name.to_string(),
            body: None,
        };
        let id = self.push(if native {
            TypeDesc::Native(named)
        } else {
            TypeDesc::Named(named)
        });
        self.names.insert(name.to_string(), id);
        Some(id)
    }

    /// Attach a body to a declared type. Returns false if `id` is not declared.
    pub fn define(&mut self, id: TypeId, body: TypeId) -> bool {
        match &mut self.types[id.index()] {
            TypeDesc::Named(named) | TypeDesc::Native(named) => {
                named.body = Some(body);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: TypeId) -> &TypeDesc {
        &self.types[id.index()]
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Declared types in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn name_of(&self, id: TypeId) -> Option<&str> {
        self.get(id).declared().map(|named| named.name.as_str())
    }

    pub fn is_native(&self, id: TypeId) -> bool {
        matches!(self.get(id), TypeDesc::Native(_))
    }

    pub fn is_duration(&self, id: TypeId) -> bool {
        matches!(self.get(id), TypeDesc::Duration)
    }

    /// Resolve a declared type to the structural type it is built on.
    ///
    /// Non-declared types and opaque native types are their own underlying
    /// type. Alias chains are followed to the end.
    pub fn underlying(&self, id: TypeId) -> TypeId {
        let mut current = id;
        // A chain can't be longer than the table without a cycle.
        for _ in 0..=self.types.len() {
            match self.get(current).declared() {
                Some(NamedDesc {
                    body: Some(body), ..
                }) => current = *body,
                _ => return current,
            }
        }
        current
    }

    pub fn display(&self, id: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { table: self, id }
    }
}

/// Renders a type in schema type-expression syntax.
pub struct TypeDisplay<'a> {
    table: &'a TypeTable,
    id: TypeId,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |id| self.table.display(id);
        match self.table.get(self.id) {
            TypeDesc::Scalar(kind) => f.write_str(kind.name()),
            TypeDesc::Duration => f.write_str("duration"),
            TypeDesc::Pointer(inner) => write!(f, "Option<{}>", show(*inner)),
            TypeDesc::Struct(fields) => {
                f.write_str("struct {")?;
                for (i, field) in fields.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}{}: {}", field.name, show(field.ty))?;
                }
                f.write_str(if fields.is_empty() { "}" } else { " }" })
            }
            TypeDesc::Sequence {
                elem,
                kind: SeqKind::Slice,
            } => write!(f, "Vec<{}>", show(*elem)),
            TypeDesc::Sequence {
                elem,
                kind: SeqKind::Array(len),
            } => write!(f, "[{}; {len}]", show(*elem)),
            TypeDesc::Mapping { key, value } => {
                write!(f, "Map<{}, {}>", show(*key), show(*value))
            }
            TypeDesc::Named(named) | TypeDesc::Native(named) => f.write_str(&named.name),
        }
    }
}
