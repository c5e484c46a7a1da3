use std::ops::Range;

/// Diagnostic kinds, errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Schema lowering
    DuplicateType,
    DuplicateField,
    InvalidName,
    InvalidDeclaration,
    MalformedTypeExpr,
    UnknownType,
    AliasCycle,

    // Plan compilation
    UnsupportedType,
    NonStringMapKey,
    OmitEmptyUnsupported,
    RecursiveType,

    // Field collection and selection
    MalformedTag,
    TagOnEmbeddedField,
    UnsupportedEmbedding,
    UnknownRequestedType,
    NonStructRoot,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MalformedTag
            | Self::TagOnEmbeddedField
            | Self::UnsupportedEmbedding
            | Self::UnknownRequestedType
            | Self::NonStructRoot => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::DuplicateType => "duplicate type declaration",
            Self::DuplicateField => "duplicate field",
            Self::InvalidName => "invalid name",
            Self::InvalidDeclaration => "invalid declaration",
            Self::MalformedTypeExpr => "malformed type expression",
            Self::UnknownType => "unknown type",
            Self::AliasCycle => "type alias cycle",

            Self::UnsupportedType => "unsupported type",
            Self::NonStringMapKey => "map keys must be strings",
            Self::OmitEmptyUnsupported => "omitempty has no empty value to test",
            Self::RecursiveType => "recursive type",

            Self::MalformedTag => "malformed tag",
            Self::TagOnEmbeddedField => "tag on embedded field is ignored",
            Self::UnsupportedEmbedding => "unsupported embedding",
            Self::UnknownRequestedType => "requested type is not declared",
            Self::NonStructRoot => "requested type is not a struct",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateType => "`{}` is already declared".to_string(),
            Self::DuplicateField => "field `{}` is declared twice".to_string(),
            Self::InvalidName => "`{}` is not a valid name".to_string(),
            Self::UnknownType => "`{}` is not declared".to_string(),
            // Compile errors carry their own full message.
            Self::UnsupportedType
            | Self::NonStringMapKey
            | Self::OmitEmptyUnsupported
            | Self::RecursiveType => "{}".to_string(),
            Self::UnknownRequestedType => "`{}` is not declared in the schema".to_string(),
            Self::NonStructRoot => "`{}` is not a struct and cannot have its own encoder".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Schema text a diagnostic points into: a tag or a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSnippet {
    pub(crate) source: String,
    pub(crate) range: Range<usize>,
    pub(crate) label: String,
}

impl SourceSnippet {
    pub fn new(source: impl Into<String>, range: Range<usize>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            range,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Where in the schema: `Type`, `Type.Field`, or `schema`.
    pub(crate) location: String,
    pub(crate) message: String,
    pub(crate) snippet: Option<SourceSnippet>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, location: String) -> Self {
        Self {
            kind,
            location,
            message: kind.fallback_message().to_string(),
            snippet: None,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// Message with its location prefix, as shown to users.
    pub fn headline(&self) -> String {
        format!("{}: {}", self.location, self.message)
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.headline())
    }
}
