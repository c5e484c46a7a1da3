use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Errors that abort compilation of one type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("cannot encode `{ty}`")]
    UnsupportedType { ty: String },

    #[error("map keys must be strings, found `{key}` in `{map}`")]
    NonStringMapKey { map: String, key: String },

    #[error("field `{field}` has omitempty but `{ty}` has no empty value")]
    OmitEmptyUnsupported { field: String, ty: String },

    #[error("`{ty}` contains itself")]
    RecursiveType { ty: String },
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;

impl CompileError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            CompileError::UnsupportedType { .. } => DiagnosticKind::UnsupportedType,
            CompileError::NonStringMapKey { .. } => DiagnosticKind::NonStringMapKey,
            CompileError::OmitEmptyUnsupported { .. } => DiagnosticKind::OmitEmptyUnsupported,
            CompileError::RecursiveType { .. } => DiagnosticKind::RecursiveType,
        }
    }

    /// Record the failure of type `name` as an error diagnostic.
    pub fn report(&self, name: &str, diagnostics: &mut Diagnostics) {
        diagnostics
            .report(self.kind(), name)
            .message(self.to_string())
            .emit();
    }
}
