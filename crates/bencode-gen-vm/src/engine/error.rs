//! Errors that can occur while executing a plan.

/// Value and plan disagree about the shape of the data.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("`{selector}`: expected {expected}, found {found}")]
    TypeMismatch {
        selector: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{selector}`: no field `{field}`")]
    MissingField { selector: String, field: String },

    #[error("`{selector}`: cannot encode an absent value")]
    NilDereference { selector: String },

    /// A selector names a loop variable outside its loop.
    #[error("loop variable `{name}` is not bound")]
    UnboundVariable { name: String },

    #[error("`{selector}`: key is not in the map")]
    MissingKey { selector: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
