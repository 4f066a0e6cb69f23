use thiserror::Error;

/// Failures of the explicit compile calls.
///
/// Malformed markers in free-form fragments and unrecognized type text are
/// not errors; they never reach this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    #[error("invalid attribute path {0:?}: a dynamic attribute must name at least one non-empty segment")]
    InvalidPath(String),

    #[error("unknown dynamic attribute {attribute:?} on {entity}: no dynamic column is available")]
    UnknownAttribute { entity: String, attribute: String },

    #[error("unsupported value for dynamic attribute {path:?}: {reason}")]
    UnsupportedValue { path: String, reason: String },

    #[error("invalid dynamic column dump: {0}")]
    InvalidDump(String),
}

impl CompileError {
    pub fn err<T>(self) -> Result<T, CompileError> {
        Err(self)
    }
}
