use thiserror::Error;

use crate::binders::BinderKind;
use crate::statement::DriverError;

#[derive(Debug, Error)]
pub enum BindError {
    /// Textual input that does not match the target literal grammar.
    #[error("malformed {kind} literal {text:?}: {reason}")]
    MalformedLiteral {
        kind: BinderKind,
        text: String,
        reason: String,
    },

    /// The driver rejected the bind call; the driver's error is kept as-is.
    #[error(transparent)]
    BindFailed(#[from] DriverError),

    #[error("row has {columns} columns but {values} values")]
    ColumnCountMismatch { columns: usize, values: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BindError {
    pub(crate) fn malformed(kind: BinderKind, text: &str, reason: impl Into<String>) -> Self {
        BindError::MalformedLiteral {
            kind,
            text: text.to_owned(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_malformed_literal(&self) -> bool {
        matches!(self, Self::MalformedLiteral { .. })
    }

    #[must_use]
    pub fn is_bind_failed(&self) -> bool {
        matches!(self, Self::BindFailed(_))
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for BindError {
    fn from(err: rusqlite::Error) -> Self {
        BindError::BindFailed(Box::new(err))
    }
}

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        BindError::Config(format!("invalid column binder overrides: {err}"))
    }
}
