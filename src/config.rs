use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binders::{self, Binder, BinderKind, StandardBinder};
use crate::error::BindError;
use crate::statement::Statement;
use crate::value::SqlType;

/// Chooses the binder for a parameter when the caller has not picked one.
pub trait BinderConfiguration: Send + Sync {
    fn binder_for(&self, stmt: &dyn Statement, position: usize) -> &dyn Binder;
}

/// Picks a binder from the parameter's declared type, when the driver reports one.
///
/// Missing or unreadable metadata selects the default binder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultBinderConfiguration;

impl DefaultBinderConfiguration {
    pub const INSTANCE: DefaultBinderConfiguration = DefaultBinderConfiguration;

    #[must_use]
    pub fn binder_for_type(sql_type: Option<SqlType>) -> &'static StandardBinder {
        let Some(sql_type) = sql_type else {
            return binders::default_binder();
        };
        match sql_type {
            t if t.is_character() => binders::string_binder(),
            SqlType::Date => binders::date_binder(),
            SqlType::Time => binders::time_binder(),
            SqlType::Timestamp => binders::timestamp_binder(),
            t if t.is_integral() => binders::integer_binder(),
            SqlType::Decimal | SqlType::Numeric => binders::decimal_binder(),
            _ => binders::default_binder(),
        }
    }
}

impl BinderConfiguration for DefaultBinderConfiguration {
    fn binder_for(&self, stmt: &dyn Statement, position: usize) -> &dyn Binder {
        match stmt.parameter_type(position) {
            Ok(sql_type) => Self::binder_for_type(sql_type),
            Err(err) => {
                debug!(
                    position,
                    error = %err,
                    "parameter metadata unreadable, using default binder"
                );
                binders::default_binder()
            }
        }
    }
}

/// Per-column binder choices that take precedence over a [`BinderConfiguration`].
///
/// Column names match case-insensitively: they are stored lowercased however they were
/// inserted or deserialized. The serialized form is
/// `{"columns": {"born": "date", "status": "integer"}}`.
///
/// ```rust
/// use sql_binders::prelude::*;
///
/// let overrides = ColumnBinders::new()
///     .with(BinderKind::Date, &["born", "died"])
///     .with(BinderKind::String, &["status"]);
/// assert_eq!(overrides.get("BORN"), Some(BinderKind::Date));
/// assert_eq!(overrides.get("name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawColumnBinders")]
pub struct ColumnBinders {
    columns: BTreeMap<String, BinderKind>,
}

/// Column names as written in the source document.
#[derive(Deserialize)]
struct RawColumnBinders {
    #[serde(default)]
    columns: BTreeMap<String, BinderKind>,
}

impl From<RawColumnBinders> for ColumnBinders {
    fn from(raw: RawColumnBinders) -> Self {
        let mut overrides = ColumnBinders::new();
        for (column, kind) in raw.columns {
            overrides.insert(&column, kind);
        }
        overrides
    }
}

impl ColumnBinders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `kind` for every column in `columns`.
    #[must_use]
    pub fn with(mut self, kind: BinderKind, columns: &[&str]) -> Self {
        for column in columns {
            self.insert(column, kind);
        }
        self
    }

    pub fn insert(&mut self, column: &str, kind: BinderKind) {
        self.columns.insert(column.to_ascii_lowercase(), kind);
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<BinderKind> {
        self.columns.get(&column.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Load overrides from their JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Config`] if the JSON is malformed or names an unknown binder.
    pub fn from_json(json: &str) -> Result<Self, BindError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize overrides to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, BindError> {
        Ok(serde_json::to_string(self)?)
    }
}
