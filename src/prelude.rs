//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::binders::{self, Binder, BinderKind, StandardBinder};
pub use crate::config::{BinderConfiguration, ColumnBinders, DefaultBinderConfiguration};
pub use crate::error::BindError;
pub use crate::row::bind_row;
pub use crate::statement::{DriverError, Statement};
pub use crate::value::{BindValue, EnumValue, SqlEnum, SqlType};

#[cfg(feature = "sqlite")]
pub use crate::sqlite::bind_value_to_sqlite_value;
