//! Column-aware binding of loosely typed values into prepared-statement parameters.
//!
//! Fixture and seed-data code tends to write every value the easy way (dates as
//! `"2023-06-15"`, amounts as `"3.14"`, enum variants as themselves) and leave it to the
//! binding layer to turn them into what the column expects. A [`Binder`] is that layer for
//! one kind of column: it inspects the [`BindValue`] it is given, coerces the shapes it
//! knows, and hands anything else to the driver's generic binding.
//!
//! ```rust
//! use sql_binders::prelude::*;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = sql_binders::rusqlite::Connection::open_in_memory()?;
//! conn.execute_batch("CREATE TABLE person (name TEXT, born TEXT)")?;
//!
//! let mut stmt = conn.prepare("INSERT INTO person (name, born) VALUES (?1, ?2)")?;
//! binders::string_binder().bind(&mut stmt, 1, &BindValue::from("Ada"))?;
//! binders::date_binder().bind(&mut stmt, 2, &BindValue::from("1815-12-10"))?;
//! stmt.raw_execute()?;
//! # Ok(())
//! # }
//! ```

pub mod binders;
pub mod config;
pub mod error;
pub mod literal;
pub mod prelude;
pub mod row;
pub mod statement;
pub mod value;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use binders::{Binder, BinderKind, StandardBinder};
pub use config::{BinderConfiguration, ColumnBinders, DefaultBinderConfiguration};
pub use error::BindError;
pub use row::bind_row;
pub use statement::{DriverError, Statement};
pub use value::{BindValue, EnumValue, SqlEnum, SqlType};

#[cfg(feature = "sqlite")]
pub use rusqlite;
