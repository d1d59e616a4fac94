//! The driver-facing side of binding.
//!
//! A [`Statement`] is a prepared, parameterized command with ordinally addressed slots.
//! Binders never execute anything; they pick exactly one of these calls per value and
//! leave type acceptability to the driver behind it.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::value::{BindValue, SqlType};

/// Error raised by the driver behind a [`Statement`]. Surfaces unchanged as
/// [`crate::BindError::BindFailed`].
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Parameter-binding surface of a prepared statement. Positions are 1-based.
///
/// Implementations must not be shared between threads while binding; the caller owns the
/// statement and serializes access to it.
pub trait Statement {
    fn set_null(&mut self, position: usize) -> Result<(), DriverError>;

    fn set_text(&mut self, position: usize, value: &str) -> Result<(), DriverError>;

    fn set_int(&mut self, position: usize, value: i64) -> Result<(), DriverError>;

    fn set_date(&mut self, position: usize, value: NaiveDate) -> Result<(), DriverError>;

    fn set_timestamp(&mut self, position: usize, value: NaiveDateTime) -> Result<(), DriverError>;

    fn set_time(&mut self, position: usize, value: NaiveTime) -> Result<(), DriverError>;

    fn set_decimal(&mut self, position: usize, value: &BigDecimal) -> Result<(), DriverError>;

    /// Opaque binding; the driver infers the parameter type on its own.
    fn set_generic(&mut self, position: usize, value: &BindValue) -> Result<(), DriverError>;

    /// Opaque binding with an explicit driver type hint.
    fn set_generic_typed(
        &mut self,
        position: usize,
        value: &BindValue,
        hint: SqlType,
    ) -> Result<(), DriverError>;

    /// Declared type of the parameter at `position`, when the driver exposes parameter
    /// metadata.
    ///
    /// # Errors
    ///
    /// Returns the driver's error when the metadata cannot be read.
    fn parameter_type(&self, _position: usize) -> Result<Option<SqlType>, DriverError> {
        Ok(None)
    }
}
