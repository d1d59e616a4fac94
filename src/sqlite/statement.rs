use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::Null;
use tracing::trace;

use super::params::bind_value_to_sqlite_value;
use crate::statement::{DriverError, Statement};
use crate::value::{BindValue, SqlType};

/// Binds through `raw_bind_parameter`; run the statement afterwards with `raw_execute` or
/// `raw_query`.
impl Statement for rusqlite::Statement<'_> {
    fn set_null(&mut self, position: usize) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, Null)?;
        Ok(())
    }

    fn set_text(&mut self, position: usize, value: &str) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, value)?;
        Ok(())
    }

    fn set_int(&mut self, position: usize, value: i64) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, value)?;
        Ok(())
    }

    fn set_date(&mut self, position: usize, value: NaiveDate) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, value)?;
        Ok(())
    }

    fn set_timestamp(&mut self, position: usize, value: NaiveDateTime) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, value)?;
        Ok(())
    }

    fn set_time(&mut self, position: usize, value: NaiveTime) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, value)?;
        Ok(())
    }

    fn set_decimal(&mut self, position: usize, value: &BigDecimal) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, value.to_string())?;
        Ok(())
    }

    fn set_generic(&mut self, position: usize, value: &BindValue) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, bind_value_to_sqlite_value(value)?)?;
        Ok(())
    }

    // SQLite columns are dynamically typed; the hint does not change the stored value.
    fn set_generic_typed(
        &mut self,
        position: usize,
        value: &BindValue,
        hint: SqlType,
    ) -> Result<(), DriverError> {
        trace!(position, ?hint, "sqlite ignores binding type hints");
        self.set_generic(position, value)
    }
}
