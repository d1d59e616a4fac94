//! An in-memory [`Statement`] that records bind calls, for testing binders and
//! configurations without a database.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::statement::{DriverError, Statement};
use crate::value::{BindValue, SqlType};

/// One driver call observed by a [`RecordingStatement`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoundCall {
    Null,
    Text(String),
    Int(i64),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Time(NaiveTime),
    Decimal(BigDecimal),
    Generic(BindValue),
    GenericTyped(BindValue, SqlType),
}

/// Error returned by a [`RecordingStatement`] told to reject binds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RejectedBind(pub String);

#[derive(Debug, Default)]
pub struct RecordingStatement {
    calls: Vec<(usize, BoundCall)>,
    parameter_types: BTreeMap<usize, SqlType>,
    reject_with: Option<String>,
    metadata_error: bool,
}

impl RecordingStatement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every bind call fails with `message`.
    #[must_use]
    pub fn failing(mut self, message: &str) -> Self {
        self.reject_with = Some(message.to_owned());
        self
    }

    /// Report `sql_type` as the metadata of the parameter at `position`.
    #[must_use]
    pub fn with_parameter_type(mut self, position: usize, sql_type: SqlType) -> Self {
        self.parameter_types.insert(position, sql_type);
        self
    }

    /// Reading parameter metadata fails.
    #[must_use]
    pub fn failing_metadata(mut self) -> Self {
        self.metadata_error = true;
        self
    }

    /// Calls in the order they were made, with their positions.
    #[must_use]
    pub fn calls(&self) -> &[(usize, BoundCall)] {
        &self.calls
    }

    /// The most recent call made at `position`.
    #[must_use]
    pub fn call_at(&self, position: usize) -> Option<&BoundCall> {
        self.calls
            .iter()
            .rev()
            .find(|(p, _)| *p == position)
            .map(|(_, call)| call)
    }

    fn record(&mut self, position: usize, call: BoundCall) -> Result<(), DriverError> {
        if let Some(message) = &self.reject_with {
            return Err(Box::new(RejectedBind(message.clone())));
        }
        self.calls.push((position, call));
        Ok(())
    }
}

impl Statement for RecordingStatement {
    fn set_null(&mut self, position: usize) -> Result<(), DriverError> {
        self.record(position, BoundCall::Null)
    }

    fn set_text(&mut self, position: usize, value: &str) -> Result<(), DriverError> {
        self.record(position, BoundCall::Text(value.to_owned()))
    }

    fn set_int(&mut self, position: usize, value: i64) -> Result<(), DriverError> {
        self.record(position, BoundCall::Int(value))
    }

    fn set_date(&mut self, position: usize, value: NaiveDate) -> Result<(), DriverError> {
        self.record(position, BoundCall::Date(value))
    }

    fn set_timestamp(&mut self, position: usize, value: NaiveDateTime) -> Result<(), DriverError> {
        self.record(position, BoundCall::Timestamp(value))
    }

    fn set_time(&mut self, position: usize, value: NaiveTime) -> Result<(), DriverError> {
        self.record(position, BoundCall::Time(value))
    }

    fn set_decimal(&mut self, position: usize, value: &BigDecimal) -> Result<(), DriverError> {
        self.record(position, BoundCall::Decimal(value.clone()))
    }

    fn set_generic(&mut self, position: usize, value: &BindValue) -> Result<(), DriverError> {
        self.record(position, BoundCall::Generic(value.clone()))
    }

    fn set_generic_typed(
        &mut self,
        position: usize,
        value: &BindValue,
        hint: SqlType,
    ) -> Result<(), DriverError> {
        self.record(position, BoundCall::GenericTyped(value.clone(), hint))
    }

    fn parameter_type(&self, position: usize) -> Result<Option<SqlType>, DriverError> {
        if self.metadata_error {
            return Err(Box::new(RejectedBind(
                "parameter metadata unavailable".to_owned(),
            )));
        }
        Ok(self.parameter_types.get(&position).copied())
    }
}
