//! The binder strategies and their registry.
//!
//! Each [`BinderKind`] has exactly one [`StandardBinder`], living in a `static` for the life of
//! the process. Binders hold no state, so the same instance may be used from any number of
//! threads at once; only the [`Statement`] passed to [`Binder::bind`] is mutated.
//!
//! ```rust
//! use sql_binders::prelude::*;
//!
//! let binder = binders::date_binder();
//! assert!(std::ptr::eq(binder, BinderKind::Date.binder()));
//! assert_eq!(binder.name(), "binders::date");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::BindError;
use crate::literal;
use crate::statement::Statement;
use crate::value::{BindValue, SqlType};

/// A conversion policy for one kind of target column.
pub trait Binder: fmt::Debug + Send + Sync {
    /// Bind `value` at the 1-based `position` of `stmt`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MalformedLiteral`] when text cannot be parsed for the target
    /// column, and [`BindError::BindFailed`] when the driver rejects the call.
    fn bind(
        &self,
        stmt: &mut dyn Statement,
        position: usize,
        value: &BindValue,
    ) -> Result<(), BindError>;

    /// Stable identifier, used in diagnostics and configuration.
    fn name(&self) -> &str;
}

/// The column categories with a built-in binder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BinderKind {
    /// No coercion: every value goes to the driver's generic binding.
    Default,
    String,
    Date,
    Timestamp,
    Time,
    Decimal,
    Integer,
}

impl BinderKind {
    pub const ALL: [BinderKind; 7] = [
        BinderKind::Default,
        BinderKind::String,
        BinderKind::Date,
        BinderKind::Timestamp,
        BinderKind::Time,
        BinderKind::Decimal,
        BinderKind::Integer,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BinderKind::Default => "default",
            BinderKind::String => "string",
            BinderKind::Date => "date",
            BinderKind::Timestamp => "timestamp",
            BinderKind::Time => "time",
            BinderKind::Decimal => "decimal",
            BinderKind::Integer => "integer",
        }
    }

    /// The process-wide binder for this kind.
    #[must_use]
    pub fn binder(self) -> &'static StandardBinder {
        match self {
            BinderKind::Default => &DEFAULT_BINDER,
            BinderKind::String => &STRING_BINDER,
            BinderKind::Date => &DATE_BINDER,
            BinderKind::Timestamp => &TIMESTAMP_BINDER,
            BinderKind::Time => &TIME_BINDER,
            BinderKind::Decimal => &DECIMAL_BINDER,
            BinderKind::Integer => &INTEGER_BINDER,
        }
    }
}

impl fmt::Display for BinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinderKind {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BindError::Config(format!("unknown binder: {s}")))
    }
}

/// One of the built-in binders. Only the registry statics exist; obtain them through the
/// accessor functions or [`BinderKind::binder`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct StandardBinder {
    kind: BinderKind,
    name: &'static str,
}

static DEFAULT_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::Default,
    name: "binders::default",
};
static STRING_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::String,
    name: "binders::string",
};
static DATE_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::Date,
    name: "binders::date",
};
static TIMESTAMP_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::Timestamp,
    name: "binders::timestamp",
};
static TIME_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::Time,
    name: "binders::time",
};
static DECIMAL_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::Decimal,
    name: "binders::decimal",
};
static INTEGER_BINDER: StandardBinder = StandardBinder {
    kind: BinderKind::Integer,
    name: "binders::integer",
};

/// Binder that always hands the value to the driver's generic binding.
#[must_use]
pub fn default_binder() -> &'static StandardBinder {
    &DEFAULT_BINDER
}

/// Binder for CHAR/VARCHAR columns.
///
/// Text binds as-is, enumerated values bind their symbolic name, and any other value binds
/// its textual rendering.
#[must_use]
pub fn string_binder() -> &'static StandardBinder {
    &STRING_BINDER
}

/// Binder for DATE columns.
///
/// Dates bind directly. Timestamps, instants, times of day and zone-aware calendars are
/// truncated to their UTC calendar date. Text is parsed as `YYYY-MM-DD`. Anything else goes
/// to the generic binding.
#[must_use]
pub fn date_binder() -> &'static StandardBinder {
    &DATE_BINDER
}

/// Binder for TIMESTAMP columns.
///
/// Timestamps bind directly. Dates, times of day, instants and zone-aware calendars are
/// widened through their millisecond offset. Text is parsed as
/// `YYYY-MM-DD HH:MM:SS[.fffffffff]`. Anything else goes to the generic binding.
#[must_use]
pub fn timestamp_binder() -> &'static StandardBinder {
    &TIMESTAMP_BINDER
}

/// Binder for TIME columns.
///
/// Times of day bind directly. Dates, timestamps, instants and zone-aware calendars bind
/// their UTC time of day. Text is parsed as `HH:MM:SS`. Anything else goes to the generic
/// binding.
#[must_use]
pub fn time_binder() -> &'static StandardBinder {
    &TIME_BINDER
}

/// Binder for DECIMAL/NUMERIC columns. Only text is coerced, into an exact decimal.
#[must_use]
pub fn decimal_binder() -> &'static StandardBinder {
    &DECIMAL_BINDER
}

/// Binder for integer columns.
///
/// Big integers bind with a [`SqlType::BigInt`] hint, enumerated values bind their
/// zero-based position, and text is parsed as an integer and bound like a big integer.
/// Anything else goes to the generic binding.
#[must_use]
pub fn integer_binder() -> &'static StandardBinder {
    &INTEGER_BINDER
}

impl StandardBinder {
    #[must_use]
    pub fn kind(&self) -> BinderKind {
        self.kind
    }
}

impl fmt::Display for StandardBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Binder for StandardBinder {
    fn bind(
        &self,
        stmt: &mut dyn Statement,
        position: usize,
        value: &BindValue,
    ) -> Result<(), BindError> {
        trace!(binder = self.name, position, value = value.kind_name(), "bind");
        if value.is_null() {
            stmt.set_null(position)?;
            return Ok(());
        }
        match self.kind {
            BinderKind::Default => {
                stmt.set_generic(position, value)?;
                Ok(())
            }
            BinderKind::String => bind_string(stmt, position, value),
            BinderKind::Date => bind_date(stmt, position, value),
            BinderKind::Timestamp => bind_timestamp(stmt, position, value),
            BinderKind::Time => bind_time(stmt, position, value),
            BinderKind::Decimal => bind_decimal(stmt, position, value),
            BinderKind::Integer => bind_integer(stmt, position, value),
        }
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn bind_string(
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    match value {
        BindValue::Text(text) => stmt.set_text(position, text)?,
        BindValue::Enum(e) => stmt.set_text(position, e.name())?,
        other => stmt.set_text(position, &other.to_string())?,
    }
    Ok(())
}

fn bind_date(
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    match value {
        BindValue::Date(date) => stmt.set_date(position, *date)?,
        BindValue::Timestamp(ts) => stmt.set_date(position, ts.date())?,
        BindValue::Instant(instant) => stmt.set_date(position, instant.date_naive())?,
        BindValue::Time(_) => stmt.set_date(position, EPOCH_DATE)?,
        BindValue::Calendar(calendar) => stmt.set_date(position, calendar.naive_utc().date())?,
        BindValue::Text(text) => stmt.set_date(position, literal::parse_date(text)?)?,
        other => return pass_through(BinderKind::Date, stmt, position, other),
    }
    Ok(())
}

fn bind_timestamp(
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    match value {
        BindValue::Timestamp(ts) => stmt.set_timestamp(position, *ts)?,
        BindValue::Date(date) => stmt.set_timestamp(position, date.and_time(NaiveTime::MIN))?,
        BindValue::Time(time) => {
            stmt.set_timestamp(position, millis(EPOCH_DATE.and_time(*time)))?;
        }
        BindValue::Instant(instant) => stmt.set_timestamp(position, millis(instant.naive_utc()))?,
        BindValue::Calendar(calendar) => {
            stmt.set_timestamp(position, millis(calendar.naive_utc()))?;
        }
        BindValue::Text(text) => {
            stmt.set_timestamp(position, literal::parse_timestamp(text)?)?;
        }
        other => return pass_through(BinderKind::Timestamp, stmt, position, other),
    }
    Ok(())
}

fn bind_time(
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    match value {
        BindValue::Time(time) => stmt.set_time(position, *time)?,
        BindValue::Date(_) => stmt.set_time(position, NaiveTime::MIN)?,
        BindValue::Timestamp(ts) => stmt.set_time(position, millis(*ts).time())?,
        BindValue::Instant(instant) => {
            stmt.set_time(position, millis(instant.naive_utc()).time())?;
        }
        BindValue::Calendar(calendar) => {
            stmt.set_time(position, millis(calendar.naive_utc()).time())?;
        }
        BindValue::Text(text) => stmt.set_time(position, literal::parse_time(text)?)?,
        other => return pass_through(BinderKind::Time, stmt, position, other),
    }
    Ok(())
}

fn bind_decimal(
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    match value {
        BindValue::Text(text) => stmt.set_decimal(position, &literal::parse_decimal(text)?)?,
        other => return pass_through(BinderKind::Decimal, stmt, position, other),
    }
    Ok(())
}

fn bind_integer(
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    match value {
        BindValue::BigInt(_) => stmt.set_generic_typed(position, value, SqlType::BigInt)?,
        BindValue::Enum(e) => stmt.set_int(position, i64::from(e.ordinal()))?,
        BindValue::Text(text) => {
            let parsed = BindValue::BigInt(literal::parse_integer(text)?);
            stmt.set_generic_typed(position, &parsed, SqlType::BigInt)?;
        }
        other => return pass_through(BinderKind::Integer, stmt, position, other),
    }
    Ok(())
}

/// Times of day read as this date when a date or timestamp is needed.
const EPOCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    None => panic!("1970-01-01 is a valid date"),
};

// UTC wall clock at millisecond precision.
fn millis(value: NaiveDateTime) -> NaiveDateTime {
    value.trunc_subsecs(3)
}

fn pass_through(
    kind: BinderKind,
    stmt: &mut dyn Statement,
    position: usize,
    value: &BindValue,
) -> Result<(), BindError> {
    debug!(
        binder = %kind,
        position,
        value = value.kind_name(),
        "no coercion for value, using generic binding"
    );
    stmt.set_generic(position, value)?;
    Ok(())
}
