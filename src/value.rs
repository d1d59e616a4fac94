use std::borrow::Cow;
use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::ValueEnum;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A value handed to a binder, in one of the input shapes the binders recognize.
///
/// Fixture code builds these from whatever it has on hand; the binder chosen for the column
/// decides how (or whether) to coerce it:
/// ```rust
/// use sql_binders::prelude::*;
///
/// let row = vec![
///     BindValue::from("alice"),
///     BindValue::from("2023-06-15"),
///     BindValue::from(Option::<i64>::None),
/// ];
/// assert!(row[2].is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// NULL value
    Null,
    /// Text/string value
    Text(String),
    /// Enumerated value, carrying its symbolic name and zero-based position
    Enum(EnumValue),
    /// Calendar date without time
    Date(NaiveDate),
    /// Point in time without zone, read as UTC
    Timestamp(NaiveDateTime),
    /// Time of day
    Time(NaiveTime),
    /// Instant on the UTC timeline
    Instant(DateTime<Utc>),
    /// Zone-aware calendar value
    Calendar(DateTime<FixedOffset>),
    /// Integer of any width
    BigInt(BigInt),
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Exact decimal value of any precision
    Decimal(BigDecimal),
    /// Boolean value
    Bool(bool),
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl BindValue {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the input shape, used in log fields.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            BindValue::Null => "null",
            BindValue::Text(_) => "text",
            BindValue::Enum(_) => "enum",
            BindValue::Date(_) => "date",
            BindValue::Timestamp(_) => "timestamp",
            BindValue::Time(_) => "time",
            BindValue::Instant(_) => "instant",
            BindValue::Calendar(_) => "calendar",
            BindValue::BigInt(_) => "bigint",
            BindValue::Int(_) => "int",
            BindValue::Float(_) => "float",
            BindValue::Decimal(_) => "decimal",
            BindValue::Bool(_) => "bool",
            BindValue::JSON(_) => "json",
            BindValue::Blob(_) => "blob",
        }
    }
}

/// Textual rendering, used when a non-text value is bound to a character column.
impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Null => f.write_str("null"),
            BindValue::Text(s) => f.write_str(s),
            BindValue::Enum(e) => f.write_str(e.name()),
            BindValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            BindValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f")),
            BindValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            BindValue::Instant(i) => write!(f, "{}", i.to_rfc3339()),
            BindValue::Calendar(c) => write!(f, "{}", c.to_rfc3339()),
            BindValue::BigInt(i) => write!(f, "{i}"),
            BindValue::Int(i) => write!(f, "{i}"),
            BindValue::Float(v) => write!(f, "{v}"),
            BindValue::Decimal(d) => write!(f, "{d}"),
            BindValue::Bool(b) => write!(f, "{b}"),
            BindValue::JSON(j) => write!(f, "{j}"),
            BindValue::Blob(bytes) => {
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// An enumerated value: its symbolic name plus its zero-based position in the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    name: Cow<'static, str>,
    ordinal: u32,
}

impl EnumValue {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, ordinal: u32) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

/// Rust enums that bind as their variant name (character columns) or their position
/// (integer columns).
///
/// ```rust
/// use sql_binders::prelude::*;
///
/// #[derive(Clone, Copy)]
/// enum Status { Active, Suspended }
///
/// impl SqlEnum for Status {
///     fn variant_name(&self) -> &'static str {
///         match self {
///             Status::Active => "ACTIVE",
///             Status::Suspended => "SUSPENDED",
///         }
///     }
///
///     fn ordinal(&self) -> u32 {
///         *self as u32
///     }
/// }
///
/// assert_eq!(Status::Suspended.to_bind_value().to_string(), "SUSPENDED");
/// ```
pub trait SqlEnum {
    fn variant_name(&self) -> &'static str;

    fn ordinal(&self) -> u32;

    fn to_bind_value(&self) -> BindValue {
        BindValue::Enum(EnumValue::new(self.variant_name(), self.ordinal()))
    }
}

/// Driver-level parameter types, used both as binding hints and as parameter metadata.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    Char,
    Varchar,
    LongVarchar,
    NChar,
    NVarchar,
    LongNVarchar,
    Clob,
    Date,
    Time,
    Timestamp,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Numeric,
    Float,
    Double,
    Boolean,
    Blob,
    Other,
}

impl SqlType {
    #[must_use]
    pub fn is_character(self) -> bool {
        matches!(
            self,
            SqlType::Char
                | SqlType::Varchar
                | SqlType::LongVarchar
                | SqlType::NChar
                | SqlType::NVarchar
                | SqlType::LongNVarchar
                | SqlType::Clob
        )
    }

    #[must_use]
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            SqlType::TinyInt | SqlType::SmallInt | SqlType::Integer | SqlType::BigInt
        )
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_owned())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Int(i64::from(value))
    }
}

impl From<i128> for BindValue {
    fn from(value: i128) -> Self {
        BindValue::BigInt(BigInt::from(value))
    }
}

impl From<BigInt> for BindValue {
    fn from(value: BigInt) -> Self {
        BindValue::BigInt(value)
    }
}

impl From<f64> for BindValue {
    fn from(value: f64) -> Self {
        BindValue::Float(value)
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        BindValue::Bool(value)
    }
}

impl From<BigDecimal> for BindValue {
    fn from(value: BigDecimal) -> Self {
        BindValue::Decimal(value)
    }
}

impl From<NaiveDate> for BindValue {
    fn from(value: NaiveDate) -> Self {
        BindValue::Date(value)
    }
}

impl From<NaiveDateTime> for BindValue {
    fn from(value: NaiveDateTime) -> Self {
        BindValue::Timestamp(value)
    }
}

impl From<NaiveTime> for BindValue {
    fn from(value: NaiveTime) -> Self {
        BindValue::Time(value)
    }
}

impl From<DateTime<Utc>> for BindValue {
    fn from(value: DateTime<Utc>) -> Self {
        BindValue::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for BindValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        BindValue::Calendar(value)
    }
}

impl From<EnumValue> for BindValue {
    fn from(value: EnumValue) -> Self {
        BindValue::Enum(value)
    }
}

impl From<JsonValue> for BindValue {
    fn from(value: JsonValue) -> Self {
        BindValue::JSON(value)
    }
}

impl From<Vec<u8>> for BindValue {
    fn from(value: Vec<u8>) -> Self {
        BindValue::Blob(value)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(BindValue::Null, Into::into)
    }
}
