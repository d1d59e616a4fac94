use num_bigint::BigInt;
use rusqlite::types::Value;

use crate::statement::DriverError;
use crate::value::BindValue;

/// Convert a single `BindValue` to a rusqlite `Value`.
///
/// Date/time values use the same text layouts as rusqlite's chrono support, so they read back
/// as chrono types. Decimals bind as their canonical text to avoid passing through `f64`.
///
/// # Errors
///
/// Returns the rusqlite conversion error when a big integer does not fit in an `INTEGER`.
pub fn bind_value_to_sqlite_value(value: &BindValue) -> Result<Value, DriverError> {
    let converted = match value {
        BindValue::Null => Value::Null,
        BindValue::Text(s) => Value::Text(s.clone()),
        BindValue::Enum(e) => Value::Text(e.name().to_owned()),
        BindValue::Date(d) => Value::Text(d.format("%F").to_string()),
        BindValue::Timestamp(ts) => Value::Text(ts.format("%F %T%.f").to_string()),
        BindValue::Time(t) => Value::Text(t.format("%T%.f").to_string()),
        BindValue::Instant(i) => Value::Text(i.format("%F %T%.f%:z").to_string()),
        BindValue::Calendar(c) => Value::Text(c.format("%F %T%.f%:z").to_string()),
        BindValue::BigInt(i) => Value::Integer(big_int_to_i64(i)?),
        BindValue::Int(i) => Value::Integer(*i),
        BindValue::Float(f) => Value::Real(*f),
        BindValue::Decimal(d) => Value::Text(d.to_string()),
        BindValue::Bool(b) => Value::Integer(i64::from(*b)),
        // Only serialize once to avoid multiple allocations
        BindValue::JSON(jval) => Value::Text(jval.to_string()),
        BindValue::Blob(bytes) => Value::Blob(bytes.clone()),
    };
    Ok(converted)
}

// SQLite integers are 64-bit; wider values are the driver's to reject.
fn big_int_to_i64(value: &BigInt) -> Result<i64, DriverError> {
    i64::try_from(value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)).into())
}
