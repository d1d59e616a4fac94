//! Canonical literal grammars accepted by the parsing binders.
//!
//! | Target    | Grammar                                   |
//! |-----------|-------------------------------------------|
//! | date      | `YYYY-[M]M-[D]D`                          |
//! | timestamp | `YYYY-[M]M-[D]D HH:MM:SS[.f{1,9}]`        |
//! | time      | `HH:MM:SS`                                |
//! | decimal   | `[+-]digits[.digits][e[+-]digits]`        |
//! | integer   | `[+-]digits`                              |
//!
//! Digits are ASCII `0-9`. Date and time literals tolerate surrounding whitespace; numeric
//! literals do not. Decimals and integers have no precision or width limit.
//! A literal that matches the shape but names an impossible value (month 13, hour 25,
//! February 30th) is malformed as well.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use regex::{Captures, Regex};

use crate::binders::BinderKind;
use crate::error::BindError;

// ASCII digits only. Unicode `\d` also matches digits from other scripts.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid date regex")
});

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2}) ",
        r"([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,9}))?$",
    ))
    .expect("valid timestamp regex")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("valid time regex")
});

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("valid decimal regex")
});

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid integer regex"));

/// Parse a `YYYY-MM-DD` date literal.
///
/// # Errors
///
/// Returns [`BindError::MalformedLiteral`] when `text` is not a valid date literal.
pub fn parse_date(text: &str) -> Result<NaiveDate, BindError> {
    let caps = DATE_RE
        .captures(text.trim())
        .ok_or_else(|| BindError::malformed(BinderKind::Date, text, "expected YYYY-MM-DD"))?;
    calendar_date(BinderKind::Date, text, &caps)
}

/// Parse a `YYYY-MM-DD HH:MM:SS[.fffffffff]` timestamp literal.
///
/// # Errors
///
/// Returns [`BindError::MalformedLiteral`] when `text` is not a valid timestamp literal.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, BindError> {
    let kind = BinderKind::Timestamp;
    let caps = TIMESTAMP_RE.captures(text.trim()).ok_or_else(|| {
        BindError::malformed(kind, text, "expected YYYY-MM-DD HH:MM:SS[.fffffffff]")
    })?;
    let date = calendar_date(kind, text, &caps)?;
    let nanos = match caps.get(7) {
        Some(fraction) => fraction_nanos(kind, text, fraction.as_str())?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(
        field(kind, text, &caps[4])?,
        field(kind, text, &caps[5])?,
        field(kind, text, &caps[6])?,
        nanos,
    )
    .ok_or_else(|| BindError::malformed(kind, text, "time of day out of range"))?;
    Ok(date.and_time(time))
}

/// Parse an `HH:MM:SS` time literal.
///
/// # Errors
///
/// Returns [`BindError::MalformedLiteral`] when `text` is not a valid time literal.
pub fn parse_time(text: &str) -> Result<NaiveTime, BindError> {
    let kind = BinderKind::Time;
    let caps = TIME_RE
        .captures(text.trim())
        .ok_or_else(|| BindError::malformed(kind, text, "expected HH:MM:SS"))?;
    NaiveTime::from_hms_opt(
        field(kind, text, &caps[1])?,
        field(kind, text, &caps[2])?,
        field(kind, text, &caps[3])?,
    )
    .ok_or_else(|| BindError::malformed(kind, text, "time of day out of range"))
}

/// Parse a decimal literal of any precision without rounding.
///
/// # Errors
///
/// Returns [`BindError::MalformedLiteral`] when `text` is not a decimal literal.
pub fn parse_decimal(text: &str) -> Result<BigDecimal, BindError> {
    if !DECIMAL_RE.is_match(text) {
        return Err(BindError::malformed(
            BinderKind::Decimal,
            text,
            "expected a decimal number",
        ));
    }
    field(BinderKind::Decimal, text, text)
}

/// Parse an integer literal of any width.
///
/// # Errors
///
/// Returns [`BindError::MalformedLiteral`] when `text` is not an integer literal.
pub fn parse_integer(text: &str) -> Result<BigInt, BindError> {
    if !INTEGER_RE.is_match(text) {
        return Err(BindError::malformed(
            BinderKind::Integer,
            text,
            "expected an integer",
        ));
    }
    field(BinderKind::Integer, text, text)
}

// Captures 1 to 3 hold the year, month and day.
fn calendar_date(
    kind: BinderKind,
    text: &str,
    caps: &Captures<'_>,
) -> Result<NaiveDate, BindError> {
    NaiveDate::from_ymd_opt(
        field(kind, text, &caps[1])?,
        field(kind, text, &caps[2])?,
        field(kind, text, &caps[3])?,
    )
    .ok_or_else(|| BindError::malformed(kind, text, "no such calendar date"))
}

fn field<T>(kind: BinderKind, text: &str, digits: &str) -> Result<T, BindError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    digits
        .parse()
        .map_err(|e: T::Err| BindError::malformed(kind, text, e.to_string()))
}

fn fraction_nanos(kind: BinderKind, text: &str, digits: &str) -> Result<u32, BindError> {
    let value: u32 = field(kind, text, digits)?;
    9_usize
        .checked_sub(digits.len())
        .and_then(|pad| u32::try_from(pad).ok())
        .and_then(|pad| 10_u32.checked_pow(pad))
        .and_then(|scale| value.checked_mul(scale))
        .ok_or_else(|| BindError::malformed(kind, text, "fraction of a second out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_literals() {
        assert_eq!(
            parse_date("2023-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
        assert_eq!(
            parse_date(" 2023-6-5 ").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 5).unwrap()
        );
        for bad in [
            "2023/06/15",
            "15-06-2023",
            "2023-13-01",
            "2023-02-30",
            "",
            "2023-06-15 10:00:00",
        ] {
            let err = parse_date(bad).unwrap_err();
            assert!(err.is_malformed_literal(), "{bad} should be malformed");
        }
    }

    #[test]
    fn timestamp_literals() {
        let ts = parse_timestamp("2023-06-15 10:30:00").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );

        let ts = parse_timestamp("2023-06-15 10:30:00.5").unwrap();
        assert_eq!(ts.and_utc().timestamp_subsec_nanos(), 500_000_000);

        let ts = parse_timestamp("2023-06-15 10:30:00.000000001").unwrap();
        assert_eq!(ts.and_utc().timestamp_subsec_nanos(), 1);

        let ts = parse_timestamp("2023-06-15 10:30:00.999999999").unwrap();
        assert_eq!(ts.and_utc().timestamp_subsec_nanos(), 999_999_999);

        for bad in [
            "2023-06-15",
            "2023-06-15T10:30:00",
            "2023-06-15 24:00:00",
            "2023-06-15 10:30:00.1234567890",
            "2023-06-15 10:30",
        ] {
            assert!(parse_timestamp(bad).unwrap_err().is_malformed_literal(), "{bad}");
        }
    }

    #[test]
    fn time_literals() {
        assert_eq!(
            parse_time("23:59:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
        match parse_time("25:99:99").unwrap_err() {
            BindError::MalformedLiteral { kind, text, .. } => {
                assert_eq!(kind, BinderKind::Time);
                assert_eq!(text, "25:99:99");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_time("10:30").is_err());
        assert!(parse_time("10:30:00.5").is_err());
    }

    #[test]
    fn non_ascii_digits_are_malformed() {
        // U+0665 and U+0661 are Arabic-Indic digits; U+FF11 is a fullwidth one
        let fraction = "2023-06-15 10:30:00.\u{0665}";
        match parse_timestamp(fraction).unwrap_err() {
            BindError::MalformedLiteral { kind, text, .. } => {
                assert_eq!(kind, BinderKind::Timestamp);
                assert_eq!(text, fraction);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(
            parse_timestamp("2023-06-15 1\u{0661}:30:00")
                .unwrap_err()
                .is_malformed_literal()
        );
        assert!(parse_date("\u{0662}023-06-15").unwrap_err().is_malformed_literal());
        assert!(parse_date("2023-06-\u{FF11}5").unwrap_err().is_malformed_literal());
        assert!(parse_time("10:\u{0663}0:00").unwrap_err().is_malformed_literal());
        assert!(parse_decimal("3.\u{0661}4").unwrap_err().is_malformed_literal());
        assert!(parse_integer("\u{0664}2").unwrap_err().is_malformed_literal());
    }

    #[test]
    fn decimal_literals_are_exact() {
        let pi = parse_decimal("3.14").unwrap();
        assert_eq!(pi, BigDecimal::new(BigInt::from(314), 2));
        assert_eq!(pi.to_string(), "3.14");
        assert_eq!(
            parse_decimal("-0.001").unwrap(),
            BigDecimal::new(BigInt::from(-1), 3)
        );
        assert_eq!(parse_decimal("1.5e2").unwrap(), BigDecimal::from(150));
        for bad in ["not-a-number", "", "1.2.3", " 3.14", "1_000", "e5"] {
            assert!(parse_decimal(bad).unwrap_err().is_malformed_literal(), "{bad}");
        }
    }

    #[test]
    fn decimal_literals_keep_every_digit() {
        let wide = "123456789012345678901234567890.5";
        assert_eq!(parse_decimal(wide).unwrap().to_string(), wide);

        let long_fraction = "0.12345678901234567890123456789012";
        let parsed = parse_decimal(long_fraction).unwrap();
        assert_eq!(parsed.as_bigint_and_exponent().1, 32);
        assert_eq!(parsed.to_string(), long_fraction);

        let huge = parse_decimal("1e40").unwrap();
        assert_eq!(huge, BigDecimal::new(BigInt::from(10).pow(40), 0));
    }

    #[test]
    fn integer_literals_have_no_width_limit() {
        assert_eq!(
            parse_integer("123456789012345").unwrap(),
            BigInt::from(123_456_789_012_345_i64)
        );
        assert_eq!(parse_integer("-42").unwrap(), BigInt::from(-42));
        assert_eq!(parse_integer("+7").unwrap(), BigInt::from(7));
        assert_eq!(
            parse_integer("170141183460469231731687303715884105728").unwrap(),
            BigInt::from(i128::MAX) + 1
        );
        let forty_two_nines = "9".repeat(42);
        assert_eq!(
            parse_integer(&forty_two_nines).unwrap().to_string(),
            forty_two_nines
        );
        for bad in ["12.5", "abc", "", "1e3", "1 000"] {
            assert!(parse_integer(bad).unwrap_err().is_malformed_literal(), "{bad}");
        }
    }
}
