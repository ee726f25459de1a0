//! Textual elapsed-time parsing.
//!
//! Grammar: an optional sign followed by one or more `<decimal><unit>` pairs,
//! e.g. `"8h"`, `"1h30m"`, `"1.5h"`, `"-90s"`. A bare `"0"` is zero. Units are
//! `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m` and `h`.
//!
//! Each term is scaled into seconds with [`qtty`] quantities and the sum is
//! rounded to the nearest nanosecond.

use chrono::TimeDelta;
use qtty::{Hour, Minute, Quantity, Second};

use super::error::DurationError;

/// Unit suffix of a duration term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl DurationUnit {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "ns" => Some(Self::Nanoseconds),
            "us" | "µs" | "μs" => Some(Self::Microseconds),
            "ms" => Some(Self::Milliseconds),
            "s" => Some(Self::Seconds),
            "m" => Some(Self::Minutes),
            "h" => Some(Self::Hours),
            _ => None,
        }
    }

    /// Expresses `value` of this unit in seconds.
    pub fn to_seconds(self, value: f64) -> Quantity<Second> {
        match self {
            Self::Nanoseconds => Quantity::new(value / 1e9),
            Self::Microseconds => Quantity::new(value / 1e6),
            Self::Milliseconds => Quantity::new(value / 1e3),
            Self::Seconds => Quantity::new(value),
            Self::Minutes => Quantity::<Minute>::new(value).to::<Second>(),
            Self::Hours => Quantity::<Hour>::new(value).to::<Second>(),
        }
    }
}

/// Parses a textual duration.
///
/// # Errors
///
/// Returns a [`DurationError`] describing the first malformed term.
pub fn parse_duration(token: &str) -> Result<TimeDelta, DurationError> {
    let (negative, mut rest) = if let Some(rest) = token.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = token.strip_prefix('+') {
        (false, rest)
    } else {
        (false, token)
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total = Quantity::<Second>::new(0.0);
    while !rest.is_empty() {
        let (value, after_number) = split_number(rest)?;

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (symbol, after_unit) = after_number.split_at(unit_len);
        if symbol.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let unit = DurationUnit::from_symbol(symbol)
            .ok_or_else(|| DurationError::UnknownUnit(symbol.to_string()))?;

        total = total + unit.to_seconds(value);
        rest = after_unit;
    }

    let seconds = if negative {
        -total.value()
    } else {
        total.value()
    };
    to_time_delta(seconds)
}

/// Parses the length of a prototype interval, which must be at least one second.
pub fn parse_interval_length(token: &str) -> Result<TimeDelta, DurationError> {
    let length = parse_duration(token)?;
    if length < TimeDelta::seconds(1) {
        return Err(DurationError::TooShort);
    }
    Ok(length)
}

/// Splits the leading `digits[.digits]` off `s`.
fn split_number(s: &str) -> Result<(f64, &str), DurationError> {
    let int_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut end = int_len;
    let mut frac_len = 0;
    if s[end..].starts_with('.') {
        let frac = &s[end + 1..];
        frac_len = frac.find(|c: char| !c.is_ascii_digit()).unwrap_or(frac.len());
        end += 1 + frac_len;
    }
    if int_len == 0 && frac_len == 0 {
        return Err(DurationError::InvalidNumber);
    }

    let value = s[..end]
        .parse::<f64>()
        .map_err(|_| DurationError::InvalidNumber)?;
    Ok((value, &s[end..]))
}

fn to_time_delta(seconds: f64) -> Result<TimeDelta, DurationError> {
    let nanos = (seconds * 1e9).round();
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(DurationError::Overflow);
    }
    Ok(TimeDelta::nanoseconds(nanos as i64))
}
