//! Conversions between template values and dates/amounts

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tera::{Error, Number, Result, Value};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A date or datetime read from the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateValue {
    /// Parse `2024-01-05`, `2024-01-05 10:30:00`, `2024-01-05T10:30:00` or RFC 3339
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self::Date(date));
        }
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Some(Self::DateTime(dt));
            }
        }
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self::DateTime(dt.naive_local()))
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        value
            .as_str()
            .and_then(Self::parse)
            .ok_or_else(|| Error::msg(format!("expected a date like 2024-01-05, got {}", value)))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(dt) => dt.date(),
        }
    }

    /// Dates compare as midnight of that day
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(dt) => *dt,
        }
    }

    pub fn add_days(self, days: i64) -> Result<Self> {
        let delta = TimeDelta::try_days(days).ok_or_else(|| Error::msg(format!("{days} days is out of range")))?;
        let shifted = match self {
            Self::Date(date) => date.checked_add_signed(delta).map(Self::Date),
            Self::DateTime(dt) => dt.checked_add_signed(delta).map(Self::DateTime),
        };
        shifted.ok_or_else(|| Error::msg(format!("{self} plus {days} days is out of range")))
    }

    pub fn to_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl Ord for DateValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl PartialOrd for DateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}

/// Read an amount from a number or a numeric string
pub fn to_decimal(value: &Value) -> Result<Decimal> {
    let parsed = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)).ok()
        }
        _ => None,
    };
    parsed.ok_or_else(|| Error::msg(format!("expected a numeric amount, got {}", value)))
}

/// Integers stay integers, everything else becomes a float
pub fn from_decimal(amount: Decimal) -> Value {
    let amount = amount.normalize();
    if amount.scale() == 0 {
        if let Some(i) = amount.to_i64() {
            return Value::Number(i.into());
        }
    }
    amount
        .to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// A sequence of task records
pub fn task_list<'a>(value: &'a Value, filter: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::msg(format!("{filter} expects a list of tasks, got {}", value)))
}

/// A field of a task record
pub fn task_field<'a>(task: &'a Value, key: &str) -> Result<&'a Value> {
    task.get(key)
        .ok_or_else(|| Error::msg(format!("task has no `{key}` field: {}", task)))
}

pub fn int_arg(args: &HashMap<String, Value>, name: &str, default: i64) -> Result<i64> {
    match args.get(name) {
        None => Ok(default),
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| Error::msg(format!("argument `{name}` must be a whole number, got {}", value))),
    }
}

pub fn decimal_arg(args: &HashMap<String, Value>, name: &str, default: Decimal) -> Result<Decimal> {
    match args.get(name) {
        None => Ok(default),
        Some(value) => to_decimal(value),
    }
}
