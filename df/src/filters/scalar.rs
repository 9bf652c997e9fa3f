//! Filters over a single date or amount

use std::collections::HashMap;

use plformat::{amount_in_words, format_currency, format_date_long, format_date_numeric};
use tera::{Result, Value};

use super::value::{DateValue, int_arg, to_decimal};

/// `DD.MM.YYYY`
pub fn fmt_datetime(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let date = DateValue::from_value(value)?;
    Ok(Value::String(format_date_numeric(&date.date())))
}

/// Long Polish date, `5 stycznia 2024`
pub fn fmt_date(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let date = DateValue::from_value(value)?;
    Ok(Value::String(format_date_long(&date.date())))
}

/// PLN amount, `1 234,50 zł`
pub fn fmt_currency(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let amount = to_decimal(value)?;
    Ok(Value::String(format_currency(amount)))
}

/// Amount in Polish words, `dwanaście złotych 34/100`
pub fn slownie(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let amount = to_decimal(value)?;
    Ok(Value::String(amount_in_words(amount)))
}

/// Date shifted by `days` (default from configuration)
pub fn delta(value: &Value, args: &HashMap<String, Value>, default_days: i64) -> Result<Value> {
    let days = int_arg(args, "days", default_days)?;
    let date = DateValue::from_value(value)?;
    Ok(date.add_days(days)?.to_value())
}
