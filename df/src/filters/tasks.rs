//! Aggregates over a list of task records
//!
//! A task is a mapping with `begin`, `end` and `value` fields. `begin` and
//! `end` return the field as it appears in the data, so the result can be
//! passed on to the date filters.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use tera::{Error, Result, Value};

use super::value::{DateValue, decimal_arg, from_decimal, int_arg, task_field, task_list, to_decimal};

/// Earliest `begin` of the tasks
pub fn begin(tasks: &[Value]) -> Result<Value> {
    extreme(tasks, "begin", Ordering::Less)
}

/// Latest `end` of the tasks
pub fn end(tasks: &[Value]) -> Result<Value> {
    extreme(tasks, "end", Ordering::Greater)
}

/// Sum of the `value` fields; zero for no tasks
pub fn total(tasks: &[Value]) -> Result<Decimal> {
    tasks.iter().try_fold(Decimal::ZERO, |sum, task| {
        let value = to_decimal(task_field(task, "value")?)?;
        sum.checked_add(value)
            .ok_or_else(|| Error::msg(format!("total of task values overflows at {value}")))
    })
}

/// Latest `end` shifted by `days`
pub fn final_date(tasks: &[Value], days: i64) -> Result<DateValue> {
    DateValue::from_value(&end(tasks)?)?.add_days(days)
}

/// `rate` times the total
pub fn factor(tasks: &[Value], rate: Decimal) -> Result<Decimal> {
    let total = total(tasks)?;
    rate.checked_mul(total)
        .ok_or_else(|| Error::msg(format!("{rate} times {total} overflows")))
}

/// The first task field that is strictly beyond every other in `direction`
fn extreme(tasks: &[Value], key: &str, direction: Ordering) -> Result<Value> {
    let mut best: Option<(DateValue, &Value)> = None;
    for task in tasks {
        let raw = task_field(task, key)?;
        let date = DateValue::from_value(raw)?;
        match best {
            Some((current, _)) if date.cmp(&current) != direction => {}
            _ => best = Some((date, raw)),
        }
    }
    best.map(|(_, raw)| raw.clone())
        .ok_or_else(|| Error::msg(format!("cannot take `{key}` of an empty task list")))
}

pub fn begin_filter(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    begin(task_list(value, "begin")?)
}

pub fn end_filter(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    end(task_list(value, "end")?)
}

pub fn total_filter(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    total(task_list(value, "total")?).map(from_decimal)
}

/// `days` argument, `delta` accepted as an older spelling
pub fn final_filter(value: &Value, args: &HashMap<String, Value>, default_days: i64) -> Result<Value> {
    let days = int_arg(args, "delta", default_days)?;
    let days = int_arg(args, "days", days)?;
    Ok(final_date(task_list(value, "final")?, days)?.to_value())
}

pub fn factor_filter(value: &Value, args: &HashMap<String, Value>, default_rate: Decimal) -> Result<Value> {
    let rate = decimal_arg(args, "c", default_rate)?;
    factor(task_list(value, "factor")?, rate).map(from_decimal)
}
