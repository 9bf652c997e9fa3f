//! Template filters
//!
//! Every filter is a pure function of its input and arguments. The table in
//! [`register`] is the complete set exposed to templates; nothing else in the
//! crate is reachable from a template.

mod scalar;
mod tasks;
mod value;

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::config::FilterConfig;

pub use tasks::{begin, end, factor, final_date, total};
pub use value::DateValue;

/// Names of all registered filters
pub const FILTER_NAMES: [&str; 11] = [
    "fmt_datetime",
    "fmt_date",
    "fmt_currency",
    "slownie",
    "in_words",
    "begin",
    "end",
    "total",
    "delta",
    "final",
    "factor",
];

/// Register all filters, with argument defaults taken from `config`
pub fn register(tera: &mut Tera, config: &FilterConfig) {
    tera.register_filter("fmt_datetime", scalar::fmt_datetime);
    tera.register_filter("fmt_date", scalar::fmt_date);
    tera.register_filter("fmt_currency", scalar::fmt_currency);
    tera.register_filter("slownie", scalar::slownie);
    tera.register_filter("in_words", scalar::slownie);
    tera.register_filter("begin", tasks::begin_filter);
    tera.register_filter("end", tasks::end_filter);
    tera.register_filter("total", tasks::total_filter);

    let delta_days = config.delta_days;
    tera.register_filter("delta", move |value: &Value, args: &HashMap<String, Value>| {
        scalar::delta(value, args, delta_days)
    });

    let final_days = config.final_days;
    tera.register_filter("final", move |value: &Value, args: &HashMap<String, Value>| {
        tasks::final_filter(value, args, final_days)
    });

    let factor_rate = config.factor_rate;
    tera.register_filter("factor", move |value: &Value, args: &HashMap<String, Value>| {
        tasks::factor_filter(value, args, factor_rate)
    });
}
