//! pl_PL formatting conventions for dates and currency

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};

/// Month names in the genitive case, as used after a day number
pub const MONTHS_GENITIVE: [&str; 12] = [
    "stycznia",
    "lutego",
    "marca",
    "kwietnia",
    "maja",
    "czerwca",
    "lipca",
    "sierpnia",
    "września",
    "października",
    "listopada",
    "grudnia",
];

/// No-break space, used between digit groups and before the currency symbol
pub const GROUP_SEPARATOR: char = '\u{a0}';

pub const DECIMAL_SEPARATOR: char = ',';

pub const CURRENCY_SYMBOL: &str = "zł";

/// Long date: `5 stycznia 2024`
pub fn format_date_long<D: Datelike>(date: &D) -> String {
    format!("{} {} {}", date.day(), MONTHS_GENITIVE[date.month0() as usize], date.year())
}

/// Numeric date: `05.01.2024`
pub fn format_date_numeric<D: Datelike>(date: &D) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

/// Number with grouped thousands and a comma decimal mark, rounded half to even
pub fn format_decimal(amount: Decimal, places: u32) -> String {
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // Always render exactly `places` fractional digits
    let plain = format!("{:.*}", places as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

/// Currency amount in PLN: `1 234,50 zł`
pub fn format_currency(amount: Decimal) -> String {
    format!("{}{}{}", format_decimal(amount, 2), GROUP_SEPARATOR, CURRENCY_SYMBOL)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
