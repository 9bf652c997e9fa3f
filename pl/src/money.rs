//! Amounts of money spelled out in words
//!
//! The whole złoty part is written in words, the grosze as a fraction of
//! one hundred, the way amounts are written on Polish invoices and
//! transfer forms: `sto dwadzieścia trzy złote 45/100`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::numerals::{Noun, spell};

/// The Polish currency unit
pub const ZLOTY: Noun = Noun::new("złoty", "złote", "złotych");

/// An amount split into whole złoty and grosze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zloty {
    pub negative: bool,
    pub whole: u128,
    pub grosze: u32,
}

impl Zloty {
    /// Round to grosze (half to even) and split
    pub fn from_decimal(amount: Decimal) -> Self {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let abs = rounded.abs();

        let mut whole = abs.trunc();
        whole.rescale(0);
        let mut grosze = (abs - abs.trunc()) * Decimal::new(100, 0);
        grosze.rescale(0);

        Self {
            negative,
            whole: whole.mantissa().unsigned_abs(),
            grosze: grosze.mantissa().unsigned_abs() as u32,
        }
    }
}

/// Spell an amount in Polish words with grosze as hundredths
pub fn amount_in_words(amount: Decimal) -> String {
    let zloty = Zloty::from_decimal(amount);
    let sign = if zloty.negative { "minus " } else { "" };
    format!(
        "{}{} {} {:02}/100",
        sign,
        spell(zloty.whole),
        ZLOTY.for_count(zloty.whole),
        zloty.grosze
    )
}
