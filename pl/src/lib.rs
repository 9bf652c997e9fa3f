//! plformat - Polish numerals and pl_PL formatting
//!
//! Small, stateless helpers used by docxfill's template filters:
//!
//! - [`numerals`] - cardinal numbers in words with Polish plural rules
//! - [`money`] - amounts of money in words (`dwa złote 50/100`)
//! - [`locale`] - pl_PL dates and PLN currency
//!
//! # Example
//!
//! ```
//! use plformat::{amount_in_words, format_currency};
//! use rust_decimal::Decimal;
//!
//! let amount = Decimal::new(123_45, 2);
//! assert_eq!(amount_in_words(amount), "sto dwadzieścia trzy złote 45/100");
//! assert_eq!(format_currency(amount), "123,45\u{a0}zł");
//! ```

pub mod locale;
pub mod money;
pub mod numerals;

pub use locale::{format_currency, format_date_long, format_date_numeric, format_decimal};
pub use money::{Zloty, amount_in_words};
pub use numerals::{Noun, PluralForm, spell};
