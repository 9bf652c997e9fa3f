//! Polish cardinal numerals
//!
//! Numbers are spelled in groups of three digits. Every group above the
//! units carries a scale noun (`tysiąc`, `milion`, ...) declined by the
//! Polish plural rule.

const UNITS: [&str; 10] = [
    "zero", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
];

const TEENS: [&str; 10] = [
    "dziesięć",
    "jedenaście",
    "dwanaście",
    "trzynaście",
    "czternaście",
    "piętnaście",
    "szesnaście",
    "siedemnaście",
    "osiemnaście",
    "dziewiętnaście",
];

const TENS: [&str; 10] = [
    "",
    "",
    "dwadzieścia",
    "trzydzieści",
    "czterdzieści",
    "pięćdziesiąt",
    "sześćdziesiąt",
    "siedemdziesiąt",
    "osiemdziesiąt",
    "dziewięćdziesiąt",
];

const HUNDREDS: [&str; 10] = [
    "",
    "sto",
    "dwieście",
    "trzysta",
    "czterysta",
    "pięćset",
    "sześćset",
    "siedemset",
    "osiemset",
    "dziewięćset",
];

/// Scale nouns for 10^3, 10^6, ... 10^27
const SCALES: [Noun; 9] = [
    Noun::new("tysiąc", "tysiące", "tysięcy"),
    Noun::new("milion", "miliony", "milionów"),
    Noun::new("miliard", "miliardy", "miliardów"),
    Noun::new("bilion", "biliony", "bilionów"),
    Noun::new("biliard", "biliardy", "biliardów"),
    Noun::new("trylion", "tryliony", "trylionów"),
    Noun::new("tryliard", "tryliardy", "tryliardów"),
    Noun::new("kwadrylion", "kwadryliony", "kwadrylionów"),
    Noun::new("kwadryliard", "kwadryliardy", "kwadryliardów"),
];

/// Grammatical number selected by a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// Exactly one: "jeden złoty"
    One,
    /// Last digit 2-4, except 12-14: "dwa złote"
    Few,
    /// Everything else: "pięć złotych"
    Many,
}

impl PluralForm {
    /// Select the form a noun takes after `n`
    pub fn of(n: u128) -> Self {
        if n == 1 {
            return Self::One;
        }
        let last = n % 10;
        let last_two = n % 100;
        if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            Self::Few
        } else {
            Self::Many
        }
    }
}

/// A noun with its three counted forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl Noun {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// The form used after `n`
    pub fn for_count(&self, n: u128) -> &'static str {
        match PluralForm::of(n) {
            PluralForm::One => self.one,
            PluralForm::Few => self.few,
            PluralForm::Many => self.many,
        }
    }
}

/// Spell `n` in Polish words
///
/// Covers every `u128` below 10^30, which includes the whole range of
/// `rust_decimal::Decimal`. Larger values fall back to decimal digits.
pub fn spell(n: u128) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }
    if groups.len() > SCALES.len() + 1 {
        return n.to_string();
    }

    let mut words: Vec<&'static str> = Vec::new();
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if index == 0 {
            push_group(&mut words, group);
            continue;
        }
        let noun = SCALES[index - 1];
        if group != 1 {
            push_group(&mut words, group);
        }
        words.push(noun.for_count(group as u128));
    }

    words.join(" ")
}

fn push_group(words: &mut Vec<&'static str>, group: usize) {
    let hundreds = group / 100;
    let tens = (group / 10) % 10;
    let units = group % 10;

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }
    match tens {
        0 if units > 0 => words.push(UNITS[units]),
        0 => {}
        1 => words.push(TEENS[units]),
        _ => {
            words.push(TENS[tens]);
            if units > 0 {
                words.push(UNITS[units]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(spell(0), "zero");
        assert_eq!(spell(1), "jeden");
        assert_eq!(spell(7), "siedem");
        assert_eq!(spell(10), "dziesięć");
        assert_eq!(spell(15), "piętnaście");
        assert_eq!(spell(20), "dwadzieścia");
        assert_eq!(spell(42), "czterdzieści dwa");
        assert_eq!(spell(99), "dziewięćdziesiąt dziewięć");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell(100), "sto");
        assert_eq!(spell(101), "sto jeden");
        assert_eq!(spell(200), "dwieście");
        assert_eq!(spell(315), "trzysta piętnaście");
        assert_eq!(spell(999), "dziewięćset dziewięćdziesiąt dziewięć");
    }

    #[test]
    fn test_thousands_declension() {
        assert_eq!(spell(1000), "tysiąc");
        assert_eq!(spell(1001), "tysiąc jeden");
        assert_eq!(spell(2000), "dwa tysiące");
        assert_eq!(spell(5000), "pięć tysięcy");
        assert_eq!(spell(12_000), "dwanaście tysięcy");
        assert_eq!(spell(21_000), "dwadzieścia jeden tysięcy");
        assert_eq!(spell(22_000), "dwadzieścia dwa tysiące");
        assert_eq!(spell(1234), "tysiąc dwieście trzydzieści cztery");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(spell(1_000_000), "milion");
        assert_eq!(spell(3_000_000), "trzy miliony");
        assert_eq!(spell(1_000_001_000), "miliard tysiąc");
        assert_eq!(spell(2_500_000_000), "dwa miliardy pięćset milionów");
    }

    #[test]
    fn test_plural_form() {
        assert_eq!(PluralForm::of(1), PluralForm::One);
        assert_eq!(PluralForm::of(0), PluralForm::Many);
        assert_eq!(PluralForm::of(3), PluralForm::Few);
        assert_eq!(PluralForm::of(13), PluralForm::Many);
        assert_eq!(PluralForm::of(23), PluralForm::Few);
        assert_eq!(PluralForm::of(111), PluralForm::Many);
        assert_eq!(PluralForm::of(104), PluralForm::Few);
    }

    proptest! {
        #[test]
        fn prop_spelled_words_are_known(n in 0u128..1_000_000_000_000u128) {
            let spelled = spell(n);
            prop_assert!(!spelled.is_empty());
            prop_assert!(!spelled.contains("  "));
            prop_assert!(spelled.split(' ').all(|w| w.chars().all(char::is_alphabetic)));
        }

        #[test]
        fn prop_plural_depends_on_last_two_digits(n in 2u128..1_000_000u128) {
            prop_assert_eq!(PluralForm::of(n), PluralForm::of(100 + n % 100));
        }
    }
}
