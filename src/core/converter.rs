//! Arabic <-> Roman numeral conversion.
//!
//! Both directions are pure functions over the range 1..=3999.
//! Roman input is accepted only in its canonical form: the string
//! `arabic_to_roman` would produce for the same value. "IIII", "VX"
//! and similar sequences evaluate to a number but are rejected.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{Result, RomanosError, MAX_ARABIC, MIN_ARABIC};

/// Descending (value, numeral) table used by the greedy encoder
const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Length of the longest canonical numeral (MMMDCCCLXXXVIII = 3888)
pub const MAX_NUMERAL_LEN: usize = 15;

static ROMAN_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVXLCDM]+$").unwrap());

/// Convert an integer to its canonical Roman numeral
///
/// # Errors
///
/// - `OutOfRange`: `n` is outside 1..=3999
pub fn arabic_to_roman(n: i64) -> Result<String> {
    if !(MIN_ARABIC..=MAX_ARABIC).contains(&n) {
        return Err(RomanosError::OutOfRange(n));
    }

    Ok(encode(n))
}

/// Convert a canonical Roman numeral to its integer value
///
/// The pairwise subtractive scan alone would accept malformed
/// sequences, so the result is re-encoded and must reproduce the
/// input exactly.
///
/// # Errors
///
/// - `InvalidNumeral`: empty, contains anything other than
///   `I V X L C D M`, evaluates outside 1..=3999, or is not canonical
pub fn roman_to_arabic(roman: &str) -> Result<u16> {
    let invalid = || RomanosError::InvalidNumeral(roman.to_string());

    if roman.len() > MAX_NUMERAL_LEN || !ROMAN_CHARS.is_match(roman) {
        return Err(invalid());
    }

    let total = evaluate(roman);
    if !(MIN_ARABIC..=MAX_ARABIC).contains(&total) {
        return Err(invalid());
    }

    if arabic_to_roman(total)? != roman {
        return Err(invalid());
    }

    u16::try_from(total).map_err(|_| invalid())
}

/// Parse integer text strictly
///
/// The text must be exactly the decimal rendering of the parsed
/// value: no sign prefix, leading zeros, whitespace, fraction or
/// trailing characters. Range is left to `arabic_to_roman`.
///
/// # Errors
///
/// - `MissingParameter`: empty text
/// - `MalformedParameter`: not a canonical base-10 integer
pub fn parse_arabic(text: &str) -> Result<i64> {
    if text.is_empty() {
        return Err(RomanosError::MissingParameter("arabic".to_string()));
    }

    let malformed = || RomanosError::MalformedParameter("arabic".to_string());
    let value: i64 = text.parse().map_err(|_| malformed())?;
    if value.to_string() != text {
        return Err(malformed());
    }

    Ok(value)
}

/// Greedy encoding, caller guarantees `n` is in range
fn encode(n: i64) -> String {
    let mut remaining = n;
    let mut roman = String::with_capacity(MAX_NUMERAL_LEN);
    for (value, numeral) in NUMERALS {
        while remaining >= value {
            roman.push_str(numeral);
            remaining -= value;
        }
    }
    roman
}

/// Pairwise subtractive scan: a letter smaller than its successor
/// is subtracted, every other letter is added
fn evaluate(roman: &str) -> i64 {
    let values: Vec<i64> = roman.bytes().map(letter_value).collect();
    let mut total = 0;
    for (i, &current) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if current < next => total -= current,
            _ => total += current,
        }
    }
    total
}

fn letter_value(letter: u8) -> i64 {
    match letter {
        b'I' => 1,
        b'V' => 5,
        b'X' => 10,
        b'L' => 50,
        b'C' => 100,
        b'D' => 500,
        b'M' => 1000,
        _ => 0,
    }
}

/// An integer in 1..=3999
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArabicValue(u16);

impl ArabicValue {
    pub fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for ArabicValue {
    type Error = RomanosError;

    fn try_from(n: i64) -> Result<Self> {
        if !(MIN_ARABIC..=MAX_ARABIC).contains(&n) {
            return Err(RomanosError::OutOfRange(n));
        }
        // Range checked above, always fits
        Ok(Self(n as u16))
    }
}

impl fmt::Display for ArabicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical Roman numeral
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanValue(String);

impl RomanValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for RomanValue {
    type Err = RomanosError;

    fn from_str(s: &str) -> Result<Self> {
        roman_to_arabic(s)?;
        Ok(Self(s.to_string()))
    }
}

impl From<ArabicValue> for RomanValue {
    fn from(value: ArabicValue) -> Self {
        Self(encode(i64::from(value.0)))
    }
}

impl From<&RomanValue> for ArabicValue {
    fn from(roman: &RomanValue) -> Self {
        // Validated on construction, always within 1..=3999
        Self(evaluate(&roman.0) as u16)
    }
}

impl fmt::Display for RomanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
