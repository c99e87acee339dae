//! Exhaustive converter properties over 1..=3999

use romanos::core::converter::{
    arabic_to_roman, parse_arabic, roman_to_arabic, ArabicValue, RomanValue, MAX_NUMERAL_LEN,
};
use romanos::core::error::RomanosError;
use std::collections::HashSet;

/// Every value survives arabic -> roman -> arabic
#[test]
fn test_round_trip_full_range() {
    for n in 1..=3999i64 {
        let roman = arabic_to_roman(n).unwrap();
        let back = roman_to_arabic(&roman).unwrap();
        assert_eq!(i64::from(back), n, "round trip failed for {n} ({roman})");
    }
}

/// Distinct values never share a numeral
#[test]
fn test_encoding_is_injective() {
    let numerals: HashSet<String> = (1..=3999).map(|n| arabic_to_roman(n).unwrap()).collect();
    assert_eq!(numerals.len(), 3999);
}

/// No canonical numeral exceeds the length limit used as a fast reject
#[test]
fn test_numeral_length_bound() {
    let longest = (1..=3999)
        .map(|n| arabic_to_roman(n).unwrap().len())
        .max()
        .unwrap();
    assert_eq!(longest, MAX_NUMERAL_LEN);
}

/// Only I V X L C D M ever appear in output
#[test]
fn test_output_alphabet() {
    for n in 1..=3999 {
        let roman = arabic_to_roman(n).unwrap();
        assert!(
            roman.chars().all(|c| "IVXLCDM".contains(c)),
            "{n} produced {roman}"
        );
    }
}

/// Values just outside the range are rejected
#[test]
fn test_out_of_range_neighbors() {
    for n in [-3999, -1, 0, 4000, 4001, 1_000_000] {
        assert!(matches!(
            arabic_to_roman(n),
            Err(RomanosError::OutOfRange(_))
        ));
    }
}

/// Only the canonical string among all short sequences decodes
///
/// Enumerates every string of up to three letters: each accepted
/// string must be exactly the encoding of its value.
#[test]
fn test_only_canonical_sequences_accepted() {
    let letters = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];
    let mut candidates: Vec<String> = letters.iter().map(|c| c.to_string()).collect();
    for a in letters {
        for b in letters {
            candidates.push(format!("{a}{b}"));
            for c in letters {
                candidates.push(format!("{a}{b}{c}"));
            }
        }
    }

    let mut accepted = 0;
    for candidate in &candidates {
        if let Ok(value) = roman_to_arabic(candidate) {
            accepted += 1;
            assert_eq!(
                arabic_to_roman(i64::from(value)).unwrap(),
                *candidate,
                "{candidate} accepted but is not canonical"
            );
        }
    }
    assert!(accepted > 0);
}

#[test]
fn test_known_non_canonical_rejected() {
    for s in ["IIII", "VX", "XXXX", "LL", "IL", "VL", "CMM", "MCMC", "XCX"] {
        assert!(roman_to_arabic(s).is_err(), "{s} should be rejected");
    }
}

#[test]
fn test_foreign_characters_rejected() {
    for s in ["ABC", "I1", "-I", "I.", "ⅠⅤ", "iv", ""] {
        assert!(roman_to_arabic(s).is_err(), "{s:?} should be rejected");
    }
}

/// parse_arabic accepts exactly the canonical decimal rendering
#[test]
fn test_parse_arabic_matches_rendering() {
    for n in [-42i64, -1, 1, 9, 10, 3999, 4000, 123_456] {
        assert_eq!(parse_arabic(&n.to_string()).unwrap(), n);
    }
    for text in ["01", "+1", "1.0", "1,000", "0x10", "١٢٣"] {
        assert!(
            matches!(parse_arabic(text), Err(RomanosError::MalformedParameter(_))),
            "{text:?} should be malformed"
        );
    }
}

#[test]
fn test_value_types_agree_with_functions() {
    for n in [1i64, 4, 49, 444, 1994, 3999] {
        let arabic = ArabicValue::try_from(n).unwrap();
        let roman = RomanValue::from(arabic);
        assert_eq!(roman.as_str(), arabic_to_roman(n).unwrap());
        assert_eq!(ArabicValue::from(&roman).value(), roman_to_arabic(roman.as_str()).unwrap());

        let parsed: RomanValue = roman.to_string().parse().unwrap();
        assert_eq!(parsed, roman);
    }
}
