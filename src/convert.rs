//! Numeric parsing and formatting helpers.
//!
//! The `to_*` parsers are best-effort: they read the longest numeric prefix
//! and fall back to zero. The `parse_*` parsers are strict and report why a
//! string was rejected.

use crate::error::ParseNumberError;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Whitespace skipped before a best-effort parse (the C `isspace` set).
fn is_leading_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Splits an optional leading sign off `s`. Returns `true` for `-`.
fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest prefix of `s` that reads as a decimal float:
/// sign, digits, optional fraction, optional exponent. Zero if there is no
/// digit in the mantissa.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = bytes.len() - split_sign(s).1.len();
    let int_digits = digits_len(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digits_len(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let exp = &s[pos + 1..];
        let unsigned = split_sign(exp).1;
        let exp_digits = digits_len(unsigned.as_bytes());
        if exp_digits > 0 {
            pos += 1 + (exp.len() - unsigned.len()) + exp_digits;
        }
    }
    pos
}

/// Reads the leading integer of `s`, ignoring whatever follows it.
///
/// Leading whitespace and a sign are accepted. Returns `0` when no digit is
/// found and saturates at the `i64` bounds.
pub fn to_number(s: &str) -> i64 {
    let (negative, rest) = split_sign(s.trim_start_matches(is_leading_space));
    rest.bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .fold(0i64, |acc, d| {
            let acc = acc.saturating_mul(10);
            if negative {
                acc.saturating_sub(d)
            } else {
                acc.saturating_add(d)
            }
        })
}

/// Reads the leading decimal float of `s`, ignoring whatever follows it.
/// Returns `0.0` when nothing numeric is found.
pub fn to_double(s: &str) -> f64 {
    let s = s.trim_start_matches(is_leading_space);
    s[..float_prefix_len(s)].parse().unwrap_or(0.0)
}

/// Parses the whole of `s` as a signed integer.
pub fn parse_number(s: &str) -> Result<i64, ParseNumberError> {
    if s.is_empty() {
        return Err(ParseNumberError::Empty);
    }
    let digits = split_sign(s).1;
    let sign_len = s.len() - digits.len();
    let valid = digits_len(digits.as_bytes());
    if valid == 0 || valid < digits.len() {
        return Err(ParseNumberError::Invalid {
            input: s.to_owned(),
            index: sign_len + valid,
        });
    }
    s.parse().map_err(|_| ParseNumberError::OutOfRange {
        input: s.to_owned(),
    })
}

/// Parses the whole of `s` as a decimal float.
pub fn parse_double(s: &str) -> Result<f64, ParseNumberError> {
    if s.is_empty() {
        return Err(ParseNumberError::Empty);
    }
    let valid = float_prefix_len(s);
    if valid < s.len() {
        return Err(ParseNumberError::Invalid {
            input: s.to_owned(),
            index: valid,
        });
    }
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseNumberError::OutOfRange {
            input: s.to_owned(),
        }),
    }
}

/// True if the whole of `s` is a decimal number, integer or float.
pub fn is_number(s: &str) -> bool {
    parse_double(s).is_ok()
}

/// Formats a byte count as `"X.XX UNIT"`, stepping by 1024 up to TB.
pub fn to_human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Renders the low `length` bits of `value` as `'0'`/`'1'`, most significant
/// bit first. The result always has exactly `length` characters.
pub fn decimal_to_binary_string(value: u64, length: usize) -> String {
    (0..length)
        .rev()
        .map(|bit| {
            if bit < 64 && (value >> bit) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

/// English ordinal suffix for `value`: "st", "nd", "rd" or "th".
pub fn ordinal_suffix(value: i64) -> &'static str {
    let v = value.unsigned_abs();
    match (v % 100, v % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

/// `value` followed by its ordinal suffix, e.g. `"21st"`.
pub fn get_ordinal(value: i64) -> String {
    format!("{}{}", value, ordinal_suffix(value))
}
