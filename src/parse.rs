//! Prefix parsers for numeric strings.
//!
//! Each parser reads the longest numeric prefix of its input (after leading
//! whitespace and an optional sign) and reports how many bytes it consumed.
//! Failures are split into two kinds: the digits were there but the value does
//! not fit the target type, or there was no number to read at all.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{input:?} is outside of range of {target}")]
    OutOfRange { input: String, target: &'static str },

    #[error("{input:?} is not a valid {target}")]
    InvalidFormat { input: String, target: &'static str },
}

impl ParseError {
    fn out_of_range(input: &str, target: &'static str) -> Self {
        Self::OutOfRange {
            input: input.to_string(),
            target,
        }
    }

    fn invalid_format(input: &str, target: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            target,
        }
    }
}

const U64: &str = "u64";
const I32: &str = "i32";
const F64: &str = "f64";

struct IntegerPrefix {
    negative: bool,
    magnitude: u64,
    overflow: bool,
    consumed: usize,
}

/// Parses an unsigned integer prefix of `s` in `base` (0 or 2..=36).
///
/// Base 0 picks 16 for a `0x` prefix, 8 for a leading `0` and 10 otherwise.
/// A leading `-` negates the result modulo 2^64.
pub fn parse_unsigned_int(s: &str, base: u32) -> Result<(u64, usize), ParseError> {
    let prefix = scan_integer(s, base).ok_or_else(|| ParseError::invalid_format(s, U64))?;
    if prefix.overflow {
        return Err(ParseError::out_of_range(s, U64));
    }

    let value = if prefix.negative {
        prefix.magnitude.wrapping_neg()
    } else {
        prefix.magnitude
    };
    Ok((value, prefix.consumed))
}

/// Parses a signed 32-bit integer prefix of `s` in `base` (0 or 2..=36).
pub fn parse_int(s: &str, base: u32) -> Result<(i32, usize), ParseError> {
    let prefix = scan_integer(s, base).ok_or_else(|| ParseError::invalid_format(s, I32))?;
    if prefix.overflow {
        return Err(ParseError::out_of_range(s, I32));
    }

    let magnitude = i128::from(prefix.magnitude);
    let value = if prefix.negative { -magnitude } else { magnitude };
    let value = i32::try_from(value).map_err(|_| ParseError::out_of_range(s, I32))?;
    Ok((value, prefix.consumed))
}

/// Parses a floating-point prefix of `s`.
///
/// Accepts decimal notation with an optional fraction and exponent, as well as
/// `inf`, `infinity` and `nan` in any case. Finite digits that overflow to
/// infinity or underflow to zero are out of range.
pub fn parse_double(s: &str) -> Result<(f64, usize), ParseError> {
    let bytes = s.as_bytes();
    let mut pos = skip_whitespace(bytes);
    let start = pos;

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let rest = &s[pos..];
    for (word, value) in [
        ("infinity", f64::INFINITY),
        ("inf", f64::INFINITY),
        ("nan", f64::NAN),
    ] {
        if rest
            .get(..word.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(word))
        {
            let value = if negative { -value } else { value };
            return Ok((value, pos + word.len()));
        }
    }

    let mut digits = 0;
    let mut nonzero = false;
    let mut count_digits = |pos: &mut usize| {
        while let Some(b) = bytes.get(*pos).filter(|b| b.is_ascii_digit()) {
            nonzero |= *b != b'0';
            digits += 1;
            *pos += 1;
        }
    };

    count_digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        count_digits(&mut pos);
    }
    if digits == 0 {
        return Err(ParseError::invalid_format(s, F64));
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        let mut exp_pos = pos + 1;
        if let Some(b'-' | b'+') = bytes.get(exp_pos) {
            exp_pos += 1;
        }
        let exp_start = exp_pos;
        while bytes.get(exp_pos).is_some_and(|b| b.is_ascii_digit()) {
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            pos = exp_pos;
        }
    }

    let value: f64 = s[start..pos]
        .parse()
        .map_err(|_| ParseError::invalid_format(s, F64))?;

    if value.is_infinite() || (value == 0.0 && nonzero) {
        return Err(ParseError::out_of_range(s, F64));
    }
    Ok((value, pos))
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len())
}

fn scan_integer(s: &str, base: u32) -> Option<IntegerPrefix> {
    if base != 0 && !(2..=36).contains(&base) {
        return None;
    }

    let bytes = s.as_bytes();
    let mut pos = skip_whitespace(bytes);

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let hex_prefix = bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
        && bytes.get(pos + 2).is_some_and(|b| b.is_ascii_hexdigit());

    let radix = match base {
        0 | 16 if hex_prefix => {
            pos += 2;
            16
        }
        0 if bytes.get(pos) == Some(&b'0') => 8,
        0 => 10,
        _ => base,
    };

    let mut magnitude: u64 = 0;
    let mut overflow = false;
    let mut digits = 0;

    while let Some(d) = bytes.get(pos).and_then(|b| char::from(*b).to_digit(radix)) {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(d)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        digits += 1;
        pos += 1;
    }

    if digits == 0 {
        return None;
    }

    Some(IntegerPrefix {
        negative,
        magnitude,
        overflow,
        consumed: pos,
    })
}
