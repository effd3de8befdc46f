//! Validated roll input

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::UsageError;

/// Accepted number of dice
pub const COUNT_RANGE: RangeInclusive<i64> = 1..=255;

/// Accepted number of faces per die
pub const SIDES_RANGE: RangeInclusive<i64> = 2..=255;

/// A bounds-checked request to roll `count` dice of `sides` faces.
///
/// Only constructible through [`RollRequest::new`] or [`RollRequest::parse`], so holding
/// one means both values are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollRequest {
    count: u8,
    sides: u8,
}

impl RollRequest {
    /// Check both values against their ranges, `count` first.
    pub fn new(count: i64, sides: i64) -> Result<Self, UsageError> {
        let count = u8::try_from(count)
            .ok()
            .filter(|_| COUNT_RANGE.contains(&count))
            .ok_or(UsageError::CountOutOfRange { value: count })?;
        let sides = u8::try_from(sides)
            .ok()
            .filter(|_| SIDES_RANGE.contains(&sides))
            .ok_or(UsageError::SidesOutOfRange { value: sides })?;

        Ok(Self { count, sides })
    }

    /// Parse both tokens with [`parse_c_integer`] and validate them.
    ///
    /// Non-numeric tokens become `0` and are rejected as out of range.
    pub fn parse(count: &str, sides: &str) -> Result<Self, UsageError> {
        Self::new(parse_c_integer(count), parse_c_integer(sides))
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Best-effort integer conversion with `atoi` semantics.
///
/// Leading whitespace and one sign are accepted, then the longest run of ASCII digits.
/// Anything without digits yields `0`. Overflow saturates instead of wrapping.
pub fn parse_c_integer(token: &str) -> i64 {
    let trimmed = token.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
