//! Human-readable byte counts with power-of-1024 unit suffixes.
//!
//! Scaling is done with exact integer long division, so the requested number
//! of decimal places never picks up floating point noise near a bracket edge.

use std::fmt;

use byte_unit::Byte;

use crate::error::AppError;

/// Unit labels indexed by magnitude bracket.
pub const SIZE_SUFFIXES: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Rounded magnitude at which a value moves up to the next bracket.
pub const DEFAULT_ROLLOVER: u32 = 1024;

/// Smallest accepted rollover threshold. Anything lower would let a value
/// roll into a bracket where it rounds to zero.
pub const MIN_ROLLOVER: u32 = 1000;

/// Largest accepted number of decimal places.
pub const MAX_DECIMAL_PLACES: usize = 28;

const LAST_BRACKET: usize = SIZE_SUFFIXES.len() - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFormatter {
    rollover_at: u32,
}

impl SizeFormatter {
    pub fn new() -> Self {
        Self { rollover_at: DEFAULT_ROLLOVER }
    }

    /// Use a custom rollover threshold in `1000..=1024`.
    pub fn with_rollover_at(threshold: u32) -> Result<Self, AppError> {
        if !(MIN_ROLLOVER..=DEFAULT_ROLLOVER).contains(&threshold) {
            return Err(AppError::invalid_argument(format!(
                "rollover threshold must be between {MIN_ROLLOVER} and {DEFAULT_ROLLOVER} (got {threshold})"
            )));
        }
        Ok(Self { rollover_at: threshold })
    }

    pub fn rollover_at(&self) -> u32 {
        self.rollover_at
    }

    /// Format `byte_count` as `"<magnitude> <suffix>"` with exactly
    /// `decimal_places` fractional digits.
    ///
    /// Counts of zero or less render as zero bytes. Counts beyond the `YB`
    /// bracket stay in `YB` with a magnitude above 1024.
    pub fn format(
        &self,
        byte_count: impl Into<i128>,
        decimal_places: i32,
    ) -> Result<String, AppError> {
        let places = validate_decimal_places(decimal_places)?;
        let byte_count = byte_count.into();
        if byte_count <= 0 {
            return Ok(format!("{} {}", Scaled::zero(places), SIZE_SUFFIXES[0]));
        }

        let value = byte_count.unsigned_abs();
        let mut bracket = magnitude_bracket(value);
        let mut scaled = Scaled::round(value, bracket, places);
        if scaled.whole >= u128::from(self.rollover_at) && bracket < LAST_BRACKET {
            bracket += 1;
            scaled = Scaled::round(value, bracket, places);
        }

        Ok(format!("{scaled} {}", SIZE_SUFFIXES[bracket]))
    }
}

impl Default for SizeFormatter {
    fn default() -> Self {
        SizeFormatter::new()
    }
}

/// Format a byte count with the default rollover threshold.
pub fn format_size(byte_count: impl Into<i128>, decimal_places: i32) -> Result<String, AppError> {
    SizeFormatter::new().format(byte_count, decimal_places)
}

/// Reject negative decimal places and anything above [`MAX_DECIMAL_PLACES`],
/// returning the value as a digit count.
pub fn validate_decimal_places(decimal_places: i32) -> Result<usize, AppError> {
    match usize::try_from(decimal_places) {
        Ok(places) if places <= MAX_DECIMAL_PLACES => Ok(places),
        _ => Err(AppError::invalid_argument(format!(
            "decimal places must be between 0 and {MAX_DECIMAL_PLACES} (got {decimal_places})"
        ))),
    }
}

/// Parse a byte count given either as a plain integer (which may be
/// negative or exceed `u64`) or as a quantity such as `5 GiB`.
///
/// The labels this module prints (`KB` through `YB`) are read back as
/// powers of 1024. Any other unit is left to byte-unit.
pub fn parse_byte_count(input: &str) -> Result<i128, AppError> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<i128>() {
        return Ok(value);
    }
    if let Some(value) = parse_suffixed(trimmed).map_err(|_| invalid_size(input))? {
        return Ok(value);
    }
    let byte = Byte::parse_str(trimmed, false).map_err(|_| invalid_size(input))?;
    i128::try_from(byte.as_u128()).map_err(|_| invalid_size(input))
}

fn invalid_size(input: &str) -> AppError {
    AppError::InvalidSize(input.to_string())
}

/// `<number> <label>` with a label from [`SIZE_SUFFIXES`]. `Ok(None)` when
/// the unit is not one of ours.
fn parse_suffixed(input: &str) -> Result<Option<i128>, ()> {
    let Some(split) = input.find(|c: char| c.is_ascii_alphabetic()) else {
        return Ok(None);
    };
    let (number, unit) = (input[..split].trim(), input[split..].trim());
    let Some(bracket) = SIZE_SUFFIXES.iter().position(|label| *label == unit) else {
        return Ok(None);
    };

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let digits = format!("{whole}{fraction}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }

    let mantissa: u128 = digits.parse().map_err(|_| ())?;
    let scale = 10u128.checked_pow(fraction.len() as u32).ok_or(())?;
    let unit_bytes = 1u128 << (10 * bracket);
    let bytes = mantissa.checked_mul(unit_bytes).ok_or(())?;
    // round half away from zero to a whole byte
    let remainder = bytes % scale;
    let rounded = bytes / scale + u128::from(remainder >= scale - remainder);
    i128::try_from(rounded).map(Some).map_err(|_| ())
}

/// `floor(log_1024(value))` from the bit length, clamped to the suffix table.
fn magnitude_bracket(value: u128) -> usize {
    let log2 = (u128::BITS - 1 - value.leading_zeros()) as usize;
    (log2 / 10).min(LAST_BRACKET)
}

/// A decimal magnitude: whole part plus a fixed number of fractional digits.
#[derive(Debug, PartialEq, Eq)]
struct Scaled {
    whole: u128,
    fraction: Vec<u8>,
}

impl Scaled {
    fn zero(places: usize) -> Self {
        Scaled { whole: 0, fraction: vec![0; places] }
    }

    /// `value / 1024^bracket` rounded half away from zero to `places` digits.
    fn round(value: u128, bracket: usize, places: usize) -> Self {
        let shift = bracket as u32 * 10;
        let mask = (1u128 << shift) - 1;
        let mut whole = value >> shift;
        let mut remainder = value & mask;

        let mut fraction = Vec::with_capacity(places);
        while fraction.len() < places && remainder != 0 {
            remainder *= 10;
            fraction.push((remainder >> shift) as u8);
            remainder &= mask;
        }
        fraction.resize(places, 0);

        if shift > 0 && remainder >= 1u128 << (shift - 1) {
            let mut carry = true;
            for digit in fraction.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                whole += 1;
            }
        }

        Scaled { whole, fraction }
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.whole)?;
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            for digit in &self.fraction {
                write!(f, "{digit}")?;
            }
        }
        Ok(())
    }
}
