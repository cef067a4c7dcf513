//! Fixed-point parsing of decimal strings into integer contract arguments.
//!
//! `parse_units("1.5", 2)` reads the value as a fixed-point number with two
//! fractional digits and yields `"150"`. With zero decimals the input is just
//! validated and normalized, which is what whole-number contract arguments use.
use crate::error::ClientError;

/// Parses `value` as a fixed-point number with `decimals` fractional digits
/// and returns the scaled integer.
///
/// Thousands separators (`,`) are ignored and an empty integer part reads as
/// zero. Fractional digits past `decimals` are accepted only when they are
/// all zeros, so `"100.0"` at zero decimals is `100` while `"100.5"` is an
/// error.
pub fn parse_units_u128(value: &str, decimals: u32) -> Result<u128, ClientError> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(ClientError::ConversionError(
            "Cannot parse an empty value".to_string(),
        ));
    }

    let (units, fraction) = match cleaned.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (cleaned.as_str(), ""),
    };

    if units.is_empty() && fraction.is_empty() {
        return Err(ClientError::ConversionError(format!(
            "Value '{}' has no digits",
            value
        )));
    }
    if let Some(bad) = units.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(ClientError::ConversionError(format!(
            "Invalid character '{}' in '{}'",
            bad, value
        )));
    }

    let significant = fraction.trim_end_matches('0');
    let scale = decimals as usize;
    if significant.len() > scale {
        return Err(ClientError::ConversionError(format!(
            "Decimal can't have more than {} digits: '{}'",
            decimals, value
        )));
    }

    let mut digits = String::with_capacity(units.len() + scale);
    digits.push_str(units);
    digits.push_str(significant);
    digits.extend(std::iter::repeat('0').take(scale - significant.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }

    digits.parse::<u128>().map_err(|e| {
        ClientError::ConversionError(format!("Value '{}' out of range: {}", value, e))
    })
}

/// String flavour of [`parse_units_u128`], returning the scaled integer in
/// decimal notation.
pub fn parse_units(value: &str, decimals: u32) -> Result<String, ClientError> {
    parse_units_u128(value, decimals).map(|amount| amount.to_string())
}
