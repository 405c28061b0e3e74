//! Kubernetes resource quantity parsing.
//!
//! Turns quantity strings such as "1Gi", "128Mi", "250m" or "1e3" into
//! integers, rounding fractional results up the way Kubernetes does when a
//! quantity is read as a plain integer.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for quantity strings: sign, number, then an SI/binary suffix or a decimal exponent
static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+))([eE][+-]?\d+|Ki|Mi|Gi|Ti|Pi|Ei|n|u|m|k|M|G|T|P|E)?$")
        .unwrap()
});

/// Parse a quantity string to an integer.
///
/// The arithmetic is exact: the number is read as an integer mantissa and a
/// power of ten, so rounding up only happens when a fractional part remains.
///
/// # Examples
/// - "1Gi" -> 1073741824
/// - "64M" -> 64000000
/// - "1.068G" -> 1068000000
/// - "100m" -> 1
/// - "1e3" -> 1000
/// - "q35" -> None
pub fn parse_quantity(quantity: &str) -> Option<i64> {
    if let Ok(value) = quantity.parse::<i64>() {
        return Some(value);
    }

    let caps = QUANTITY_REGEX.captures(quantity)?;
    let number = caps.get(1)?.as_str();
    let suffix = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    let (negative, digits) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number.strip_prefix('+').unwrap_or(number)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let fraction = fraction.trim_end_matches('0');
    let significant = format!("{}{}", whole.trim_start_matches('0'), fraction);
    if significant.is_empty() {
        return Some(0);
    }
    // i128 holds any 38-digit mantissa
    if significant.len() > 38 {
        return None;
    }
    let mantissa: i128 = significant.parse().ok()?;

    // value = mantissa * 1024^binary_power * 10^decimal_exponent
    let (binary_power, decimal_exponent): (u32, i32) = match suffix {
        "" => (0, 0),
        "Ki" => (1, 0),
        "Mi" => (2, 0),
        "Gi" => (3, 0),
        "Ti" => (4, 0),
        "Pi" => (5, 0),
        "Ei" => (6, 0),
        "n" => (0, -9),
        "u" => (0, -6),
        "m" => (0, -3),
        "k" => (0, 3),
        "M" => (0, 6),
        "G" => (0, 9),
        "T" => (0, 12),
        "P" => (0, 15),
        "E" => (0, 18),
        exp => (0, exp[1..].parse::<i32>().ok()?),
    };
    let decimal_exponent = decimal_exponent.checked_sub(i32::try_from(fraction.len()).ok()?)?;

    let mut numerator = mantissa.checked_mul(1024i128.checked_pow(binary_power)?)?;
    if negative {
        numerator = -numerator;
    }

    let value = if decimal_exponent >= 0 {
        numerator.checked_mul(10i128.checked_pow(decimal_exponent.unsigned_abs())?)?
    } else {
        match 10i128.checked_pow(decimal_exponent.unsigned_abs()) {
            Some(denominator) => ceil_div(numerator, denominator),
            // |numerator| < 10^38 < denominator, so the value lies in (-1, 1)
            None => i128::from(numerator > 0),
        }
    };

    i64::try_from(value).ok()
}

/// Division rounding toward positive infinity.
fn ceil_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}
