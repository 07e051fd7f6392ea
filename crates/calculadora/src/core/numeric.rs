//! Lenient operand parsing and result formatting
//!
//! Parsing accepts the longest numeric prefix of the input and ignores the
//! rest, so `"12abc"` is `12` and `" .5"` is `0.5`. Formatting renders whole
//! numbers without a decimal point and everything else with four fixed
//! decimals.

use tracing::trace;

/// Number of decimals shown for non-integer results
pub const FIXED_DECIMALS: usize = 4;

const FIXED_SCALE: u128 = 10_u128.pow(FIXED_DECIMALS as u32);

/// Magnitudes at or above this switch to exponent notation
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitudes below this switch to exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

/// Parses the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped (Unicode spaces, line terminators and
/// U+FEFF, but not U+0085). The prefix is an optional sign followed
/// by either `Infinity` or a decimal literal (`12`, `1.5`, `.5`, `5.`,
/// `1e3`); an exponent marker without digits is left unconsumed. Returns
/// `None` when there is no prefix at all.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let text = input.trim_start_matches(is_leading_space);
    let bytes = text.as_bytes();

    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        trace!(input, "no numeric prefix");
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // The prefix is ASCII, so `end` is a char boundary.
    text[..end].parse().ok()
}

/// `char::is_whitespace` plus the byte-order mark, minus NEL
fn is_leading_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns true for finite values with no fractional part
#[must_use]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.trunc() == value
}

/// Formats a computation outcome for display.
///
/// Integers render without a decimal point, anything else with exactly
/// [`FIXED_DECIMALS`] decimals, rounding half away from zero.
#[must_use]
pub fn format_result(value: f64) -> String {
    if is_integer(value) {
        format_number(value)
    } else {
        format_fixed(value)
    }
}

/// Formats a number with its shortest round-trip representation.
///
/// Used for history operands: `4`, `3.5`, `0.1`, `1e-7`, `1e+21`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        // Also covers -0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        exponent_form(value)
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Fixed-point formatting with exact half-away-from-zero rounding.
///
/// `format!("{:.4}")` rounds exact ties to even (`1.03125` -> `1.0312`), so
/// the digits are taken from a longer expansion and rounded here. Eighty
/// places are exact for every value whose fifth decimal can be non-zero.
fn format_fixed(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }

    let expansion = format!("{:.80}", value.abs());
    let (whole, fraction) = expansion
        .split_once('.')
        .unwrap_or((expansion.as_str(), ""));

    let mut scaled = whole
        .bytes()
        .chain(fraction.bytes().take(FIXED_DECIMALS))
        .fold(0_u128, |acc, digit| acc * 10 + u128::from(digit - b'0'));
    if fraction
        .as_bytes()
        .get(FIXED_DECIMALS)
        .is_some_and(|digit| *digit >= b'5')
    {
        scaled += 1;
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!(
        "{sign}{}.{:0width$}",
        scaled / FIXED_SCALE,
        scaled % FIXED_SCALE,
        width = FIXED_DECIMALS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== parse_number =====

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_number("4"), Some(4.0));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_number("3.25"), Some(3.25));
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(parse_number("-7"), Some(-7.0));
        assert_eq!(parse_number("+7"), Some(7.0));
    }

    #[test]
    fn test_parse_leading_whitespace() {
        assert_eq!(parse_number("   42"), Some(42.0));
        assert_eq!(parse_number("\t\n 1.5"), Some(1.5));
        assert_eq!(parse_number("\u{FEFF}8"), Some(8.0));
    }

    #[test]
    fn test_parse_next_line_is_not_whitespace() {
        assert_eq!(parse_number("\u{85}12"), None);
        assert_eq!(parse_number("\u{2028}\u{3000}12"), Some(12.0));
        assert_eq!(parse_number("\u{A0}\u{B}\u{C}12"), Some(12.0));
    }

    #[test]
    fn test_parse_trailing_garbage_ignored() {
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("3.5 apples"), Some(3.5));
        assert_eq!(parse_number("1.2.3"), Some(1.2));
        assert_eq!(parse_number("7-2"), Some(7.0));
    }

    #[test]
    fn test_parse_bare_fraction_and_trailing_dot() {
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-.25"), Some(-0.25));
        assert_eq!(parse_number("5."), Some(5.0));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
        assert_eq!(parse_number("1e+2x"), Some(100.0));
    }

    #[test]
    fn test_parse_dangling_exponent_not_consumed() {
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("1e+"), Some(1.0));
        assert_eq!(parse_number("4E-z"), Some(4.0));
    }

    #[test]
    fn test_parse_huge_exponent_is_infinite() {
        assert_eq!(parse_number("1e999"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_infinity_literal() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinityxyz"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn test_parse_no_prefix() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("+.e5"), None);
        assert_eq!(parse_number("e5"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_parse_hex_stops_at_x() {
        assert_eq!(parse_number("0x10"), Some(0.0));
    }

    #[test]
    fn test_parse_non_ascii_suffix() {
        assert_eq!(parse_number("9€"), Some(9.0));
        assert_eq!(parse_number("ñ9"), None);
    }

    // ===== format_result =====

    #[test]
    fn test_format_integer_result() {
        assert_eq!(format_result(9.0), "9");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_format_fraction_pads_to_four() {
        assert_eq!(format_result(3.5), "3.5000");
        assert_eq!(format_result(-2.5), "-2.5000");
        assert_eq!(format_result(0.1), "0.1000");
    }

    #[test]
    fn test_format_fraction_rounds() {
        assert_eq!(format_result(1.0 / 3.0), "0.3333");
        assert_eq!(format_result(2.0 / 3.0), "0.6667");
        assert_eq!(format_result(0.1 + 0.2), "0.3000");
        assert_eq!(format_result(10.234_56), "10.2346");
    }

    #[test]
    fn test_format_exact_tie_rounds_away_from_zero() {
        // 1.03125 = 33/32 is exactly representable
        assert_eq!(format_result(1.031_25), "1.0313");
        assert_eq!(format_result(-1.031_25), "-1.0313");
        assert_eq!(format_result(0.031_25), "0.0313");
    }

    #[test]
    fn test_format_rounds_up_into_whole_part() {
        assert_eq!(format_result(9.999_99), "10.0000");
    }

    #[test]
    fn test_format_tiny_fraction() {
        assert_eq!(format_result(0.000_01), "0.0000");
        assert_eq!(format_result(-0.000_01), "-0.0000");
    }

    #[test]
    fn test_format_large_integer() {
        assert_eq!(format_result(1e20), "100000000000000000000");
        assert_eq!(format_result(1e21), "1e+21");
        assert_eq!(format_result(1.5e300), "1.5e+300");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    // ===== format_number =====

    #[test]
    fn test_format_number_shortest() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-12.75), "-12.75");
    }

    #[test]
    fn test_format_number_small_uses_exponent() {
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_format_number_large_uses_exponent() {
        assert_eq!(format_number(123_456_789.0), "123456789");
        assert_eq!(format_number(1e21), "1e+21");
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(3.0));
        assert!(is_integer(-0.0));
        assert!(!is_integer(3.5));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NAN));
    }
}
