//! Lenient decimal parsing and fixed-point rendering for result strings.
//!
//! Result strings are free text typed by people and bots, so parsing takes the
//! longest numeric prefix and never fails: no prefix at all yields `NaN`.
//! Rendering rounds half away from zero on the exact binary value, which is not
//! what `format!("{:.N}")` does on exact ties.

/// Largest precision accepted by [`to_fixed`]; larger requests are clamped.
pub const MAX_FIXED_DIGITS: usize = 100;

/// Enough fractional digits to hold the exact expansion of any `f64`.
const EXACT_DIGITS: usize = 1100;

pub(crate) fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Parses the longest decimal prefix of `text` after leading blanks.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and the literal `Infinity`. Trailing garbage is ignored.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start_matches(is_blank);
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
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

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders `value` with exactly `digits` fractional digits.
///
/// The nearest representation wins; an exact tie rounds away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FIXED_DIGITS);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.abs() >= 1e21 {
        return number_to_string(value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|d| *d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|d| *d as char));
    }
    out
}

/// Shortest round-trip rendering, switching to exponent form outside
/// `[1e-6, 1e21)`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("5.3"), 5.3);
        assert_eq!(parse_float("21.69"), 21.69);
        assert_eq!(parse_float("36"), 36.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("-2.5"), -2.5);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
    }

    #[test]
    fn test_parse_float_takes_longest_prefix() {
        assert_eq!(parse_float("  12.5s"), 12.5);
        assert_eq!(parse_float("1:05.22"), 1.0);
        assert_eq!(parse_float("3.1.4"), 3.1);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("\u{feff}\u{a0}4"), 4.0);
    }

    #[test]
    fn test_parse_float_without_prefix_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("e5").is_nan());
        assert!(parse_float("DNF").is_nan());
    }

    #[test]
    fn test_parse_float_infinity_literal() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("+Infinityx"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("infinity").is_nan());
    }

    #[test]
    fn test_to_fixed_rounds_exact_ties_up() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(5.5, 1), "5.5");
    }

    #[test]
    fn test_to_fixed_uses_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(22.099000000000004, 3), "22.099");
    }

    #[test]
    fn test_to_fixed_carries() {
        assert_eq!(to_fixed(9.9999, 3), "10.000");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(40.0, 0), "40");
    }

    #[test]
    fn test_to_fixed_special_values() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(1.0, 500).len(), 2 + MAX_FIXED_DIGITS);
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(2.0), "2");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e22), "1.5e+22");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NAN), "NaN");
    }
}
