//! Ranking keys, display formatting and write-time checks for result strings.
//!
//! A result string is one of `DNF`, `DNS`, plain seconds (`"5.3"`) or
//! minutes and seconds (`"1:05.22"`). Stored strings are kept exactly as
//! submitted; these functions derive everything else from the text.

use std::cmp::Ordering;

use super::decimal_text::{number_to_string, parse_float, to_fixed};

/// Fractional digits used when the submitted value has no decimal point.
const DEFAULT_PRECISION: usize = 2;

/// Returns `"DNF"` or `"DNS"` if `result` is one of them in any casing.
fn no_result_marker(result: &str) -> Option<String> {
    let upper = result.to_uppercase();
    matches!(upper.as_str(), "DNF" | "DNS").then_some(upper)
}

/// Ascending sort key for a result string: smaller is faster.
///
/// Empty strings, `DNF` and `DNS` map to `+∞`. A single `:` splits minutes
/// from seconds; anything else is read as seconds. Unparseable numbers give
/// `NaN`, which is kept as is rather than folded into `+∞`.
pub fn result_sort_key(result: &str) -> f64 {
    if result.is_empty() || no_result_marker(result).is_some() {
        return f64::INFINITY;
    }

    match result.split_once(':') {
        Some((minutes, seconds)) if !seconds.contains(':') => {
            parse_float(minutes) * 60.0 + parse_float(seconds)
        }
        _ => parse_float(result),
    }
}

/// Renders a stored result string for display.
///
/// Values of a minute or more are rewritten as `M:SS.fff`, keeping as many
/// fractional digits as the submitted text had (two when it had none).
/// Everything else is returned untouched, apart from `DNF`/`DNS` which are
/// upper-cased.
pub fn format_time_display(result: &str) -> String {
    if result.is_empty() {
        return String::new();
    }
    if let Some(marker) = no_result_marker(result) {
        return marker;
    }
    if result.contains(':') {
        return result.to_string();
    }

    let value = parse_float(result);
    if value.is_nan() || value < 60.0 {
        return result.to_string();
    }

    let minutes = (value / 60.0).floor();
    let remainder = value % 60.0;

    let mut seconds = to_fixed(remainder, fraction_precision(result));
    if remainder < 10.0 {
        seconds.insert(0, '0');
    }

    format!("{}:{}", number_to_string(minutes), seconds)
}

/// Counts the characters between the first and second `.` of the raw text.
fn fraction_precision(result: &str) -> usize {
    result
        .split('.')
        .nth(1)
        .map_or(DEFAULT_PRECISION, |fraction| fraction.encode_utf16().count())
}

/// Total order over sort keys used for ranking.
///
/// Finite keys ascend, `+∞` (no result) follows, and `NaN` comes last. Equal
/// keys compare equal so a stable sort keeps their submission order.
pub fn compare_sort_keys(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Strict shape check applied before a result is stored.
///
/// Accepts `DNF`/`DNS` in any ASCII casing, `SS[.fff]` and `M:SS[.fff]`.
pub fn is_well_formed_result(result: &str) -> bool {
    if result.eq_ignore_ascii_case("DNF") || result.eq_ignore_ascii_case("DNS") {
        return true;
    }

    let seconds = match result.split_once(':') {
        Some((minutes, seconds)) => {
            if !is_digits(minutes) {
                return false;
            }
            seconds
        }
        None => result,
    };

    match seconds.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(seconds),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
