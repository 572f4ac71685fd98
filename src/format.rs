//! Display formatting for derived metrics
//!
//! Numbers are grouped with thousand separators and rounded to at most three
//! fraction digits, matching the locale formatting the reports were designed
//! around. Non-finite values are rendered literally (`NaN`, `Infinity`);
//! degenerate inputs are visible on screen instead of being masked.

/// Format a number with thousand separators
///
/// Rounds to at most 3 fraction digits and trims trailing zeros:
/// `8411040.0` -> `"8,411,040"`, `4672.8` -> `"4,672.8"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let rounded = (value.abs() * 1000.0).round() / 1000.0;

    let mut digits = format!("{:.3}", rounded);
    while digits.ends_with('0') {
        digits.pop();
    }
    if digits.ends_with('.') {
        digits.pop();
    }

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (digits, None),
    };

    let mut result = String::new();
    if negative {
        result.push('-');
    }

    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(&frac);
    }

    result
}

/// Format a currency amount, e.g. `"4,672.8 SAR"`
pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{} {}", format_number(value), currency)
}

/// Format a percentage rounded to one decimal place, e.g. `"20.9%"`
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity%" } else { "-Infinity%" }.to_string();
    }
    format!("{:.1}%", value)
}
