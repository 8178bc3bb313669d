//! Display formatting for money, units, and percentages.
//!
//! Amounts follow the Vietnamese convention of dot thousands separators.

use rust_decimal::Decimal;

/// Formats a VND amount: `1234567` becomes `1.234.567`.
pub fn vnd(value: Decimal) -> String {
    let text = value.round_dp(0).normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }
    format!("{sign}{grouped}")
}

/// Formats a unit quantity with up to three decimal places.
pub fn units(value: Decimal) -> String {
    value.round_dp(3).normalize().to_string()
}

/// Formats a signed percentage with two decimal places.
pub fn pct(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded >= Decimal::ZERO {
        format!("+{rounded:.2}%")
    } else {
        format!("{rounded:.2}%")
    }
}
