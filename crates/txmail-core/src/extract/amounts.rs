//! Amount normalization for notification text.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::DECIMAL_TOKEN;

/// Normalize a locale-formatted amount (e.g., "1,234.50", "ETB -20") to a decimal.
///
/// Total: missing, empty, non-numeric or unrepresentable input yields zero.
pub fn normalize_amount(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    // Remove grouping separators
    let cleaned = raw.replace(',', "");

    DECIMAL_TOKEN
        .find(&cleaned)
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Format amount with comma grouping and two decimals (1,234.50).
pub fn format_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, formatted, decimal_part)
}
