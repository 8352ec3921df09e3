//! Brazilian number formatting for reports.

use rust_decimal::Decimal;

/// Formats an amount as Brazilian currency, e.g. `R$ 1.234.567,89`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (integer, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(integer))
}

/// Formats a percentage with two decimal places, e.g. `25,46%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format!("{:.2}", value.round_dp(2)).replace('.', ","))
}

/// Formats an annual rate, e.g. `14,75% a.a.`.
pub fn format_annual_percent(value: Decimal) -> String {
    format!("{} a.a.", format_percent(value))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
