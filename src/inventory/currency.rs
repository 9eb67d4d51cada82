//! Money formatting for the table and the total metric

use rust_decimal::Decimal;

use crate::models::equipment::round_amount;

/// Amount with grouped thousands and exactly two fractional digits.
pub fn format_amount(value: Decimal, thousands_sep: char, decimal_sep: char) -> String {
    let rounded = round_amount(value);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(thousands_sep);
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}{}", sign, grouped, decimal_sep, frac_part)
}

/// Per-row value: "." groups thousands, "," separates decimals (`R$ 1.234,56`).
pub fn format_row_value(value: Decimal, symbol: &str) -> String {
    format!("{} {}", symbol, format_amount(value, '.', ','))
}

/// Total metric: "," groups thousands, "." separates decimals (`R$ 1,234.56`).
pub fn format_total_value(value: Decimal, symbol: &str) -> String {
    format!("{} {}", symbol, format_amount(value, ',', '.'))
}
