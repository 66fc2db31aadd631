//! Formatting utilities shared by the table renderers
//!
//! Centralizes Brazilian-locale display of currency, quantities and
//! percentages so every view formats values the same way.

use rust_decimal::Decimal;

/// Format a value using Brazilian locale conventions, two decimal places:
/// thousands separated by `.`, decimals by `,`. No currency symbol.
pub fn format_decimal_br(value: Decimal) -> String {
    let is_negative = value < Decimal::ZERO;
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    format!("{}{},{}", sign, with_separators, decimal_part)
}

/// Format as Brazilian Real: "R$ 1.234,56"
pub fn format_currency(value: Decimal) -> String {
    format!("R$ {}", format_decimal_br(value))
}

/// Format a whole quantity with thousands separators: "1.500"
pub fn format_quantity(value: i64) -> String {
    let is_negative = value < 0;
    let digits = value.abs().to_string();
    let with_separators: String = digits
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if is_negative {
        format!("-{}", with_separators)
    } else {
        with_separators
    }
}

/// Format a percentage with explicit sign: "+10,00%" / "-3,25%"
pub fn format_percent_signed(value: Decimal) -> String {
    let sign = if value >= Decimal::ZERO { "+" } else { "" };
    format!("{}{}%", sign, format_decimal_br(value))
}

/// Format a percentage without forcing a sign: "13,75%"
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_decimal_br(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_decimal_br() {
        assert_eq!(format_decimal_br(dec!(1234.56)), "1.234,56");
        assert_eq!(format_decimal_br(dec!(0)), "0,00");
        assert_eq!(format_decimal_br(dec!(-500)), "-500,00");
        assert_eq!(format_decimal_br(dec!(1000000)), "1.000.000,00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_currency(dec!(0.99)), "R$ 0,99");
        assert_eq!(format_currency(dec!(-1234.56)), "R$ -1.234,56");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(100), "100");
        assert_eq!(format_quantity(1500), "1.500");
        assert_eq!(format_quantity(-1500), "-1.500");
        assert_eq!(format_quantity(1234567), "1.234.567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent_signed(dec!(10)), "+10,00%");
        assert_eq!(format_percent_signed(dec!(-3.25)), "-3,25%");
        assert_eq!(format_percent(dec!(13.75)), "13,75%");
    }
}
