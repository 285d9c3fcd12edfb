// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use rust_decimal::prelude::*;

/// Formats a price with two decimals and comma thousands separators.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `99.125` becomes `99.13`.
pub fn format_price(value: f64) -> String {
    let Some(mut decimal) = Decimal::from_f64(value) else {
        return value.to_string();
    };
    decimal = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    decimal.rescale(2);

    let text = decimal.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an ASCII table with left-aligned, padded cells.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format!(" {:<width$} ", cells.get(i).copied().unwrap_or(""), width = w))
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let mut out = vec![separator.clone(), line(headers.to_vec()), separator.clone()];
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.push(separator);
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(100.5), "100.50");
        assert_eq!(format_price(103.0), "103.00");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(0.5), "0.50");
    }

    #[test]
    fn test_format_price_rounds_half_away_from_zero() {
        assert_eq!(format_price(99.125), "99.13");
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_price(102.254), "102.25");
        assert_eq!(format_price(999.999), "1,000.00");
    }

    #[test]
    fn test_format_price_thousands_separator() {
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(123456.0), "123,456.00");
        assert_eq!(format_price(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_price_non_finite() {
        assert_eq!(format_price(f64::NAN), "NaN");
    }

    #[test]
    fn test_render_table() {
        let table = render_table(
            &["Open", "Close", "High", "Low"],
            &[vec![
                "100.50".to_string(),
                "102.25".to_string(),
                "103.00".to_string(),
                "99.13".to_string(),
            ]],
        );

        let expected = "\
+--------+--------+--------+-------+
| Open   | Close  | High   | Low   |
+--------+--------+--------+-------+
| 100.50 | 102.25 | 103.00 | 99.13 |
+--------+--------+--------+-------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_table_header_wider_than_cells() {
        let table = render_table(&["Currency"], &[vec!["usd".to_string()]]);
        assert!(table.contains("| Currency |"));
        assert!(table.contains("| usd      |"));
    }
}
