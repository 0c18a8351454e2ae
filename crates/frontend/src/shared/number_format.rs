//! Number formatting for tables and stat cards

/// Formats a number with a thousands separator and the given decimals
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2, ',');
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

/// "$1,234.56"; negative amounts as "-$12.00"
pub fn format_currency(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2, ',');
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0, ',')
}
