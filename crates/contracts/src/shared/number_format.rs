//! Number formatting for cards, tables and the executive summary

/// Format with a space as thousands separator and fixed decimals.
///
/// `format_number_with_decimals(1234.567, 2)` gives `"1 234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole numbers with separators: `1234567.0` -> `"1 234 567"`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Currency amount: decimals only when the amount has cents
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_int(value)
    } else {
        format_number_with_decimals(value, 2)
    }
}

/// Percentage value that is already scaled: `3.456` -> `"3.46%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1 234.50");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-123456.0), "-123 456");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12500.0), "12 500");
        assert_eq!(format_amount(12500.5), "12 500.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(3.456), "3.46%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
