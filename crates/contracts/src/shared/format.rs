//! Number formatting for report cards and labels

/// Format a number with a thousands separator (comma) and the given decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    // Insert a comma every 3 digits from the right
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money value with 2 decimals and thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Percentage with one decimal and an explicit sign, e.g. "+12.5%"
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(999.0), "999.00");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(-100000.0, 0), "-100,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0), "+100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-33.333), "-33.3%");
    }
}
