//! Terminal formatting helpers for reports
//!
//! Shared formatting for amounts, percentages, and section rules used by
//! the report renderers.

/// Format an amount in millions of euros with thousands separators
///
/// Whole amounts render without decimals ("41 500 M€"), fractional ones
/// with a single decimal ("212.5 M€").
pub fn format_millions(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{} M€", group_thousands(amount as i64))
    } else {
        format!("{:.1} M€", amount)
    }
}

/// Format an integer count with thousands separators
pub fn format_count(count: u64) -> String {
    group_thousands(count as i64)
}

/// Format a percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a percentage with an explicit sign, as used for growth rates
pub fn format_signed_percentage(pct: f64) -> String {
    format!("{:+.1}%", pct)
}

/// Section separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Top-level section separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Insert thin-space thousands separators into an integer
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions_whole() {
        assert_eq!(format_millions(41_500.0), "41 500 M€");
    }

    #[test]
    fn test_format_millions_fractional() {
        assert_eq!(format_millions(212.5), "212.5 M€");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(8_500_000), "8 500 000");
        assert_eq!(format_count(900), "900");
    }

    #[test]
    fn test_format_signed_percentage() {
        assert_eq!(format_signed_percentage(4.35), "+4.3%");
        assert_eq!(format_signed_percentage(-2.0), "-2.0%");
        assert_eq!(format_signed_percentage(0.0), "+0.0%");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(5), "-----");
        assert_eq!(double_separator(3), "===");
    }
}
