//! Currency formatting for on-screen metrics and exported documents

/// Number of decimals shown for a currency amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPrecision {
    /// `$#,##0`, used on screen
    Whole,
    /// `$#,##0.00`, used in the exported document
    Cents,
}

impl CurrencyPrecision {
    fn decimals(self) -> usize {
        match self {
            CurrencyPrecision::Whole => 0,
            CurrencyPrecision::Cents => 2,
        }
    }
}

/// Format a dollar amount with thousands separators
pub fn format_currency(value: f64, precision: CurrencyPrecision) -> String {
    let formatted = format!("{:.*}", precision.decimals(), value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + formatted.len() / 3 + 2);

    // "-$0" would be noise for amounts that round to zero
    let rounds_to_zero = formatted.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_dollars() {
        assert_eq!(format_currency(1_343_135.77, CurrencyPrecision::Whole), "$1,343,136");
        assert_eq!(format_currency(750_000.0, CurrencyPrecision::Whole), "$750,000");
        assert_eq!(format_currency(999.4, CurrencyPrecision::Whole), "$999");
        assert_eq!(format_currency(0.0, CurrencyPrecision::Whole), "$0");
    }

    #[test]
    fn test_cents() {
        assert_eq!(format_currency(1_343_135.772, CurrencyPrecision::Cents), "$1,343,135.77");
        assert_eq!(format_currency(53_725.43, CurrencyPrecision::Cents), "$53,725.43");
        assert_eq!(format_currency(0.0, CurrencyPrecision::Cents), "$0.00");
        assert_eq!(format_currency(1_000.0, CurrencyPrecision::Cents), "$1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1_234.0, CurrencyPrecision::Whole), "-$1,234");
        assert_eq!(format_currency(-0.001, CurrencyPrecision::Cents), "$0.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(7.63), "7.63%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
