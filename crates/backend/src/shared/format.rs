/// Formats a number with comma thousands separators
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(56000000), "56,000,000");
/// assert_eq!(format_number(-1500), "-1,500");
/// ```
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Amount in rupees, e.g. "₹56,000,000"
pub fn format_inr(amount: i64) -> String {
    if amount < 0 {
        format!("-₹{}", format_number(amount).trim_start_matches('-'))
    } else {
        format!("₹{}", format_number(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1234), "-1,234");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(56_000_000), "₹56,000,000");
        assert_eq!(format_inr(-500), "-₹500");
    }
}
