//! Number formatting for money and quantities

/// Groups digits by thousands: 56000000 -> "56,000,000"
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// "₹56,000,000"; negative amounts keep the sign in front
pub fn format_inr(amount: i64) -> String {
    if amount < 0 {
        format!("-₹{}", group_thousands(amount).trim_start_matches('-'))
    } else {
        format!("₹{}", group_thousands(amount))
    }
}

/// Project volume in crores, "₹125.0 Cr"
pub fn format_crores(volume: i64) -> String {
    format!("₹{:.1} Cr", volume as f64 / 10_000_000.0)
}

/// Quantity without a trailing ".0" for whole numbers
pub fn format_quantity(q: f64) -> String {
    if q.fract() == 0.0 && q.abs() < 1e15 {
        group_thousands(q as i64)
    } else {
        format!("{:.2}", q)
    }
}

/// Share of `part` in `total` as a whole percent; zero total gives 0
pub fn percent_of(part: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(56_000_000), "56,000,000");
        assert_eq!(group_thousands(-1_500), "-1,500");
    }

    #[test]
    fn test_money() {
        assert_eq!(format_inr(225_300_000), "₹225,300,000");
        assert_eq!(format_inr(-2_000), "-₹2,000");
        assert_eq!(format_crores(1_250_000_000), "₹125.0 Cr");
    }

    #[test]
    fn test_quantity_and_share() {
        assert_eq!(format_quantity(2500.0), "2,500");
        assert_eq!(format_quantity(12.5), "12.50");
        assert_eq!(percent_of(56, 224), 25.0);
        assert_eq!(percent_of(5, 0), 0.0);
    }
}
