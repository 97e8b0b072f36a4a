/// Parse the catalog price from the `value` attribute, falling back to the
/// visible text with non-digits stripped.
pub fn parse_price(value: Option<&str>, text: Option<&str>) -> Option<u64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<u64>().ok())
        .or_else(|| text.and_then(digits_only))
}

fn digits_only(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `original * (1 - percent/100)`, rounded to the nearest dollar.
///
/// Percentages above 100 are treated as 100.
pub fn calculate_discounted_price(original: Option<u64>, percent: u32) -> Option<u64> {
    let original = original?;
    let keep = 100 - u64::from(percent.min(100));
    Some(original.saturating_mul(keep).saturating_add(50) / 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_from_value() {
        assert_eq!(parse_price(Some("1995000"), Some("$1,995,000")), Some(1_995_000));
        assert_eq!(parse_price(Some(" 750000 "), None), Some(750_000));
    }

    #[test]
    fn test_parse_price_falls_back_to_text() {
        assert_eq!(parse_price(None, Some("$1,995,000")), Some(1_995_000));
        assert_eq!(parse_price(Some(""), Some("GTA$ 85,000")), Some(85_000));
        assert_eq!(parse_price(Some("n/a"), Some("$12,500")), Some(12_500));
    }

    #[test]
    fn test_parse_price_missing() {
        assert_eq!(parse_price(None, None), None);
        assert_eq!(parse_price(None, Some("Not for sale")), None);
    }

    #[test]
    fn test_discount_rounding() {
        assert_eq!(calculate_discounted_price(Some(1_000_000), 30), Some(700_000));
        assert_eq!(calculate_discounted_price(Some(1_995_000), 40), Some(1_197_000));
        // 333 * 0.5 = 166.5 -> 167
        assert_eq!(calculate_discounted_price(Some(333), 50), Some(167));
        assert_eq!(calculate_discounted_price(Some(999), 33), Some(669));
    }

    #[test]
    fn test_discount_without_original() {
        assert_eq!(calculate_discounted_price(None, 30), None);
    }

    #[test]
    fn test_discount_bounds() {
        assert_eq!(calculate_discounted_price(Some(500_000), 0), Some(500_000));
        assert_eq!(calculate_discounted_price(Some(500_000), 100), Some(0));
        assert_eq!(calculate_discounted_price(Some(500_000), 150), Some(0));
    }

    #[test]
    fn test_discount_huge_price_saturates() {
        assert_eq!(
            calculate_discounted_price(Some(u64::MAX / 10), 30),
            Some(u64::MAX / 100)
        );
        assert_eq!(calculate_discounted_price(Some(u64::MAX), 0), Some(u64::MAX / 100));
    }
}
