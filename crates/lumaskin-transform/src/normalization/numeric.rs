//! Numeric normalization utilities.

/// Parses the longest decimal prefix of a string.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. Trailing text is ignored, so `"4.5 stars"` yields
/// `4.5`. Returns `None` when no digits lead the string or the value is not
/// finite.
pub fn parse_leading_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Cleans a price string down to a parseable decimal.
///
/// Currency symbols, letters and spaces are dropped. When the value has a
/// comma but no period, a trailing two-digit comma group is taken as the
/// decimal separator ("12,50" is 12.50). Any remaining commas are thousands
/// separators and are removed ("1,234" is 1234).
pub fn clean_price_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let with_decimal = if cleaned.contains(',') && !cleaned.contains('.') {
        decimal_comma_to_period(&cleaned)
    } else {
        cleaned
    };

    with_decimal.replace(',', "")
}

/// Rewrites a trailing `,dd` group as `.dd`.
fn decimal_comma_to_period(value: &str) -> String {
    let bytes = value.as_bytes();
    let len = bytes.len();
    if len >= 3
        && bytes[len - 3] == b','
        && bytes[len - 2].is_ascii_digit()
        && bytes[len - 1].is_ascii_digit()
    {
        format!("{}.{}", &value[..len - 3], &value[len - 2..])
    } else {
        value.to_string()
    }
}

/// Parses a count from the digits of a string, ignoring everything else.
///
/// Returns `None` when there are no digits or the count overflows.
pub fn parse_count(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_decimal("12.5"), Some(12.5));
        assert_eq!(parse_leading_decimal("4.5 stars"), Some(4.5));
        assert_eq!(parse_leading_decimal(".5"), Some(0.5));
        assert_eq!(parse_leading_decimal("5."), Some(5.0));
        assert_eq!(parse_leading_decimal("-3"), Some(-3.0));
        assert_eq!(parse_leading_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_leading_decimal("2e"), Some(2.0));
        assert_eq!(parse_leading_decimal("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("-"), None);
        assert_eq!(parse_leading_decimal("."), None);
        assert_eq!(parse_leading_decimal("abc"), None);
        assert_eq!(parse_leading_decimal("1e999"), None);
    }

    #[test]
    fn test_clean_price_text() {
        assert_eq!(clean_price_text("12,50"), "12.50");
        assert_eq!(clean_price_text("1,234"), "1234");
        assert_eq!(clean_price_text("$1,234.56"), "1234.56");
        assert_eq!(clean_price_text("£ 9.99"), "9.99");
        assert_eq!(clean_price_text("1.299,00 €"), "1.29900");
        assert_eq!(clean_price_text("1,234,50"), "1234.50");
        assert_eq!(clean_price_text("N/A"), "");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1,234"), Some(1234));
        assert_eq!(parse_count("(87 reviews)"), Some(87));
        assert_eq!(parse_count("none"), None);
        assert_eq!(parse_count("99999999999999999999999"), None);
    }
}
