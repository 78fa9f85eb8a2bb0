//! Boundary normalization of user-entered numbers

/// Parse a form field into a number.
///
/// Surrounding whitespace is ignored. Empty text, unparseable text and
/// non-finite results all become 0.
pub fn normalize_input(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Value to show for a computed figure: 0 when it is NaN or infinite
pub fn display_value(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  12.5 "), 12.5);
        assert_eq!(normalize_input("-0.25"), -0.25);
        assert_eq!(normalize_input("400000"), 400_000.0);
        assert_eq!(normalize_input(""), 0.0);
        assert_eq!(normalize_input("abc"), 0.0);
        assert_eq!(normalize_input("NaN"), 0.0);
        assert_eq!(normalize_input("inf"), 0.0);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(13.21), 13.21);
        assert_eq!(display_value(f64::NAN), 0.0);
        assert_eq!(display_value(f64::NEG_INFINITY), 0.0);
    }
}
