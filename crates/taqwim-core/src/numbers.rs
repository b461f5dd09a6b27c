//! Counter and digit formatting.

use crate::models::Numerals;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Short form for reaction and comment counters.
///
/// # Examples
///
/// ```rust
/// use taqwim_core::numbers::format_compact;
///
/// assert_eq!(format_compact(999), "999");
/// assert_eq!(format_compact(1_250), "1.3K");
/// assert_eq!(format_compact(3_400_000), "3.4M");
/// ```
pub fn format_compact(n: u64) -> String {
    match n {
        n if n >= 1_000_000 => with_one_decimal(n, 1_000_000, 'M'),
        n if n >= 1_000 => with_one_decimal(n, 1_000, 'K'),
        n => n.to_string(),
    }
}

// Half-up rounding to tenths, done in integers.
fn with_one_decimal(n: u64, divisor: u64, suffix: char) -> String {
    let tenths = (u128::from(n) * 10 + u128::from(divisor) / 2) / u128::from(divisor);
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

/// Rewrites ASCII digits in `text` using the requested digit set.
pub fn localize_digits(text: &str, numerals: Numerals) -> String {
    match numerals {
        Numerals::Latin => text.to_string(),
        Numerals::ArabicIndic => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
                _ => c,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_thresholds() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(12_345), "12.3K");
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(u64::MAX), "18446744073709.6M");
    }

    #[test]
    fn test_localize_digits() {
        assert_eq!(localize_digits("26 رجب 1447", Numerals::ArabicIndic), "٢٦ رجب ١٤٤٧");
        assert_eq!(localize_digits("08:30", Numerals::Latin), "08:30");
    }
}
