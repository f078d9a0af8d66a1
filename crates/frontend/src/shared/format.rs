//! Number formatting for the sales dashboard (id-ID conventions)

/// Thousands separator used by the Indonesian locale
const GROUP_SEPARATOR: char = '.';

/// Currency prefix for Indonesian Rupiah
pub const CURRENCY_PREFIX: &str = "Rp ";

/// Rounds to a whole number and inserts a separator every 3 digits
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_grouped;
/// assert_eq!(format_grouped(1234567.4), "1.234.567");
/// assert_eq!(format_grouped(-1500.5), "-1.501");
/// ```
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    // f64::round is half-away-from-zero, same as Intl.NumberFormat
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(ch);
    }
    if rounded < 0.0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Formats an integer counter with thousands separators
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_count;
/// assert_eq!(format_count(1234567), "1.234.567");
/// assert_eq!(format_count(42), "42");
/// ```
pub fn format_count(value: i64) -> String {
    format_grouped(value as f64)
}

/// Formats an amount as Rupiah without fractional digits
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_currency;
/// assert_eq!(format_currency(1234567.0), "Rp 1.234.567");
/// assert_eq!(format_currency(29394.45), "Rp 29.394");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("{}{}", CURRENCY_PREFIX, format_grouped(amount))
}

/// Formats a percentage with one decimal, e.g. `"12.5%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
