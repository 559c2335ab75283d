/// Utilities for date and amount formatting
///
/// Provides consistent formatting across the order list and detail panel
use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Format a monetary amount, dropping the fraction when it is whole
/// Example: 30.0 -> "30", 7.5 -> "7.50"
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "15.03.2024");

        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&dt), "31.12.2024");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(30.0), "30");
        assert_eq!(format_amount(7.5), "7.50");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(1234.567), "1234.57");
    }
}
