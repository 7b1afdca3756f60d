//! Price formatting helpers
//!
//! Prices travel as dollar floats, matching the wire format of the order
//! endpoint.

/// Format a dollar amount for display
///
/// # Examples
///
/// ```
/// use tavola_tui::utils::price::format_usd;
///
/// assert_eq!(format_usd(12.5), "$12.50");
/// assert_eq!(format_usd(100.0), "$100.00");
/// ```
pub fn format_usd(dollars: f64) -> String {
    format!("${:.2}", dollars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(7.25), "$7.25");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1000.00");
    }
}
