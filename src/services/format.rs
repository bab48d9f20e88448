/// Display formatting shared by the report tables: currency as `$` with two
/// decimals, percentages with one decimal and a `%` suffix. Negative
/// amounts keep the sign ahead of the `$`.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_two_decimals() {
        assert_eq!(format_currency(63.9), "$63.90");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }

    #[test]
    fn negative_currency_puts_the_sign_first() {
        assert_eq!(format_currency(-12.5), "-$12.50");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(36.1), "36.1%");
        assert_eq!(format_percent(-5.25), "-5.2%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
