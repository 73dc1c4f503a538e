//! Tenure arithmetic for `years_at_company`.

/// Distance from a whole year that still counts as an anniversary.
pub const ANNIVERSARY_TOLERANCE: f64 = 0.1;

/// Render fractional years as "N years, M months".
///
/// Months are rounded, so values just under a whole year render as
/// "4 years, 12 months" rather than rolling over.
pub fn format_tenure(years: f64) -> String {
    let whole = years.floor();
    let months = ((years - whole) * 12.0).round() as u64;
    let whole = whole as u64;
    match (whole, months) {
        (0, 0) => "less than a month".to_string(),
        (0, m) => unit(m, "month"),
        (y, 0) => unit(y, "year"),
        (y, m) => format!("{}, {}", unit(y, "year"), unit(m, "month")),
    }
}

/// The anniversary year when `years` is within tolerance of a whole,
/// non-zero number of years.
pub fn anniversary(years: f64) -> Option<u64> {
    let nearest = years.round();
    if nearest >= 1.0 && (years - nearest).abs() < ANNIVERSARY_TOLERANCE {
        Some(nearest as u64)
    } else {
        None
    }
}

fn unit(n: u64, name: &str) -> String {
    if n == 1 {
        format!("1 {name}")
    } else {
        format!("{n} {name}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_boundary_is_kept() {
        assert_eq!(format_tenure(4.97), "4 years, 12 months");
    }

    #[test]
    fn whole_and_partial_years() {
        assert_eq!(format_tenure(3.0), "3 years");
        assert_eq!(format_tenure(2.5), "2 years, 6 months");
        assert_eq!(format_tenure(1.0), "1 year");
        assert_eq!(format_tenure(0.25), "3 months");
        assert_eq!(format_tenure(1.0 + 1.0 / 12.0), "1 year, 1 month");
        assert_eq!(format_tenure(0.0), "less than a month");
    }

    #[test]
    fn anniversary_uses_tolerance_not_equality() {
        assert_eq!(anniversary(4.97), Some(5));
        assert_eq!(anniversary(4.95), Some(5));
        assert_eq!(anniversary(5.05), Some(5));
        assert_eq!(anniversary(5.0), Some(5));
        assert_eq!(anniversary(5.2), None);
        assert_eq!(anniversary(4.85), None);
    }

    #[test]
    fn no_zero_year_anniversary() {
        assert_eq!(anniversary(0.05), None);
        assert_eq!(anniversary(0.95), Some(1));
    }
}
