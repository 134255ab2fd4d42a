//! Per-minute salary rate calculation.

use crate::models::PayrollConfig;

/// Returns the value one minute of required work is worth.
///
/// The monthly salary is spread evenly over the total expected minutes of
/// the month: `working_days * required_daily_hours * 60`. Both the
/// missing-time penalty and the overtime bonus are priced at this rate.
///
/// The caller is expected to have validated the configuration first
/// ([`PayrollConfig::is_valid`]); with degenerate scalars the division
/// produces infinity or NaN rather than a usable rate.
///
/// # Arguments
///
/// * `config` - The payroll configuration supplying the three scalars
///
/// # Examples
///
/// ```
/// use salary_adjuster::calculation::salary_per_minute;
/// use salary_adjuster::models::PayrollConfig;
///
/// // 30000 over 2 days of 8 hours: 960 expected minutes.
/// let config = PayrollConfig::new(30000.0, 2.0, 8.0);
/// assert_eq!(salary_per_minute(&config), 31.25);
/// ```
pub fn salary_per_minute(config: &PayrollConfig) -> f64 {
    let total_expected_minutes = config.working_days * config.required_daily_hours * 60.0;
    config.monthly_salary / total_expected_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_over_single_day() {
        let config = PayrollConfig::new(30000.0, 1.0, 8.0);
        assert_eq!(salary_per_minute(&config), 62.5);
    }

    #[test]
    fn test_rate_over_two_days() {
        let config = PayrollConfig::new(30000.0, 2.0, 8.0);
        assert_eq!(salary_per_minute(&config), 31.25);
    }

    #[test]
    fn test_rate_scales_with_required_hours() {
        let eight = PayrollConfig::new(24000.0, 20.0, 8.0);
        let four = PayrollConfig::new(24000.0, 20.0, 4.0);
        assert_eq!(salary_per_minute(&four), salary_per_minute(&eight) * 2.0);
    }

    #[test]
    fn test_degenerate_config_yields_non_finite_rate() {
        // Not a usable rate; evaluation rejects such configs before
        // reaching this function.
        let zero_days = PayrollConfig::new(30000.0, 0.0, 8.0);
        assert!(salary_per_minute(&zero_days).is_infinite());

        let nan_salary = PayrollConfig::new(f64::NAN, 22.0, 8.0);
        assert!(salary_per_minute(&nan_salary).is_nan());
    }
}
