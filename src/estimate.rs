//! π estimation and its display form.

/// Estimates π as `4 * inside / total`.
///
/// Returns `None` when `total == 0`, so an empty sample never divides by zero.
///
/// ```
/// use monte_carlo_pi::estimate::estimate_pi;
///
/// assert_eq!(estimate_pi(0, 0), None);
/// assert_eq!(estimate_pi(7, 10), Some(2.8));
/// ```
pub fn estimate_pi(inside: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    debug_assert!(inside <= total, "inside = {} > total = {}", inside, total);
    Some(4.0 * inside as f64 / total as f64)
}

/// Ratio `inside / total` in the same `None`-on-empty convention.
pub fn inside_ratio(inside: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(inside as f64 / total as f64)
    }
}

/// Number of decimal places shown for an estimate.
pub const DISPLAY_PRECISION: usize = 4;

/// Formats an estimate with [`DISPLAY_PRECISION`] decimals.
///
/// The undefined estimate is rendered as zero.
pub fn format_estimate(estimate: Option<f64>) -> String {
    format!("{:.*}", DISPLAY_PRECISION, estimate.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_empty_is_undefined() {
        assert_eq!(estimate_pi(0, 0), None);
        assert_eq!(inside_ratio(0, 0), None);
    }

    #[test]
    fn test_all_inside_is_four() {
        for k in [1, 10, 100, 12345] {
            assert_eq!(estimate_pi(k, k), Some(4.0));
        }
    }

    #[test]
    fn test_none_inside_is_zero() {
        assert_eq!(estimate_pi(0, 10), Some(0.0));
    }

    #[test]
    fn test_estimate_value() {
        assert_eq!(estimate_pi(3, 4), Some(3.0));
        assert_eq!(estimate_pi(79, 100), Some(3.16));
        assert_eq!(inside_ratio(1, 4), Some(0.25));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_estimate(None), "0.0000");
        assert_eq!(format_estimate(Some(4.0)), "4.0000");
        assert_eq!(format_estimate(estimate_pi(6, 10)), "2.4000");
        assert_eq!(format_estimate(estimate_pi(1, 3)), "1.3333");
        assert_eq!(format_estimate(estimate_pi(785, 1000)), "3.1400");
    }
}
