use crate::core::data::viewport::ViewportError;

pub const MIN_ITERATIONS: u32 = 250;
pub const MAX_ITERATIONS: u32 = 1500;
const ITERATIONS_PER_LOG_ZOOM: f64 = 100.0;

/// Iteration budget for a zoom level: `clamp(round(250 + 100 ln zoom), 250, 1500)`.
pub fn max_iterations_for_zoom(zoom_factor: f64) -> Result<u32, ViewportError> {
    if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
        return Err(ViewportError::InvalidZoom(zoom_factor));
    }

    let budget = (f64::from(MIN_ITERATIONS) + zoom_factor.ln() * ITERATIONS_PER_LOG_ZOOM).round();

    Ok(budget.clamp(f64::from(MIN_ITERATIONS), f64::from(MAX_ITERATIONS)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_at_and_below_unit_zoom() {
        assert_eq!(max_iterations_for_zoom(1.0).unwrap(), 250);
        assert_eq!(max_iterations_for_zoom(0.4).unwrap(), 250);
        assert_eq!(max_iterations_for_zoom(1e-12).unwrap(), 250);
    }

    #[test]
    fn test_grows_with_log_zoom() {
        // ln(10) * 100 = 230.26
        assert_eq!(max_iterations_for_zoom(10.0).unwrap(), 480);
        // ln(e^2) * 100 = 200
        assert_eq!(max_iterations_for_zoom(std::f64::consts::E.powi(2)).unwrap(), 450);
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(max_iterations_for_zoom(1e6).unwrap(), 1500);
        assert_eq!(max_iterations_for_zoom(1e300).unwrap(), 1500);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut previous = 0;
        let mut zoom = 1.0;

        while zoom < 1e8 {
            let budget = max_iterations_for_zoom(zoom).unwrap();
            assert!(budget >= previous, "budget dropped at zoom {}", zoom);
            assert!((MIN_ITERATIONS..=MAX_ITERATIONS).contains(&budget));
            previous = budget;
            zoom *= 1.05;
        }

        let mut zoom = 1.0;
        while zoom > 1e-8 {
            let budget = max_iterations_for_zoom(zoom).unwrap();
            assert!((MIN_ITERATIONS..=MAX_ITERATIONS).contains(&budget));
            zoom /= 1.3;
        }
    }

    #[test]
    fn test_rejects_non_positive_zoom() {
        assert_eq!(
            max_iterations_for_zoom(0.0),
            Err(ViewportError::InvalidZoom(0.0))
        );
        assert!(max_iterations_for_zoom(-2.0).is_err());
        assert!(max_iterations_for_zoom(f64::NAN).is_err());
    }
}
