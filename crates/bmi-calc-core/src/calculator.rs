//! BMI arithmetic.
//!
//! Formula: `weight_kg / (height_m * height_m)` with height entered in
//! centimeters. No rounding happens here; display precision belongs to the
//! presentation layer.

/// Centimeters per meter.
const CM_PER_M: f64 = 100.0;

/// Compute BMI from an optional height (cm) and weight (kg).
///
/// Returns `None` when either measurement is missing, not finite, or not
/// strictly positive, and when the arithmetic itself leaves the finite range.
///
/// # Examples
///
/// ```
/// use bmi_calc_core::calculator::calculate_bmi;
///
/// assert_eq!(calculate_bmi(Some(100.0), Some(40.0)), Some(40.0));
/// assert_eq!(calculate_bmi(None, Some(40.0)), None);
/// assert_eq!(calculate_bmi(Some(-10.0), Some(60.0)), None);
/// ```
pub fn calculate_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_cm = height_cm.filter(|h| is_valid_measurement(*h))?;
    let weight_kg = weight_kg.filter(|w| is_valid_measurement(*w))?;

    let height_m = height_cm / CM_PER_M;
    let bmi = weight_kg / (height_m * height_m);
    bmi.is_finite().then_some(bmi)
}

/// A measurement is usable when it is finite and strictly greater than zero.
pub fn is_valid_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn computes_known_values() {
        let bmi = calculate_bmi(Some(170.0), Some(65.0)).unwrap();
        assert!(approx_eq(bmi, 65.0 / (1.7 * 1.7)));
        assert!((bmi - 22.49).abs() < 0.01);

        let bmi = calculate_bmi(Some(150.0), Some(40.0)).unwrap();
        assert!((bmi - 17.78).abs() < 0.01);
    }

    #[test]
    fn exact_forty_at_one_meter() {
        assert_eq!(calculate_bmi(Some(100.0), Some(40.0)), Some(40.0));
    }

    #[test]
    fn missing_inputs_are_absent() {
        assert_eq!(calculate_bmi(None, Some(70.0)), None);
        assert_eq!(calculate_bmi(Some(170.0), None), None);
        assert_eq!(calculate_bmi(None, None), None);
    }

    #[test]
    fn non_positive_inputs_are_absent() {
        for (h, w) in [
            (0.0, 60.0),
            (-10.0, 60.0),
            (170.0, 0.0),
            (170.0, -5.0),
            (-0.0, 60.0),
            (0.0, 0.0),
        ] {
            assert_eq!(calculate_bmi(Some(h), Some(w)), None, "h={h} w={w}");
        }
    }

    #[test]
    fn non_finite_inputs_are_absent() {
        assert_eq!(calculate_bmi(Some(f64::NAN), Some(60.0)), None);
        assert_eq!(calculate_bmi(Some(170.0), Some(f64::INFINITY)), None);
        assert_eq!(calculate_bmi(Some(f64::INFINITY), Some(60.0)), None);
    }

    #[test]
    fn overflowing_result_is_absent() {
        // (1e-200 / 100)^2 underflows to zero, so the quotient would be infinite.
        assert_eq!(calculate_bmi(Some(1e-200), Some(60.0)), None);
    }

    #[test]
    fn matches_direct_arithmetic() {
        for h in [50.0, 120.5, 155.0, 170.0, 199.9, 250.0] {
            for w in [3.2, 40.0, 65.0, 88.8, 150.0] {
                let expected = w / ((h / 100.0) * (h / 100.0));
                let bmi = calculate_bmi(Some(h), Some(w)).unwrap();
                assert!(approx_eq(bmi, expected), "h={h} w={w}");
            }
        }
    }
}
