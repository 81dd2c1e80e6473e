//! Error metrics for comparing an approximation against a reference.
//!
//! Every function takes the measured values and the reference ("control")
//! values as parallel slices of the same length.

/// Sum `values` using Neumaier's variant of Kahan summation.
pub fn precise_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0f64;
    let mut correction = 0.0f64;
    for x in values {
        let new_sum = sum + x;
        if sum.abs() >= x.abs() {
            correction += (sum - new_sum) + x;
        } else {
            correction += (x - new_sum) + sum;
        }
        sum = new_sum;
    }
    sum + correction
}

/// Return `|1 - |measure / control||`, or `None` if `control` is zero.
pub fn relative_error(measure: f64, control: f64) -> Option<f64> {
    if control == 0.0 {
        None
    } else {
        Some((1.0 - (measure / control).abs()).abs())
    }
}

fn check_lengths(measure: &[f64], control: &[f64]) {
    assert!(!measure.is_empty(), "no samples");
    assert_eq!(measure.len(), control.len(), "sample counts differ");
}

/// Largest absolute difference between corresponding values.
pub fn absolute_max_error(measure: &[f64], control: &[f64]) -> f64 {
    check_lengths(measure, control);
    measure
        .iter()
        .zip(control)
        .map(|(m, c)| (m - c).abs())
        .fold(0.0, f64::max)
}

/// Mean absolute difference between corresponding values.
pub fn absolute_average_error(measure: &[f64], control: &[f64]) -> f64 {
    check_lengths(measure, control);
    let sum = precise_sum(measure.iter().zip(control).map(|(m, c)| (m - c).abs()));
    sum / measure.len() as f64
}

/// Largest [`relative_error`], skipping samples where the control is zero.
pub fn relative_max_error(measure: &[f64], control: &[f64]) -> f64 {
    check_lengths(measure, control);
    measure
        .iter()
        .zip(control)
        .filter_map(|(&m, &c)| relative_error(m, c))
        .fold(0.0, f64::max)
}

/// Mean [`relative_error`] over the samples where the control is non-zero.
pub fn relative_average_error(measure: &[f64], control: &[f64]) -> f64 {
    check_lengths(measure, control);
    let errors: Vec<f64> = measure
        .iter()
        .zip(control)
        .filter_map(|(&m, &c)| relative_error(m, c))
        .collect();
    assert!(!errors.is_empty(), "every control value is zero");
    precise_sum(errors.iter().copied()) / errors.len() as f64
}

/// Root-mean-square difference between corresponding values.
pub fn rms_error(measure: &[f64], control: &[f64]) -> f64 {
    check_lengths(measure, control);
    let sum = precise_sum(measure.iter().zip(control).map(|(m, c)| (m - c).powi(2)));
    (sum / measure.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precise_sum() {
        // Naive summation loses the small terms entirely.
        let values = [1e16, 1.0, -1e16, 1.0];
        assert_eq!(values.iter().sum::<f64>(), 1.0);
        assert_eq!(precise_sum(values), 2.0);
        assert_eq!(precise_sum([]), 0.0);
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(2.0, 0.0), None);
        assert_eq!(relative_error(1.5, 1.0), Some(0.5));
        assert_eq!(relative_error(-2.0, 2.0), Some(0.0));
    }

    #[test]
    fn test_error_metrics() {
        let measure = [1.0, 2.5, -3.0, 0.5];
        let control = [1.0, 2.0, -2.0, 0.0];

        assert_eq!(absolute_max_error(&measure, &control), 1.0);
        assert_eq!(absolute_average_error(&measure, &control), 0.5);
        assert_eq!(relative_max_error(&measure, &control), 0.5);
        assert_eq!(relative_average_error(&measure, &control), 0.25);
        assert_eq!(rms_error(&measure, &control), (1.5f64 / 4.0).sqrt());
    }

    #[test]
    #[should_panic(expected = "sample counts differ")]
    fn test_mismatched_lengths() {
        absolute_max_error(&[1.0], &[1.0, 2.0]);
    }
}
