//! Angle constants.
#![allow(clippy::approx_constant)]

pub const PI: f64 = 3.14159265358979323846;
pub const TWO_PI: f64 = 6.2831853071795864769;
pub const HALF_PI: f64 = 1.5707963267948966192;
pub const QUARTER_PI: f64 = 7.853981633974483096E-1;

pub const DEG_TO_RAD: f64 = 1.7453292519943295769236907684886E-2;
pub const RAD_TO_DEG: f64 = 57.295779513082320876798154814105;

/// Number of pieces a full period of sine or cosine is folded into before
/// table lookup. Only the first piece, `[0, π/4]`, is tabulated.
pub const SIN_COS_FOLDING_RATIO: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_agree_with_std() {
        assert_eq!(PI, std::f64::consts::PI);
        assert_eq!(TWO_PI, std::f64::consts::TAU);
        assert_eq!(HALF_PI, std::f64::consts::FRAC_PI_2);
        assert_eq!(QUARTER_PI, std::f64::consts::FRAC_PI_4);
        assert!((DEG_TO_RAD * RAD_TO_DEG - 1.0).abs() < 1e-15);
        assert_eq!(QUARTER_PI * SIN_COS_FOLDING_RATIO as f64, TWO_PI);
    }
}
