//! Minimax coefficient tables.
//!
//! Every table lists coefficients from the lowest degree term upwards. Sine
//! tables hold the coefficients of `sin(x) / x` as a polynomial in `x²`,
//! cosine tables those of `cos(x)` as a polynomial in `x²`.

pub const SIN_DEGREE_3: [f64; 2] = [
    0.9927877289831643,
    -0.14621029021538304,
];

pub const SIN_DEGREE_5: [f64; 3] = [
    0.9998918212558109,
    -0.165960116540879,
    0.0076029033433693514,
];

pub const SIN_DEGREE_7: [f64; 4] = [
    0.9999990608989764,
    -0.16665554092757692,
    0.00831189980138988,
    -0.0001848814028860719,
];

pub const SIN_DEGREE_9: [f64; 5] = [
    0.9999999946860073,
    -0.1666665668400715,
    0.008333025138969368,
    -0.0001980741872742697,
    2.60190306765146e-06,
];

pub const SIN_DEGREE_11: [f64; 6] = [
    0.999999999978849,
    -0.1666666660882607,
    0.008333330720557737,
    -0.00019840832823261957,
    2.752397107463265e-06,
    -2.3868346521031026e-08,
];

pub const SIN_DEGREE_13: [f64; 7] = [
    0.9999999999999376,
    -0.1666666666643233,
    0.008333333318765514,
    -0.0001984126641162215,
    2.755693192659491e-06,
    -2.5029518865603207e-08,
    1.5401170371414643e-10,
];

pub const SIN_DEGREE_15: [f64; 8] = [
    0.9999999999999999,
    -0.16666666666665966,
    0.00833333333327592,
    -0.0001984126982322251,
    2.7557316421292966e-06,
    -2.5051870883490903e-08,
    1.6047844633018115e-10,
    -7.370662782816782e-13,
];

pub const SIN_DEGREE_17: [f64; 9] = [
    1.0,
    -0.16666666666666666,
    0.008333333333333165,
    -0.0001984126984120184,
    2.7557319210152756e-06,
    -2.5052106798274616e-08,
    1.6058936490373223e-10,
    -7.642917806936944e-13,
    2.720479096311349e-15,
];

pub const COS_DEGREE_4: [f64; 3] = [
    0.997372645040478,
    -0.49096624235424075,
    0.03515696521036015,
];

pub const COS_DEGREE_6: [f64; 4] = [
    0.9999702106899531,
    -0.49978270670468883,
    0.041366114963848226,
    -0.00124123975823986,
];

pub const COS_DEGREE_8: [f64; 5] = [
    0.9999997922712149,
    -0.4999973473075648,
    0.04166055224421903,
    -0.0013835791854080904,
    2.281557802268526e-05,
];

pub const COS_DEGREE_10: [f64; 6] = [
    0.9999999990181007,
    -0.4999999804925358,
    0.04166659852743525,
    -0.00138879697151175,
    2.4743246897989778e-05,
    -2.5792418318252057e-07,
];

pub const COS_DEGREE_12: [f64; 7] = [
    0.999999999996645,
    -0.49999999990409344,
    0.041666666191989846,
    -0.0013888879703277091,
    2.4800713655614513e-05,
    -2.751356111645714e-07,
    1.9764418299584176e-09,
];

pub const COS_DEGREE_14: [f64; 8] = [
    0.9999999999999913,
    -0.4999999999996623,
    0.0416666666644125,
    -0.0013888888829650733,
    2.480157945829646e-05,
    -2.7556743440594677e-07,
    2.0852919880739417e-09,
    -1.0947963434564337e-11,
];

pub const COS_DEGREE_16: [f64; 9] = [
    1.0,
    -0.4999999999999991,
    0.041666666666658914,
    -0.0013888888888623143,
    2.480158725497656e-05,
    -2.755731455089608e-07,
    2.087647767310167e-09,
    -1.1460886223152143e-11,
    4.589276887544817e-14,
];

pub const COS_DEGREE_18: [f64; 10] = [
    1.0,
    -0.5,
    0.041666666666666644,
    -0.0013888888888888013,
    2.4801587301391186e-05,
    -2.755731919836315e-07,
    2.087675492397145e-09,
    -1.1470641559691908e-11,
    4.776275569742866e-14,
    -1.5067787189818426e-16,
];

/// Sine coefficient tables in order of increasing degree.
pub const SIN_POLYNOMIALS: [&[f64]; 8] = [
    &SIN_DEGREE_3,
    &SIN_DEGREE_5,
    &SIN_DEGREE_7,
    &SIN_DEGREE_9,
    &SIN_DEGREE_11,
    &SIN_DEGREE_13,
    &SIN_DEGREE_15,
    &SIN_DEGREE_17,
];

/// Cosine coefficient tables in order of increasing degree.
pub const COS_POLYNOMIALS: [&[f64]; 8] = [
    &COS_DEGREE_4,
    &COS_DEGREE_6,
    &COS_DEGREE_8,
    &COS_DEGREE_10,
    &COS_DEGREE_12,
    &COS_DEGREE_14,
    &COS_DEGREE_16,
    &COS_DEGREE_18,
];

/// Highest supported accuracy level.
pub const MAX_ACCURACY: u8 = 10;

/// Maps an accuracy level to an index into [`SIN_POLYNOMIALS`] and
/// [`COS_POLYNOMIALS`].
pub const SIN_COS_ACCURACY_MAP: [usize; MAX_ACCURACY as usize + 1] =
    [1, 2, 3, 3, 4, 4, 5, 6, 6, 7, 7];

/// Maps an accuracy level to the maximum error a lookup table is sized for.
pub const LUT_MAX_ERROR: [f64; MAX_ACCURACY as usize + 1] = [
    0.1, 0.01, 0.001, 1e-5, 1e-5, 1e-5, 1e-5, 1e-5, 1e-5, 1e-5, 1e-5,
];

/// Numerator and denominator constants of the low degree tangent
/// approximation `u·a / (b + u²)`, where `u = x / (π/4)`.
pub const TAN_DEGREE_2: [f64; 2] = [-3.6112171, -4.6133253];

/// Constants of the higher degree tangent approximation
/// `u·(a + b·u²) / (c + u²·(d + u²))`, where `u = x / (π/4)`.
pub const TAN_DEGREE_4: [f64; 4] = [
    211.849369664121,
    -12.5288887278440,
    269.7350131214121,
    -71.4145309347748,
];

/// Arctangent polynomial used below [`ATAN_DEGREE_3_SWITCH`].
pub const ATAN_DEGREE_3: [f64; 4] = [
    2.455098112113773822784423828125e-2,
    0.97382764215581119060516357421875,
    -0.258666165173053741455078125,
    2.37673334777355194091796875e-2,
];

pub const ATAN_DEGREE_3_SWITCH: f64 = 5.0;

/// Slope and intercept of the linear tail used above
/// [`ATAN_DEGREE_3_SWITCH`].
pub const ATAN_DEGREE_3_TAIL: [f64; 2] = [
    1.9725882448256015777587890625e-3,
    1.422767855226993560791015625,
];

/// Arctangent polynomial used below [`ATAN_DEGREE_8_SWITCH`].
pub const ATAN_DEGREE_8: [f64; 9] = [
    -7.31612509080248329951246e-3,
    1.143813058225298884273968,
    -0.44571262228579688891017,
    9.96300443419767534081188e-2,
    -1.327626395338410425495113e-2,
    1.067967536814928841693018e-3,
    -5.070853471655922817262763e-5,
    1.305791235250985948823654e-6,
    -1.404127114579267754379543e-8,
];

pub const ATAN_DEGREE_8_SWITCH: f64 = 20.0;

pub const ATAN_DEGREE_8_TAIL: [f64; 2] = [
    4.99484112940984381623366e-4,
    1.518475007238157314937155,
];

/// Constants of the arccosine approximation
/// `π/2 + (a·x + b·x³) / (1 + c·x² + d·x⁴)`.
pub const ACOS_RATIONAL: [f64; 4] = [
    -0.939115566365855,
    0.9217841528914573,
    -1.2845906244690837,
    0.295624144969963174,
];

/// Evaluate a polynomial with Horner's scheme in `f64`.
///
/// This is usable in constant expressions, which is what the lookup table
/// generator needs.
pub const fn horner(coeffs: &[f64], x: f64) -> f64 {
    let mut i = coeffs.len();
    let mut acc = 0.0;
    while i > 0 {
        i -= 1;
        acc = acc * x + coeffs[i];
    }
    acc
}
