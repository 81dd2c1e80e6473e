//! Lookup table evaluation of sine and cosine.
//!
//! Tables sample sine and cosine at evenly spaced points on `[0, π/4]`. The
//! other seven eighths of the period are recovered by
//! [`Octant`](trigon_base::fold::Octant) folding. Each entry stores the
//! forward difference to the next sample so that interpolation needs a
//! single multiply-add.
//!
//! All tables are generated during compilation.

use trigon_base::coeffs::{horner, COS_DEGREE_18, LUT_MAX_ERROR, SIN_DEGREE_17};
use trigon_base::consts::{PI, QUARTER_PI, SIN_COS_FOLDING_RATIO};
use trigon_base::fold::Octant;
use trigon_base::num::Float;
use trigon_base::reduce::reduce;

use crate::inverse::acos_rational;
use crate::options::Accuracy;

/// One sample of a table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LutEntry<T> {
    pub value: T,

    /// `value` of the next entry minus this entry's `value`.
    pub forward_difference: T,
}

/// Return the number of entries needed to keep interpolation error around
/// `max_error`.
const fn table_size(max_error: f64) -> usize {
    (PI / acos_rational(1. - max_error) / SIN_COS_FOLDING_RATIO as f64) as usize + 1
}

/// Number of distinct table sizes. Accuracy levels at or above
/// `TABLE_COUNT - 1` share the densest table.
const TABLE_COUNT: usize = 4;

const SIZE_0: usize = table_size(LUT_MAX_ERROR[0]);
const SIZE_1: usize = table_size(LUT_MAX_ERROR[1]);
const SIZE_2: usize = table_size(LUT_MAX_ERROR[2]);
const SIZE_3: usize = table_size(LUT_MAX_ERROR[3]);

#[derive(Copy, Clone)]
enum Reference {
    Sin,
    Cos,
}

impl Reference {
    /// Evaluate the reference function, the most accurate polynomial
    /// available.
    const fn eval(self, x: f64) -> f64 {
        let x2 = x * x;
        match self {
            Reference::Sin => x * horner(&SIN_DEGREE_17, x2),
            Reference::Cos => horner(&COS_DEGREE_18, x2),
        }
    }

    /// Return the reference value at sample `i` of a table with `n` entries.
    const fn sample(self, i: usize, n: usize) -> f64 {
        self.eval(i as f64 * (QUARTER_PI / n as f64))
    }
}

const fn build_f64<const N: usize>(func: Reference) -> [LutEntry<f64>; N] {
    let mut table = [LutEntry {
        value: 0.,
        forward_difference: 0.,
    }; N];
    let mut i = 0;
    while i < N {
        let value = func.sample(i, N);
        table[i] = LutEntry {
            value,
            forward_difference: func.sample(i + 1, N) - value,
        };
        i += 1;
    }
    table
}

/// Build an `f32` table. Differences are taken after rounding, so that
/// `value + forward_difference` reproduces the next entry's `value`.
const fn build_f32<const N: usize>(func: Reference) -> [LutEntry<f32>; N] {
    let mut table = [LutEntry {
        value: 0.,
        forward_difference: 0.,
    }; N];
    let mut i = 0;
    while i < N {
        let value = func.sample(i, N) as f32;
        table[i] = LutEntry {
            value,
            forward_difference: func.sample(i + 1, N) as f32 - value,
        };
        i += 1;
    }
    table
}

static SIN_F64_0: [LutEntry<f64>; SIZE_0] = build_f64(Reference::Sin);
static SIN_F64_1: [LutEntry<f64>; SIZE_1] = build_f64(Reference::Sin);
static SIN_F64_2: [LutEntry<f64>; SIZE_2] = build_f64(Reference::Sin);
static SIN_F64_3: [LutEntry<f64>; SIZE_3] = build_f64(Reference::Sin);
static COS_F64_0: [LutEntry<f64>; SIZE_0] = build_f64(Reference::Cos);
static COS_F64_1: [LutEntry<f64>; SIZE_1] = build_f64(Reference::Cos);
static COS_F64_2: [LutEntry<f64>; SIZE_2] = build_f64(Reference::Cos);
static COS_F64_3: [LutEntry<f64>; SIZE_3] = build_f64(Reference::Cos);

static SIN_F32_0: [LutEntry<f32>; SIZE_0] = build_f32(Reference::Sin);
static SIN_F32_1: [LutEntry<f32>; SIZE_1] = build_f32(Reference::Sin);
static SIN_F32_2: [LutEntry<f32>; SIZE_2] = build_f32(Reference::Sin);
static SIN_F32_3: [LutEntry<f32>; SIZE_3] = build_f32(Reference::Sin);
static COS_F32_0: [LutEntry<f32>; SIZE_0] = build_f32(Reference::Cos);
static COS_F32_1: [LutEntry<f32>; SIZE_1] = build_f32(Reference::Cos);
static COS_F32_2: [LutEntry<f32>; SIZE_2] = build_f32(Reference::Cos);
static COS_F32_3: [LutEntry<f32>; SIZE_3] = build_f32(Reference::Cos);

static SIN_F64: [&[LutEntry<f64>]; TABLE_COUNT] = [&SIN_F64_0, &SIN_F64_1, &SIN_F64_2, &SIN_F64_3];
static COS_F64: [&[LutEntry<f64>]; TABLE_COUNT] = [&COS_F64_0, &COS_F64_1, &COS_F64_2, &COS_F64_3];
static SIN_F32: [&[LutEntry<f32>]; TABLE_COUNT] = [&SIN_F32_0, &SIN_F32_1, &SIN_F32_2, &SIN_F32_3];
static COS_F32: [&[LutEntry<f32>]; TABLE_COUNT] = [&COS_F32_0, &COS_F32_1, &COS_F32_2, &COS_F32_3];

/// Float types with precomputed sine and cosine tables.
pub trait TableFloat: Float {
    /// Return the sine table for `accuracy`.
    fn sin_table(accuracy: Accuracy) -> &'static [LutEntry<Self>];

    /// Return the cosine table for `accuracy`.
    fn cos_table(accuracy: Accuracy) -> &'static [LutEntry<Self>];
}

fn table_index(accuracy: Accuracy) -> usize {
    (accuracy.level() as usize).min(TABLE_COUNT - 1)
}

impl TableFloat for f32 {
    fn sin_table(accuracy: Accuracy) -> &'static [LutEntry<f32>] {
        SIN_F32[table_index(accuracy)]
    }

    fn cos_table(accuracy: Accuracy) -> &'static [LutEntry<f32>] {
        COS_F32[table_index(accuracy)]
    }
}

impl TableFloat for f64 {
    fn sin_table(accuracy: Accuracy) -> &'static [LutEntry<f64>] {
        SIN_F64[table_index(accuracy)]
    }

    fn cos_table(accuracy: Accuracy) -> &'static [LutEntry<f64>] {
        COS_F64[table_index(accuracy)]
    }
}

/// Interpolate in `table` at `x`, where `0 <= x <= π/4`.
///
/// `x` is scaled to a fractional index and rounded to the nearest entry. The
/// offset from that entry is multiplied by a forward difference: the
/// previous entry's if the offset is negative and a previous entry exists,
/// otherwise the entry's own.
pub fn interpolate<T: Float>(table: &[LutEntry<T>], x: T) -> T {
    let last = table.len() - 1;
    let scaled = x.to_f64() / QUARTER_PI * table.len() as f64;

    // `as` saturates negative values to zero.
    let index = (scaled.round() as usize).min(last);
    let offset = scaled - index as f64;
    let gradient_index = if offset < 0. && index > 0 {
        index - 1
    } else {
        index
    };

    table[index].value + T::from_f64(offset) * table[gradient_index].forward_difference
}

/// Approximate `sin(x)` for a finite `x`.
pub(crate) fn sin<T: TableFloat>(x: T, accuracy: Accuracy) -> T {
    let (sin_table, cos_table) = (T::sin_table(accuracy), T::cos_table(accuracy));
    let mut r = x;
    let reduction = reduce(&mut r, QUARTER_PI);
    let y = Octant::from_index(reduction.quadrant).sin(
        r.abs(),
        T::from_f64(QUARTER_PI),
        |t| interpolate(sin_table, t),
        |t| interpolate(cos_table, t),
    );
    if x.is_sign_negative() {
        -y
    } else {
        y
    }
}

/// Approximate `cos(x)` for a finite `x`.
pub(crate) fn cos<T: TableFloat>(x: T, accuracy: Accuracy) -> T {
    let (sin_table, cos_table) = (T::sin_table(accuracy), T::cos_table(accuracy));
    let mut r = x;
    let reduction = reduce(&mut r, QUARTER_PI);
    Octant::from_index(reduction.quadrant).cos(
        r.abs(),
        T::from_f64(QUARTER_PI),
        |t| interpolate(sin_table, t),
        |t| interpolate(cos_table, t),
    )
}

#[cfg(test)]
mod tests {
    use trigon_base::consts::QUARTER_PI;
    use trigon_testing::TestCases;

    use super::{
        cos, interpolate, sin, table_size, LutEntry, TableFloat, SIZE_0, SIZE_1, SIZE_2, SIZE_3,
    };
    use crate::options::Accuracy;

    #[test]
    fn test_table_sizes() {
        assert_eq!([SIZE_0, SIZE_1, SIZE_2, SIZE_3], [1, 3, 14, 1233]);
        assert_eq!(table_size(1e-5), SIZE_3);

        for level in 3..=10 {
            let accuracy = Accuracy::new(level).unwrap();
            assert_eq!(f64::sin_table(accuracy).len(), SIZE_3);
            assert_eq!(f32::cos_table(accuracy).len(), SIZE_3);
        }
        assert_eq!(f64::sin_table(Accuracy::MIN).len(), SIZE_0);
    }

    #[test]
    fn test_tables_sample_reference() {
        let table = f64::sin_table(Accuracy::MAX);
        let step = QUARTER_PI / table.len() as f64;
        assert_eq!(table[0].value, 0.);
        for (i, entry) in table.iter().enumerate().step_by(97) {
            assert!((entry.value - (i as f64 * step).sin()).abs() < 1e-14);
        }

        let table = f64::cos_table(Accuracy::MAX);
        assert_eq!(table[0].value, 1.);
        let last = table[table.len() - 1];
        let end = last.value + last.forward_difference;
        assert!((end - QUARTER_PI.cos()).abs() < 1e-14);
    }

    #[test]
    fn test_forward_differences() {
        let tables: [&[LutEntry<f32>]; 2] = [
            f32::sin_table(Accuracy::new(2).unwrap()),
            f32::cos_table(Accuracy::new(2).unwrap()),
        ];
        for table in tables {
            for pair in table.windows(2) {
                assert_eq!(pair[0].value + pair[0].forward_difference, pair[1].value);
            }
        }
    }

    #[test]
    fn test_interpolate_boundaries() {
        #[derive(Debug)]
        struct Case {
            x: f64,
            expected: f64,
        }

        // Values 0, 10, 20, 30 with step π/16. The last difference leads to
        // a notional fifth sample of 45.
        let table = [0., 10., 20., 30.].map(|value| LutEntry {
            value,
            forward_difference: if value == 30. { 15. } else { 10. },
        });
        let step = QUARTER_PI / 4.;

        let cases = [
            // Exactly on an entry.
            Case { x: 0., expected: 0. },
            Case {
                x: 2. * step,
                expected: 20.,
            },
            // Positive offset uses the entry's own difference.
            Case {
                x: 1.25 * step,
                expected: 12.5,
            },
            // Negative offset uses the previous entry's difference.
            Case {
                x: 2.75 * step,
                expected: 27.5,
            },
            // Rounding onto the final index, and past it at π/4, clamps to
            // the last entry.
            Case {
                x: 3.5 * step,
                expected: 37.5,
            },
            Case {
                x: QUARTER_PI,
                expected: 45.,
            },
        ];

        cases.test_each(|case| {
            let y = interpolate(&table, case.x);
            assert!((y - case.expected).abs() < 1e-9, "got {}", y);
        });
    }

    #[test]
    fn test_reduced_arguments() {
        let accuracy = Accuracy::MAX;
        for x in [0.1f64, 1.0, 2.5, -3.0, 10.0, -50.0] {
            assert!((sin(x, accuracy) - x.sin()).abs() < 1e-7, "sin({})", x);
            assert!((cos(x, accuracy) - x.cos()).abs() < 1e-7, "cos({})", x);
        }
        assert_eq!(cos(0.0f32, accuracy), 1.);
    }
}
