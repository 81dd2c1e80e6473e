//! Arm Neon kernels.
//!
//! Neon is a required feature of aarch64, so unlike the x86-64 kernels these
//! are available through safe constructors.

// Arithmetic intrinsics of baseline features are safe in newer Rust releases,
// but still `unsafe` at the minimum supported version.
#![allow(unused_unsafe)]

use std::arch::aarch64::{
    float32x4_t, float64x2_t, vaddq_f32, vaddq_f64, vdivq_f32, vdivq_f64, vdupq_n_f32,
    vdupq_n_f64, vfmaq_f32, vfmaq_f64, vgetq_lane_f64, vld1q_f32, vld1q_f64,
    vmulq_f32, vmulq_f64, vst1q_f32, vst1q_f64, vsubq_f32, vsubq_f64,
};

use trigon_base::coeffs::{
    COS_DEGREE_10, COS_DEGREE_16, COS_DEGREE_18, SIN_DEGREE_11, SIN_DEGREE_17, SIN_DEGREE_9,
};

use trigon_base::fold::{cos_by_quadrant, sin_by_quadrant, sin_cos_by_quadrant};

use crate::arch::to_f32;
use crate::dispatch::{Mat4Kernels, Mat4x4, TrigKernels, Vec4Kernels};

#[inline(always)]
fn load_f32(x: &[f32; 4]) -> float32x4_t {
    // Safety: Neon is available and `x` has 4 elements.
    unsafe { vld1q_f32(x.as_ptr()) }
}

#[inline(always)]
fn store_f32(x: float32x4_t) -> [f32; 4] {
    let mut out = [0.; 4];
    // Safety: Neon is available and `out` has 4 elements.
    unsafe { vst1q_f32(out.as_mut_ptr(), x) };
    out
}

/// Load 4 × f64 as two 128-bit halves.
#[inline(always)]
fn load_f64(x: &[f64; 4]) -> [float64x2_t; 2] {
    // Safety: Neon is available and `x` has 4 elements.
    unsafe { [vld1q_f64(x.as_ptr()), vld1q_f64(x.as_ptr().add(2))] }
}

#[inline(always)]
fn store_f64(x: [float64x2_t; 2]) -> [f64; 4] {
    let mut out = [0.; 4];
    // Safety: Neon is available and `out` has 4 elements.
    unsafe {
        vst1q_f64(out.as_mut_ptr(), x[0]);
        vst1q_f64(out.as_mut_ptr().add(2), x[1]);
    }
    out
}

macro_rules! vec_kernels {
    ($($name:ident, $scalar_name:ident, $mat_name:ident, $mat_scalar_name:ident
        => $op_f32:ident, $op_f64:ident),*) => {
        mod f32_ops {
            use super::*;
            $(
                pub fn $name(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
                    // Safety: Neon is available.
                    store_f32(unsafe { $op_f32(load_f32(&a), load_f32(&b)) })
                }

                pub fn $scalar_name(a: [f32; 4], b: f32) -> [f32; 4] {
                    // Safety: Neon is available.
                    store_f32(unsafe { $op_f32(load_f32(&a), vdupq_n_f32(b)) })
                }

                pub fn $mat_name(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
                    std::array::from_fn(|row| $name(a[row], b[row]))
                }

                pub fn $mat_scalar_name(a: &Mat4x4, b: f32) -> Mat4x4 {
                    // Safety: Neon is available.
                    let b = unsafe { vdupq_n_f32(b) };
                    a.map(|row| store_f32(unsafe { $op_f32(load_f32(&row), b) }))
                }
            )*
        }

        mod f64_ops {
            use super::*;
            $(
                pub fn $name(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
                    let ([a0, a1], [b0, b1]) = (load_f64(&a), load_f64(&b));
                    // Safety: Neon is available.
                    store_f64(unsafe { [$op_f64(a0, b0), $op_f64(a1, b1)] })
                }

                pub fn $scalar_name(a: [f64; 4], b: f64) -> [f64; 4] {
                    let [a0, a1] = load_f64(&a);
                    // Safety: Neon is available.
                    store_f64(unsafe {
                        let b = vdupq_n_f64(b);
                        [$op_f64(a0, b), $op_f64(a1, b)]
                    })
                }
            )*
        }
    };
}

vec_kernels!(
    add, add_scalar, mat_add, mat_add_scalar => vaddq_f32, vaddq_f64,
    sub, sub_scalar, mat_sub, mat_sub_scalar => vsubq_f32, vsubq_f64,
    mul, mul_scalar, mat_mul, mat_mul_scalar => vmulq_f32, vmulq_f64,
    div, div_scalar, mat_div, mat_div_scalar => vdivq_f32, vdivq_f64
);

pub fn vec4_f32_kernels() -> Vec4Kernels<f32> {
    Vec4Kernels {
        isa: "neon",
        add: f32_ops::add,
        sub: f32_ops::sub,
        mul: f32_ops::mul,
        div: f32_ops::div,
        add_scalar: f32_ops::add_scalar,
        sub_scalar: f32_ops::sub_scalar,
        mul_scalar: f32_ops::mul_scalar,
        div_scalar: f32_ops::div_scalar,
    }
}

pub fn vec4_f64_kernels() -> Vec4Kernels<f64> {
    Vec4Kernels {
        isa: "neon",
        add: f64_ops::add,
        sub: f64_ops::sub,
        mul: f64_ops::mul,
        div: f64_ops::div,
        add_scalar: f64_ops::add_scalar,
        sub_scalar: f64_ops::sub_scalar,
        mul_scalar: f64_ops::mul_scalar,
        div_scalar: f64_ops::div_scalar,
    }
}

pub fn mat4_kernels() -> Mat4Kernels {
    Mat4Kernels {
        isa: "neon",
        add: f32_ops::mat_add,
        sub: f32_ops::mat_sub,
        mul: f32_ops::mat_mul,
        div: f32_ops::mat_div,
        add_scalar: f32_ops::mat_add_scalar,
        sub_scalar: f32_ops::mat_sub_scalar,
        mul_scalar: f32_ops::mat_mul_scalar,
        div_scalar: f32_ops::mat_div_scalar,
    }
}

const SIN_F32: [f32; 5] = to_f32(SIN_DEGREE_9);
const COS_F32: [f32; 6] = to_f32(COS_DEGREE_10);
const SIN_PAIR_F32: [f32; 6] = to_f32(SIN_DEGREE_11);

/// Evaluate up to four polynomials of the same length in `x` at once.
///
/// `coeffs[i]` holds the coefficients of degree `i`, one per lane.
#[inline(always)]
fn horner_f32x4(coeffs: impl DoubleEndedIterator<Item = [f32; 4]>, x: f32) -> [f32; 4] {
    // Safety: Neon is available.
    unsafe {
        let x = vdupq_n_f32(x);
        let mut acc = vdupq_n_f32(0.);
        for c in coeffs.rev() {
            acc = vfmaq_f32(load_f32(&c), acc, x);
        }
        store_f32(acc)
    }
}

#[inline(always)]
fn horner_f64x2(coeffs: impl DoubleEndedIterator<Item = [f64; 2]>, x: f64) -> float64x2_t {
    // Safety: Neon is available.
    unsafe {
        let x = vdupq_n_f64(x);
        let mut acc = vdupq_n_f64(0.);
        for c in coeffs.rev() {
            acc = vfmaq_f64(vld1q_f64(c.as_ptr()), acc, x);
        }
        acc
    }
}

fn sin_poly_f32(x: f32) -> f32 {
    x * horner_f32x4(SIN_F32.iter().map(|&c| [c; 4]), x * x)[0]
}

fn cos_poly_f32(x: f32) -> f32 {
    horner_f32x4(COS_F32.iter().map(|&c| [c; 4]), x * x)[0]
}

fn sin_cos_poly_f32(x: f32) -> (f32, f32) {
    let coeffs = SIN_PAIR_F32
        .iter()
        .zip(&COS_F32)
        .map(|(&s, &c)| [s, c, 0., 0.]);
    let [s, c, ..] = horner_f32x4(coeffs, x * x);
    (s * x, c)
}

fn sin_poly_f64(x: f64) -> f64 {
    let y = horner_f64x2(SIN_DEGREE_17.iter().map(|&c| [c; 2]), x * x);
    // Safety: Neon is available.
    x * unsafe { vgetq_lane_f64::<0>(y) }
}

fn cos_poly_f64(x: f64) -> f64 {
    let y = horner_f64x2(COS_DEGREE_18.iter().map(|&c| [c; 2]), x * x);
    // Safety: Neon is available.
    unsafe { vgetq_lane_f64::<0>(y) }
}

fn sin_cos_poly_f64(x: f64) -> (f64, f64) {
    let coeffs = SIN_DEGREE_17
        .iter()
        .zip(&COS_DEGREE_16)
        .map(|(&s, &c)| [s, c]);
    let y = horner_f64x2(coeffs, x * x);
    // Safety: Neon is available.
    unsafe {
        let y = vmulq_f64(y, vld1q_f64([x, 1.].as_ptr()));
        (vgetq_lane_f64::<0>(y), vgetq_lane_f64::<1>(y))
    }
}

fn sin_f32(x: f32) -> f32 {
    sin_by_quadrant(x, sin_poly_f32, cos_poly_f32)
}

fn cos_f32(x: f32) -> f32 {
    cos_by_quadrant(x, sin_poly_f32, cos_poly_f32)
}

fn sin_cos_f32(x: f32) -> (f32, f32) {
    sin_cos_by_quadrant(x, sin_cos_poly_f32)
}

fn sin_f64(x: f64) -> f64 {
    sin_by_quadrant(x, sin_poly_f64, cos_poly_f64)
}

fn cos_f64(x: f64) -> f64 {
    cos_by_quadrant(x, sin_poly_f64, cos_poly_f64)
}

fn sin_cos_f64(x: f64) -> (f64, f64) {
    sin_cos_by_quadrant(x, sin_cos_poly_f64)
}

pub fn trig_f32_kernels() -> TrigKernels<f32> {
    TrigKernels {
        isa: "neon",
        sin: sin_f32,
        cos: cos_f32,
        sin_cos: sin_cos_f32,
    }
}

pub fn trig_f64_kernels() -> TrigKernels<f64> {
    TrigKernels {
        isa: "neon",
        sin: sin_f64,
        cos: cos_f64,
        sin_cos: sin_cos_f64,
    }
}
