//! Sine and cosine kernels using fused multiply-add.
//!
//! Polynomials are evaluated with Horner's scheme, one FMA per coefficient.
//! The combined sine/cosine kernels evaluate both polynomials in parallel,
//! sine in lane 0 and cosine in lane 1.

use std::arch::x86_64::{
    _mm_cvtsd_f64, _mm_cvtss_f32, _mm_fmadd_pd, _mm_fmadd_ps, _mm_fmadd_sd, _mm_fmadd_ss,
    _mm_mul_sd, _mm_mul_ss, _mm_set1_pd, _mm_set1_ps, _mm_set_pd, _mm_set_ps, _mm_set_sd,
    _mm_set_ss, _mm_setzero_pd, _mm_setzero_ps, _mm_storeu_pd, _mm_storeu_ps,
};

use trigon_base::coeffs::{
    COS_DEGREE_10, COS_DEGREE_16, COS_DEGREE_18, SIN_DEGREE_11, SIN_DEGREE_17, SIN_DEGREE_9,
};

use trigon_base::fold::{cos_by_quadrant, sin_by_quadrant, sin_cos_by_quadrant};

use crate::arch::to_f32;
use crate::dispatch::TrigKernels;

const SIN_F32: [f32; 5] = to_f32(SIN_DEGREE_9);
const COS_F32: [f32; 6] = to_f32(COS_DEGREE_10);

// Polynomials for the combined kernel need the same number of terms.
const SIN_PAIR_F32: [f32; 6] = to_f32(SIN_DEGREE_11);
const COS_PAIR_F32: [f32; 6] = COS_F32;
const SIN_PAIR_F64: [f64; 9] = SIN_DEGREE_17;
const COS_PAIR_F64: [f64; 9] = COS_DEGREE_16;

#[target_feature(enable = "fma")]
unsafe fn horner_f32(coeffs: &[f32], x: f32) -> f32 {
    let x = _mm_set_ss(x);
    let mut acc = _mm_setzero_ps();
    for &c in coeffs.iter().rev() {
        acc = _mm_fmadd_ss(acc, x, _mm_set_ss(c));
    }
    _mm_cvtss_f32(acc)
}

#[target_feature(enable = "fma")]
unsafe fn horner_f64(coeffs: &[f64], x: f64) -> f64 {
    let x = _mm_set_sd(x);
    let mut acc = _mm_setzero_pd();
    for &c in coeffs.iter().rev() {
        acc = _mm_fmadd_sd(acc, x, _mm_set_sd(c));
    }
    _mm_cvtsd_f64(acc)
}

#[target_feature(enable = "fma")]
unsafe fn sin_cos_poly_f32(x: f32) -> (f32, f32) {
    let x2 = _mm_set1_ps(x * x);
    let mut acc = _mm_setzero_ps();
    for (&s, &c) in SIN_PAIR_F32.iter().zip(&COS_PAIR_F32).rev() {
        acc = _mm_fmadd_ps(acc, x2, _mm_set_ps(0., 0., c, s));
    }
    acc = _mm_mul_ss(acc, _mm_set_ss(x));

    let mut out = [0.; 4];
    _mm_storeu_ps(out.as_mut_ptr(), acc);
    (out[0], out[1])
}

#[target_feature(enable = "fma")]
unsafe fn sin_cos_poly_f64(x: f64) -> (f64, f64) {
    let x2 = _mm_set1_pd(x * x);
    let mut acc = _mm_setzero_pd();
    for (&s, &c) in SIN_PAIR_F64.iter().zip(&COS_PAIR_F64).rev() {
        acc = _mm_fmadd_pd(acc, x2, _mm_set_pd(c, s));
    }
    acc = _mm_mul_sd(acc, _mm_set_sd(x));

    let mut out = [0.; 2];
    _mm_storeu_pd(out.as_mut_ptr(), acc);
    (out[0], out[1])
}

// The kernels below are private and only reachable through the `unsafe`
// constructors, whose callers guarantee FMA is available.

fn sin_poly_f32(x: f32) -> f32 {
    // Safety: Kernel is only installed if FMA is available.
    x * unsafe { horner_f32(&SIN_F32, x * x) }
}

fn cos_poly_f32(x: f32) -> f32 {
    // Safety: Kernel is only installed if FMA is available.
    unsafe { horner_f32(&COS_F32, x * x) }
}

fn sin_poly_f64(x: f64) -> f64 {
    // Safety: Kernel is only installed if FMA is available.
    x * unsafe { horner_f64(&SIN_DEGREE_17, x * x) }
}

fn cos_poly_f64(x: f64) -> f64 {
    // Safety: Kernel is only installed if FMA is available.
    unsafe { horner_f64(&COS_DEGREE_18, x * x) }
}

fn sin_f32(x: f32) -> f32 {
    sin_by_quadrant(x, sin_poly_f32, cos_poly_f32)
}

fn cos_f32(x: f32) -> f32 {
    cos_by_quadrant(x, sin_poly_f32, cos_poly_f32)
}

fn sin_cos_f32(x: f32) -> (f32, f32) {
    // Safety: Kernel is only installed if FMA is available.
    sin_cos_by_quadrant(x, |r| unsafe { sin_cos_poly_f32(r) })
}

fn sin_f64(x: f64) -> f64 {
    sin_by_quadrant(x, sin_poly_f64, cos_poly_f64)
}

fn cos_f64(x: f64) -> f64 {
    cos_by_quadrant(x, sin_poly_f64, cos_poly_f64)
}

fn sin_cos_f64(x: f64) -> (f64, f64) {
    // Safety: Kernel is only installed if FMA is available.
    sin_cos_by_quadrant(x, |r| unsafe { sin_cos_poly_f64(r) })
}

/// Return FMA trig kernels for `f32`.
///
/// # Safety
///
/// FMA must be supported by the CPU and the OS must preserve AVX state.
pub unsafe fn trig_f32_kernels() -> TrigKernels<f32> {
    TrigKernels {
        isa: "fma",
        sin: sin_f32,
        cos: cos_f32,
        sin_cos: sin_cos_f32,
    }
}

/// Return FMA trig kernels for `f64`.
///
/// # Safety
///
/// FMA must be supported by the CPU and the OS must preserve AVX state.
pub unsafe fn trig_f64_kernels() -> TrigKernels<f64> {
    TrigKernels {
        isa: "fma",
        sin: sin_f64,
        cos: cos_f64,
        sin_cos: sin_cos_f64,
    }
}
