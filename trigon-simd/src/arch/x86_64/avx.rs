use std::arch::x86_64::{
    _mm256_add_pd, _mm256_add_ps, _mm256_div_pd, _mm256_div_ps, _mm256_loadu_pd,
    _mm256_loadu_ps, _mm256_mul_pd, _mm256_mul_ps, _mm256_set1_pd, _mm256_set1_ps,
    _mm256_storeu_pd, _mm256_storeu_ps, _mm256_sub_pd, _mm256_sub_ps,
};

use crate::dispatch::{Mat4Kernels, Mat4x4, Vec4Kernels};

// The safe functions generated below are private and only reachable through
// the `unsafe` constructors at the end of this module.

macro_rules! vec_kernels {
    ($($name:ident, $scalar_name:ident => $op:ident),*) => {
        $(
            fn $name(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
                #[target_feature(enable = "avx")]
                unsafe fn kernel(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
                    let mut out = [0.; 4];
                    let y = $op(_mm256_loadu_pd(a.as_ptr()), _mm256_loadu_pd(b.as_ptr()));
                    _mm256_storeu_pd(out.as_mut_ptr(), y);
                    out
                }
                // Safety: Kernel is only installed if AVX is available.
                unsafe { kernel(a, b) }
            }

            fn $scalar_name(a: [f64; 4], b: f64) -> [f64; 4] {
                #[target_feature(enable = "avx")]
                unsafe fn kernel(a: [f64; 4], b: f64) -> [f64; 4] {
                    let mut out = [0.; 4];
                    let y = $op(_mm256_loadu_pd(a.as_ptr()), _mm256_set1_pd(b));
                    _mm256_storeu_pd(out.as_mut_ptr(), y);
                    out
                }
                // Safety: Kernel is only installed if AVX is available.
                unsafe { kernel(a, b) }
            }
        )*
    };
}

vec_kernels!(
    add, add_scalar => _mm256_add_pd,
    sub, sub_scalar => _mm256_sub_pd,
    mul, mul_scalar => _mm256_mul_pd,
    div, div_scalar => _mm256_div_pd
);

// A 4×4 matrix is processed as two 8-lane halves.
macro_rules! mat_kernels {
    ($($name:ident, $scalar_name:ident => $op:ident),*) => {
        $(
            fn $name(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
                #[target_feature(enable = "avx")]
                unsafe fn kernel(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
                    let mut out = [[0.; 4]; 4];
                    let (a, b) = (a.as_flattened(), b.as_flattened());
                    for (i, dst) in out.as_flattened_mut().chunks_exact_mut(8).enumerate() {
                        let y = $op(
                            _mm256_loadu_ps(a[i * 8..].as_ptr()),
                            _mm256_loadu_ps(b[i * 8..].as_ptr()),
                        );
                        _mm256_storeu_ps(dst.as_mut_ptr(), y);
                    }
                    out
                }
                // Safety: Kernel is only installed if AVX is available.
                unsafe { kernel(a, b) }
            }

            fn $scalar_name(a: &Mat4x4, b: f32) -> Mat4x4 {
                #[target_feature(enable = "avx")]
                unsafe fn kernel(a: &Mat4x4, b: f32) -> Mat4x4 {
                    let mut out = [[0.; 4]; 4];
                    let a = a.as_flattened();
                    let b = _mm256_set1_ps(b);
                    for (i, dst) in out.as_flattened_mut().chunks_exact_mut(8).enumerate() {
                        let y = $op(_mm256_loadu_ps(a[i * 8..].as_ptr()), b);
                        _mm256_storeu_ps(dst.as_mut_ptr(), y);
                    }
                    out
                }
                // Safety: Kernel is only installed if AVX is available.
                unsafe { kernel(a, b) }
            }
        )*
    };
}

mat_kernels!(
    mat_add, mat_add_scalar => _mm256_add_ps,
    mat_sub, mat_sub_scalar => _mm256_sub_ps,
    mat_mul, mat_mul_scalar => _mm256_mul_ps,
    mat_div, mat_div_scalar => _mm256_div_ps
);

/// Return AVX kernels for 4 × f64 vectors.
///
/// # Safety
///
/// AVX must be supported by the CPU and enabled by the OS.
pub unsafe fn vec4_f64_kernels() -> Vec4Kernels<f64> {
    Vec4Kernels {
        isa: "avx",
        add,
        sub,
        mul,
        div,
        add_scalar,
        sub_scalar,
        mul_scalar,
        div_scalar,
    }
}

/// Return AVX kernels for 4×4 f32 matrices.
///
/// # Safety
///
/// AVX must be supported by the CPU and enabled by the OS.
pub unsafe fn mat4_kernels() -> Mat4Kernels {
    Mat4Kernels {
        isa: "avx",
        add: mat_add,
        sub: mat_sub,
        mul: mat_mul,
        div: mat_div,
        add_scalar: mat_add_scalar,
        sub_scalar: mat_sub_scalar,
        mul_scalar: mat_mul_scalar,
        div_scalar: mat_div_scalar,
    }
}
