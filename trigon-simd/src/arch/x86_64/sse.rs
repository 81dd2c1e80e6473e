//! SSE kernels. SSE is part of the x86-64 baseline.

// Arithmetic intrinsics of baseline features are safe in newer Rust releases,
// but still `unsafe` at the minimum supported version.
#![allow(unused_unsafe)]

use std::arch::x86_64::{
    __m128, _mm_add_ps, _mm_div_ps, _mm_loadu_ps, _mm_mul_ps, _mm_set1_ps, _mm_storeu_ps,
    _mm_sub_ps,
};

use crate::dispatch::Vec4Kernels;

#[inline(always)]
fn load(x: [f32; 4]) -> __m128 {
    // Safety: SSE is part of the x86-64 baseline and `x` has 4 elements.
    unsafe { _mm_loadu_ps(x.as_ptr()) }
}

#[inline(always)]
fn store(x: __m128) -> [f32; 4] {
    let mut out = [0.; 4];
    // Safety: SSE is part of the x86-64 baseline and `out` has 4 elements.
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), x) };
    out
}

macro_rules! vec_kernels {
    ($($name:ident, $scalar_name:ident => $op:ident),*) => {
        $(
            fn $name(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
                // Safety: SSE is part of the x86-64 baseline.
                store(unsafe { $op(load(a), load(b)) })
            }

            fn $scalar_name(a: [f32; 4], b: f32) -> [f32; 4] {
                // Safety: SSE is part of the x86-64 baseline.
                store(unsafe { $op(load(a), _mm_set1_ps(b)) })
            }
        )*
    };
}

vec_kernels!(
    add, add_scalar => _mm_add_ps,
    sub, sub_scalar => _mm_sub_ps,
    mul, mul_scalar => _mm_mul_ps,
    div, div_scalar => _mm_div_ps
);

pub fn vec4_f32_kernels() -> Vec4Kernels<f32> {
    Vec4Kernels {
        isa: "sse",
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
