use std::arch::x86_64::{
    _mm512_add_ps, _mm512_div_ps, _mm512_loadu_ps, _mm512_mul_ps, _mm512_set1_ps,
    _mm512_storeu_ps, _mm512_sub_ps,
};

use crate::dispatch::{Mat4Kernels, Mat4x4};

// A 4×4 f32 matrix fills exactly one 512-bit register.
macro_rules! mat_kernels {
    ($($name:ident, $scalar_name:ident => $op:ident),*) => {
        $(
            fn $name(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
                #[target_feature(enable = "avx512f")]
                unsafe fn kernel(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
                    let mut out = [[0.; 4]; 4];
                    let y = $op(
                        _mm512_loadu_ps(a.as_flattened().as_ptr()),
                        _mm512_loadu_ps(b.as_flattened().as_ptr()),
                    );
                    _mm512_storeu_ps(out.as_flattened_mut().as_mut_ptr(), y);
                    out
                }
                // Safety: Kernel is only installed if AVX-512F is available.
                unsafe { kernel(a, b) }
            }

            fn $scalar_name(a: &Mat4x4, b: f32) -> Mat4x4 {
                #[target_feature(enable = "avx512f")]
                unsafe fn kernel(a: &Mat4x4, b: f32) -> Mat4x4 {
                    let mut out = [[0.; 4]; 4];
                    let y = $op(_mm512_loadu_ps(a.as_flattened().as_ptr()), _mm512_set1_ps(b));
                    _mm512_storeu_ps(out.as_flattened_mut().as_mut_ptr(), y);
                    out
                }
                // Safety: Kernel is only installed if AVX-512F is available.
                unsafe { kernel(a, b) }
            }
        )*
    };
}

mat_kernels!(
    add, add_scalar => _mm512_add_ps,
    sub, sub_scalar => _mm512_sub_ps,
    mul, mul_scalar => _mm512_mul_ps,
    div, div_scalar => _mm512_div_ps
);

/// Return AVX-512 kernels for 4×4 f32 matrices.
///
/// # Safety
///
/// AVX-512F must be supported by the CPU and enabled by the OS.
pub unsafe fn mat4_kernels() -> Mat4Kernels {
    Mat4Kernels {
        isa: "avx512",
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

#[cfg(test)]
mod tests {
    use super::mat4_kernels;
    use crate::arch::generic;
    use crate::capabilities::Capabilities;
    use crate::isa_detection::host_detector;

    #[test]
    fn test_matches_fallback() {
        if !host_detector().detect().contains(Capabilities::AVX512_F) {
            return;
        }

        // Safety: AVX-512F is supported.
        let mat = unsafe { mat4_kernels() };
        let fallback = generic::mat4_kernels();

        let m: [[f32; 4]; 4] =
            std::array::from_fn(|r| std::array::from_fn(|c| (r * 4 + c) as f32 - 7.5));
        let n = [[0.5, -1., 2., 4.]; 4];
        assert_eq!((mat.add)(&m, &n), (fallback.add)(&m, &n));
        assert_eq!((mat.sub)(&m, &n), (fallback.sub)(&m, &n));
        assert_eq!((mat.mul)(&m, &n), (fallback.mul)(&m, &n));
        assert_eq!((mat.div)(&m, &n), (fallback.div)(&m, &n));
        assert_eq!((mat.mul_scalar)(&m, -2.), (fallback.mul_scalar)(&m, -2.));
    }
}
