//! Kernel implementations.
//!
//! `generic` holds the portable kernels every slot starts with. The
//! architecture modules hold the accelerated ones. Accelerated kernels which
//! need a feature beyond the target baseline are only reachable through
//! `unsafe` constructors whose callers must confirm the feature is present.

pub mod generic;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Round `f64` coefficients to `f32`.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub(crate) const fn to_f32<const N: usize>(coeffs: [f64; N]) -> [f32; N] {
    let mut out = [0.; N];
    let mut i = 0;
    while i < N {
        out[i] = coeffs[i] as f32;
        i += 1;
    }
    out
}
