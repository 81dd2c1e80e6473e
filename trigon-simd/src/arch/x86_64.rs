//! x86-64 kernels.
//!
//! - `sse`: 4 × f32 vector arithmetic. SSE is part of the x86-64 baseline.
//! - `avx`: 4 × f64 vector arithmetic and 4×4 matrix arithmetic in two
//!   256-bit halves.
//! - `avx512`: 4×4 matrix arithmetic in one 512-bit register.
//! - `fma`: sine and cosine, evaluated with fused multiply-adds.

pub mod avx;
pub mod fma;
pub mod sse;

#[cfg(feature = "avx512")]
pub mod avx512;
