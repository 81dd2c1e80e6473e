//! trigon provides fast approximations of trigonometric functions for `f32`
//! and `f64`.
//!
//! # Approximation methods
//!
//! [`sin`] and [`cos`] reduce their argument to a quarter period and evaluate
//! a minimax polynomial. The polynomial's degree is selected by an
//! [`Accuracy`] level from 0 to 10. Alternatively, [`Method::Table`]
//! interpolates in a table of samples covering an eighth of the period, built
//! during compilation:
//!
//! ```
//! use trigon::{cos_with, sin, Accuracy, Approx, Method};
//!
//! let x = 0.7f64;
//! assert!((sin(x) - x.sin()).abs() < 1e-6);
//!
//! let opts = Approx::new().accuracy(Accuracy::new(3)?).method(Method::Table);
//! assert!((cos_with(x, opts) - x.cos()).abs() < 1e-6);
//! # Ok::<(), trigon::AccuracyError>(())
//! ```
//!
//! [`tan`], [`atan`], [`asin`] and [`acos`] use low degree rational or
//! polynomial approximations. They are accurate to roughly two or three
//! decimal places, or better with [`Speed::Precise`] where available.
//!
//! Integer arguments are evaluated as `f64`. Infinite arguments to the sine,
//! cosine and tangent functions return a signaling NaN.
//!
//! # Accelerated kernels
//!
//! [`sin_fast`], [`cos_fast`], [`sin_cos`] and the arithmetic operators of
//! [`Vec4`] and [`Mat4`] call kernels through a process-wide dispatch table.
//! Call [`Optimizer::initialize`] once to detect the CPU's capabilities and
//! install SIMD kernels where supported. Before that, and on CPUs without
//! supported extensions, portable kernels are used.
//!
//! Vector and matrix kernels give identical results whichever is installed.
//! Accelerated trig kernels reduce their argument by π/2 with a single
//! division, so their distance from the portable kernels grows with `|x|`:
//!
//! | argument | `f32` | `f64` |
//! |---|---|---|
//! | `\|x\| <= 50` | `1e-6` | `1e-14` |
//! | `\|x\| <= 2000` | `1e-6` | `5e-13` |
//!
//! Beyond that results are still finite and within `[-1, 1]`, but are not
//! meaningful approximations of the true sine and cosine.
//!
//! For x86-64, AVX-512 kernels require nightly Rust and the `avx512` crate
//! feature. Set the `TRIGON_FORCE_FALLBACK` environment variable to `1` to
//! disable accelerated kernels.

mod errors;
mod fast;
mod inverse;
mod linalg;
pub mod lut;
mod optimizer;
mod options;
mod poly;
mod trig;

pub use errors::AccuracyError;
pub use fast::{cos_fast, cos_fast_deg, sin_cos, sin_fast, sin_fast_deg};
pub use inverse::{acos, asin, atan, atan_with};
pub use linalg::{Mat4, Vec4};
pub use optimizer::Optimizer;
pub use options::{Accuracy, Approx, Method, Speed};
pub use trig::{
    cos, cos_deg, cos_deg_with, cos_with, deg_to_rad, rad_to_deg, sin, sin_deg, sin_deg_with,
    sin_with, tan, tan_deg, tan_deg_with, tan_with,
};

pub use trigon_base::num::{Float, Promote};
pub use trigon_simd::{Capabilities, Feature, KernelElem};
