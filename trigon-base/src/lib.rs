//! Numeric foundation shared by the trigon crates.
//!
//! This crate holds the pieces of the approximation pipeline that both the
//! public API in `trigon` and the kernels in `trigon-simd` need: the
//! [`Float`](num::Float) abstraction over `f32` and `f64`, angle constants,
//! coefficient tables, range reduction and quadrant/octant folding.

pub mod coeffs;
pub mod consts;
pub mod fold;
pub mod hint;
pub mod num;
pub mod reduce;
