//! Branch prediction hints for stable Rust.
//!
//! `std::hint::unlikely` is not yet stable. Calling a `#[cold]` function on
//! the rare side of a branch gives the optimizer the same information, which
//! keeps the infinite-argument checks in the trig functions off the hot path.

#[inline]
#[cold]
fn cold_path() {}

/// Mark a branch condition as rarely true.
///
/// Returns `b` unchanged.
#[inline]
pub fn unlikely(b: bool) -> bool {
    if b {
        cold_path()
    }
    b
}
