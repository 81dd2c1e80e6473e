//! Runtime selection of accelerated kernels.

use trigon_simd::{Capabilities, Feature};

/// Entry point for runtime CPU feature detection.
///
/// Until [`Optimizer::initialize`] is called, the fast trig functions and
/// the [`Vec4`](crate::Vec4) / [`Mat4`](crate::Mat4) operators use portable
/// kernels.
///
/// ```
/// use trigon::{Feature, Optimizer};
///
/// Optimizer::initialize();
/// if Optimizer::has_feature(Feature::X86Avx) {
///     println!("using AVX kernels");
/// }
/// ```
pub struct Optimizer {
    _private: (),
}

impl Optimizer {
    /// Detect the host's capabilities and install the fastest supported
    /// kernels.
    ///
    /// This may be called any number of times, from any thread. Only the
    /// first call does any work.
    pub fn initialize() -> Capabilities {
        trigon_simd::initialize()
    }

    /// Return true if [`initialize`](Optimizer::initialize) has been called
    /// and detected `feature`.
    pub fn has_feature(feature: Feature) -> bool {
        trigon_simd::has_feature(feature)
    }

    /// Return the detected capabilities, or an empty set before
    /// initialization.
    pub fn capabilities() -> Capabilities {
        trigon_simd::capabilities()
    }

    pub fn is_initialized() -> bool {
        trigon_simd::is_initialized()
    }
}
