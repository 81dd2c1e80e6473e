//! Kernel dispatch table.
//!
//! Every arithmetic and trig primitive with an accelerated implementation is
//! called through a slot in a [`KernelTable`]. All slots start on the
//! portable kernels in `arch::generic`. [`initialize`] detects the host's
//! capabilities once per process and installs the most capable kernels the
//! host supports. Code that runs before `initialize`, or on hosts without
//! accelerated kernels, uses the fallbacks.

use std::sync::OnceLock;

use log::{debug, info};
use trigon_base::num::Float;

use crate::arch::generic;
use crate::capabilities::{Capabilities, Feature};
use crate::env::{env_flag, FORCE_FALLBACK_VAR};
use crate::isa_detection::host_detector;

/// A 4×4 single precision matrix, stored row by row.
pub type Mat4x4 = [[f32; 4]; 4];

/// Kernels for element-wise arithmetic on 4-lane vectors.
#[derive(Copy, Clone)]
pub struct Vec4Kernels<T> {
    /// Name of the instruction set the kernels use.
    pub isa: &'static str,

    pub add: fn([T; 4], [T; 4]) -> [T; 4],
    pub sub: fn([T; 4], [T; 4]) -> [T; 4],
    pub mul: fn([T; 4], [T; 4]) -> [T; 4],
    pub div: fn([T; 4], [T; 4]) -> [T; 4],

    pub add_scalar: fn([T; 4], T) -> [T; 4],
    pub sub_scalar: fn([T; 4], T) -> [T; 4],
    pub mul_scalar: fn([T; 4], T) -> [T; 4],
    pub div_scalar: fn([T; 4], T) -> [T; 4],
}

/// Kernels for element-wise arithmetic on 4×4 `f32` matrices.
#[derive(Copy, Clone)]
pub struct Mat4Kernels {
    pub isa: &'static str,

    pub add: fn(&Mat4x4, &Mat4x4) -> Mat4x4,
    pub sub: fn(&Mat4x4, &Mat4x4) -> Mat4x4,
    pub mul: fn(&Mat4x4, &Mat4x4) -> Mat4x4,
    pub div: fn(&Mat4x4, &Mat4x4) -> Mat4x4,

    pub add_scalar: fn(&Mat4x4, f32) -> Mat4x4,
    pub sub_scalar: fn(&Mat4x4, f32) -> Mat4x4,
    pub mul_scalar: fn(&Mat4x4, f32) -> Mat4x4,
    pub div_scalar: fn(&Mat4x4, f32) -> Mat4x4,
}

/// Sine and cosine kernels for a single scalar.
///
/// Kernels accept any finite argument and perform their own range
/// reduction.
#[derive(Copy, Clone)]
pub struct TrigKernels<T> {
    pub isa: &'static str,
    pub sin: fn(T) -> T,
    pub cos: fn(T) -> T,
    pub sin_cos: fn(T) -> (T, T),
}

/// One slot per (operation, precision) pair.
#[derive(Copy, Clone)]
pub struct KernelTable {
    pub vec4_f32: Vec4Kernels<f32>,
    pub vec4_f64: Vec4Kernels<f64>,
    pub mat4: Mat4Kernels,
    pub trig_f32: TrigKernels<f32>,
    pub trig_f64: TrigKernels<f64>,
}

impl KernelTable {
    /// Return a table where every slot holds its portable kernel.
    pub const fn fallback() -> KernelTable {
        KernelTable {
            vec4_f32: generic::vec4_f32_kernels(),
            vec4_f64: generic::vec4_f64_kernels(),
            mat4: generic::mat4_kernels(),
            trig_f32: generic::trig_f32_kernels(),
            trig_f64: generic::trig_f64_kernels(),
        }
    }

    /// Return a table using the best kernels available for `caps`.
    ///
    /// A slot is only rebound if every feature its kernel needs is in `caps`.
    ///
    /// # Safety
    ///
    /// The host CPU and OS must support every feature in `caps`. Use
    /// [`CapabilityDetector::detect`](crate::CapabilityDetector::detect) to
    /// obtain such a set.
    pub unsafe fn for_capabilities(caps: Capabilities) -> KernelTable {
        #[allow(unused_mut)]
        let mut table = KernelTable::fallback();

        #[cfg(target_arch = "x86_64")]
        {
            use crate::arch::x86_64::{avx, fma, sse};

            if caps.contains(Capabilities::SSE) {
                table.vec4_f32 = sse::vec4_f32_kernels();
            }

            if caps.contains(Capabilities::AVX) {
                // Safety: Caller guarantees AVX is supported.
                unsafe {
                    table.vec4_f64 = avx::vec4_f64_kernels();
                    table.mat4 = avx::mat4_kernels();
                }
            }

            #[cfg(feature = "avx512")]
            if caps.contains(Capabilities::AVX512_F) {
                // Safety: Caller guarantees AVX-512F is supported.
                table.mat4 = unsafe { crate::arch::x86_64::avx512::mat4_kernels() };
            }

            // FMA instructions are VEX encoded, so also need OS support for
            // AVX state.
            if caps.contains(Capabilities::SSE2 | Capabilities::FMA3 | Capabilities::AVX) {
                // Safety: Caller guarantees FMA is supported.
                unsafe {
                    table.trig_f32 = fma::trig_f32_kernels();
                    table.trig_f64 = fma::trig_f64_kernels();
                }
            }
        }

        #[cfg(target_arch = "aarch64")]
        if caps.contains(Capabilities::ARM_NEON) {
            use crate::arch::aarch64 as neon;

            table.vec4_f32 = neon::vec4_f32_kernels();
            table.vec4_f64 = neon::vec4_f64_kernels();
            table.mat4 = neon::mat4_kernels();
            table.trig_f32 = neon::trig_f32_kernels();
            table.trig_f64 = neon::trig_f64_kernels();
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        let _ = caps;

        table
    }

    fn log_bindings(&self) {
        debug!("vec4<f32> kernels: {}", self.vec4_f32.isa);
        debug!("vec4<f64> kernels: {}", self.vec4_f64.isa);
        debug!("mat4 kernels: {}", self.mat4.isa);
        debug!("trig<f32> kernels: {}", self.trig_f32.isa);
        debug!("trig<f64> kernels: {}", self.trig_f64.isa);
    }
}

/// Element types with vector and trig kernels in the dispatch table.
pub trait KernelElem: Float {
    fn vec4_kernels(table: &KernelTable) -> &Vec4Kernels<Self>;
    fn trig_kernels(table: &KernelTable) -> &TrigKernels<Self>;
}

impl KernelElem for f32 {
    fn vec4_kernels(table: &KernelTable) -> &Vec4Kernels<f32> {
        &table.vec4_f32
    }

    fn trig_kernels(table: &KernelTable) -> &TrigKernels<f32> {
        &table.trig_f32
    }
}

impl KernelElem for f64 {
    fn vec4_kernels(table: &KernelTable) -> &Vec4Kernels<f64> {
        &table.vec4_f64
    }

    fn trig_kernels(table: &KernelTable) -> &TrigKernels<f64> {
        &table.trig_f64
    }
}

struct DispatchState {
    capabilities: Capabilities,
    kernels: KernelTable,
}

static STATE: OnceLock<DispatchState> = OnceLock::new();

static FALLBACK: KernelTable = KernelTable::fallback();

/// Detect the host's capabilities and install accelerated kernels.
///
/// Only the first call does any work. Later calls, including concurrent
/// ones, wait for it to finish and return the same capabilities.
///
/// If the `TRIGON_FORCE_FALLBACK` environment variable is set to a true
/// value, capabilities are still recorded but every slot keeps its fallback
/// kernel.
pub fn initialize() -> Capabilities {
    STATE
        .get_or_init(|| {
            let detector = host_detector();
            let capabilities = detector.detect();
            debug!("{} detected capabilities: {}", detector.name(), capabilities);

            let kernels = if env_flag(FORCE_FALLBACK_VAR, false) {
                info!("{} is set, using fallback kernels", FORCE_FALLBACK_VAR);
                KernelTable::fallback()
            } else {
                // Safety: `capabilities` comes from the host detector.
                unsafe { KernelTable::for_capabilities(capabilities) }
            };
            kernels.log_bindings();

            DispatchState {
                capabilities,
                kernels,
            }
        })
        .capabilities
}

/// Return true if [`initialize`] has completed.
pub fn is_initialized() -> bool {
    STATE.get().is_some()
}

/// Return the capabilities recorded by [`initialize`], or an empty set if it
/// has not been called.
pub fn capabilities() -> Capabilities {
    STATE
        .get()
        .map(|state| state.capabilities)
        .unwrap_or_default()
}

/// Return true if [`initialize`] has run and found `feature`.
pub fn has_feature(feature: Feature) -> bool {
    capabilities().has(feature)
}

/// Return the installed kernels.
#[inline]
pub fn kernels() -> &'static KernelTable {
    match STATE.get() {
        Some(state) => &state.kernels,
        None => &FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::{initialize, kernels, KernelTable};
    use crate::capabilities::Capabilities;
    use crate::isa_detection::host_detector;

    #[test]
    fn test_fallback_table() {
        let table = KernelTable::fallback();
        assert_eq!(table.vec4_f32.isa, "fallback");
        assert_eq!(table.mat4.isa, "fallback");
        assert_eq!(table.trig_f64.isa, "fallback");
    }

    #[test]
    fn test_empty_capabilities_select_fallback() {
        // Safety: The empty set makes no claims about the host.
        let table = unsafe { KernelTable::for_capabilities(Capabilities::empty()) };
        assert_eq!(table.vec4_f32.isa, "fallback");
        assert_eq!(table.vec4_f64.isa, "fallback");
        assert_eq!(table.mat4.isa, "fallback");
        assert_eq!(table.trig_f32.isa, "fallback");
        assert_eq!(table.trig_f64.isa, "fallback");
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_fma_requires_avx_state() {
        if !host_detector().detect().contains(Capabilities::FMA3) {
            return;
        }
        // Safety: Every feature in the set was detected on the host.
        let table = unsafe {
            KernelTable::for_capabilities(
                Capabilities::SSE | Capabilities::SSE2 | Capabilities::FMA3,
            )
        };
        assert_eq!(table.vec4_f32.isa, "sse");
        assert_eq!(table.trig_f32.isa, "fallback");
    }

    #[test_log::test]
    fn test_initialize_is_idempotent() {
        let first = initialize();
        let table = *kernels();
        let second = initialize();
        assert_eq!(first, second);
        assert_eq!(first, super::capabilities());
        assert_eq!(table.trig_f32.isa, kernels().trig_f32.isa);
        assert_eq!(table.mat4.isa, kernels().mat4.isa);
        assert!(super::is_initialized());

        if std::env::var_os("TRIGON_FORCE_FALLBACK").is_none() {
            // Safety: Capabilities come from the host detector.
            let expected = unsafe { KernelTable::for_capabilities(host_detector().detect()) };
            assert_eq!(table.vec4_f64.isa, expected.vec4_f64.isa);
        }
    }
}
