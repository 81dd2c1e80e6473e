//! CPU capability detection and kernel dispatch.
//!
//! This crate detects which instruction set extensions the host CPU and OS
//! support, and maintains a process-wide [`KernelTable`] of function
//! pointers for the operations the `trigon` crate accelerates:
//!
//! - Element-wise arithmetic on 4-lane `f32` and `f64` vectors
//! - Element-wise arithmetic on 4×4 `f32` matrices
//! - Sine and cosine of a scalar
//!
//! Every slot starts out holding a portable fallback kernel. Calling
//! [`initialize`] runs capability detection once and rebinds slots to
//! accelerated kernels where the host supports them.
//!
//! ## Supported architectures
//!
//! - x86-64: SSE, AVX, FMA and AVX-512 (requires nightly Rust and the
//!   `avx512` feature)
//! - Arm Neon
//!
//! On other architectures every slot keeps its fallback.
//!
//! ## Environment variables
//!
//! Setting `TRIGON_FORCE_FALLBACK=1` makes [`initialize`] keep the fallback
//! kernels. This is useful for comparing results across kernel sets.

#![cfg_attr(
    feature = "avx512",
    feature(stdarch_x86_avx512),
    feature(avx512_target_feature)
)]

mod arch;
mod capabilities;
mod dispatch;
pub mod env;
mod isa_detection;

pub use capabilities::{Capabilities, Feature};
pub use dispatch::{
    capabilities, has_feature, initialize, is_initialized, kernels, KernelElem, KernelTable,
    Mat4Kernels, Mat4x4, TrigKernels, Vec4Kernels,
};
pub use isa_detection::{host_detector, CapabilityDetector, CpuidRegs, NullDetector, X86CpuInfo};

#[cfg(target_arch = "x86_64")]
pub use isa_detection::X86Detector;

#[cfg(target_arch = "aarch64")]
pub use isa_detection::Aarch64Detector;
