//! Detection of the instruction sets available at runtime.
//!
//! Each supported architecture family has one [`CapabilityDetector`]
//! implementation. [`host_detector`] returns the one for the target the crate
//! was compiled for, or [`NullDetector`] if there is none.

use crate::capabilities::Capabilities;

/// Source of the [`Capabilities`] of the host CPU.
pub trait CapabilityDetector: Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Query the CPU and operating system.
    ///
    /// Must not panic. Features which cannot be confirmed are left unset.
    fn detect(&self) -> Capabilities;
}

/// Detector for targets without accelerated kernels. Reports no features.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullDetector;

impl CapabilityDetector for NullDetector {
    fn name(&self) -> &'static str {
        "none"
    }

    fn detect(&self) -> Capabilities {
        Capabilities::empty()
    }
}

/// Return the detector for the current target.
pub fn host_detector() -> &'static dyn CapabilityDetector {
    #[cfg(target_arch = "x86_64")]
    {
        &X86Detector
    }
    #[cfg(target_arch = "aarch64")]
    {
        &Aarch64Detector
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        &NullDetector
    }
}

/// Register values returned by one `cpuid` query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuidRegs {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

/// The `cpuid` leaves and extended control register state that feature
/// decoding reads.
///
/// Leaves beyond the maximum reported by the CPU are left zeroed.
#[derive(Copy, Clone, Debug, Default)]
pub struct X86CpuInfo {
    pub max_leaf: u32,
    pub max_extended_leaf: u32,
    pub leaf_1: CpuidRegs,
    pub leaf_7: CpuidRegs,
    pub leaf_7_1: CpuidRegs,
    pub extended_leaf_1: CpuidRegs,

    /// Value of XCR0, if the OS has enabled `xgetbv`.
    pub xcr0: Option<u64>,

    /// True if running as a 64-bit process.
    pub os_x64: bool,

    /// Overrides the XCR0 check for AVX-512 state. Set on macOS, where the
    /// kernel enables AVX-512 state lazily on first use.
    pub os_avx512_override: bool,
}

const fn bit(reg: u32, n: u32) -> bool {
    reg & (1 << n) != 0
}

// XCR0 bits: SSE and AVX state.
const XCR0_AVX_STATE: u64 = 0x6;

// XCR0 bits: SSE, AVX, opmask and ZMM state.
const XCR0_AVX512_STATE: u64 = 0xe6;

impl X86CpuInfo {
    /// True if the OS saves and restores the 256-bit AVX registers.
    pub fn os_supports_avx(&self) -> bool {
        let osxsave = bit(self.leaf_1.ecx, 27);
        let avx = bit(self.leaf_1.ecx, 28);
        osxsave
            && avx
            && self
                .xcr0
                .is_some_and(|xcr0| xcr0 & XCR0_AVX_STATE == XCR0_AVX_STATE)
    }

    /// True if the OS saves and restores the AVX-512 register state.
    pub fn os_supports_avx512(&self) -> bool {
        self.os_supports_avx()
            && (self.os_avx512_override
                || self
                    .xcr0
                    .is_some_and(|xcr0| xcr0 & XCR0_AVX512_STATE == XCR0_AVX512_STATE))
    }

    /// Decode feature bits into a [`Capabilities`] set.
    pub fn capabilities(&self) -> Capabilities {
        let os_avx = self.os_supports_avx();
        let os_avx512 = self.os_supports_avx512();
        let mut caps = Capabilities::empty();

        let mut set = |flag: Capabilities, present: bool| caps.set(flag, present);

        if self.max_leaf >= 1 {
            let CpuidRegs { ecx, edx, .. } = self.leaf_1;
            set(Capabilities::MMX, bit(edx, 23));
            set(Capabilities::SSE, bit(edx, 25));
            set(Capabilities::SSE2, bit(edx, 26));
            set(Capabilities::SSE3, bit(ecx, 0));
            set(Capabilities::SSSE3, bit(ecx, 9));
            set(Capabilities::SSE41, bit(ecx, 19));
            set(Capabilities::SSE42, bit(ecx, 20));
            set(Capabilities::AES, bit(ecx, 25));
            set(Capabilities::AVX, bit(ecx, 28) && os_avx);
            set(Capabilities::FMA3, bit(ecx, 12));
            set(Capabilities::RDRAND, bit(ecx, 30));
        }

        if self.max_leaf >= 7 {
            let CpuidRegs { ebx, ecx, edx, .. } = self.leaf_7;
            set(Capabilities::AVX2, bit(ebx, 5) && os_avx);
            set(Capabilities::BMI1, bit(ebx, 3));
            set(Capabilities::BMI2, bit(ebx, 8));
            set(Capabilities::ADX, bit(ebx, 19));
            set(Capabilities::MPX, bit(ebx, 14));
            set(Capabilities::SHA, bit(ebx, 29));
            set(Capabilities::RDSEED, bit(ebx, 18));
            set(Capabilities::PREFETCHWT1, bit(ecx, 0));
            set(Capabilities::RDPID, bit(ecx, 22));
            set(Capabilities::GFNI, bit(ecx, 8));
            set(Capabilities::VAES, bit(ecx, 9));

            let avx512 = [
                (Capabilities::AVX512_F, ebx, 16),
                (Capabilities::AVX512_CD, ebx, 28),
                (Capabilities::AVX512_PF, ebx, 26),
                (Capabilities::AVX512_ER, ebx, 27),
                (Capabilities::AVX512_VL, ebx, 31),
                (Capabilities::AVX512_BW, ebx, 30),
                (Capabilities::AVX512_DQ, ebx, 17),
                (Capabilities::AVX512_IFMA, ebx, 21),
                (Capabilities::AVX512_VBMI, ecx, 1),
                (Capabilities::AVX512_VPOPCNTDQ, ecx, 14),
                (Capabilities::AVX512_4FMAPS, edx, 2),
                (Capabilities::AVX512_4VNNIW, edx, 3),
                (Capabilities::AVX512_VNNI, ecx, 11),
                (Capabilities::AVX512_VBMI2, ecx, 6),
                (Capabilities::VPCLMUL, ecx, 10),
                (Capabilities::AVX512_BITALG, ecx, 12),
            ];
            for (flag, reg, n) in avx512 {
                set(flag, bit(reg, n) && os_avx512);
            }

            set(
                Capabilities::AVX512_BF16,
                bit(self.leaf_7_1.eax, 5) && os_avx512,
            );
        }

        if self.max_extended_leaf >= 0x8000_0001 {
            let CpuidRegs { ecx, edx, .. } = self.extended_leaf_1;
            set(Capabilities::X64, bit(edx, 29) && self.os_x64);
            set(Capabilities::ABM, bit(ecx, 5));
            set(Capabilities::SSE4A, bit(ecx, 6));
            set(Capabilities::FMA4, bit(ecx, 16));
            set(Capabilities::XOP, bit(ecx, 11));
            set(Capabilities::PREFETCHW, bit(ecx, 8));
        }

        caps
    }
}

/// Detector for x86-64 CPUs, using `cpuid` and `xgetbv`.
#[cfg(target_arch = "x86_64")]
#[derive(Copy, Clone, Debug, Default)]
pub struct X86Detector;

#[cfg(target_arch = "x86_64")]
impl X86Detector {
    /// Read the `cpuid` leaves and XCR0 of the current CPU.
    pub fn cpu_info(&self) -> X86CpuInfo {
        use std::arch::x86_64::{__cpuid_count, _xgetbv};

        let query = |leaf: u32, sub_leaf: u32| {
            // `__cpuid_count` is safe in newer Rust releases, but still
            // `unsafe` at the minimum supported version.
            // Safety: `cpuid` is available on every x86-64 CPU.
            #[allow(unused_unsafe)]
            let r = unsafe { __cpuid_count(leaf, sub_leaf) };
            CpuidRegs {
                eax: r.eax,
                ebx: r.ebx,
                ecx: r.ecx,
                edx: r.edx,
            }
        };

        let max_leaf = query(0, 0).eax;
        let max_extended_leaf = query(0x8000_0000, 0).eax;
        let leaf = |n: u32, sub_leaf: u32| {
            if n <= max_leaf {
                query(n, sub_leaf)
            } else {
                CpuidRegs::default()
            }
        };

        let leaf_1 = leaf(1, 0);
        let osxsave = bit(leaf_1.ecx, 27);
        let xcr0 = if osxsave {
            // Safety: OSXSAVE is set, so the OS has enabled `xgetbv`.
            Some(unsafe { _xgetbv(0) })
        } else {
            None
        };

        X86CpuInfo {
            max_leaf,
            max_extended_leaf,
            leaf_1,
            leaf_7: leaf(7, 0),
            leaf_7_1: leaf(7, 1),
            extended_leaf_1: if max_extended_leaf >= 0x8000_0001 {
                query(0x8000_0001, 0)
            } else {
                CpuidRegs::default()
            },
            xcr0,
            os_x64: cfg!(target_pointer_width = "64"),
            os_avx512_override: macos::avx512_enabled(),
        }
    }
}

#[cfg(target_arch = "x86_64")]
impl CapabilityDetector for X86Detector {
    fn name(&self) -> &'static str {
        "x86-64 cpuid"
    }

    fn detect(&self) -> Capabilities {
        self.cpu_info().capabilities()
    }
}

#[cfg(target_arch = "x86_64")]
mod macos {
    /// Report whether the macOS kernel supports AVX-512 state.
    ///
    /// XCR0 can report AVX-512 state as disabled on macOS even if it is
    /// available, because the kernel enables it lazily on first use.
    ///
    /// See https://github.com/golang/go/issues/43089. `sysctlbyname` is used
    /// as it is a documented API.
    #[cfg(target_os = "macos")]
    pub fn avx512_enabled() -> bool {
        // Safety: The names are nul-terminated and the values are ints.
        unsafe { get_sysctl_bool(c"hw.optional.avx512f") }
    }

    #[cfg(not(target_os = "macos"))]
    pub fn avx512_enabled() -> bool {
        false
    }

    /// Get a sysctl int value by name and interpret it as a boolean.
    #[cfg(target_os = "macos")]
    unsafe fn get_sysctl_bool(name: &std::ffi::CStr) -> bool {
        use std::os::raw::{c_char, c_int, c_void};

        #[link(name = "c")]
        extern "C" {
            /// See https://developer.apple.com/documentation/kernel/1387446-sysctlbyname.
            fn sysctlbyname(
                name: *const c_char,
                oldp: *mut c_void,
                oldlenp: *mut usize,
                newp: *const c_void,
                newlen: usize,
            ) -> c_int;
        }

        let mut ret = 0u64;
        let mut size = std::mem::size_of::<u64>();

        let sysctl_ret = sysctlbyname(
            name.as_ptr(),
            (&mut ret as *mut u64).cast(),
            &mut size,
            std::ptr::null(),
            0,
        );

        sysctl_ret == 0 && ret == 1
    }
}

/// Detector for AArch64 CPUs.
#[cfg(target_arch = "aarch64")]
#[derive(Copy, Clone, Debug, Default)]
pub struct Aarch64Detector;

#[cfg(target_arch = "aarch64")]
impl CapabilityDetector for Aarch64Detector {
    fn name(&self) -> &'static str {
        "aarch64"
    }

    fn detect(&self) -> Capabilities {
        use std::arch::is_aarch64_feature_detected;

        let mut caps = Capabilities::empty();
        caps.set(Capabilities::ARM_FP, is_aarch64_feature_detected!("fp"));
        caps.set(Capabilities::ARM_NEON, is_aarch64_feature_detected!("neon"));
        caps
    }
}
