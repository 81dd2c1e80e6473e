use std::fmt;

use bitflags::bitflags;

/// A single CPU feature that [`Capabilities`] can record.
///
/// The discriminant is the feature's bit position in [`Capabilities`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feature {
    X86Mmx = 0,
    X86X64,
    X86Abm,
    X86Rdrand,
    X86Rdseed,
    X86Bmi1,
    X86Bmi2,
    X86Adx,
    X86Mpx,
    X86Prefetchw,
    X86Prefetchwt1,
    X86Rdpid,
    X86Sse,
    X86Sse2,
    X86Sse3,
    X86Ssse3,
    X86Sse41,
    X86Sse42,
    X86Sse4a,
    X86Aes,
    X86Sha,
    X86Avx,
    X86Xop,
    X86Fma3,
    X86Fma4,
    X86Avx2,
    X86Avx512F,
    X86Avx512Cd,
    X86Avx512Pf,
    X86Avx512Er,
    X86Avx512Vl,
    X86Avx512Bw,
    X86Avx512Dq,
    X86Avx512Ifma,
    X86Avx512Vbmi,
    X86Avx512Vpopcntdq,
    X86Avx5124Fmaps,
    X86Avx5124Vnniw,
    X86Avx512Vnni,
    X86Avx512Bf16,
    X86Avx512Vbmi2,
    X86Gfni,
    X86Vaes,
    X86Vpclmul,
    X86Avx512Bitalg,
    ArmFp,
    ArmNeon,
}

impl Feature {
    /// Every feature, in bit order.
    pub const ALL: [Feature; 47] = [
        Feature::X86Mmx,
        Feature::X86X64,
        Feature::X86Abm,
        Feature::X86Rdrand,
        Feature::X86Rdseed,
        Feature::X86Bmi1,
        Feature::X86Bmi2,
        Feature::X86Adx,
        Feature::X86Mpx,
        Feature::X86Prefetchw,
        Feature::X86Prefetchwt1,
        Feature::X86Rdpid,
        Feature::X86Sse,
        Feature::X86Sse2,
        Feature::X86Sse3,
        Feature::X86Ssse3,
        Feature::X86Sse41,
        Feature::X86Sse42,
        Feature::X86Sse4a,
        Feature::X86Aes,
        Feature::X86Sha,
        Feature::X86Avx,
        Feature::X86Xop,
        Feature::X86Fma3,
        Feature::X86Fma4,
        Feature::X86Avx2,
        Feature::X86Avx512F,
        Feature::X86Avx512Cd,
        Feature::X86Avx512Pf,
        Feature::X86Avx512Er,
        Feature::X86Avx512Vl,
        Feature::X86Avx512Bw,
        Feature::X86Avx512Dq,
        Feature::X86Avx512Ifma,
        Feature::X86Avx512Vbmi,
        Feature::X86Avx512Vpopcntdq,
        Feature::X86Avx5124Fmaps,
        Feature::X86Avx5124Vnniw,
        Feature::X86Avx512Vnni,
        Feature::X86Avx512Bf16,
        Feature::X86Avx512Vbmi2,
        Feature::X86Gfni,
        Feature::X86Vaes,
        Feature::X86Vpclmul,
        Feature::X86Avx512Bitalg,
        Feature::ArmFp,
        Feature::ArmNeon,
    ];

    /// Return the single-bit set for this feature.
    pub const fn flag(self) -> Capabilities {
        Capabilities::from_bits_retain(1 << self as u8)
    }

    /// Human readable name, as used in CPU vendor documentation.
    pub fn name(self) -> &'static str {
        match self {
            Feature::X86Mmx => "MMX",
            Feature::X86X64 => "x64",
            Feature::X86Abm => "ABM",
            Feature::X86Rdrand => "RDRAND",
            Feature::X86Rdseed => "RDSEED",
            Feature::X86Bmi1 => "BMI1",
            Feature::X86Bmi2 => "BMI2",
            Feature::X86Adx => "ADX",
            Feature::X86Mpx => "MPX",
            Feature::X86Prefetchw => "PREFETCHW",
            Feature::X86Prefetchwt1 => "PREFETCHWT1",
            Feature::X86Rdpid => "RDPID",
            Feature::X86Sse => "SSE",
            Feature::X86Sse2 => "SSE2",
            Feature::X86Sse3 => "SSE3",
            Feature::X86Ssse3 => "SSSE3",
            Feature::X86Sse41 => "SSE4.1",
            Feature::X86Sse42 => "SSE4.2",
            Feature::X86Sse4a => "SSE4a",
            Feature::X86Aes => "AES-NI",
            Feature::X86Sha => "SHA",
            Feature::X86Avx => "AVX",
            Feature::X86Xop => "XOP",
            Feature::X86Fma3 => "FMA3",
            Feature::X86Fma4 => "FMA4",
            Feature::X86Avx2 => "AVX2",
            Feature::X86Avx512F => "AVX512-F",
            Feature::X86Avx512Cd => "AVX512-CD",
            Feature::X86Avx512Pf => "AVX512-PF",
            Feature::X86Avx512Er => "AVX512-ER",
            Feature::X86Avx512Vl => "AVX512-VL",
            Feature::X86Avx512Bw => "AVX512-BW",
            Feature::X86Avx512Dq => "AVX512-DQ",
            Feature::X86Avx512Ifma => "AVX512-IFMA",
            Feature::X86Avx512Vbmi => "AVX512-VBMI",
            Feature::X86Avx512Vpopcntdq => "AVX512-VPOPCNTDQ",
            Feature::X86Avx5124Fmaps => "AVX512-4FMAPS",
            Feature::X86Avx5124Vnniw => "AVX512-4VNNIW",
            Feature::X86Avx512Vnni => "AVX512-VNNI",
            Feature::X86Avx512Bf16 => "AVX512-BF16",
            Feature::X86Avx512Vbmi2 => "AVX512-VBMI2",
            Feature::X86Gfni => "GFNI",
            Feature::X86Vaes => "VAES",
            Feature::X86Vpclmul => "VPCLMUL",
            Feature::X86Avx512Bitalg => "AVX512-BITALG",
            Feature::ArmFp => "FP",
            Feature::ArmNeon => "NEON",
        }
    }
}

bitflags! {
    /// Set of CPU features detected on the host.
    ///
    /// Bit `n` corresponds to the [`Feature`] with discriminant `n`.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u64 {
        const MMX = Feature::X86Mmx.flag().bits();
        const X64 = Feature::X86X64.flag().bits();
        const ABM = Feature::X86Abm.flag().bits();
        const RDRAND = Feature::X86Rdrand.flag().bits();
        const RDSEED = Feature::X86Rdseed.flag().bits();
        const BMI1 = Feature::X86Bmi1.flag().bits();
        const BMI2 = Feature::X86Bmi2.flag().bits();
        const ADX = Feature::X86Adx.flag().bits();
        const MPX = Feature::X86Mpx.flag().bits();
        const PREFETCHW = Feature::X86Prefetchw.flag().bits();
        const PREFETCHWT1 = Feature::X86Prefetchwt1.flag().bits();
        const RDPID = Feature::X86Rdpid.flag().bits();
        const SSE = Feature::X86Sse.flag().bits();
        const SSE2 = Feature::X86Sse2.flag().bits();
        const SSE3 = Feature::X86Sse3.flag().bits();
        const SSSE3 = Feature::X86Ssse3.flag().bits();
        const SSE41 = Feature::X86Sse41.flag().bits();
        const SSE42 = Feature::X86Sse42.flag().bits();
        const SSE4A = Feature::X86Sse4a.flag().bits();
        const AES = Feature::X86Aes.flag().bits();
        const SHA = Feature::X86Sha.flag().bits();
        const AVX = Feature::X86Avx.flag().bits();
        const XOP = Feature::X86Xop.flag().bits();
        const FMA3 = Feature::X86Fma3.flag().bits();
        const FMA4 = Feature::X86Fma4.flag().bits();
        const AVX2 = Feature::X86Avx2.flag().bits();
        const AVX512_F = Feature::X86Avx512F.flag().bits();
        const AVX512_CD = Feature::X86Avx512Cd.flag().bits();
        const AVX512_PF = Feature::X86Avx512Pf.flag().bits();
        const AVX512_ER = Feature::X86Avx512Er.flag().bits();
        const AVX512_VL = Feature::X86Avx512Vl.flag().bits();
        const AVX512_BW = Feature::X86Avx512Bw.flag().bits();
        const AVX512_DQ = Feature::X86Avx512Dq.flag().bits();
        const AVX512_IFMA = Feature::X86Avx512Ifma.flag().bits();
        const AVX512_VBMI = Feature::X86Avx512Vbmi.flag().bits();
        const AVX512_VPOPCNTDQ = Feature::X86Avx512Vpopcntdq.flag().bits();
        const AVX512_4FMAPS = Feature::X86Avx5124Fmaps.flag().bits();
        const AVX512_4VNNIW = Feature::X86Avx5124Vnniw.flag().bits();
        const AVX512_VNNI = Feature::X86Avx512Vnni.flag().bits();
        const AVX512_BF16 = Feature::X86Avx512Bf16.flag().bits();
        const AVX512_VBMI2 = Feature::X86Avx512Vbmi2.flag().bits();
        const GFNI = Feature::X86Gfni.flag().bits();
        const VAES = Feature::X86Vaes.flag().bits();
        const VPCLMUL = Feature::X86Vpclmul.flag().bits();
        const AVX512_BITALG = Feature::X86Avx512Bitalg.flag().bits();
        const ARM_FP = Feature::ArmFp.flag().bits();
        const ARM_NEON = Feature::ArmNeon.flag().bits();
    }
}

impl Capabilities {
    pub fn has(self, feature: Feature) -> bool {
        self.contains(feature.flag())
    }

    /// Iterate over the features in this set, in bit order.
    pub fn features(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| self.has(*f))
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        for (i, feature) in self.features().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", feature.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Capabilities, Feature};

    #[test]
    fn test_feature_bits() {
        assert_eq!(Capabilities::MMX.bits(), 1);
        assert_eq!(Capabilities::SSE.bits(), 1 << 12);
        assert_eq!(Capabilities::AVX.bits(), 1 << 21);
        assert_eq!(Capabilities::AVX512_F.bits(), 1 << 26);
        assert_eq!(Capabilities::AVX512_BITALG.bits(), 1 << 44);
        assert_eq!(Capabilities::ARM_NEON.bits(), 1 << 46);

        for (i, feature) in Feature::ALL.into_iter().enumerate() {
            assert_eq!(feature as usize, i);
            assert_eq!(feature.flag().bits(), 1 << i);
        }
    }

    #[test]
    fn test_has() {
        let caps = Capabilities::SSE | Capabilities::SSE2 | Capabilities::FMA3;
        assert!(caps.has(Feature::X86Sse2));
        assert!(!caps.has(Feature::X86Avx));
        assert_eq!(
            caps.features().collect::<Vec<_>>(),
            [Feature::X86Sse, Feature::X86Sse2, Feature::X86Fma3]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Capabilities::empty().to_string(), "(none)");
        assert_eq!(
            (Capabilities::AVX | Capabilities::SSE41).to_string(),
            "SSE4.1 AVX"
        );
    }
}
