//! Bit-exact floating point constants.
//!
//! Each constant is built from its IEEE-754 bit pattern rather than a decimal
//! literal, so its representation is identical on every target and
//! toolchain. The `TABLE` in each module lists every constant by name with
//! its pattern.

macro_rules! bit_constants {
    ($float:ident, $bits:ty, [$($(#[$meta:meta])* $name:ident = $pattern:literal),+ $(,)?]) => {
        $(
            $(#[$meta])*
            pub const $name: $float = $float::from_bits($pattern);
        )+

        /// Every constant in this module, by name, with its bit pattern.
        pub const TABLE: &[(&str, $bits)] = &[$((stringify!($name), $pattern)),+];
    };
}

/// Constants for 32-bit floats.
pub mod f32 {
    bit_constants!(
        f32,
        u32,
        [
            /// Difference between `1.0` and the next larger value.
            EPSILON = 0x3400_0000,
            /// Largest finite value.
            HUGE = 0x7f7f_ffff,
            INFINITY = 0x7f80_0000,
            /// The smallest bit pattern that is a quiet NaN.
            NAN = 0x7fc0_0000,
            PI = 0x4049_0fdb,
            /// `2 * pi`.
            TWO_PI = 0x40c9_0fdb,
            /// `pi * pi`.
            PI_SQUARED = 0x411d_e9e7,
            SQRT_PI = 0x3fe2_dfc5,
            /// `1 / sqrt(pi)`.
            RSQRT_PI = 0x3f10_6eba,
            /// `pi / 2`.
            HALF_PI = 0x3fc9_0fdb,
            /// `1 / pi`.
            FRAC_1_PI = 0x3ea2_f983,
            /// `2 / pi`.
            FRAC_2_PI = 0x3f22_f983,
            /// Radians per degree, `pi / 180`.
            DEG2RAD = 0x3c8e_fa35,
            /// Degrees per radian, `180 / pi`.
            RAD2DEG = 0x4265_2ee0,
        ]
    );
}

/// Constants for 64-bit floats.
pub mod f64 {
    bit_constants!(
        f64,
        u64,
        [
            /// Difference between `1.0` and the next larger value.
            EPSILON = 0x3cb0_0000_0000_0000,
            /// Largest finite value.
            HUGE = 0x7fef_ffff_ffff_ffff,
            INFINITY = 0x7ff0_0000_0000_0000,
            /// The smallest bit pattern that is a quiet NaN.
            NAN = 0x7ff8_0000_0000_0000,
            PI = 0x4009_21fb_5444_2d18,
            /// `2 * pi`.
            TWO_PI = 0x4019_21fb_5444_2d18,
            /// `pi * pi`.
            PI_SQUARED = 0x4023_bd3c_c9be_45de,
            SQRT_PI = 0x3ffc_5bf8_91b4_ef6a,
            /// `1 / sqrt(pi)`.
            RSQRT_PI = 0x3fe2_0dd7_5042_9b6d,
            /// `pi / 2`.
            HALF_PI = 0x3ff9_21fb_5444_2d18,
            /// `1 / pi`.
            FRAC_1_PI = 0x3fd4_5f30_6dc9_c883,
            /// `2 / pi`.
            FRAC_2_PI = 0x3fe4_5f30_6dc9_c883,
            /// Radians per degree, `pi / 180`.
            DEG2RAD = 0x3f91_df46_a252_9d39,
            /// Degrees per radian, `180 / pi`.
            RAD2DEG = 0x404c_a5dc_1a63_c1f8,
        ]
    );
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    #[test]
    fn sanity_f32_matches_core() {
        assert_eq!(core::f32::EPSILON, super::f32::EPSILON);
        assert_eq!(core::f32::MAX, super::f32::HUGE);
        assert_eq!(core::f32::INFINITY, super::f32::INFINITY);
        assert_eq!(core::f32::consts::PI, super::f32::PI);
        assert_eq!(core::f32::consts::TAU, super::f32::TWO_PI);
        assert_eq!(core::f32::consts::FRAC_PI_2, super::f32::HALF_PI);
        assert_eq!(core::f32::consts::FRAC_1_PI, super::f32::FRAC_1_PI);
        assert_eq!(core::f32::consts::FRAC_2_PI, super::f32::FRAC_2_PI);
        assert_relative_eq!(
            core::f32::consts::FRAC_2_SQRT_PI / 2.0,
            super::f32::RSQRT_PI,
            max_relative = 1e-6
        );
    }

    #[test]
    fn sanity_f64_matches_core() {
        assert_eq!(core::f64::EPSILON, super::f64::EPSILON);
        assert_eq!(core::f64::MAX, super::f64::HUGE);
        assert_eq!(core::f64::INFINITY, super::f64::INFINITY);
        assert_eq!(core::f64::consts::PI, super::f64::PI);
        assert_eq!(core::f64::consts::TAU, super::f64::TWO_PI);
        assert_eq!(core::f64::consts::FRAC_PI_2, super::f64::HALF_PI);
        assert_eq!(core::f64::consts::FRAC_1_PI, super::f64::FRAC_1_PI);
        assert_eq!(core::f64::consts::FRAC_2_PI, super::f64::FRAC_2_PI);
        assert_eq!(
            core::f64::consts::FRAC_2_SQRT_PI / 2.0,
            super::f64::RSQRT_PI
        );
    }

    #[test]
    fn sanity_derived_values() {
        assert_relative_eq!(
            super::f32::PI * super::f32::PI,
            super::f32::PI_SQUARED,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            super::f32::PI.sqrt(),
            super::f32::SQRT_PI,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            180.0 * super::f32::DEG2RAD,
            super::f32::PI,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            super::f32::PI * super::f32::RAD2DEG,
            180.0,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            super::f64::PI * super::f64::PI,
            super::f64::PI_SQUARED,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            super::f64::PI.sqrt(),
            super::f64::SQRT_PI,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            180.0 * super::f64::DEG2RAD,
            super::f64::PI,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            super::f64::PI * super::f64::RAD2DEG,
            180.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn sanity_nan_is_smallest_quiet_nan() {
        assert!(super::f32::NAN.is_nan());
        assert!(super::f64::NAN.is_nan());
        assert_eq!(0x7fc0_0000, super::f32::NAN.to_bits());
        assert_eq!(0x7ff8_0000_0000_0000, super::f64::NAN.to_bits());
    }

    #[test]
    fn sanity_tables_roundtrip() {
        for (name, bits) in super::f32::TABLE {
            assert_eq!(*bits, f32::from_bits(*bits).to_bits(), "{name}");
        }
        assert_eq!(14, super::f32::TABLE.len());
        assert_eq!(super::f32::TABLE.len(), super::f64::TABLE.len());
    }
}
