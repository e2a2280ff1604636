//! Scalar kinds.
//!
//! Every vector and matrix in this crate is built over one of ten scalar
//! kinds: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32` and
//! `f64`. Operations are defined per kind and never promote across kinds.
//!
//! The kinds are grouped by capability:
//! * [`Scalar`] - every numeric kind.
//! * [`Number`] - scalars with `+ - * / %`.
//! * [`Signed`] - numbers with negation (the signed integers and floats).
//! * [`Float`] - `f32` and `f64`, with bit-exact constants and the
//!   transcendental pass-throughs.
//!
//! [`Truthy`] is orthogonal and gives C-style truthiness to `bool` and the
//! numeric kinds, for [`any`](crate::any) and [`all`](crate::all).

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::constants;

/// A numeric scalar kind.
pub trait Scalar: Copy + PartialEq + PartialOrd + Default + Debug + 'static {
    const ZERO: Self;
    const ONE: Self;
}

/// A scalar kind closed under the arithmetic operators.
pub trait Number:
    Scalar
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
}

/// A number kind with a negation.
pub trait Signed: Number + Neg<Output = Self> {
    const NEG_ONE: Self;
}

/// A floating point kind.
///
/// The constants are the bit-exact values from [`constants`], so
/// `f32::EPSILON`-style lookups through this trait never depend on how the
/// compiler rounds a decimal literal.
pub trait Float: Signed {
    /// The same-width unsigned integer kind holding this kind's bits.
    type Bits: Copy + Debug + PartialEq;

    const EPSILON: Self;
    const PI: Self;
    const DEG2RAD: Self;
    const RAD2DEG: Self;
    /// `180`, the degree measure of [`Float::PI`].
    const HALF_TURN_DEG: Self;
    const HALF: Self;

    /// Truncation toward zero through a cast to the same-width signed
    /// integer kind.
    ///
    /// Only meaningful inside that integer kind's range. Outside of it the
    /// cast saturates, and NaN truncates to zero.
    fn trunc_cast(self) -> Self;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn asin(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
}

/// C-style truthiness: `false` and numeric zero are false, everything else
/// is true.
pub trait Truthy: Copy {
    fn is_truthy(self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(self) -> bool {
        self
    }
}

macro_rules! impl_scalar {
    ($zero:literal, $one:literal, [$($ty:ty),+]) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }

            impl Number for $ty {}

            impl Truthy for $ty {
                fn is_truthy(self) -> bool {
                    self != $zero
                }
            }
        )+
    };
}
impl_scalar!(0, 1, [u8, u16, u32, u64, i8, i16, i32, i64]);
impl_scalar!(0.0, 1.0, [f32, f64]);

macro_rules! impl_signed {
    ($neg_one:literal, [$($ty:ty),+]) => {
        $(
            impl Signed for $ty {
                const NEG_ONE: Self = $neg_one;
            }
        )+
    };
}
impl_signed!(-1, [i8, i16, i32, i64]);
impl_signed!(-1.0, [f32, f64]);

macro_rules! impl_float {
    ($ty:ident, $int:ty, $bits:ty) => {
        impl Float for $ty {
            type Bits = $bits;

            const EPSILON: Self = constants::$ty::EPSILON;
            const PI: Self = constants::$ty::PI;
            const DEG2RAD: Self = constants::$ty::DEG2RAD;
            const RAD2DEG: Self = constants::$ty::RAD2DEG;
            const HALF_TURN_DEG: Self = 180.0;
            const HALF: Self = 0.5;

            fn trunc_cast(self) -> Self {
                (self as $int) as $ty
            }

            fn to_bits(self) -> $bits {
                <$ty>::to_bits(self)
            }

            fn from_bits(bits: $bits) -> Self {
                <$ty>::from_bits(bits)
            }

            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            fn sin(self) -> Self {
                <$ty>::sin(self)
            }

            fn cos(self) -> Self {
                <$ty>::cos(self)
            }

            fn acos(self) -> Self {
                <$ty>::acos(self)
            }

            fn asin(self) -> Self {
                <$ty>::asin(self)
            }

            fn powf(self, exponent: Self) -> Self {
                <$ty>::powf(self, exponent)
            }
        }
    };
}
impl_float!(f32, i32, u32);
impl_float!(f64, i64, u64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanity_trunc_cast() {
        assert_eq!(2.0, Float::trunc_cast(2.75f32));
        assert_eq!(-2.0, Float::trunc_cast(-2.75f64));
        // Outside the i32 range the cast saturates.
        assert_eq!(i32::MAX as f32, Float::trunc_cast(1.0e20f32));
        assert_eq!(0.0, Float::trunc_cast(f32::NAN));
    }

    #[test]
    fn sanity_truthy() {
        assert!(Truthy::is_truthy(-2i8));
        assert!(!Truthy::is_truthy(0u64));
        assert!(!Truthy::is_truthy(0.0f32));
        assert!(!Truthy::is_truthy(-0.0f64));
        assert!(Truthy::is_truthy(true));
    }

    #[test]
    fn sanity_float_constants_match_table() {
        assert_eq!(0x3400_0000, <f32 as Float>::EPSILON.to_bits());
        assert_eq!(f64::EPSILON, <f64 as Float>::EPSILON);
        assert_eq!(core::f32::consts::PI, <f32 as Float>::PI);
    }
}
