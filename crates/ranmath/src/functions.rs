//! Componentwise numeric functions.
//!
//! Each function is a trait with a matching free function, implemented for
//! the scalar kinds it is defined over and, componentwise, for every vector
//! of those kinds.
//!
//! | Function | Kinds |
//! | --- | --- |
//! | `abs`, `sign`, `copysign` | signed integers, floats |
//! | `min`, `max`, `clamp`, `modulo`, `fma`, `pow2` | every numeric kind |
//! | `trunc`, `floor`, `ceil`, `round`, `fract`, `wrap` | floats |
//! | `deg2rad`, `rad2deg` | floats |
//! | `powi`, `powf` | floats |
//! | `sqrt`, `sin`, `cos`, `acos`, `asin` and their `_deg` forms | floats |
//!
//! The rounding family is computed through [`Float::trunc_cast`], a cast
//! through the same-width signed integer kind. Inputs outside that kind's
//! range saturate, so these functions are only meaningful for magnitudes
//! below `2^31` (`f32`) or `2^63` (`f64`).

use crate::{Float, Number, Signed, Vector};

pub mod geometric;
pub mod relational;

/// Provides `abs`.
pub trait Abs {
    /// Negation of negative values. `abs(MIN)` of a signed integer kind
    /// overflows.
    fn abs(self) -> Self;
}

/// The absolute value of `e`. Componentwise for vectors.
pub fn abs<T: Abs>(e: T) -> T {
    <T as Abs>::abs(e)
}

/// Provides `sign`.
pub trait Sign {
    /// `1` for positive values, `-1` for negative values and `0` otherwise.
    fn sign(self) -> Self;
}

/// The sign of `e` as `-1`, `0` or `1`. NaN has sign `0`.
pub fn sign<T: Sign>(e: T) -> T {
    <T as Sign>::sign(e)
}

/// Provides `copysign`.
pub trait CopySign {
    fn copysign(self, sign: Self) -> Self;
}

/// `abs(x) * sign(s)`. A zero `s` yields zero rather than a signed `x`.
pub fn copysign<T: CopySign>(x: T, s: T) -> T {
    <T as CopySign>::copysign(x, s)
}

/// Provides `min`.
pub trait Min {
    fn min(self, other: Self) -> Self;
}

/// The smaller of `a` and `b`, `b` if they are unordered.
pub fn min<T: Min>(a: T, b: T) -> T {
    <T as Min>::min(a, b)
}

/// Provides `max`.
pub trait Max {
    fn max(self, other: Self) -> Self;
}

/// The larger of `a` and `b`, `b` if they are unordered.
pub fn max<T: Max>(a: T, b: T) -> T {
    <T as Max>::max(a, b)
}

/// Provides `clamp`.
pub trait Clamp {
    fn clamp(self, low: Self, high: Self) -> Self;
}

/// `min(max(e, low), high)`. With `low > high` the result is `high`.
pub fn clamp<T: Clamp>(e: T, low: T, high: T) -> T {
    <T as Clamp>::clamp(e, low, high)
}

/// Provides `modulo`.
pub trait Modulo {
    fn modulo(self, divisor: Self) -> Self;
}

/// The remainder of `a / b`, carrying the sign of `a`.
///
/// For integers this is `%` and panics when `b` is zero. For floats it is
/// `a - trunc(a / b) * b`, so a zero divisor gives back `a`: the infinite
/// quotient truncates to the saturated integer bound, which the zero divisor
/// then cancels. A NaN operand still yields NaN.
pub fn modulo<T: Modulo>(a: T, b: T) -> T {
    <T as Modulo>::modulo(a, b)
}

/// Provides `fma`.
pub trait Fma {
    fn fma(self, b: Self, c: Self) -> Self;
}

/// `a * b + c`, as an ordinary multiply followed by an ordinary add.
pub fn fma<T: Fma>(a: T, b: T, c: T) -> T {
    <T as Fma>::fma(a, b, c)
}

/// Provides `pow2`.
pub trait Pow2 {
    fn pow2(self) -> Self;
}

/// `e * e`.
pub fn pow2<T: Pow2>(e: T) -> T {
    <T as Pow2>::pow2(e)
}

/// Provides `powi` and `powf`.
pub trait Power {
    /// Raises to an integer power by repeated multiplication. Zero stays
    /// zero for every exponent, including zero and negative ones.
    fn powi(self, exponent: i32) -> Self;
    fn powf(self, exponent: Self) -> Self;
}

/// `e` raised to the integer `exponent`. Componentwise for vectors.
pub fn powi<T: Power>(e: T, exponent: i32) -> T {
    <T as Power>::powi(e, exponent)
}

/// `e` raised to `exponent`, through the standard library.
pub fn powf<T: Power>(e: T, exponent: T) -> T {
    <T as Power>::powf(e, exponent)
}

/// Provides `trunc`, `floor`, `ceil`, `round` and `fract`.
pub trait Round {
    fn trunc(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Rounds half away from zero.
    fn round(self) -> Self;
    fn fract(self) -> Self;
}

/// Truncation toward zero.
pub fn trunc<T: Round>(e: T) -> T {
    <T as Round>::trunc(e)
}

/// The largest integral value not above `e`.
pub fn floor<T: Round>(e: T) -> T {
    <T as Round>::floor(e)
}

/// The smallest integral value not below `e`.
pub fn ceil<T: Round>(e: T) -> T {
    <T as Round>::ceil(e)
}

/// The nearest integral value, halfway cases away from zero.
pub fn round<T: Round>(e: T) -> T {
    <T as Round>::round(e)
}

/// `e - floor(e)`.
pub fn fract<T: Round>(e: T) -> T {
    <T as Round>::fract(e)
}

/// Provides `wrap`.
pub trait Wrap {
    fn wrap(self, min: Self, max: Self) -> Self;
}

/// Wraps `val` into the range `[min, max)`, cyclically.
pub fn wrap<T: Wrap>(val: T, min: T, max: T) -> T {
    <T as Wrap>::wrap(val, min, max)
}

/// Provides `deg2rad` and `rad2deg`.
pub trait Angle {
    fn deg2rad(self) -> Self;
    fn rad2deg(self) -> Self;
}

/// Converts degrees to radians.
pub fn deg2rad<T: Angle>(e: T) -> T {
    <T as Angle>::deg2rad(e)
}

/// Converts radians to degrees.
pub fn rad2deg<T: Angle>(e: T) -> T {
    <T as Angle>::rad2deg(e)
}

/// Provides the floating point pass-throughs `sqrt`, `sin`, `cos`, `acos`
/// and `asin`.
///
/// The `_deg` forms take (`sin`, `cos`) or return (`acos`, `asin`) degrees.
pub trait Transcendental {
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn asin(self) -> Self;
    fn sin_deg(self) -> Self;
    fn cos_deg(self) -> Self;
    fn acos_deg(self) -> Self;
    fn asin_deg(self) -> Self;
}

pub fn sqrt<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::sqrt(e)
}

pub fn sin<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::sin(e)
}

pub fn cos<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::cos(e)
}

/// Not meaningful when `abs(e) > 1`.
pub fn acos<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::acos(e)
}

/// Not meaningful when `abs(e) > 1`.
pub fn asin<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::asin(e)
}

pub fn sin_deg<T: Transcendental>(degrees: T) -> T {
    <T as Transcendental>::sin_deg(degrees)
}

pub fn cos_deg<T: Transcendental>(degrees: T) -> T {
    <T as Transcendental>::cos_deg(degrees)
}

pub fn acos_deg<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::acos_deg(e)
}

pub fn asin_deg<T: Transcendental>(e: T) -> T {
    <T as Transcendental>::asin_deg(e)
}

fn float_floor<T: Float>(x: T) -> T {
    let t = x.trunc_cast();
    if x < t {
        t - T::ONE
    } else {
        t
    }
}

fn float_ceil<T: Float>(x: T) -> T {
    let t = x.trunc_cast();
    if x > t {
        t + T::ONE
    } else {
        t
    }
}

fn float_round<T: Float>(x: T) -> T {
    if x < T::ZERO {
        let t = float_floor(-x);
        if t + x <= -T::HALF {
            -(t + T::ONE)
        } else {
            -t
        }
    } else {
        let t = float_floor(x);
        if t - x <= -T::HALF {
            t + T::ONE
        } else {
            t
        }
    }
}

fn float_modulo<T: Float>(a: T, b: T) -> T {
    a - (a / b).trunc_cast() * b
}

fn float_powi<T: Float>(x: T, exponent: i32) -> T {
    if x == T::ZERO {
        return x;
    }
    let mut base = if exponent < 0 { T::ONE / x } else { x };
    let mut remaining = exponent.unsigned_abs();
    let mut acc = T::ONE;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc = acc * base;
        }
        base = base * base;
        remaining >>= 1;
    }
    acc
}

fn signum<T: Signed>(x: T) -> T {
    if x > T::ZERO {
        T::ONE
    } else if x < T::ZERO {
        T::NEG_ONE
    } else {
        T::ZERO
    }
}

fn select_min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

fn select_max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

mod signed {
    use super::*;

    macro_rules! impl_signed_scalar {
        ($($ty:ty),+) => {
            $(
                impl Abs for $ty {
                    fn abs(self) -> Self {
                        if self < 0 as $ty {
                            -self
                        } else {
                            self
                        }
                    }
                }

                impl Sign for $ty {
                    fn sign(self) -> Self {
                        signum(self)
                    }
                }

                impl CopySign for $ty {
                    fn copysign(self, sign: Self) -> Self {
                        Abs::abs(self) * signum(sign)
                    }
                }
            )+
        };
    }
    impl_signed_scalar!(i8, i16, i32, i64, f32, f64);
}

mod numeric {
    use super::*;

    macro_rules! impl_numeric_scalar {
        ($($ty:ty),+) => {
            $(
                impl Min for $ty {
                    fn min(self, other: Self) -> Self {
                        select_min(self, other)
                    }
                }

                impl Max for $ty {
                    fn max(self, other: Self) -> Self {
                        select_max(self, other)
                    }
                }

                impl Clamp for $ty {
                    fn clamp(self, low: Self, high: Self) -> Self {
                        select_min(select_max(self, low), high)
                    }
                }

                impl Fma for $ty {
                    fn fma(self, b: Self, c: Self) -> Self {
                        self * b + c
                    }
                }

                impl Pow2 for $ty {
                    fn pow2(self) -> Self {
                        self * self
                    }
                }
            )+
        };
    }
    impl_numeric_scalar!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

    macro_rules! impl_integer_modulo {
        ($($ty:ty),+) => {
            $(
                impl Modulo for $ty {
                    fn modulo(self, divisor: Self) -> Self {
                        self % divisor
                    }
                }
            )+
        };
    }
    impl_integer_modulo!(u8, u16, u32, u64, i8, i16, i32, i64);
}

mod float {
    use super::*;

    macro_rules! impl_float_scalar {
        ($($ty:ty),+) => {
            $(
                impl Modulo for $ty {
                    fn modulo(self, divisor: Self) -> Self {
                        float_modulo(self, divisor)
                    }
                }

                impl Round for $ty {
                    fn trunc(self) -> Self {
                        Float::trunc_cast(self)
                    }

                    fn floor(self) -> Self {
                        float_floor(self)
                    }

                    fn ceil(self) -> Self {
                        float_ceil(self)
                    }

                    fn round(self) -> Self {
                        float_round(self)
                    }

                    fn fract(self) -> Self {
                        self - float_floor(self)
                    }
                }

                impl Wrap for $ty {
                    fn wrap(self, min: Self, max: Self) -> Self {
                        let tmax = max - min;
                        min + float_modulo(tmax + float_modulo(self - min, tmax), tmax)
                    }
                }

                impl Angle for $ty {
                    fn deg2rad(self) -> Self {
                        self * <$ty as Float>::DEG2RAD
                    }

                    fn rad2deg(self) -> Self {
                        self * <$ty as Float>::RAD2DEG
                    }
                }

                impl Power for $ty {
                    fn powi(self, exponent: i32) -> Self {
                        float_powi(self, exponent)
                    }

                    fn powf(self, exponent: Self) -> Self {
                        Float::powf(self, exponent)
                    }
                }

                impl Transcendental for $ty {
                    fn sqrt(self) -> Self {
                        Float::sqrt(self)
                    }

                    fn sin(self) -> Self {
                        Float::sin(self)
                    }

                    fn cos(self) -> Self {
                        Float::cos(self)
                    }

                    fn acos(self) -> Self {
                        Float::acos(self)
                    }

                    fn asin(self) -> Self {
                        Float::asin(self)
                    }

                    fn sin_deg(self) -> Self {
                        Float::sin(self * <$ty as Float>::DEG2RAD)
                    }

                    fn cos_deg(self) -> Self {
                        Float::cos(self * <$ty as Float>::DEG2RAD)
                    }

                    fn acos_deg(self) -> Self {
                        Float::acos(self) * <$ty as Float>::RAD2DEG
                    }

                    fn asin_deg(self) -> Self {
                        Float::asin(self) * <$ty as Float>::RAD2DEG
                    }
                }
            )+
        };
    }
    impl_float_scalar!(f32, f64);
}

mod vector {
    use super::*;

    impl<T: Copy + Abs, const N: usize> Abs for Vector<T, N> {
        fn abs(self) -> Self {
            self.map(Abs::abs)
        }
    }

    impl<T: Copy + Sign, const N: usize> Sign for Vector<T, N> {
        fn sign(self) -> Self {
            self.map(Sign::sign)
        }
    }

    impl<T: Copy + CopySign, const N: usize> CopySign for Vector<T, N> {
        fn copysign(self, sign: Self) -> Self {
            self.zip_map(sign, CopySign::copysign)
        }
    }

    impl<T: Copy + Min, const N: usize> Min for Vector<T, N> {
        fn min(self, other: Self) -> Self {
            self.zip_map(other, Min::min)
        }
    }

    impl<T: Copy + Max, const N: usize> Max for Vector<T, N> {
        fn max(self, other: Self) -> Self {
            self.zip_map(other, Max::max)
        }
    }

    impl<T: Copy + Clamp, const N: usize> Clamp for Vector<T, N> {
        fn clamp(self, low: Self, high: Self) -> Self {
            self.zip3_map(low, high, Clamp::clamp)
        }
    }

    impl<T: Copy + Modulo, const N: usize> Modulo for Vector<T, N> {
        fn modulo(self, divisor: Self) -> Self {
            self.zip_map(divisor, Modulo::modulo)
        }
    }

    impl<T: Copy + Fma, const N: usize> Fma for Vector<T, N> {
        fn fma(self, b: Self, c: Self) -> Self {
            self.zip3_map(b, c, Fma::fma)
        }
    }

    impl<T: Copy + Pow2, const N: usize> Pow2 for Vector<T, N> {
        fn pow2(self) -> Self {
            self.map(Pow2::pow2)
        }
    }

    impl<T: Copy + Power, const N: usize> Power for Vector<T, N> {
        fn powi(self, exponent: i32) -> Self {
            self.map(|e| Power::powi(e, exponent))
        }

        fn powf(self, exponent: Self) -> Self {
            self.zip_map(exponent, Power::powf)
        }
    }

    impl<T: Copy + Round, const N: usize> Round for Vector<T, N> {
        fn trunc(self) -> Self {
            self.map(Round::trunc)
        }

        fn floor(self) -> Self {
            self.map(Round::floor)
        }

        fn ceil(self) -> Self {
            self.map(Round::ceil)
        }

        fn round(self) -> Self {
            self.map(Round::round)
        }

        fn fract(self) -> Self {
            self.map(Round::fract)
        }
    }

    impl<T: Copy + Wrap, const N: usize> Wrap for Vector<T, N> {
        fn wrap(self, min: Self, max: Self) -> Self {
            self.zip3_map(min, max, Wrap::wrap)
        }
    }

    impl<T: Copy + Angle, const N: usize> Angle for Vector<T, N> {
        fn deg2rad(self) -> Self {
            self.map(Angle::deg2rad)
        }

        fn rad2deg(self) -> Self {
            self.map(Angle::rad2deg)
        }
    }

    impl<T: Copy + Transcendental, const N: usize> Transcendental for Vector<T, N> {
        fn sqrt(self) -> Self {
            self.map(Transcendental::sqrt)
        }

        fn sin(self) -> Self {
            self.map(Transcendental::sin)
        }

        fn cos(self) -> Self {
            self.map(Transcendental::cos)
        }

        fn acos(self) -> Self {
            self.map(Transcendental::acos)
        }

        fn asin(self) -> Self {
            self.map(Transcendental::asin)
        }

        fn sin_deg(self) -> Self {
            self.map(Transcendental::sin_deg)
        }

        fn cos_deg(self) -> Self {
            self.map(Transcendental::cos_deg)
        }

        fn acos_deg(self) -> Self {
            self.map(Transcendental::acos_deg)
        }

        fn asin_deg(self) -> Self {
            self.map(Transcendental::asin_deg)
        }
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// `self * b + c` with a scalar `b` and `c`.
    pub fn fma_scalars(self, b: T, c: T) -> Self {
        self.map(|a| a * b + c)
    }

    /// `self * b + c` with a vector `b` and a scalar `c`.
    pub fn fma_scalar(self, b: Self, c: T) -> Self {
        self.zip_map(b, |a, b| a * b + c)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{vec2, vec3, vec4};

    #[test]
    fn sanity_abs_sign_copysign() {
        assert_eq!(3, abs(-3i8));
        assert_eq!(2.5, abs(-2.5f64));
        assert_eq!(vec2(1i32, 2), abs(vec2(-1, 2)));

        assert_eq!(-1, sign(-7i16));
        assert_eq!(0.0, sign(0.0f32));
        assert_eq!(1.0, sign(0.1f64));
        assert_eq!(0.0, sign(f32::NAN));
        assert_eq!(vec3(-1i64, 0, 1), sign(vec3(-9, 0, 4)));

        assert_eq!(-4.0, copysign(4.0f32, -0.5));
        assert_eq!(4.0, copysign(-4.0f32, 2.0));
        assert_eq!(0.0, copysign(4.0f32, 0.0));
        assert_eq!(0, copysign(-4i32, 0));
    }

    #[test]
    fn sanity_min_max_clamp() {
        assert_eq!(2u8, min(2u8, 3));
        assert_eq!(3u8, max(2u8, 3));
        assert_eq!(vec3(1, -5, 3), min(vec3(1i32, 2, 3), vec3(4, -5, 6)));
        assert_eq!(5.0, clamp(7.0f32, 0.0, 5.0));
        assert_eq!(0.0, clamp(-7.0f32, 0.0, 5.0));
        assert_eq!(2.0, clamp(2.0f64, 0.0, 5.0));
        // An inverted range resolves to `high`.
        assert_eq!(1, clamp(3i32, 5, 1));
        assert_eq!(
            vec2(0u16, 10),
            clamp(vec2(0u16, 20), Vector::splat(0), Vector::splat(10))
        );
    }

    #[test]
    fn sanity_modulo() {
        assert_eq!(1.5, modulo(5.5f32, 2.0));
        assert_eq!(-1.5, modulo(-5.5f32, 2.0));
        assert_eq!(1.5, modulo(5.5f64, -2.0));
        assert_eq!(-1, modulo(-7i32, 3));
        assert_eq!(1, modulo(7u64, 3));
        assert_eq!(vec2(1.0f32, 0.5), modulo(vec2(4.0, 2.5), vec2(3.0, 1.0)));
    }

    #[test]
    fn sanity_float_modulo_by_zero_returns_dividend() {
        assert_eq!(1.0, modulo(1.0f32, 0.0));
        assert_eq!(-2.5, modulo(-2.5f64, 0.0));
        assert!(modulo(f32::NAN, 0.0).is_nan());
        assert_eq!(vec2(3.0f32, 1.0), modulo(vec2(3.0, 5.0), vec2(0.0, 2.0)));
    }

    #[test]
    #[should_panic]
    fn sanity_integer_modulo_by_zero_panics() {
        let _ = modulo(7u32, 0);
    }

    #[test]
    fn sanity_rounding() {
        assert_eq!(2.0, trunc(2.7f32));
        assert_eq!(-2.0, trunc(-2.7f32));

        assert_eq!(2.0, floor(2.7f32));
        assert_eq!(-3.0, floor(-2.7f32));
        assert_eq!(-2.0, floor(-2.0f32));
        assert_eq!(3.0, floor(3.0f64));

        assert_eq!(3.0, ceil(2.1f32));
        assert_eq!(-2.0, ceil(-2.7f32));
        assert_eq!(2.0, ceil(2.0f32));
        assert_eq!(-4.0, ceil(-4.0f64));

        assert_eq!(3.0, round(2.5f32));
        assert_eq!(-3.0, round(-2.5f32));
        assert_eq!(2.0, round(2.4f64));
        assert_eq!(-2.0, round(-2.4f64));
        assert_eq!(0.0, round(0.0f32));

        assert_eq!(0.25, fract(2.25f32));
        assert_eq!(0.75, fract(-2.25f64));
        assert_eq!(vec2(1.0f32, -2.0), floor(vec2(1.5, -1.5)));
    }

    #[test]
    fn sanity_wrap() {
        assert_eq!(30.0, wrap(390.0f32, 0.0, 360.0));
        assert_eq!(350.0, wrap(-10.0f32, 0.0, 360.0));
        assert_eq!(-170.0, wrap(190.0f64, -180.0, 180.0));
        assert_eq!(0.0, wrap(360.0f64, 0.0, 360.0));
        assert_eq!(
            vec2(1.0f32, 2.0),
            wrap(vec2(4.0, -1.0), Vector::splat(0.0), Vector::splat(3.0))
        );
    }

    #[test]
    fn sanity_angles() {
        approx::assert_relative_eq!(
            crate::constants::f32::PI,
            deg2rad(180.0f32),
            max_relative = 1e-6
        );
        approx::assert_relative_eq!(
            180.0,
            rad2deg(crate::constants::f64::PI),
            max_relative = 1e-12
        );
        let v = deg2rad(vec2(0.0f64, 90.0));
        assert_eq!(0.0, v.x());
        approx::assert_relative_eq!(crate::constants::f64::HALF_PI, v.y(), max_relative = 1e-12);
    }

    #[test]
    fn sanity_transcendentals() {
        assert_eq!(0.0, sqrt(0.0f32));
        assert_eq!(0.0, sqrt(0.0f64));
        assert_eq!(3.0, sqrt(9.0f64));
        assert!(sqrt(-1.0f32).is_nan());
        assert_eq!(vec2(2.0f32, 4.0), sqrt(vec2(4.0, 16.0)));
        assert_eq!(0.0, sin(0.0f32));
        assert_eq!(1.0, cos(0.0f64));
        assert_eq!(0.0, acos(1.0f32));
        assert_eq!(0.0, asin(0.0f64));
    }

    #[test]
    fn sanity_powers() {
        assert_eq!(49, pow2(-7i32));
        assert_eq!(225u8, pow2(15u8));
        assert_eq!(6.25, pow2(2.5f32));
        assert_eq!(vec3(1u16, 4, 9), pow2(vec3(1u16, 2, 3)));

        assert_eq!(1024.0, powi(2.0f32, 10));
        assert_eq!(0.25, powi(2.0f64, -2));
        assert_eq!(1.0, powi(3.0f32, 0));
        assert_eq!(-1.0, powi(-1.0f32, 3));
        assert_eq!(1.0, powi(-1.0f64, -4));
        assert_eq!(0.0, powi(0.0f32, 0));
        assert_eq!(0.0, powi(0.0f64, -3));
        assert_eq!(vec2(8.0f32, -8.0), powi(vec2(2.0, -2.0), 3));

        assert_eq!(3.0, powf(9.0f64, 0.5));
        assert_eq!(vec2(4.0f32, 2.0), powf(vec2(2.0, 4.0), vec2(2.0, 0.5)));
    }

    #[test]
    fn sanity_degree_trig() {
        approx::assert_relative_eq!(1.0, sin_deg(90.0f32), max_relative = 1e-6);
        approx::assert_relative_eq!(0.5, cos_deg(60.0f64), max_relative = 1e-12);
        approx::assert_relative_eq!(90.0, acos_deg(0.0f64), max_relative = 1e-12);
        approx::assert_relative_eq!(30.0, asin_deg(0.5f32), max_relative = 1e-5);
        assert_eq!(0.0, sin_deg(0.0f64));
        assert_eq!(0.0, acos_deg(1.0f32));
        let v = cos_deg(vec2(0.0f64, 180.0));
        assert_eq!(1.0, v.x());
        approx::assert_relative_eq!(-1.0, v.y(), max_relative = 1e-12);
    }

    #[test]
    fn sanity_fma() {
        assert_eq!(7, fma(2i32, 3, 1));
        assert_eq!(
            vec3(5.0f32, 7.0, 9.0),
            fma(vec3(1.0, 2.0, 3.0), Vector::splat(2.0), Vector::splat(3.0))
        );
        assert_eq!(vec4(3u8, 5, 7, 9), vec4(1u8, 2, 3, 4).fma_scalars(2, 1));
        assert_eq!(vec2(11i16, 21), vec2(1i16, 2).fma_scalar(vec2(10, 10), 1));
    }
}
