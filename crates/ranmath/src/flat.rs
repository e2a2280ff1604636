//! Flat, monomorphic function surface.
//!
//! Every generic operation is also available as a plain function named after
//! the operation and the exact kind it works on, for callers that prefer
//! `dot_f32x4(a, b)` to `a.dot(b)`:
//!
//! * scalars: `<op>_<kind>`, e.g. [`mod_f32`], [`sign_i16`],
//! * vectors: `<op>_<kind>x<N>`, e.g. [`neg_i8x2`], [`dot_f32x4`],
//! * vector with scalar operand: an `s` suffix, e.g. [`adds_u8x3`] is
//!   `v + s`,
//! * scalar with vector operand, for non-commutative operations: an `s`
//!   prefix, e.g. [`ssub_f64x2`] is `s - v`,
//! * constructors: `<kind>x<N>` from components, `<kind>x<N>s` broadcast,
//!   and concatenations such as [`f32x4v3s`] (a 3-vector then a scalar).
//!
//! ```rust
//! use ranmath::flat::*;
//!
//! assert_eq!(1.5, mod_f32(5.5, 2.0));
//! assert_eq!(i8x2(-1, 2), neg_i8x2(i8x2(1, -2)));
//! assert_eq!(10.0, dot_f32x4(f32x4(1.0, 2.0, 3.0, 4.0), f32x4s(1.0)));
//! ```

use paste::paste;

use crate::{
    abs, ceil, clamp, copysign, deg2rad, floor, fma, fract, max, min, modulo, not, pow2, powf, powi,
    rad2deg, round, sign, trunc, wrap, Cross, Transcendental, Vector,
};

/// flat_constructors! generates the component, broadcast and concatenating
/// constructors for one kind.
macro_rules! flat_constructors {
    ($k:ident) => {
        paste! {
            #[doc = concat!("A 2-vector of `", stringify!($k), "`.")]
            pub const fn [<$k x2>](x: $k, y: $k) -> Vector<$k, 2> {
                Vector::new([x, y])
            }

            pub const fn [<$k x2s>](s: $k) -> Vector<$k, 2> {
                Vector::splat(s)
            }

            #[doc = concat!("A 3-vector of `", stringify!($k), "`.")]
            pub const fn [<$k x3>](x: $k, y: $k, z: $k) -> Vector<$k, 3> {
                Vector::new([x, y, z])
            }

            pub const fn [<$k x3s>](s: $k) -> Vector<$k, 3> {
                Vector::splat(s)
            }

            pub const fn [<$k x3v2s>](xy: Vector<$k, 2>, z: $k) -> Vector<$k, 3> {
                Vector::<$k, 3>::from_lower_scalar(xy, z)
            }

            pub const fn [<$k x3sv2>](x: $k, yz: Vector<$k, 2>) -> Vector<$k, 3> {
                Vector::<$k, 3>::from_scalar_lower(x, yz)
            }

            #[doc = concat!("A 4-vector of `", stringify!($k), "`.")]
            pub const fn [<$k x4>](x: $k, y: $k, z: $k, w: $k) -> Vector<$k, 4> {
                Vector::new([x, y, z, w])
            }

            pub const fn [<$k x4s>](s: $k) -> Vector<$k, 4> {
                Vector::splat(s)
            }

            pub const fn [<$k x4v3s>](xyz: Vector<$k, 3>, w: $k) -> Vector<$k, 4> {
                Vector::<$k, 4>::from_lower_scalar(xyz, w)
            }

            pub const fn [<$k x4sv3>](x: $k, yzw: Vector<$k, 3>) -> Vector<$k, 4> {
                Vector::<$k, 4>::from_scalar_lower(x, yzw)
            }

            pub const fn [<$k x4v2ss>](xy: Vector<$k, 2>, z: $k, w: $k) -> Vector<$k, 4> {
                Vector::from_pair_scalars(xy, z, w)
            }

            pub const fn [<$k x4ssv2>](x: $k, y: $k, zw: Vector<$k, 2>) -> Vector<$k, 4> {
                Vector::from_scalars_pair(x, y, zw)
            }

            pub const fn [<$k x4sv2s>](x: $k, yz: Vector<$k, 2>, w: $k) -> Vector<$k, 4> {
                Vector::from_scalar_pair_scalar(x, yz, w)
            }
        }
    };
}

/// flat_number! generates the operations shared by every numeric kind.
macro_rules! flat_number {
    ($k:ident) => {
        flat_constructors!($k);

        paste! {
            pub fn [<min_ $k>](a: $k, b: $k) -> $k {
                min(a, b)
            }

            pub fn [<max_ $k>](a: $k, b: $k) -> $k {
                max(a, b)
            }

            pub fn [<clamp_ $k>](val: $k, low: $k, high: $k) -> $k {
                clamp(val, low, high)
            }

            pub fn [<mod_ $k>](a: $k, b: $k) -> $k {
                modulo(a, b)
            }

            pub fn [<fma_ $k>](a: $k, b: $k, c: $k) -> $k {
                fma(a, b, c)
            }

            pub fn [<pow2_ $k>](e: $k) -> $k {
                pow2(e)
            }
        }

        flat_number_vector!($k, 2);
        flat_number_vector!($k, 3);
        flat_number_vector!($k, 4);
    };
}

macro_rules! flat_number_vector {
    ($k:ident, $n:literal) => {
        paste! {
            pub const fn [<zero_ $k x $n>]() -> Vector<$k, $n> {
                Vector::<$k, $n>::ZERO
            }

            pub const fn [<one_ $k x $n>]() -> Vector<$k, $n> {
                Vector::<$k, $n>::ONE
            }

            pub const fn [<copy_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                v
            }

            pub fn [<add_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                a + b
            }

            pub fn [<adds_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                a + s
            }

            pub fn [<sub_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                a - b
            }

            pub fn [<subs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                a - s
            }

            pub fn [<ssub_ $k x $n>](s: $k, a: Vector<$k, $n>) -> Vector<$k, $n> {
                s - a
            }

            pub fn [<mul_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                a * b
            }

            pub fn [<muls_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                a * s
            }

            pub fn [<div_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                a / b
            }

            pub fn [<divs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                a / s
            }

            pub fn [<sdiv_ $k x $n>](s: $k, a: Vector<$k, $n>) -> Vector<$k, $n> {
                s / a
            }

            pub fn [<mod_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                modulo(a, b)
            }

            pub fn [<mods_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                modulo(a, Vector::splat(s))
            }

            pub fn [<smod_ $k x $n>](s: $k, a: Vector<$k, $n>) -> Vector<$k, $n> {
                modulo(Vector::splat(s), a)
            }

            pub fn [<min_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                min(a, b)
            }

            pub fn [<mins_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                min(a, Vector::splat(s))
            }

            pub fn [<max_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                max(a, b)
            }

            pub fn [<maxs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                max(a, Vector::splat(s))
            }

            pub fn [<clamp_ $k x $n>](
                v: Vector<$k, $n>,
                low: Vector<$k, $n>,
                high: Vector<$k, $n>,
            ) -> Vector<$k, $n> {
                clamp(v, low, high)
            }

            pub fn [<clamps_ $k x $n>](v: Vector<$k, $n>, low: $k, high: $k) -> Vector<$k, $n> {
                clamp(v, Vector::splat(low), Vector::splat(high))
            }

            pub fn [<fma_ $k x $n>](
                a: Vector<$k, $n>,
                b: Vector<$k, $n>,
                c: Vector<$k, $n>,
            ) -> Vector<$k, $n> {
                fma(a, b, c)
            }

            pub fn [<fmas_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>, c: $k) -> Vector<$k, $n> {
                a.fma_scalar(b, c)
            }

            pub fn [<fmass_ $k x $n>](a: Vector<$k, $n>, b: $k, c: $k) -> Vector<$k, $n> {
                a.fma_scalars(b, c)
            }

            pub fn [<pow2_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                pow2(v)
            }

            pub fn [<dot_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> $k {
                a.dot(b)
            }

            pub fn [<hadd_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.hadd()
            }

            pub fn [<minv_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.min_component()
            }

            pub fn [<maxv_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.max_component()
            }

            pub fn [<norm2_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.norm2()
            }

            pub fn [<distance2_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> $k {
                a.distance2(b)
            }

            pub fn [<eq_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<bool, $n> {
                a.cmp_eq(b)
            }

            pub fn [<neq_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<bool, $n> {
                a.cmp_ne(b)
            }

            pub fn [<lt_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<bool, $n> {
                a.cmp_lt(b)
            }

            pub fn [<lteq_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<bool, $n> {
                a.cmp_le(b)
            }

            pub fn [<gt_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<bool, $n> {
                a.cmp_gt(b)
            }

            pub fn [<gteq_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<bool, $n> {
                a.cmp_ge(b)
            }

            pub fn [<eqs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<bool, $n> {
                a.cmp_eq(Vector::splat(s))
            }

            pub fn [<neqs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<bool, $n> {
                a.cmp_ne(Vector::splat(s))
            }

            pub fn [<lts_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<bool, $n> {
                a.cmp_lt(Vector::splat(s))
            }

            pub fn [<lteqs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<bool, $n> {
                a.cmp_le(Vector::splat(s))
            }

            pub fn [<gts_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<bool, $n> {
                a.cmp_gt(Vector::splat(s))
            }

            pub fn [<gteqs_ $k x $n>](a: Vector<$k, $n>, s: $k) -> Vector<bool, $n> {
                a.cmp_ge(Vector::splat(s))
            }

            pub fn [<any_ $k x $n>](v: Vector<$k, $n>) -> bool {
                v.any()
            }

            pub fn [<all_ $k x $n>](v: Vector<$k, $n>) -> bool {
                v.all()
            }

            pub fn [<not_ $k x $n>](v: Vector<$k, $n>) -> Vector<bool, $n> {
                not(v)
            }
        }
    };
}

/// flat_signed! generates the sign-aware operations of the signed kinds.
macro_rules! flat_signed {
    ($k:ident) => {
        paste! {
            pub fn [<cross_ $k x2>](a: Vector<$k, 2>, b: Vector<$k, 2>) -> $k {
                a.cross(b)
            }

            pub fn [<cross_ $k x3>](a: Vector<$k, 3>, b: Vector<$k, 3>) -> Vector<$k, 3> {
                a.cross(b)
            }

            pub fn [<abs_ $k>](e: $k) -> $k {
                abs(e)
            }

            pub fn [<sign_ $k>](e: $k) -> $k {
                sign(e)
            }

            pub fn [<copysign_ $k>](x: $k, s: $k) -> $k {
                copysign(x, s)
            }
        }

        flat_signed_vector!($k, 2);
        flat_signed_vector!($k, 3);
        flat_signed_vector!($k, 4);
    };
}

macro_rules! flat_signed_vector {
    ($k:ident, $n:literal) => {
        paste! {
            pub fn [<neg_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                -v
            }

            pub fn [<abs_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                abs(v)
            }

            pub fn [<sign_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                sign(v)
            }

            pub fn [<copysign_ $k x $n>](v: Vector<$k, $n>, s: Vector<$k, $n>) -> Vector<$k, $n> {
                copysign(v, s)
            }

            pub fn [<copysigns_ $k x $n>](v: Vector<$k, $n>, s: $k) -> Vector<$k, $n> {
                copysign(v, Vector::splat(s))
            }

            pub fn [<norm_one_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.norm_one()
            }

            pub fn [<norm_inf_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.norm_inf()
            }
        }
    };
}

/// flat_float! generates the floating point operations.
macro_rules! flat_float {
    ($k:ident) => {
        paste! {
            pub fn [<trunc_ $k>](e: $k) -> $k {
                trunc(e)
            }

            pub fn [<floor_ $k>](e: $k) -> $k {
                floor(e)
            }

            pub fn [<ceil_ $k>](e: $k) -> $k {
                ceil(e)
            }

            pub fn [<round_ $k>](e: $k) -> $k {
                round(e)
            }

            pub fn [<fract_ $k>](e: $k) -> $k {
                fract(e)
            }

            pub fn [<wrap_ $k>](val: $k, min: $k, max: $k) -> $k {
                wrap(val, min, max)
            }

            pub fn [<deg2rad_ $k>](e: $k) -> $k {
                deg2rad(e)
            }

            pub fn [<rad2deg_ $k>](e: $k) -> $k {
                rad2deg(e)
            }

            pub fn [<sqrt_ $k>](e: $k) -> $k {
                Transcendental::sqrt(e)
            }

            pub fn [<sin_ $k>](e: $k) -> $k {
                Transcendental::sin(e)
            }

            pub fn [<cos_ $k>](e: $k) -> $k {
                Transcendental::cos(e)
            }

            pub fn [<acos_ $k>](e: $k) -> $k {
                Transcendental::acos(e)
            }

            pub fn [<asin_ $k>](e: $k) -> $k {
                Transcendental::asin(e)
            }

            pub fn [<sin_deg_ $k>](degrees: $k) -> $k {
                Transcendental::sin_deg(degrees)
            }

            pub fn [<cos_deg_ $k>](degrees: $k) -> $k {
                Transcendental::cos_deg(degrees)
            }

            pub fn [<acos_deg_ $k>](e: $k) -> $k {
                Transcendental::acos_deg(e)
            }

            pub fn [<asin_deg_ $k>](e: $k) -> $k {
                Transcendental::asin_deg(e)
            }

            pub fn [<powi_ $k>](e: $k, exponent: i32) -> $k {
                powi(e, exponent)
            }

            pub fn [<powf_ $k>](e: $k, exponent: $k) -> $k {
                powf(e, exponent)
            }

            pub fn [<rotate_origin_ $k x2>](v: Vector<$k, 2>, angle: $k) -> Vector<$k, 2> {
                v.rotate_origin(angle)
            }

            pub fn [<rotate_origin_deg_ $k x2>](v: Vector<$k, 2>, degrees: $k) -> Vector<$k, 2> {
                v.rotate_origin_deg(degrees)
            }

            pub fn [<rotate_point_ $k x2>](v: Vector<$k, 2>, pivot: Vector<$k, 2>, angle: $k) -> Vector<$k, 2> {
                v.rotate_point(pivot, angle)
            }

            pub fn [<rotate_point_deg_ $k x2>](
                v: Vector<$k, 2>,
                pivot: Vector<$k, 2>,
                degrees: $k,
            ) -> Vector<$k, 2> {
                v.rotate_point_deg(pivot, degrees)
            }
        }

        flat_float_vector!($k, 2);
        flat_float_vector!($k, 3);
        flat_float_vector!($k, 4);
    };
}

macro_rules! flat_float_vector {
    ($k:ident, $n:literal) => {
        paste! {
            pub fn [<trunc_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                trunc(v)
            }

            pub fn [<floor_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                floor(v)
            }

            pub fn [<ceil_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                ceil(v)
            }

            pub fn [<round_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                round(v)
            }

            pub fn [<fract_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                fract(v)
            }

            pub fn [<wrap_ $k x $n>](
                v: Vector<$k, $n>,
                min: Vector<$k, $n>,
                max: Vector<$k, $n>,
            ) -> Vector<$k, $n> {
                wrap(v, min, max)
            }

            pub fn [<wraps_ $k x $n>](v: Vector<$k, $n>, min: $k, max: $k) -> Vector<$k, $n> {
                wrap(v, Vector::splat(min), Vector::splat(max))
            }

            pub fn [<deg2rad_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                deg2rad(v)
            }

            pub fn [<rad2deg_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                rad2deg(v)
            }

            pub fn [<sqrt_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                Transcendental::sqrt(v)
            }

            pub fn [<powi_ $k x $n>](v: Vector<$k, $n>, exponent: i32) -> Vector<$k, $n> {
                powi(v, exponent)
            }

            pub fn [<powf_ $k x $n>](v: Vector<$k, $n>, exponent: Vector<$k, $n>) -> Vector<$k, $n> {
                powf(v, exponent)
            }

            pub fn [<norm_ $k x $n>](v: Vector<$k, $n>) -> $k {
                v.norm()
            }

            pub fn [<normalize_ $k x $n>](v: Vector<$k, $n>) -> Vector<$k, $n> {
                v.normalize()
            }

            pub fn [<distance_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> $k {
                a.distance(b)
            }

            pub fn [<midpoint_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> Vector<$k, $n> {
                a.midpoint(b)
            }

            pub fn [<angle_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> $k {
                a.angle_between(b)
            }

            pub fn [<angle_deg_ $k x $n>](a: Vector<$k, $n>, b: Vector<$k, $n>) -> $k {
                a.angle_between_deg(b)
            }
        }
    };
}

macro_rules! flat_bool_vector {
    ($n:literal) => {
        paste! {
            pub fn [<any_boolx $n>](v: Vector<bool, $n>) -> bool {
                v.any()
            }

            pub fn [<all_boolx $n>](v: Vector<bool, $n>) -> bool {
                v.all()
            }

            pub fn [<not_boolx $n>](v: Vector<bool, $n>) -> Vector<bool, $n> {
                !v
            }

            pub fn [<eq_boolx $n>](a: Vector<bool, $n>, b: Vector<bool, $n>) -> Vector<bool, $n> {
                a.cmp_eq(b)
            }

            pub fn [<neq_boolx $n>](a: Vector<bool, $n>, b: Vector<bool, $n>) -> Vector<bool, $n> {
                a.cmp_ne(b)
            }
        }
    };
}

flat_number!(u8);
flat_number!(u16);
flat_number!(u32);
flat_number!(u64);
flat_number!(i8);
flat_number!(i16);
flat_number!(i32);
flat_number!(i64);
flat_number!(f32);
flat_number!(f64);

flat_signed!(i8);
flat_signed!(i16);
flat_signed!(i32);
flat_signed!(i64);
flat_signed!(f32);
flat_signed!(f64);

flat_float!(f32);
flat_float!(f64);

flat_constructors!(bool);
flat_bool_vector!(2);
flat_bool_vector!(3);
flat_bool_vector!(4);
