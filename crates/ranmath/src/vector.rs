//! Vector implementations.
//!
//! A [`Vector<T, N>`] is `N` components of one scalar kind stored in a plain
//! array, `raw`. Every named projection reads and writes that same array:
//!
//! * positional names `x`, `y`, `z`, `w`,
//! * color names `r`, `g`, `b`, `a`,
//! * texture names `u`, `v` (2 components only),
//! * multi-component swizzles such as [`Vec4::xy`] or [`Vec3::bgr`], which
//!   return copies,
//! * write-through sub-views such as [`Vec4::xy_mut`] or [`Vec3::gb_mut`],
//!   which borrow the contiguous components in place.
//!
//! ```rust
//! use ranmath::*;
//!
//! let mut v = vec4(1.0f32, 2.0, 3.0, 4.0);
//! assert_eq!(v.x(), v.raw[0]);
//! assert_eq!(v.xy(), vec2(v.x(), v.y()));
//!
//! *v.xy_mut().y_mut() = 20.0;
//! assert_eq!(20.0, v.y());
//! assert_eq!(20.0, v.g());
//! ```

use bytemuck::{Pod, TransparentWrapper, Zeroable};
use snafu::ensure;

use crate::{error::LengthMismatchSnafu, Error, Scalar};

mod ops;

/// An `N` dimensional vector.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    /// The components, in declared order.
    pub raw: [T; N],
}

// SAFETY: `Vector<T, N>` is `repr(transparent)` over `[T; N]`.
unsafe impl<T, const N: usize> TransparentWrapper<[T; N]> for Vector<T, N> {}
// SAFETY: `Vector<T, N>` is `repr(transparent)` over `[T; N]`, which is
// zeroable and plain-old-data whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// vector_aliases! generates the concrete `<Kind>x<N>` type aliases.
macro_rules! vector_aliases {
    ($($ty:ident),+) => {
        paste::paste! {
            $(
                #[doc = concat!("A 2-dimensional vector of `", stringify!($ty), "` components.")]
                pub type [<$ty:camel x2>] = Vector<$ty, 2>;
                #[doc = concat!("A 3-dimensional vector of `", stringify!($ty), "` components.")]
                pub type [<$ty:camel x3>] = Vector<$ty, 3>;
                #[doc = concat!("A 4-dimensional vector of `", stringify!($ty), "` components.")]
                pub type [<$ty:camel x4>] = Vector<$ty, 4>;
            )+
        }
    };
}
vector_aliases!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool);

impl<T, const N: usize> Vector<T, N> {
    /// Construct from an array of components.
    pub const fn new(raw: [T; N]) -> Self {
        Vector { raw }
    }

    /// Convert to an array of components.
    pub fn to_array(self) -> [T; N] {
        self.raw
    }

    pub const fn as_array(&self) -> &[T; N] {
        &self.raw
    }

    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.raw
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.raw.iter()
    }

    /// Apply `f` to every component.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::new(self.raw.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Broadcast constructor, every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Vector { raw: [value; N] }
    }

    /// Combine the components of `self` and `other` pairwise.
    pub fn zip_map<U: Copy, V>(
        self,
        other: Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector::new(core::array::from_fn(|i| f(self.raw[i], other.raw[i])))
    }

    /// Combine the components of `self`, `b` and `c` pairwise.
    pub fn zip3_map<U: Copy, V: Copy, W>(
        self,
        b: Vector<U, N>,
        c: Vector<V, N>,
        mut f: impl FnMut(T, U, V) -> W,
    ) -> Vector<W, N> {
        Vector::new(core::array::from_fn(|i| f(self.raw[i], b.raw[i], c.raw[i])))
    }

    /// Fold the components left to right, seeded with the first component.
    pub fn reduce(self, mut f: impl FnMut(T, T) -> T) -> T {
        self.raw[1..].iter().fold(self.raw[0], |acc, c| f(acc, *c))
    }

    /// A write-through view of components `OFFSET..OFFSET + K`.
    pub(crate) fn view_mut<const OFFSET: usize, const K: usize>(&mut self) -> &mut Vector<T, K> {
        const { assert!(OFFSET + K <= N, "view lies outside the vector") };
        let chunk = self.raw[OFFSET..]
            .first_chunk_mut::<K>()
            .expect("view lies inside the vector");
        Vector::<T, K>::wrap_mut(chunk)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// All components zero.
    pub const ZERO: Self = Self::splat(T::ZERO);
    /// All components one.
    pub const ONE: Self = Self::splat(T::ONE);
}

impl<T: Copy + Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Copy> Vector<T, 3> {
    /// Concatenate a 2-vector with one trailing scalar.
    pub const fn from_lower_scalar(xy: Vec2<T>, z: T) -> Self {
        Self::new([xy.raw[0], xy.raw[1], z])
    }

    /// Concatenate one leading scalar with a 2-vector.
    pub const fn from_scalar_lower(x: T, yz: Vec2<T>) -> Self {
        Self::new([x, yz.raw[0], yz.raw[1]])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Concatenate a 3-vector with one trailing scalar.
    pub const fn from_lower_scalar(xyz: Vec3<T>, w: T) -> Self {
        Self::new([xyz.raw[0], xyz.raw[1], xyz.raw[2], w])
    }

    /// Concatenate one leading scalar with a 3-vector.
    pub const fn from_scalar_lower(x: T, yzw: Vec3<T>) -> Self {
        Self::new([x, yzw.raw[0], yzw.raw[1], yzw.raw[2]])
    }

    pub const fn from_pair_scalars(xy: Vec2<T>, z: T, w: T) -> Self {
        Self::new([xy.raw[0], xy.raw[1], z, w])
    }

    pub const fn from_scalars_pair(x: T, y: T, zw: Vec2<T>) -> Self {
        Self::new([x, y, zw.raw[0], zw.raw[1]])
    }

    pub const fn from_scalar_pair_scalar(x: T, yz: Vec2<T>, w: T) -> Self {
        Self::new([x, yz.raw[0], yz.raw[1], w])
    }
}

/// Construct a 2-dimensional vector from components.
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector::new([x, y])
}

/// Construct a 3-dimensional vector from components.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::new([x, y, z])
}

/// Construct a 4-dimensional vector from components.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::new([x, y, z, w])
}

impl<T, const N: usize> core::ops::Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.raw[index]
    }
}

impl<T, const N: usize> core::ops::IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.raw[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.into_iter()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(raw: [T; N]) -> Self {
        Vector { raw }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> [T; N] {
        v.raw
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(components: &[T]) -> Result<Self, Error> {
        ensure!(
            components.len() == N,
            LengthMismatchSnafu {
                expected: N,
                actual: components.len()
            }
        );
        Ok(Vector::new(core::array::from_fn(|i| components[i])))
    }
}

// Swizzle methods (generated by proc macro).
// These provide single-component access, multi-component reads and
// contiguous write-through views using the positional (x, y, z, w), color
// (r, g, b, a) and texture (u, v) naming conventions.

ranmath_macros::swizzle!(2, [x, y]);
ranmath_macros::swizzle!(2, [r, g]);
ranmath_macros::swizzle!(2, [u, v]);
ranmath_macros::swizzle!(3, [x, y, z]);
ranmath_macros::swizzle!(3, [r, g, b]);
ranmath_macros::swizzle!(4, [x, y, z, w]);
ranmath_macros::swizzle!(4, [r, g, b, a]);

// From/Into conversions for glam types.

#[cfg(feature = "glam")]
macro_rules! impl_from_glam {
    ($glam_ty:ty, $scalar:ty, $n:literal) => {
        impl From<$glam_ty> for Vector<$scalar, $n> {
            fn from(v: $glam_ty) -> Self {
                Vector::new(v.into())
            }
        }

        impl From<Vector<$scalar, $n>> for $glam_ty {
            fn from(v: Vector<$scalar, $n>) -> Self {
                <$glam_ty>::from(v.raw)
            }
        }
    };
}

#[cfg(feature = "glam")]
mod glam_impls {
    use super::Vector;

    impl_from_glam!(glam::Vec2, f32, 2);
    impl_from_glam!(glam::Vec3, f32, 3);
    impl_from_glam!(glam::Vec4, f32, 4);
    impl_from_glam!(glam::DVec2, f64, 2);
    impl_from_glam!(glam::DVec3, f64, 3);
    impl_from_glam!(glam::DVec4, f64, 4);
    impl_from_glam!(glam::I16Vec2, i16, 2);
    impl_from_glam!(glam::I16Vec3, i16, 3);
    impl_from_glam!(glam::I16Vec4, i16, 4);
    impl_from_glam!(glam::U16Vec2, u16, 2);
    impl_from_glam!(glam::U16Vec3, u16, 3);
    impl_from_glam!(glam::U16Vec4, u16, 4);
    impl_from_glam!(glam::IVec2, i32, 2);
    impl_from_glam!(glam::IVec3, i32, 3);
    impl_from_glam!(glam::IVec4, i32, 4);
    impl_from_glam!(glam::UVec2, u32, 2);
    impl_from_glam!(glam::UVec3, u32, 3);
    impl_from_glam!(glam::UVec4, u32, 4);
    impl_from_glam!(glam::I64Vec2, i64, 2);
    impl_from_glam!(glam::I64Vec3, i64, 3);
    impl_from_glam!(glam::I64Vec4, i64, 4);
    impl_from_glam!(glam::U64Vec2, u64, 2);
    impl_from_glam!(glam::U64Vec3, u64, 3);
    impl_from_glam!(glam::U64Vec4, u64, 4);
    impl_from_glam!(glam::BVec2, bool, 2);
    impl_from_glam!(glam::BVec3, bool, 3);
    impl_from_glam!(glam::BVec4, bool, 4);
}
