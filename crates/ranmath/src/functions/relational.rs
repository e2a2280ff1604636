//! Componentwise comparisons and boolean reductions.
//!
//! Comparisons produce a [`Vector<bool, N>`] mask. The reductions [`any`],
//! [`all`] and [`not`] accept vectors of any [`Truthy`] kind, where numeric
//! zero is false and every other value is true.

use crate::{Truthy, Vector};

impl<T: Copy + PartialOrd, const N: usize> Vector<T, N> {
    pub fn cmp_eq(self, other: Self) -> Vector<bool, N> {
        self.zip_map(other, |a, b| a == b)
    }

    pub fn cmp_ne(self, other: Self) -> Vector<bool, N> {
        self.zip_map(other, |a, b| a != b)
    }

    pub fn cmp_lt(self, other: Self) -> Vector<bool, N> {
        self.zip_map(other, |a, b| a < b)
    }

    pub fn cmp_le(self, other: Self) -> Vector<bool, N> {
        self.zip_map(other, |a, b| a <= b)
    }

    pub fn cmp_gt(self, other: Self) -> Vector<bool, N> {
        self.zip_map(other, |a, b| a > b)
    }

    pub fn cmp_ge(self, other: Self) -> Vector<bool, N> {
        self.zip_map(other, |a, b| a >= b)
    }
}

impl<T: Truthy, const N: usize> Vector<T, N> {
    /// True if any component is truthy.
    pub fn any(self) -> bool {
        self.raw.iter().any(|c| c.is_truthy())
    }

    /// True if every component is truthy.
    pub fn all(self) -> bool {
        self.raw.iter().all(|c| c.is_truthy())
    }
}

pub fn eq<T: Copy + PartialOrd, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmp_eq(b)
}

pub fn neq<T: Copy + PartialOrd, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmp_ne(b)
}

pub fn lt<T: Copy + PartialOrd, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmp_lt(b)
}

pub fn lteq<T: Copy + PartialOrd, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmp_le(b)
}

pub fn gt<T: Copy + PartialOrd, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmp_gt(b)
}

pub fn gteq<T: Copy + PartialOrd, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmp_ge(b)
}

/// True if any component of `v` is truthy.
pub fn any<T: Truthy, const N: usize>(v: Vector<T, N>) -> bool {
    v.any()
}

/// True if every component of `v` is truthy.
pub fn all<T: Truthy, const N: usize>(v: Vector<T, N>) -> bool {
    v.all()
}

/// The componentwise logical negation of the truthiness of `v`.
pub fn not<T: Truthy, const N: usize>(v: Vector<T, N>) -> Vector<bool, N> {
    v.map(|c| !c.is_truthy())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{vec2, vec3, vec4};

    #[test]
    fn sanity_comparisons() {
        let a = vec4(1i32, 2, 3, 4);
        let b = vec4(4i32, 2, 1, 4);
        assert_eq!(vec4(false, true, false, true), eq(a, b));
        assert_eq!(vec4(true, false, true, false), neq(a, b));
        assert_eq!(vec4(true, false, false, false), lt(a, b));
        assert_eq!(vec4(true, true, false, true), lteq(a, b));
        assert_eq!(vec4(false, false, true, false), gt(a, b));
        assert_eq!(vec4(false, true, true, true), gteq(a, b));
    }

    #[test]
    fn sanity_nan_compares_unequal() {
        let a = vec2(f32::NAN, 1.0);
        assert_eq!(vec2(false, true), a.cmp_eq(a));
        assert_eq!(vec2(true, false), a.cmp_ne(a));
        assert_eq!(vec2(false, false), a.cmp_lt(a));
    }

    #[test]
    fn sanity_any_all_not() {
        assert!(any(vec2(1i8, -2)));
        assert!(all(vec2(1i8, -2)));
        assert!(any(vec3(0u32, 0, 7)));
        assert!(!all(vec3(0u32, 0, 7)));
        assert!(!any(vec2(0.0f64, -0.0)));
        assert!(vec2(true, true).all());
        assert_eq!(vec3(true, true, false), not(vec3(0u32, 0, 7)));
        assert_eq!(vec2(false, true), not(vec2(true, false)));
    }
}
