//! Vector-only operations: products, norms, distances and 2D rotation.

use crate::{Abs, Float, Max, Min, Number, Signed, Vec2, Vec3, Vector};

impl<T: Number, const N: usize> Vector<T, N> {
    /// Sum of all components.
    pub fn hadd(self) -> T {
        self.reduce(|a, b| a + b)
    }

    /// Sum of componentwise products.
    pub fn dot(self, other: Self) -> T {
        self.zip_map(other, |a, b| a * b).hadd()
    }

    /// Squared Euclidean length, `dot(self, self)`.
    pub fn norm2(self) -> T {
        self.dot(self)
    }

    /// Squared Euclidean distance.
    pub fn distance2(self, other: Self) -> T {
        (self - other).norm2()
    }

    pub fn min_component(self) -> T
    where
        T: Min,
    {
        self.reduce(Min::min)
    }

    pub fn max_component(self) -> T
    where
        T: Max,
    {
        self.reduce(Max::max)
    }

    /// The L1 (Manhattan) norm, `hadd(abs(self))`.
    pub fn norm_one(self) -> T
    where
        T: Abs,
    {
        Abs::abs(self).hadd()
    }

    /// The L-infinity (Chebyshev) norm, the largest absolute component.
    pub fn norm_inf(self) -> T
    where
        T: Abs + Max,
    {
        Abs::abs(self).max_component()
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Euclidean length.
    pub fn norm(self) -> T {
        self.norm2().sqrt()
    }

    /// A unit vector in the direction of `self`.
    ///
    /// Vectors with a norm at or below the kind's machine epsilon normalize
    /// to the zero vector instead of dividing by a vanishing length.
    pub fn normalize(self) -> Self {
        let norm = self.norm();
        if norm <= T::EPSILON {
            Self::ZERO
        } else {
            let inv = T::ONE / norm;
            self.map(|c| c * inv)
        }
    }

    /// Euclidean distance.
    pub fn distance(self, other: Self) -> T {
        self.distance2(other).sqrt()
    }

    /// The componentwise average of `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        (self + other).map(|c| c * T::HALF)
    }

    /// The angle between `self` and `other` in radians.
    ///
    /// Rounding can push the cosine slightly outside `[-1, 1]`, so a cosine
    /// above one is `0` and one below minus one is `pi`. If either vector is
    /// zero the result is NaN.
    pub fn angle_between(self, other: Self) -> T {
        let cos = self.cosine(other);
        if cos > T::ONE {
            T::ZERO
        } else if cos < T::NEG_ONE {
            T::PI
        } else {
            cos.acos()
        }
    }

    /// The angle between `self` and `other` in degrees.
    pub fn angle_between_deg(self, other: Self) -> T {
        let cos = self.cosine(other);
        if cos > T::ONE {
            T::ZERO
        } else if cos < T::NEG_ONE {
            T::HALF_TURN_DEG
        } else {
            cos.acos() * T::RAD2DEG
        }
    }

    fn cosine(self, other: Self) -> T {
        self.dot(other) / (self.norm() * other.norm())
    }
}

impl<T: Float> Vector<T, 2> {
    /// Rotates counterclockwise about the origin by `angle` radians.
    pub fn rotate_origin(self, angle: T) -> Self {
        let (c, s) = (angle.cos(), angle.sin());
        let [x, y] = self.raw;
        Vector::new([x * c - y * s, x * s + y * c])
    }

    /// Rotates counterclockwise about `pivot` by `angle` radians.
    pub fn rotate_point(self, pivot: Self, angle: T) -> Self {
        (self - pivot).rotate_origin(angle) + pivot
    }

    pub fn rotate_origin_deg(self, degrees: T) -> Self {
        self.rotate_origin(degrees * T::DEG2RAD)
    }

    pub fn rotate_point_deg(self, pivot: Self, degrees: T) -> Self {
        self.rotate_point(pivot, degrees * T::DEG2RAD)
    }
}

/// Provides `cross`.
///
/// For 2-vectors this is the scalar "2D cross" `a.x * b.y - a.y * b.x`, for
/// 3-vectors the usual vector cross product. 4-vectors have none, and neither
/// do unsigned kinds, where the subtraction would underflow:
///
/// ```compile_fail
/// use ranmath::*;
///
/// let _ = cross(vec2(0u8, 1), vec2(1, 0));
/// ```
pub trait Cross {
    type Output;

    fn cross(self, other: Self) -> Self::Output;
}

impl<T: Signed> Cross for Vec2<T> {
    type Output = T;

    fn cross(self, other: Self) -> T {
        let ([ax, ay], [bx, by]) = (self.raw, other.raw);
        ax * by - ay * bx
    }
}

impl<T: Signed> Cross for Vec3<T> {
    type Output = Vec3<T>;

    fn cross(self, other: Self) -> Vec3<T> {
        let ([ax, ay, az], [bx, by, bz]) = (self.raw, other.raw);
        Vector::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

pub fn cross<T: Cross>(a: T, b: T) -> T::Output {
    a.cross(b)
}

pub fn dot<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

pub fn hadd<T: Number, const N: usize>(v: Vector<T, N>) -> T {
    v.hadd()
}

pub fn norm2<T: Number, const N: usize>(v: Vector<T, N>) -> T {
    v.norm2()
}

pub fn norm<T: Float, const N: usize>(v: Vector<T, N>) -> T {
    v.norm()
}

pub fn normalize<T: Float, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

pub fn distance2<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.distance2(b)
}

pub fn distance<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.distance(b)
}

pub fn angle_between<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.angle_between(b)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{vec2, vec3, vec4, F32x2, F64x3};

    #[test]
    fn sanity_dot_and_hadd() {
        assert_eq!(10.0, dot(vec4(1.0f32, 2.0, 3.0, 4.0), Vector::ONE));
        assert_eq!(10, dot(vec4(1i32, 2, 3, 4), Vector::ONE));
        assert_eq!(6u16, hadd(vec3(1u16, 2, 3)));
        assert_eq!(-1, vec2(3i8, -4).hadd());
    }

    #[test]
    fn sanity_cross() {
        assert_eq!(1.0, cross(vec2(1.0f32, 0.0), vec2(0.0, 1.0)));
        assert_eq!(-1.0, cross(vec2(0.0f32, 1.0), vec2(1.0, 0.0)));
        assert_eq!(vec3(0, 0, 1), cross(vec3(1i32, 0, 0), vec3(0, 1, 0)));
        assert_eq!(-1, cross(vec2(0i8, 1), vec2(1, 0)));
        assert_eq!(vec3(0, 0, -1), cross(vec3(0i64, 1, 0), vec3(1, 0, 0)));
        assert_eq!(
            vec3(0.0, 0.0, -1.0),
            vec3(0.0f64, 1.0, 0.0).cross(vec3(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn sanity_norms() {
        let v = vec3(3.0f32, -4.0, 0.0);
        assert_eq!(25.0, v.norm2());
        assert_eq!(5.0, norm(v));
        assert_eq!(7.0, v.norm_one());
        assert_eq!(4.0, v.norm_inf());
        assert_eq!(-4.0, v.min_component());
        assert_eq!(3.0, v.max_component());
        assert_eq!(9, vec4(-2i64, 3, 0, -4).norm_one());
    }

    #[test]
    fn sanity_normalize() {
        let n = normalize(vec3(3.0f64, 0.0, 4.0));
        assert_relative_eq!(0.6, n.x(), max_relative = 1e-12);
        assert_relative_eq!(0.8, n.z(), max_relative = 1e-12);
        assert_relative_eq!(1.0, n.norm(), max_relative = 1e-12);

        let again = normalize(n);
        for i in 0..3 {
            assert_relative_eq!(n[i], again[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn sanity_normalize_zero_boundary() {
        assert_eq!(F32x2::ZERO, normalize(F32x2::ZERO));
        assert_eq!(F64x3::ZERO, F64x3::ZERO.normalize());

        // A norm exactly at epsilon is treated as zero length.
        let at_epsilon = vec2(crate::constants::f32::EPSILON, 0.0);
        assert_eq!(F32x2::ZERO, at_epsilon.normalize());

        // Just above it the vector still normalizes.
        let above = vec2(crate::constants::f32::EPSILON * 4.0, 0.0);
        assert_eq!(vec2(1.0, 0.0), above.normalize());

        let tiny = vec2(1.0e-20f64, 0.0);
        assert_eq!(vec2(0.0, 0.0), tiny.normalize());
    }

    #[test]
    fn sanity_distance_and_midpoint() {
        let a = vec2(1.0f32, 1.0);
        let b = vec2(4.0f32, 5.0);
        assert_eq!(25.0, distance2(a, b));
        assert_eq!(5.0, distance(a, b));
        assert_eq!(8, vec2(1i32, 1).distance2(vec2(3, 3)));
        assert_eq!(vec2(2.5, 3.0), a.midpoint(b));
    }

    #[test]
    fn sanity_angle_between() {
        let x = vec2(1.0f64, 0.0);
        let y = vec2(0.0f64, 2.0);
        assert_relative_eq!(
            crate::constants::f64::HALF_PI,
            angle_between(x, y),
            max_relative = 1e-12
        );
        assert_relative_eq!(90.0, x.angle_between_deg(y), max_relative = 1e-12);
        assert_eq!(0.0, x.angle_between(x * 3.0));
        assert_relative_eq!(
            crate::constants::f64::PI,
            x.angle_between(-x),
            max_relative = 1e-12
        );
        assert_relative_eq!(180.0, x.angle_between_deg(-x), max_relative = 1e-12);
        assert!(x.angle_between(Vector::ZERO).is_nan());
    }

    #[test]
    fn sanity_rotate() {
        let quarter = crate::constants::f32::HALF_PI;
        let r = vec2(1.0f32, 0.0).rotate_origin(quarter);
        assert_relative_eq!(0.0, r.x(), epsilon = 1e-6);
        assert_relative_eq!(1.0, r.y(), epsilon = 1e-6);

        // Counterclockwise: a quarter turn about (1, 1) carries (2, 1) to (1, 2).
        let quarter = crate::constants::f64::HALF_PI;
        let r = vec2(2.0f64, 1.0).rotate_point(vec2(1.0, 1.0), quarter);
        assert_relative_eq!(1.0, r.x(), epsilon = 1e-12);
        assert_relative_eq!(2.0, r.y(), epsilon = 1e-12);

        let r = vec2(2.0f64, 1.0).rotate_point_deg(vec2(1.0, 1.0), 180.0);
        assert_relative_eq!(0.0, r.x(), epsilon = 1e-12);
        assert_relative_eq!(1.0, r.y(), epsilon = 1e-12);

        let v = vec2(3.0f64, -2.0);
        let a = v.rotate_origin_deg(45.0);
        let b = v.rotate_origin(crate::constants::f64::PI / 4.0);
        assert_relative_eq!(a.x(), b.x(), epsilon = 1e-12);
        assert_relative_eq!(a.y(), b.y(), epsilon = 1e-12);
        assert_relative_eq!(v.norm(), a.norm(), max_relative = 1e-12);
    }
}
