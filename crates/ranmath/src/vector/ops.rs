//! Componentwise arithmetic operators.
//!
//! Vector-vector operators are generic over the component kind. Operators
//! mixing a vector with a scalar are implemented per kind, in both operand
//! orders, so `v * 2.0` and `2.0 * v` both work.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use super::Vector;

/// Implements a vector-vector binary operator and its assigning form.
macro_rules! impl_vector_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        impl<T: Copy + $op<Output = T>, const N: usize> $op for Vector<T, N> {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $sym b)
            }
        }

        impl<T: Copy + $op<Output = T>, const N: usize> $op_assign for Vector<T, N> {
            fn $method_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_vector_op!(Add, add, AddAssign, add_assign, +);
impl_vector_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_op!(Div, div, DivAssign, div_assign, /);
impl_vector_op!(Rem, rem, RemAssign, rem_assign, %);

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize> Not for Vector<bool, N> {
    type Output = Self;
    fn not(self) -> Self {
        self.map(|c| !c)
    }
}

/// Implements one vector-scalar and scalar-vector operator pair for a kind.
macro_rules! impl_scalar_op {
    ($scalar:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        impl<const N: usize> $op<$scalar> for Vector<$scalar, N> {
            type Output = Self;
            fn $method(self, rhs: $scalar) -> Self {
                self.map(|c| c $sym rhs)
            }
        }

        impl<const N: usize> $op<Vector<$scalar, N>> for $scalar {
            type Output = Vector<$scalar, N>;
            fn $method(self, rhs: Vector<$scalar, N>) -> Vector<$scalar, N> {
                rhs.map(|c| self $sym c)
            }
        }

        impl<const N: usize> $op_assign<$scalar> for Vector<$scalar, N> {
            fn $method_assign(&mut self, rhs: $scalar) {
                *self = *self $sym rhs;
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),+) => {
        $(
            impl_scalar_op!($scalar, Add, add, AddAssign, add_assign, +);
            impl_scalar_op!($scalar, Sub, sub, SubAssign, sub_assign, -);
            impl_scalar_op!($scalar, Mul, mul, MulAssign, mul_assign, *);
            impl_scalar_op!($scalar, Div, div, DivAssign, div_assign, /);
            impl_scalar_op!($scalar, Rem, rem, RemAssign, rem_assign, %);
        )+
    };
}

impl_scalar_ops!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn sanity_vector_ops() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(4.0f32, 5.0, 6.0);
        assert_eq!(vec3(5.0, 7.0, 9.0), a + b);
        assert_eq!(vec3(-3.0, -3.0, -3.0), a - b);
        assert_eq!(vec3(4.0, 10.0, 18.0), a * b);
        assert_eq!(vec3(4.0, 2.5, 2.0), b / a);
        assert_eq!(vec3(0.0, 1.0, 0.0), b % a);
        assert_eq!(vec3(-1.0, -2.0, -3.0), -a);
    }

    #[test]
    fn sanity_scalar_ops_both_orders() {
        let v = vec2(6i32, -9);
        assert_eq!(vec2(8, -7), v + 2);
        assert_eq!(vec2(8, -7), 2 + v);
        assert_eq!(vec2(4, -11), v - 2);
        assert_eq!(vec2(-4, 11), 2 - v);
        assert_eq!(vec2(2, -3), v / 3);
        assert_eq!(vec2(3, -2), 18 / v);
        assert_eq!(vec2(0, -1), v % 2);
        assert_eq!(vec4(2u8, 4, 6, 8), 2 * vec4(1u8, 2, 3, 4));
    }

    #[test]
    fn sanity_assign_ops() {
        let mut v = vec4(1.0f64, 2.0, 3.0, 4.0);
        v += Vector::splat(1.0);
        v *= 2.0;
        v -= vec4(0.0, 1.0, 2.0, 3.0);
        v /= 4.0;
        assert_eq!(vec4(1.0, 1.25, 1.5, 1.75), v);

        let mut i = vec3(7u16, 8, 9);
        i %= 4;
        assert_eq!(vec3(3, 0, 1), i);
    }

    #[test]
    fn sanity_bool_not() {
        assert_eq!(vec3(false, true, false), !vec3(true, false, true));
    }

    #[test]
    #[should_panic]
    fn sanity_integer_division_by_zero_panics() {
        let _ = vec2(1i32, 2) / vec2(1, 0);
    }
}
