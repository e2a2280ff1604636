//! Fixed-size vectors and matrices over integer and float scalar kinds.
//!
//! `ranmath` provides [`Vector<T, N>`] for 2, 3 and 4 components and
//! [`Matrix<T, C, R>`] for every shape from 2x2 through 4x4, over the kinds
//! `u8` through `u64`, `i8` through `i64`, `f32` and `f64`.
//!
//! Operations come in three equivalent forms:
//! * methods and operators, `a.dot(b)`, `a + b * 2.0`,
//! * generic free functions, `dot(a, b)`, `clamp(v, lo, hi)`, which work on
//!   scalars and vectors alike,
//! * the per-kind functions of [`flat`], `dot_f32x3(a, b)`, `mod_f32(a, b)`.
//!
//! ```rust
//! use ranmath::*;
//!
//! let v = vec3(3.0f32, 0.0, 4.0);
//! assert_eq!(5.0, v.norm());
//! assert_eq!(vec3(0.6, 0.0, 0.8), normalize(v));
//! assert_eq!(vec2(-1i8, 2), -vec2(1, -2));
//! assert!(all(vec2(1i8, -2)));
//! ```
//!
//! Glob import the crate root to bring every type, trait and generic function
//! into scope.

mod bitcast;
pub mod constants;
mod error;
pub mod flat;
mod functions;
mod matrix;
mod scalar;
mod vector;

pub use bitcast::*;
pub use error::Error;
pub use functions::{geometric::*, relational::*, *};
pub use matrix::*;
pub use scalar::*;
pub use vector::*;
