//! Bit reinterpretation between same-width scalar kinds.

use crate::Vector;

/// Reinterpret the raw bits of one kind as another of the same width.
///
/// Unlike an `as` conversion, which preserves the value (`1u32 as f32` is
/// `1.0`), `Bitcast` keeps the bit pattern (`bitcast_f32(0x3f80_0000u32)` is
/// `1.0`). Vectors bitcast componentwise.
pub trait Bitcast<T> {
    fn bitcast(self) -> T;
}

/// Reinterpret the bits of `e` as `f32`.
pub fn bitcast_f32(e: impl Bitcast<f32>) -> f32 {
    e.bitcast()
}

/// Reinterpret the bits of `e` as `u32`.
pub fn bitcast_u32(e: impl Bitcast<u32>) -> u32 {
    e.bitcast()
}

/// Reinterpret the bits of `e` as `i32`.
pub fn bitcast_i32(e: impl Bitcast<i32>) -> i32 {
    e.bitcast()
}

/// Reinterpret the bits of `e` as `f64`.
pub fn bitcast_f64(e: impl Bitcast<f64>) -> f64 {
    e.bitcast()
}

/// Reinterpret the bits of `e` as `u64`.
pub fn bitcast_u64(e: impl Bitcast<u64>) -> u64 {
    e.bitcast()
}

/// Reinterpret the bits of `e` as `i64`.
pub fn bitcast_i64(e: impl Bitcast<i64>) -> i64 {
    e.bitcast()
}

/// Assemble an `f64` from its high and low 32-bit words.
pub fn f64_from_words(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | lo as u64)
}

/// Split an `f64` into its high and low 32-bit words.
pub fn f64_to_words(x: f64) -> (u32, u32) {
    let bits = x.to_bits();
    ((bits >> 32) as u32, bits as u32)
}

macro_rules! impl_bitcast {
    ($($from:ty => [$($to:ty),+]);+ $(;)?) => {
        $($(
            impl Bitcast<$to> for $from {
                fn bitcast(self) -> $to {
                    bytemuck::cast(self)
                }
            }
        )+)+
    };
}

impl_bitcast! {
    f32 => [f32, u32, i32];
    u32 => [f32, u32, i32];
    i32 => [f32, u32, i32];
    f64 => [f64, u64, i64];
    u64 => [f64, u64, i64];
    i64 => [f64, u64, i64];
}

impl<T: Bitcast<U>, U, const N: usize> Bitcast<Vector<U, N>> for Vector<T, N> {
    fn bitcast(self) -> Vector<U, N> {
        self.map(Bitcast::bitcast)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vec3;

    #[test]
    fn sanity_scalar_bitcast() {
        assert_eq!(1.0, bitcast_f32(0x3f80_0000u32));
        assert_eq!(0x3f80_0000, bitcast_u32(1.0f32));
        assert_eq!(-1, bitcast_i32(u32::MAX));
        assert_eq!(0x4009_21fb_5444_2d18, bitcast_u64(core::f64::consts::PI));
        assert_eq!(-2.0, bitcast_f64(bitcast_i64(-2.0f64)));
        assert_eq!(7u32, bitcast_u32(7u32));
    }

    #[test]
    fn sanity_vector_bitcast() {
        let v = vec3(1.0f32, -0.0, 2.0);
        let bits: Vector<u32, 3> = v.bitcast();
        assert_eq!(vec3(0x3f80_0000, 0x8000_0000, 0x4000_0000), bits);
        let back: Vector<f32, 3> = bits.bitcast();
        assert_eq!(v.raw.map(f32::to_bits), back.raw.map(f32::to_bits));
    }

    #[test]
    fn sanity_words() {
        let (hi, lo) = f64_to_words(core::f64::consts::PI);
        assert_eq!((0x4009_21fb, 0x5444_2d18), (hi, lo));
        assert_eq!(core::f64::consts::PI, f64_from_words(hi, lo));
    }
}
