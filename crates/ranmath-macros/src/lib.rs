//! Proc-macros used by `ranmath` to generate its vector accessors.
use proc_macro::TokenStream;

mod swizzle;

/// Generates component accessors and swizzles for one arity of
/// `crate::Vector`.
///
/// ```rust, ignore
/// ranmath_macros::swizzle!(3, [x, y, z]);
/// ranmath_macros::swizzle!(3, [r, g, b]);
/// ```
///
/// Must be invoked from inside the `ranmath` crate, which provides
/// `Vector::new` and `Vector::view_mut`.
#[proc_macro]
pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    swizzle::swizzle(token_stream)
}
