//! Swizzle implementation macro.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse::Parse, punctuated::Punctuated, Ident, LitInt, Token};

/// Parses macro input like `4, [x, y, z, w]` and produces, for
/// `Vector<T, 4>`:
/// * single component getters `x`, `y`, ... and their `x_mut`, `y_mut`, ...
///   write-through references,
/// * every 2, 3 and 4 component read swizzle (`xy`, `zyx`, `wwww`, ...),
/// * write-through views for every contiguous run shorter than the vector
///   (`xy_mut`, `yz_mut`, `zw_mut`, `xyz_mut`, `yzw_mut`).
struct Swizzling {
    arity: usize,
    names: Vec<Ident>,
}

impl Parse for Swizzling {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let arity_lit: LitInt = input.parse()?;
        let arity: usize = arity_lit.base10_parse()?;
        if !(2..=4).contains(&arity) {
            return Err(syn::Error::new(
                arity_lit.span(),
                format!("vectors have 2, 3 or 4 components, not {arity}"),
            ));
        }
        let _comma: Token![,] = input.parse()?;

        let bracketed;
        syn::bracketed!(bracketed in input);
        let names: Punctuated<Ident, Token![,]> =
            bracketed.parse_terminated(Ident::parse, Token![,])?;
        let names = names.into_iter().collect::<Vec<_>>();
        if names.len() != arity {
            return Err(syn::Error::new(
                bracketed.span(),
                format!(
                    "expected {arity} component names for a {arity} component vector, found {}",
                    names.len()
                ),
            ));
        }
        Ok(Swizzling { arity, names })
    }
}

/// Every index tuple of length `len` over `0..arity`, in lexical order.
fn index_tuples(arity: usize, len: usize) -> Vec<Vec<usize>> {
    let mut tuples = vec![vec![]];
    for _ in 0..len {
        tuples = tuples
            .into_iter()
            .flat_map(|prefix| {
                (0..arity).map(move |i| {
                    let mut next = prefix.clone();
                    next.push(i);
                    next
                })
            })
            .collect();
    }
    tuples
}

fn joined_ident(names: &[Ident], indices: &[usize], suffix: &str) -> Ident {
    let joined = indices
        .iter()
        .map(|i| names[*i].to_string())
        .collect::<String>();
    Ident::new(&format!("{joined}{suffix}"), Span::call_site())
}

impl Swizzling {
    fn generate(&self) -> proc_macro2::TokenStream {
        let Swizzling { arity, names } = self;
        let arity = *arity;

        let singles = names.iter().enumerate().map(|(i, name)| {
            let name_mut = format_ident!("{name}_mut");
            let get_doc = format!("Returns component {i} (`{name}`).");
            let mut_doc = format!(
                "Returns a mutable reference to component {i} (`{name}`). Writes are visible \
                 through every other name for the same component."
            );
            quote! {
                #[doc = #get_doc]
                #[inline]
                pub fn #name(&self) -> T {
                    self.raw[#i]
                }

                #[doc = #mut_doc]
                #[inline]
                pub fn #name_mut(&mut self) -> &mut T {
                    &mut self.raw[#i]
                }
            }
        });

        let reads = (2..=4usize).flat_map(|len| {
            index_tuples(arity, len).into_iter().map(move |indices| {
                let ident = joined_ident(names, &indices, "");
                quote! {
                    #[inline]
                    pub fn #ident(&self) -> crate::Vector<T, #len> {
                        crate::Vector::new([#(self.raw[#indices]),*])
                    }
                }
            })
        });

        let views = (2..arity).flat_map(|len| {
            (0..=arity - len).map(move |offset| {
                let indices = (offset..offset + len).collect::<Vec<_>>();
                let ident = joined_ident(names, &indices, "_mut");
                let doc = format!(
                    "Returns a write-through view of components {offset}..{} as a {len} \
                     component vector.",
                    offset + len
                );
                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #ident(&mut self) -> &mut crate::Vector<T, #len> {
                        self.view_mut::<#offset, #len>()
                    }
                }
            })
        });

        quote! {
            impl<T: Copy> crate::Vector<T, #arity> {
                #(#singles)*
                #(#reads)*
                #(#views)*
            }
        }
    }
}

pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    let swizzling: Swizzling = syn::parse_macro_input!(token_stream);
    swizzling.generate().into()
}
