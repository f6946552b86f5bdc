//! Validation of the call signature named in an `#[invocable(...)]` attribute
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::spanned::Spanned;
use syn::{BareFnArg, ReturnType, Type, TypeBareFn};

use crate::{Error, Result};

/// Highest arity for which `inline_fn::Signature` is implemented.
const MAX_ARITY: usize = 8;

/// A plain, safe, non-variadic `fn(..) -> ..` type with at most
/// [`MAX_ARITY`] parameters.
pub(crate) struct Signature {
    pub(crate) inputs: Vec<Type>,
    pub(crate) output: Type,
}

impl Signature {
    pub(crate) fn extract(bare: TypeBareFn) -> Result<Self> {
        let span = bare.span();
        if let Some(lifetimes) = &bare.lifetimes {
            return Err(Error::HigherRanked(lifetimes.span()));
        }
        if let Some(token) = bare.unsafety {
            return Err(Error::UnsafeSignature(token.span));
        }
        if let Some(abi) = &bare.abi {
            return Err(Error::ExternSignature(abi.span()));
        }
        if let Some(variadic) = &bare.variadic {
            return Err(Error::Variadic(variadic.span()));
        }
        if bare.inputs.len() > MAX_ARITY {
            let count = bare.inputs.len();
            return Err(Error::TooManyArguments { count, span });
        }
        let inputs = bare.inputs.into_iter().map(|BareFnArg { ty, .. }| ty).collect();
        let output = match bare.output {
            ReturnType::Default => syn::parse_quote!(()),
            ReturnType::Type(_, ty) => *ty,
        };
        Ok(Signature { inputs, output })
    }

    /// Names bound to each argument inside the generated `invoke`.
    pub(crate) fn arg_names(&self) -> Vec<syn::Ident> {
        (0..self.inputs.len())
            .map(|i| format_ident!("arg{}", i, span = Span::call_site()))
            .collect()
    }

    /// The tuple type `(A0, A1, ..)` the arguments are passed as.
    pub(crate) fn args_tuple(&self) -> TokenStream {
        let inputs = &self.inputs;
        quote!((#(#inputs,)*))
    }
}

impl ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Signature { inputs, output } = self;
        quote!(fn(#(#inputs),*) -> #output).to_tokens(tokens)
    }
}
