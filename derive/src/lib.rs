//! Defines the [`Invocable`][crate::Invocable] derive macro that implements the
//! [`Invocable`][inline_fn::Invocable] trait for a type by forwarding calls to
//! one of its methods.
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Attribute, DeriveInput, Generics, Ident};

mod options;
mod signature;

use options::InvocableOptions;

/// Derive macro that implements the [`Invocable`] trait for a type by
/// forwarding each call to one of its inherent methods, so the type can be
/// stored in an [`inline_fn::Function`].
///
/// The call signature is given as a function-pointer type in an
/// `#[invocable(...)]` attribute on the type. The attribute may be repeated
/// to implement the trait for several signatures, and accepts the following
/// options after the signature:
///
/// |  Option | Default | Description |
/// | :-  | :- | :- |
/// | `method = name` | `call` | The inherent method each call is forwarded to; it must take `&self` or `&mut self` followed by the signature's arguments.
/// | `crate = path` | `::inline_fn` | Path to the `inline_fn` crate, for when it is re-exported under another name.
///
/// This can fail for any of the following reasons:
/// - No `#[invocable(...)]` attribute, or one without a signature
/// - A `for<'a>` (higher-ranked), `unsafe`, `extern` or variadic signature
/// - A signature with more than 8 parameters
/// - An unrecognized or repeated option
///
/// Lifetimes in the signature must be named, just as for
/// [`inline_fn::Signature`]; they may refer to the type's own lifetime
/// parameters.
///
/// # Example - forwarding to the default `call` method
///
/// Invocation:
/// ```
/// use inline_fn::{Function, Invocable};
///
/// #[derive(Clone, Invocable)]
/// #[invocable(fn(u32) -> u32)]
/// struct Counter {
///     total: u32,
/// }
///
/// impl Counter {
///     fn call(&mut self, step: u32) -> u32 {
///         self.total += step;
///         self.total
///     }
/// }
///
/// let mut f = Function::<fn(u32) -> u32>::from_invocable(Counter { total: 0 });
/// assert_eq!(f.call(2), Ok(2));
/// assert_eq!(f.call(3), Ok(5));
/// ```
///
/// Generated impl:
/// ```
/// # struct Counter { total: u32 }
/// # impl Counter { fn call(&mut self, step: u32) -> u32 { step } }
/// #[automatically_derived]
/// impl ::inline_fn::Invocable<fn(u32) -> u32> for Counter {
///     #[inline]
///     fn invoke(&mut self, (arg0,): (u32,)) -> u32 {
///         Self::call(self, arg0)
///     }
/// }
/// ```
///
/// # Example - generic type with a borrowed signature and a named method
///
/// Invocation:
/// ```
/// use inline_fn::Invocable;
///
/// #[derive(Clone, Invocable)]
/// #[invocable(fn(&'a [T]) -> Option<&'a T>, method = find)]
/// struct FirstAbove<'a, T: PartialOrd> {
///     bound: &'a T,
/// }
///
/// impl<'a, T: PartialOrd> FirstAbove<'a, T> {
///     fn find(&self, items: &'a [T]) -> Option<&'a T> {
///         items.iter().find(|item| *item > self.bound)
///     }
/// }
/// ```
///
/// Generated impl:
/// ```
/// # struct FirstAbove<'a, T: PartialOrd> { bound: &'a T }
/// # impl<'a, T: PartialOrd> FirstAbove<'a, T> {
/// #     fn find(&self, items: &'a [T]) -> Option<&'a T> { None }
/// # }
/// #[automatically_derived]
/// impl<'a, T: PartialOrd> ::inline_fn::Invocable<fn(&'a [T]) -> Option<&'a T>>
///     for FirstAbove<'a, T>
/// {
///     #[inline]
///     fn invoke(&mut self, (arg0,): (&'a [T],)) -> Option<&'a T> {
///         Self::find(self, arg0)
///     }
/// }
/// ```
///
/// # Rejected signatures
///
/// Higher-ranked signatures are rejected; the lifetime must be a parameter
/// of the type instead:
/// ```compile_fail
/// use inline_fn::Invocable;
///
/// #[derive(Clone, Invocable)]
/// #[invocable(for<'a> fn(&'a str) -> usize)]
/// struct Len;
///
/// impl Len {
///     fn call(&self, s: &str) -> usize { s.len() }
/// }
/// ```
///
/// Every attribute must name a signature:
/// ```compile_fail
/// use inline_fn::Invocable;
///
/// #[derive(Clone, Invocable)]
/// #[invocable(method = run)]
/// struct Task;
///
/// impl Task {
///     fn run(&self) {}
/// }
/// ```
///
/// [`Invocable`]: ../inline_fn/trait.Invocable.html
/// [`inline_fn::Function`]: ../inline_fn/struct.Function.html
/// [`inline_fn::Signature`]: ../inline_fn/trait.Signature.html
#[proc_macro_derive(Invocable, attributes(invocable))]
pub fn derive_invocable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as Input);
    match InvocableOptions::extract(&input.attrs, input.name.span()) {
        Ok(options) => impl_invocable(&input, &options).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// generate one `Invocable` impl per signature
fn impl_invocable(input: &Input, options: &[InvocableOptions]) -> TokenStream2 {
    let name = &input.name;
    let (impl_generics, ty_generics, where_) = input.generics.split_for_impl();
    let impls = options.iter().map(|opts| {
        let InvocableOptions { signature, method, krate } = opts;
        let args = signature.arg_names();
        let args_ty = signature.args_tuple();
        let output = &signature.output;
        quote!(
            #[automatically_derived]
            impl #impl_generics #krate::Invocable<#signature> for #name #ty_generics #where_ {
                #[inline]
                fn invoke(&mut self, (#(#args,)*): #args_ty) -> #output {
                    Self::#method(self, #(#args),*)
                }
            }
        )
    });
    quote!(#(#impls)*)
}

/// AST struct containing the relevant pieces from the `DeriveInput`
struct Input {
    name: Ident,
    generics: Generics,
    attrs: Vec<Attribute>,
}

impl Parse for Input {
    fn parse(stream: ParseStream) -> syn::Result<Self> {
        let DeriveInput { ident, generics, attrs, .. } = stream.parse()?;
        Ok(Input { name: ident, generics, attrs })
    }
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Syn(#[from] syn::Error),
    #[error(
        "Missing call signature! Add an attribute such as \n\
        '#[invocable(fn(i32) -> i32)]' naming the signature to implement.\n "
    )]
    MissingAttribute(Span),
    #[error("Missing call signature! The attribute must contain a `fn(..)` type.\n ")]
    MissingSignature(Span),
    #[error(
        "Unrecognized option! The valid options are a `fn(..)` signature, \n\
        'method = <ident>' and 'crate = <path>'.\n "
    )]
    InvalidOption(Span),
    #[error("Duplicate '{name}' option!")]
    DuplicateOption { name: &'static str, span: Span },
    #[error(
        "Higher-ranked signatures are not supported! Name the lifetime as a \n\
        parameter of the type instead.\n "
    )]
    HigherRanked(Span),
    #[error("`unsafe` signatures are not supported!")]
    UnsafeSignature(Span),
    #[error("`extern` signatures are not supported!")]
    ExternSignature(Span),
    #[error("Variadic signatures are not supported!")]
    Variadic(Span),
    #[error("Signatures take at most 8 parameters, found {count}!")]
    TooManyArguments { count: usize, span: Span },
}

impl Error {
    fn into_compile_error(self) -> TokenStream2 {
        syn::Error::from(self).into_compile_error()
    }
    fn span(&self) -> Span {
        match self {
            Error::Syn(err) => err.span(),
            Error::MissingAttribute(span) => *span,
            Error::MissingSignature(span) => *span,
            Error::InvalidOption(span) => *span,
            Error::DuplicateOption { span, .. } => *span,
            Error::HigherRanked(span) => *span,
            Error::UnsafeSignature(span) => *span,
            Error::ExternSignature(span) => *span,
            Error::Variadic(span) => *span,
            Error::TooManyArguments { span, .. } => *span,
        }
    }
}

impl From<Error> for syn::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Syn(err) => err,
            other => syn::Error::new(other.span(), other.to_string()),
        }
    }
}
