use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Path, Token, TypeBareFn};

use crate::signature::Signature;
use crate::{Error, Result};

/// A single entry in an `#[invocable(...)]` attribute.
enum InvocableOption {
    Signature(TypeBareFn),
    Method(Ident),
    Crate(Path),
}

impl InvocableOption {
    fn name(&self) -> &'static str {
        match self {
            InvocableOption::Signature(_) => "signature",
            InvocableOption::Method(_) => "method",
            InvocableOption::Crate(_) => "crate",
        }
    }
}

impl Parse for InvocableOption {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(Token![fn])
            || lookahead.peek(Token![for])
            || lookahead.peek(Token![unsafe])
            || lookahead.peek(Token![extern])
        {
            input.parse().map(Self::Signature)
        } else if lookahead.peek(Token![crate]) {
            let _: Token![crate] = input.parse()?;
            let _: Token![=] = input.parse()?;
            input.parse().map(Self::Crate)
        } else if input.peek(Ident) && input.fork().parse::<Ident>()? == "method" {
            let _: Ident = input.parse()?;
            let _: Token![=] = input.parse()?;
            input.parse().map(Self::Method)
        } else {
            Err(Error::InvalidOption(input.span()).into())
        }
    }
}

/// Everything needed to emit one `Invocable` impl.
pub(crate) struct InvocableOptions {
    pub(crate) signature: Signature,
    pub(crate) method: Ident,
    pub(crate) krate: Path,
}

impl InvocableOptions {
    /// Collect one set of options per `#[invocable(...)]` attribute.
    pub(crate) fn extract(attrs: &[Attribute], span: Span) -> Result<Vec<Self>> {
        let options = attrs
            .iter()
            .filter(|attr| attr.path().is_ident("invocable"))
            .map(Self::from_attr)
            .collect::<Result<Vec<_>>>()?;
        if options.is_empty() {
            return Err(Error::MissingAttribute(span));
        }
        Ok(options)
    }

    fn from_attr(attr: &Attribute) -> Result<Self> {
        let parser = Punctuated::<InvocableOption, Token![,]>::parse_terminated;
        let mut signature = None;
        let mut method = None;
        let mut krate = None;
        for option in attr.parse_args_with(parser)? {
            let name = option.name();
            let duplicate = match option {
                InvocableOption::Signature(sig) => {
                    let span = sig.span();
                    signature.replace(Signature::extract(sig)?).map(|_| span)
                }
                InvocableOption::Method(ident) => {
                    let span = ident.span();
                    method.replace(ident).map(|_| span)
                }
                InvocableOption::Crate(path) => {
                    let span = path.span();
                    krate.replace(path).map(|_| span)
                }
            };
            if let Some(span) = duplicate {
                return Err(Error::DuplicateOption { name, span });
            }
        }
        Ok(InvocableOptions {
            signature: signature.ok_or_else(|| Error::MissingSignature(attr.span()))?,
            method: method.unwrap_or_else(|| Ident::new("call", Span::call_site())),
            krate: krate.unwrap_or_else(|| syn::parse_quote! { ::inline_fn }),
        })
    }
}
