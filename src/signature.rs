//! Defines the [`Signature`] and [`Invocable`] traits.

mod sealed {
    pub trait Sealed {}
}

/// Sealed trait naming the call signature a [`Function`] is bound to.
///
/// A signature is spelled as a bare function-pointer type, so the signature
/// `R(A0, A1)` is written `fn(A0, A1) -> R`. The trait is implemented for
/// function-pointer types taking up to 8 arguments.
///
/// Note that a signature mentioning a reference must name its lifetime
/// explicitly (`fn(&'a str) -> usize`); the elided form `fn(&str) -> usize`
/// is higher-ranked over the lifetime and does not implement this trait.
///
/// [`Function`]: crate::Function
pub trait Signature: sealed::Sealed {
    /// The argument types packed into a tuple.
    type Args;
    /// The return type.
    type Output;
}

/// Uniform call capability for a specific [`Signature`].
///
/// Every closure, function item and function pointer whose `FnMut` signature
/// matches `S` implements this trait through a blanket impl. Types that are
/// not closures (such as structs with a "call" method) can implement it by
/// hand or with the [`Invocable` derive macro].
///
/// ```
/// use inline_fn::{Function, Invocable};
///
/// #[derive(Clone)]
/// struct Offset(i64);
///
/// impl Invocable<fn(i64) -> i64> for Offset {
///     fn invoke(&mut self, (x,): (i64,)) -> i64 {
///         x + self.0
///     }
/// }
///
/// let mut f = Function::<fn(i64) -> i64>::from_invocable(Offset(10));
/// assert_eq!(f.call(5), Ok(15));
/// ```
///
/// [`Invocable` derive macro]: macro@crate::Invocable
pub trait Invocable<S: Signature> {
    /// Call the invocable with the given argument tuple.
    fn invoke(&mut self, args: S::Args) -> S::Output;
}

macro_rules! impl_signature {
    ( $( ($($arg:ident: $ty:ident),*) ),* $(,)? ) => {
        $(
        impl<R, $($ty),*> sealed::Sealed for fn($($ty),*) -> R {}

        impl<R, $($ty),*> Signature for fn($($ty),*) -> R {
            type Args = ($($ty,)*);
            type Output = R;
        }

        impl<F, R, $($ty),*> Invocable<fn($($ty),*) -> R> for F
        where
            F: FnMut($($ty),*) -> R,
        {
            #[inline]
            fn invoke(&mut self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }
        )*
    };
}

for_each_arity!(impl_signature);
