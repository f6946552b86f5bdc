//! Internal helper macros.

/// Invokes the given macro once with the parameter lists of every supported
/// arity (0 through 8), pairing an argument binding with its type parameter.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m! {
            (),
            (a0: A0),
            (a0: A0, a1: A1),
            (a0: A0, a1: A1, a2: A2),
            (a0: A0, a1: A1, a2: A2, a3: A3),
            (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4),
            (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5),
            (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6),
            (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7),
        }
    };
}

/// Emits a `log::trace!` record when the `log` feature is enabled, and
/// nothing otherwise. Arguments are not evaluated when the feature is off.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "inline_fn", $($arg)+);
    };
}
