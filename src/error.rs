//! Defines the [`EmptyCallable`] error.

/// Error returned when invoking a [`Function`] that holds no invocable.
///
/// This is the only error the container itself produces; failures of the
/// wrapped invocable (including panics and `Err` return values) pass through
/// unchanged.
///
/// [`Function`]: crate::Function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no callable contained")]
pub struct EmptyCallable;
