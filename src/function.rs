/*!
Defines the [`Function`] container.

A `Function` holds at most one invocable of any concrete type whose call
signature matches its [`Signature`] parameter. Invocables that fit in the
inline slot (at most `N` bytes, at most [`ALIGN`] alignment) are constructed
directly inside the container; larger ones are placed on the heap. Either
way the concrete type is forgotten after construction and the value is
driven through a per-type [`VTable`].

Moving a `Function` moves its inline bytes along with it. This is sound for
every Rust type, since Rust values never depend on their own address unless
pinned, and a `Function` cannot hold a pinned value.
*/
use std::{fmt, mem, ptr::NonNull};

use crate::{
    error::EmptyCallable,
    signature::{Invocable, Signature},
    storage::{self, AssertAligned, Buffer, ALIGN, DEFAULT_CAPACITY},
    vtable::VTable,
};

/// Where a [`Function`] currently keeps its invocable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// No invocable is contained.
    Empty,
    /// The invocable lives in the container's inline slot.
    Inline,
    /// The invocable lives in a heap allocation owned by the container.
    Boxed,
}

/// The active state of a [`Function`]; exactly one of these at any time.
enum State<'src, S: Signature, const N: usize> {
    Empty,
    Inline {
        buf: Buffer<N>,
        vtable: &'src VTable<S>,
    },
    Boxed {
        ptr: NonNull<u8>,
        vtable: &'src VTable<S>,
    },
}

/// Type-erased, clonable container for any invocable matching the
/// signature `S`, with inline storage for invocables of up to `N` bytes.
///
/// The signature is spelled as a function-pointer type, so a container for
/// callables taking an `i32` and a `&'a str` and returning a `bool` is a
/// `Function<'src, fn(i32, &'a str) -> bool>`. The lifetime `'src` bounds any
/// data the stored invocable borrows.
///
/// # Examples
/// ```
/// use inline_fn::{EmptyCallable, Function};
///
/// let base = 40;
/// let mut add = Function::<fn(i32) -> i32>::new(move |x| x + base);
/// assert!(add.is_inline());
/// assert_eq!(add.call(2), Ok(42));
///
/// // taking the invocable out leaves the container empty
/// let mut moved = add.take();
/// assert_eq!(moved.call(1), Ok(41));
/// assert_eq!(add.call(1), Err(EmptyCallable));
/// ```
///
/// Invocables larger than the inline capacity are stored on the heap:
/// ```
/// use inline_fn::Function;
///
/// let table = [1_u64; 64];
/// let mut sum = Function::<fn() -> u64>::new(move || table.iter().sum());
/// assert!(sum.is_boxed());
/// assert_eq!(sum.call(), Ok(64));
/// ```
pub struct Function<'src, S: Signature, const N: usize = DEFAULT_CAPACITY> {
    state: State<'src, S, N>,
}

/// Constructors
impl<'src, S: Signature, const N: usize> Function<'src, S, N> {
    /// Inline capacity in bytes.
    pub const CAPACITY: usize = N;

    /// Maximum alignment of an invocable, inline or boxed.
    pub const ALIGN: usize = ALIGN;

    /// Create a container holding no invocable.
    pub const fn empty() -> Self {
        Function { state: State::Empty }
    }

    /// Erase the type of `f` and store it, inline if it fits in `N` bytes and
    /// on the heap otherwise.
    ///
    /// This accepts any [`Invocable`], including user types implementing the
    /// trait by hand. For closures, prefer [`Function::new`], which lets the
    /// compiler infer the closure's parameter types from the signature.
    ///
    /// Fails to compile if `F` requires an alignment above [`ALIGN`].
    pub fn from_invocable<F>(f: F) -> Self
    where
        F: Invocable<S> + Clone + 'src,
    {
        #[allow(clippy::let_unit_value)]
        let () = AssertAligned::<F>::OK;
        let vtable = VTable::of::<F>();
        let state = if storage::fits_inline::<F>(N) {
            trace!(
                "storing `{}` inline ({} of {} bytes)",
                std::any::type_name::<F>(),
                mem::size_of::<F>(),
                N
            );
            let buf = Buffer::uninit();
            // SAFETY: the slot is uninitialized and large and aligned enough for `F`
            unsafe { buf.as_ptr().cast::<F>().as_ptr().write(f) };
            State::Inline { buf, vtable }
        } else {
            trace!(
                "storing `{}` on the heap ({} bytes exceeds {})",
                std::any::type_name::<F>(),
                mem::size_of::<F>(),
                N
            );
            let ptr = NonNull::from(Box::leak(Box::new(f))).cast();
            State::Boxed { ptr, vtable }
        };
        Function { state }
    }
}

/// Observers
impl<'src, S: Signature, const N: usize> Function<'src, S, N> {
    /// Where the invocable is currently stored.
    pub fn storage(&self) -> StorageKind {
        match self.state {
            State::Empty => StorageKind::Empty,
            State::Inline { .. } => StorageKind::Inline,
            State::Boxed { .. } => StorageKind::Boxed,
        }
    }

    /// Returns `true` if no invocable is contained.
    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// Returns `true` if the invocable lives in the inline slot.
    pub fn is_inline(&self) -> bool {
        matches!(self.state, State::Inline { .. })
    }

    /// Returns `true` if the invocable lives on the heap.
    pub fn is_boxed(&self) -> bool {
        matches!(self.state, State::Boxed { .. })
    }

    /// Pointer to the stored invocable along with its table.
    fn erased(&self) -> Option<(NonNull<u8>, &'src VTable<S>)> {
        match &self.state {
            State::Empty => None,
            State::Inline { buf, vtable } => Some((buf.as_ptr(), *vtable)),
            State::Boxed { ptr, vtable } => Some((*ptr, *vtable)),
        }
    }
}

/// Invocation and mutation
impl<'src, S: Signature, const N: usize> Function<'src, S, N> {
    /// Call the contained invocable with an argument tuple.
    ///
    /// Whatever the invocable returns is passed through unchanged, and a
    /// panic inside the invocable unwinds through this call. The only error
    /// produced here is [`EmptyCallable`], when there is nothing to call.
    pub fn invoke(&mut self, args: S::Args) -> Result<S::Output, EmptyCallable> {
        let (ptr, vtable) = self.erased().ok_or(EmptyCallable)?;
        // SAFETY: `ptr` points to the live invocable `vtable` was built for,
        // and `&mut self` guarantees exclusive access to it.
        Ok(unsafe { (vtable.invoke)(ptr, args) })
    }

    /// Move the invocable out into a new container, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Drop the contained invocable, if any.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Exchange the contents of two containers.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Move the invocable into a container with a different inline capacity.
    ///
    /// A boxed invocable keeps its heap allocation. An inline invocable is
    /// moved into the new slot if it fits there, and onto the heap otherwise.
    ///
    /// ```
    /// use inline_fn::Function;
    ///
    /// let data = [3_u8; 24];
    /// let small = Function::<fn() -> usize, 32>::new(move || data.len());
    /// assert!(small.is_inline());
    ///
    /// let mut tiny: Function<'_, fn() -> usize, 16> = small.resize();
    /// assert!(tiny.is_boxed());
    /// assert_eq!(tiny.call(), Ok(24));
    /// ```
    pub fn resize<const M: usize>(mut self) -> Function<'src, S, M> {
        let state = match mem::replace(&mut self.state, State::Empty) {
            State::Empty => State::Empty,
            State::Boxed { ptr, vtable } => State::Boxed { ptr, vtable },
            State::Inline { buf, vtable } => {
                let layout = (vtable.layout)();
                if storage::fits(layout, M) {
                    trace!("relocating `{}` into a {}-byte slot", (vtable.type_name)(), M);
                    let target = Buffer::uninit();
                    // SAFETY: `buf` holds a live value that is never touched again
                    // and `target` is an uninitialized slot that fits it
                    unsafe { (vtable.relocate)(buf.as_ptr(), target.as_ptr()) };
                    State::Inline { buf: target, vtable }
                } else {
                    trace!(
                        "moving `{}` to the heap ({} bytes exceeds {})",
                        (vtable.type_name)(),
                        layout.size(),
                        M
                    );
                    // SAFETY: `buf` holds a live value that is never touched again
                    let ptr = unsafe { (vtable.relocate_boxed)(buf.as_ptr()) };
                    State::Boxed { ptr, vtable }
                }
            }
        };
        Function { state }
    }
}

macro_rules! impl_arity {
    ( $( ($($arg:ident: $ty:ident),*) ),* $(,)? ) => {
        $(
        impl<'src, R, $($ty,)* const N: usize> Function<'src, fn($($ty),*) -> R, N> {
            /// Erase the type of the closure, function item or function
            /// pointer `f` and store it, inline if it fits in `N` bytes and on
            /// the heap otherwise.
            ///
            /// Fails to compile if `F` requires an alignment above [`ALIGN`].
            pub fn new<F>(f: F) -> Self
            where
                F: FnMut($($ty),*) -> R + Clone + 'src,
            {
                Self::from_invocable(f)
            }

            /// Call the contained invocable.
            ///
            /// Returns [`EmptyCallable`] if there is nothing to call; see
            /// [`Function::invoke`].
            #[allow(clippy::too_many_arguments)]
            pub fn call(&mut self, $($arg: $ty),*) -> Result<R, EmptyCallable> {
                self.invoke(($($arg,)*))
            }
        }
        )*
    };
}

for_each_arity!(impl_arity);

impl<S: Signature, const N: usize> Clone for Function<'_, S, N> {
    /// Deep-copy the contained invocable through its own `Clone` impl.
    ///
    /// An inline invocable is cloned into the new container's slot and a
    /// boxed one into a fresh heap allocation.
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::Empty => State::Empty,
            State::Inline { buf, vtable } => {
                trace!("cloning inline `{}`", (vtable.type_name)());
                let copy = Buffer::uninit();
                // SAFETY: `buf` holds a live value of the type `vtable` was built
                // for, and `copy` is an uninitialized slot of the same size
                unsafe { (vtable.clone_into)(buf.as_ptr(), copy.as_ptr()) };
                State::Inline { buf: copy, vtable: *vtable }
            }
            State::Boxed { ptr, vtable } => {
                trace!("cloning boxed `{}`", (vtable.type_name)());
                // SAFETY: `ptr` points to a live value of the type `vtable` was built for
                let ptr = unsafe { (vtable.clone_boxed)(*ptr) };
                State::Boxed { ptr, vtable: *vtable }
            }
        };
        Function { state }
    }
}

impl<S: Signature, const N: usize> Drop for Function<'_, S, N> {
    fn drop(&mut self) {
        match &mut self.state {
            State::Empty => {}
            // SAFETY: the value is live and is never touched again
            State::Inline { buf, vtable } => unsafe { (vtable.drop_in_place)(buf.as_ptr()) },
            // SAFETY: the allocation was produced for the type `vtable` was built for
            State::Boxed { ptr, vtable } => unsafe { (vtable.drop_boxed)(*ptr) },
        }
    }
}

impl<S: Signature, const N: usize> Default for Function<'_, S, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Signature, const N: usize> fmt::Debug for Function<'_, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Function");
        dbg.field("storage", &self.storage());
        if let Some((_, vtable)) = self.erased() {
            dbg.field("invocable", &(vtable.type_name)());
        }
        dbg.field("capacity", &N).finish()
    }
}
