//! Inline storage slot used by [`Function`] for small invocables.
//!
//! [`Function`]: crate::Function
use std::{
    alloc::Layout,
    cell::UnsafeCell,
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ptr::NonNull,
};

/// Alignment guaranteed by the inline slot. Invocables with a stricter
/// alignment requirement are rejected at compile time.
pub const ALIGN: usize = 16;

/// Inline capacity in bytes used when the capacity parameter is omitted.
pub const DEFAULT_CAPACITY: usize = 128;

/// Raw, `ALIGN`-aligned byte slot of `N` bytes.
///
/// The slot never constructs or drops its contents on its own; whatever is
/// placed in it must be explicitly constructed and destroyed by the owner.
#[repr(C, align(16))]
pub(crate) struct Buffer<const N: usize>(UnsafeCell<[MaybeUninit<u8>; N]>);

impl<const N: usize> Buffer<N> {
    pub(crate) const fn uninit() -> Self {
        Buffer(UnsafeCell::new([MaybeUninit::uninit(); N]))
    }

    /// Pointer to the start of the slot.
    ///
    /// Writing through the pointer is permitted since the bytes live in an
    /// `UnsafeCell`, but the caller is responsible for not creating aliasing
    /// `&mut` references to the contents.
    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> NonNull<u8> {
        // `UnsafeCell::get` never returns null
        unsafe { NonNull::new_unchecked(self.0.get().cast()) }
    }
}

/// Whether a value with the given layout can be placed in an `N`-byte slot.
#[inline]
pub(crate) const fn fits(layout: Layout, capacity: usize) -> bool {
    layout.size() <= capacity && layout.align() <= ALIGN
}

/// Whether `F` can be placed in an `N`-byte slot.
#[inline]
pub(crate) const fn fits_inline<F>(capacity: usize) -> bool {
    mem::size_of::<F>() <= capacity && mem::align_of::<F>() <= ALIGN
}

/// Compile-time check that `F` does not exceed the slot alignment.
///
/// Evaluating `AssertAligned::<F>::OK` in a monomorphized function fails the
/// build for over-aligned types.
pub(crate) struct AssertAligned<F>(PhantomData<F>);

impl<F> AssertAligned<F> {
    pub(crate) const OK: () = assert!(
        mem::align_of::<F>() <= ALIGN,
        "invocable is over-aligned; at most 16-byte alignment is supported"
    );
}
