//! The capability table through which an erased invocable is driven.
//!
//! A [`VTable`] is generated once per concrete invocable type `F` and holds
//! monomorphized function pointers that know how to call, clone, relocate
//! and destroy an `F` given nothing but an untyped pointer to it. The table
//! itself does not know where the value lives; the same table serves an `F`
//! stored in an inline slot and an `F` stored on the heap.
use std::{alloc::Layout, any, ptr::NonNull};

use crate::signature::{Invocable, Signature};

pub(crate) struct VTable<S: Signature> {
    /// Call the value at `this`.
    pub(crate) invoke: unsafe fn(this: NonNull<u8>, args: S::Args) -> S::Output,
    /// Clone the value at `src` into the uninitialized slot at `dst`.
    pub(crate) clone_into: unsafe fn(src: NonNull<u8>, dst: NonNull<u8>),
    /// Clone the value at `src` into a new heap allocation.
    pub(crate) clone_boxed: unsafe fn(src: NonNull<u8>) -> NonNull<u8>,
    /// Move the value at `src` into the uninitialized slot at `dst`.
    pub(crate) relocate: unsafe fn(src: NonNull<u8>, dst: NonNull<u8>),
    /// Move the value at `src` into a new heap allocation.
    pub(crate) relocate_boxed: unsafe fn(src: NonNull<u8>) -> NonNull<u8>,
    /// Drop the value at `this` without releasing its memory.
    pub(crate) drop_in_place: unsafe fn(this: NonNull<u8>),
    /// Drop the heap-allocated value at `this` and release its allocation.
    pub(crate) drop_boxed: unsafe fn(this: NonNull<u8>),
    pub(crate) layout: fn() -> Layout,
    pub(crate) type_name: fn() -> &'static str,
}

impl<S: Signature> VTable<S> {
    /// Get the table for invocables of type `F`.
    ///
    /// The returned reference points to a promoted constant, so each `F`
    /// gets exactly one table for the lifetime of the program.
    #[inline]
    pub(crate) fn of<'src, F>() -> &'src VTable<S>
    where
        F: Invocable<S> + Clone + 'src,
        S: 'src,
    {
        &VTable {
            invoke: invoke::<F, S>,
            clone_into: clone_into::<F>,
            clone_boxed: clone_boxed::<F>,
            relocate: relocate::<F>,
            relocate_boxed: relocate_boxed::<F>,
            drop_in_place: drop_in_place::<F>,
            drop_boxed: drop_boxed::<F>,
            layout: Layout::new::<F>,
            type_name: any::type_name::<F>,
        }
    }
}

/// # Safety
/// `this` must point to a valid `F` that is not aliased for the duration
/// of the call.
unsafe fn invoke<F: Invocable<S>, S: Signature>(this: NonNull<u8>, args: S::Args) -> S::Output {
    let f = unsafe { &mut *this.cast::<F>().as_ptr() };
    f.invoke(args)
}

/// # Safety
/// `src` must point to a valid `F`; `dst` must be valid for writes of an `F`
/// and suitably aligned. `dst` is left untouched if `F::clone` panics.
unsafe fn clone_into<F: Clone>(src: NonNull<u8>, dst: NonNull<u8>) {
    let copy = unsafe { src.cast::<F>().as_ref() }.clone();
    unsafe { dst.cast::<F>().as_ptr().write(copy) }
}

/// # Safety
/// `src` must point to a valid `F`.
unsafe fn clone_boxed<F: Clone>(src: NonNull<u8>) -> NonNull<u8> {
    let copy = unsafe { src.cast::<F>().as_ref() }.clone();
    NonNull::from(Box::leak(Box::new(copy))).cast()
}

/// # Safety
/// `src` must point to a valid `F`, which is logically moved out and must
/// not be used or dropped afterwards; `dst` must be valid for writes of an
/// `F` and suitably aligned.
unsafe fn relocate<F>(src: NonNull<u8>, dst: NonNull<u8>) {
    unsafe {
        let value = src.cast::<F>().as_ptr().read();
        dst.cast::<F>().as_ptr().write(value);
    }
}

/// # Safety
/// `src` must point to a valid `F`, which is logically moved out and must
/// not be used or dropped afterwards.
unsafe fn relocate_boxed<F>(src: NonNull<u8>) -> NonNull<u8> {
    let value = unsafe { src.cast::<F>().as_ptr().read() };
    NonNull::from(Box::leak(Box::new(value))).cast()
}

/// # Safety
/// `this` must point to a valid `F` that is never used again.
unsafe fn drop_in_place<F>(this: NonNull<u8>) {
    unsafe { this.cast::<F>().as_ptr().drop_in_place() }
}

/// # Safety
/// `this` must have been produced by `clone_boxed::<F>` or
/// `relocate_boxed::<F>` and must never be used again.
unsafe fn drop_boxed<F>(this: NonNull<u8>) {
    drop(unsafe { Box::from_raw(this.cast::<F>().as_ptr()) })
}
