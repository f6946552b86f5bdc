/*!
This crate provides [`Function`], a value type that can hold any invocable
matching a fixed call signature, stores small invocables without a heap
allocation, and supports cloning, moving and calling uniformly regardless
of the concrete invocable type.

# Introduction

Rust already offers two ways of storing "something callable": generics
(`F: FnMut(i32) -> i32`), which keep the concrete type visible and spread it
through every type that stores one, and trait objects (`Box<dyn FnMut(i32) -> i32>`),
which erase the type but always allocate and cannot be cloned.

[`Function`] sits between the two. Like a trait object it erases the type
of the invocable, so closures of different types can share one field, one
`Vec`, or one struct without generic parameters. Unlike a boxed trait object:

- invocables of up to `N` bytes (128 by default) are stored *inline*, in a
  16-byte-aligned slot inside the container, and only larger ones go to
  the heap;
- the container is [`Clone`], deep-copying the invocable through its own
  `Clone` impl whether it lives inline or on the heap;
- the container can be *empty*, and calling an empty container returns
  [`EmptyCallable`] instead of panicking.

# Signatures

The call signature is the container's type parameter, spelled as a
function-pointer type:

| Container | Holds invocables like |
| :- | :- |
| `Function<'_, fn()>` | `|| println!("hi")` |
| `Function<'_, fn(i32) -> i32>` | `|x| x * 2`, `i32::abs` |
| `Function<'a, fn(&'a str, usize) -> bool>` | `|s, n| s.len() > n` |

Calls are made either with the arity-specific [`call`] method, which takes
the arguments individually, or with [`invoke`], which takes them as one
tuple and works for any signature.

# Usage

```rust
use inline_fn::{EmptyCallable, Function};

let greeting = String::from("Hello task: ");

// Store a closure that borrows `greeting`; it fits inline.
let mut task = Function::<fn(u32) -> usize>::new(|id| {
    format!("{greeting}{id}").len()
});
assert!(task.is_inline());
assert_eq!(task.call(205), Ok(15));

// Clones are independent deep copies.
let mut copy = task.clone();
assert_eq!(copy.call(1), Ok(13));

// Moving the invocable out leaves an empty container behind.
let mut moved = task.take();
assert_eq!(task.call(205), Err(EmptyCallable));
assert_eq!(moved.call(205), Ok(15));
```

Plain function pointers and function items work as well:
```rust
# use inline_fn::Function;
fn double(x: i64) -> i64 { x * 2 }

let mut f = Function::<fn(i64) -> i64>::new(double);
assert_eq!(f.call(21), Ok(42));
```

Types that are not closures can implement [`Invocable`] directly, or derive
it (with the default `derive` feature) by pointing the [`Invocable` derive
macro] at one of their methods:
```rust
# #[cfg(feature = "derive")] {
use inline_fn::{Function, Invocable};

#[derive(Clone, Invocable)]
#[invocable(fn(f64) -> f64, method = apply)]
struct Scale {
    factor: f64,
}

impl Scale {
    fn apply(&self, x: f64) -> f64 {
        x * self.factor
    }
}

let mut scale = Function::<fn(f64) -> f64>::from_invocable(Scale { factor: 1.5 });
assert_eq!(scale.call(4.0), Ok(6.0));
# }
```

# Static contract

Every requirement on the stored invocable is checked at compile time. An
invocable whose signature does not match is rejected:
```compile_fail
use inline_fn::Function;
// returns a `String`, not an `i32`
let f = Function::<fn(i32) -> i32>::new(|x: i32| x.to_string());
```

So is an invocable that cannot be cloned, since the container must be able
to deep-copy whatever it holds:
```compile_fail
use inline_fn::Function;
struct NotClone;
let value = NotClone;
let f = Function::<fn()>::new(move || { let _ = &value; });
```

And so is an invocable whose alignment exceeds the 16 bytes guaranteed by
the inline slot:
```compile_fail
use inline_fn::Function;
#[derive(Clone, Copy)]
#[repr(align(64))]
struct Wide(u8);
let wide = Wide(1);
let f = Function::<fn() -> u8>::new(move || {
    let w = wide;
    w.0
});
```

# Feature flags

- `derive` (default): re-exports the [`Invocable` derive macro].
- `log`: emits `log::trace!` records (target `inline_fn`) describing where
  each invocable is stored when it is constructed, cloned or resized.

[`call`]: Function::call
[`invoke`]: Function::invoke
[`Invocable` derive macro]: macro@Invocable
*/
#![warn(missing_docs)]

#[macro_use]
mod macros;

mod error;
mod function;
mod signature;
mod storage;
mod vtable;


#[doc(inline)]
pub use error::EmptyCallable;

#[doc(inline)]
pub use function::{Function, StorageKind};

#[doc(inline)]
pub use signature::{Invocable, Signature};

pub use storage::{ALIGN, DEFAULT_CAPACITY};

#[cfg(feature = "derive")]
pub use inline_fn_derive::Invocable;
