//! Forwards calls to the default `call` method
use inline_fn::{Function, Invocable};

#[derive(Clone, Invocable)]
#[invocable(fn(i32) -> i32)]
struct AddOne;

impl AddOne {
    fn call(&self, x: i32) -> i32 {
        x + 1
    }
}

fn main() {
    let mut f = Function::<fn(i32) -> i32>::from_invocable(AddOne);
    assert_eq!(f.call(41), Ok(42));
}
