//! Repeating the attribute implements the trait once per signature
use inline_fn::{Function, Invocable};

#[derive(Clone, Default, Invocable)]
#[invocable(fn())]
#[invocable(fn(u64, u64) -> u64, method = add)]
#[invocable(fn() -> u64, method = get)]
struct Total(u64);

impl Total {
    fn call(&mut self) {
        self.0 += 1;
    }

    fn add(&mut self, a: u64, b: u64) -> u64 {
        self.0 += a + b;
        self.0
    }

    fn get(&self) -> u64 {
        self.0
    }
}

fn main() {
    let mut tick = Function::<fn()>::from_invocable(Total::default());
    assert_eq!(tick.call(), Ok(()));

    let mut add = Function::<fn(u64, u64) -> u64>::from_invocable(Total(10));
    assert_eq!(add.call(1, 2), Ok(13));

    let mut get = Function::<fn() -> u64>::from_invocable(Total(5));
    assert_eq!(get.call(), Ok(5));
}
