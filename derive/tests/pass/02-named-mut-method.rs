//! Forwards calls to a named `&mut self` method that keeps state
use inline_fn::{Function, Invocable};

#[derive(Clone, Invocable)]
#[invocable(fn(&'static str), method = push)]
struct Log {
    lines: Vec<&'static str>,
}

impl Log {
    fn push(&mut self, line: &'static str) {
        self.lines.push(line);
    }
}

fn main() {
    let mut f = Function::<fn(&'static str)>::from_invocable(Log { lines: Vec::new() });
    assert_eq!(f.call("one"), Ok(()));
    assert_eq!(f.call("two"), Ok(()));
}
