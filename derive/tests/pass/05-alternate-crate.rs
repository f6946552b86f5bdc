//! Points the derive at a re-export of the crate
mod mycrate {
    pub use inline_fn;
}

use mycrate::inline_fn::{Function, Invocable};

#[derive(Clone, Invocable)]
#[invocable(fn(char) -> bool, crate = mycrate::inline_fn, method = matches)]
enum Class {
    Digit,
    Space,
}

impl Class {
    fn matches(&self, c: char) -> bool {
        match self {
            Class::Digit => c.is_ascii_digit(),
            Class::Space => c.is_whitespace(),
        }
    }
}

fn main() {
    let mut digit = Function::<fn(char) -> bool>::from_invocable(Class::Digit);
    let mut space = Function::<fn(char) -> bool>::from_invocable(Class::Space);
    assert_eq!(digit.call('7'), Ok(true));
    assert_eq!(space.call('7'), Ok(false));
}
