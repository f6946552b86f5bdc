//! A hand-written `Invocable` impl for a type too large for the inline slot.
use inline_fn::{Function, Invocable};

#[derive(Clone)]
struct Histogram {
    bins: [u32; 256],
}

impl Invocable<fn(u8) -> u32> for Histogram {
    fn invoke(&mut self, (byte,): (u8,)) -> u32 {
        self.bins[usize::from(byte)] += 1;
        self.bins[usize::from(byte)]
    }
}

fn main() {
    let mut h = Function::<fn(u8) -> u32>::from_invocable(Histogram { bins: [0; 256] });
    assert!(h.is_boxed());
    for byte in b"hello" {
        h.call(*byte).unwrap();
    }
    assert_eq!(h.call(b'l'), Ok(3));

    let mut copy = h.clone();
    assert_eq!(copy.call(b'h'), Ok(2));
    assert_eq!(h.call(b'h'), Ok(2));
}
