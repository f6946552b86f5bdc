//! End-to-end behavior of `Function` through the public API only.
use std::cell::Cell;
use std::rc::Rc;

use inline_fn::{EmptyCallable, Function, Invocable, StorageKind, DEFAULT_CAPACITY};

#[derive(Clone)]
struct Blob {
    bytes: [u8; 1024],
    runs: Rc<Cell<u32>>,
}

impl Invocable<fn()> for Blob {
    fn invoke(&mut self, (): ()) {
        self.bytes[0] = self.bytes[0].wrapping_add(1);
        self.runs.set(self.runs.get() + 1);
    }
}

thread_local! {
    static LAST: Cell<Option<i32>> = Cell::new(None);
}

fn remember(value: i32) {
    LAST.with(|last| last.set(Some(value)));
}

#[test]
fn moved_from_container_reports_empty() {
    let captured = 205;
    let mut c1 = Function::<fn() -> i32>::new(move || if captured == 205 { 5 } else { 0 });
    let mut c2 = c1.take();
    assert_eq!(c2.call(), Ok(5));
    assert_eq!(c1.call(), Err(EmptyCallable));
}

#[test]
fn large_functor_is_boxed_and_runs_once() {
    let runs = Rc::new(Cell::new(0));
    let blob = Blob { bytes: [0; 1024], runs: Rc::clone(&runs) };
    let mut c = Function::<fn()>::from_invocable(blob);
    assert_eq!(c.storage(), StorageKind::Boxed);
    assert_eq!(c.call(), Ok(()));
    assert_eq!(runs.get(), 1);
}

#[test]
fn free_function_receives_argument() {
    let mut c = Function::<fn(i32)>::new(remember);
    assert_eq!(c.call(1024), Ok(()));
    assert_eq!(LAST.with(Cell::get), Some(1024));
}

#[test]
fn same_result_as_direct_call() {
    let offset = 3_i64;
    let direct = move |x: i64| x * x + offset;
    let padding = [offset; 64];
    let large = move |x: i64| x * x + padding[63];

    let mut small = Function::<fn(i64) -> i64>::new(direct);
    let mut big = Function::<fn(i64) -> i64>::new(large);
    assert!(small.is_inline());
    assert!(big.is_boxed());
    for x in [-4, 0, 9] {
        assert_eq!(small.call(x), Ok(direct(x)));
        assert_eq!(big.call(x), Ok(large(x)));
    }
}

#[test]
fn copies_do_not_share_state() {
    let mut history = Vec::new();
    let mut a = Function::<fn(u8) -> usize>::new(move |b| {
        history.push(b);
        history.len()
    });
    assert_eq!(a.call(1), Ok(1));
    let mut b = a.clone();
    assert_eq!(a.call(2), Ok(2));
    assert_eq!(a.call(3), Ok(3));
    assert_eq!(b.call(9), Ok(2));
}

#[test]
fn capacity_boundary() {
    let exact = [1_u8; DEFAULT_CAPACITY];
    let over = [1_u8; DEFAULT_CAPACITY + 1];
    let mut inline = Function::<fn() -> usize>::new(move || exact.len());
    let mut boxed = Function::<fn() -> usize>::new(move || over.len());
    assert!(inline.is_inline());
    assert!(boxed.is_boxed());
    assert_eq!(inline.call(), Ok(DEFAULT_CAPACITY));
    assert_eq!(boxed.call(), Ok(DEFAULT_CAPACITY + 1));
}

#[test]
fn double_swap_restores_pairing() {
    fn make(kind: u8) -> Function<'static, fn() -> u32> {
        match kind {
            0 => Function::empty(),
            1 => Function::<fn() -> u32>::new(|| 1),
            _ => {
                let pad = [2_u32; 64];
                Function::<fn() -> u32>::new(move || pad[0])
            }
        }
    }
    for i in 0..3 {
        for j in 0..3 {
            let (mut x, mut y) = (make(i), make(j));
            let before = (x.call(), y.call());
            std::mem::swap(&mut x, &mut y);
            assert_eq!((y.call(), x.call()), before);
            x.swap(&mut y);
            assert_eq!((x.call(), y.call()), before);
        }
    }
}

#[test]
fn default_container_only_reports_empty() {
    let mut c = Function::<fn(&'static str) -> usize>::default();
    assert_eq!(c.call("ignored"), Err(EmptyCallable));
    assert_eq!(c.invoke(("ignored",)), Err(EmptyCallable));
    assert!(c.is_empty());
}
