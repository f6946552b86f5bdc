//! Derives for a type with a lifetime and a type parameter used in the signature
use inline_fn::{Function, Invocable};

#[derive(Clone, Invocable)]
#[invocable(fn(&'a [T]) -> usize, method = count)]
struct CountEqual<'a, T>
where
    T: PartialEq,
{
    needle: &'a T,
}

impl<'a, T: PartialEq> CountEqual<'a, T> {
    fn count(&self, haystack: &'a [T]) -> usize {
        haystack.iter().filter(|item| *item == self.needle).count()
    }
}

fn count_in<'a>(needle: &'a i32, items: &'a [i32]) -> usize {
    let mut f = Function::<fn(&'a [i32]) -> usize>::from_invocable(CountEqual { needle });
    f.call(items).unwrap_or(0)
}

fn main() {
    assert_eq!(count_in(&3, &[1, 3, 3, 7]), 2);
}
