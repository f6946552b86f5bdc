//! A container whose signature borrows from the caller, stored in a struct
//! field alongside containers holding other closure types.
use inline_fn::Function;

struct Filter<'a> {
    name: &'static str,
    keep: Function<'a, fn(&'a str) -> bool>,
}

impl<'a> Filter<'a> {
    fn new(name: &'static str, keep: impl FnMut(&'a str) -> bool + Clone + 'a) -> Self {
        let keep = Function::<fn(&'a str) -> bool>::new(keep);
        Filter { name, keep }
    }
}

fn apply<'a>(filters: &mut [Filter<'a>], words: &[&'a str]) -> Vec<(&'static str, usize)> {
    filters
        .iter_mut()
        .map(|filter| {
            let kept = words
                .iter()
                .copied()
                .filter(|w| filter.keep.call(*w).unwrap_or(false))
                .count();
            (filter.name, kept)
        })
        .collect()
}

fn main() {
    let min = 4;
    let words = ["tree", "ox", "lantern", "sky"];
    let mut filters = vec![
        Filter::new("long", move |w: &str| w.len() >= min),
        Filter::new("has-o", |w: &str| w.contains('o')),
        Filter { name: "none", keep: Function::empty() },
    ];
    let counts = apply(&mut filters, &words);
    assert_eq!(counts, vec![("long", 2), ("has-o", 1), ("none", 0)]);
}
