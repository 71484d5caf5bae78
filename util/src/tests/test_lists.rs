#![allow(missing_docs)]

use super::*;
use rand::prelude::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn string(xs: &[char]) -> String {
    xs.iter().collect()
}

#[test]
fn split_at_3_examples() {
    let digits = chars("0123456");
    let check = |start, end, expected: [&str; 3]| {
        let (a, b, c) = split_at_3(&digits, start, end);
        assert_eq!([string(&a), string(&b), string(&c)], expected.map(String::from));
    };
    check(2, 4, ["01", "23", "456"]);
    check(2, 2, ["01", "", "23456"]);
    check(2, 9, ["01", "23456", ""]);
    check(0, 2, ["", "01", "23456"]);
}

#[test]
fn split_at_clips() {
    let xs = [1, 2, 3];
    assert_eq!(split_at(&xs, 0), (vec![], vec![1, 2, 3]));
    assert_eq!(split_at(&xs, 3), (vec![1, 2, 3], vec![]));
    assert_eq!(split_at(&xs, 17), (vec![1, 2, 3], vec![]));
    assert_eq!(split_at::<u8>(&[], 2), (vec![], vec![]));
}

#[test]
fn splice_examples() {
    let s_chars = ["a", "b", "c", "d", "e", "f"];

    let (ex, rm) = splice(&s_chars, 3, 1, [" ", "_"]);
    assert_eq!(ex.concat(), "abc _ef");
    assert_eq!(rm.concat(), "d");

    let (ex, rm) = splice(&s_chars, 3, 2, [" ", "_"]);
    assert_eq!(ex.concat(), "abc _f");
    assert_eq!(rm.concat(), "de");

    // the input is left untouched
    assert_eq!(s_chars.concat(), "abcdef");
}

#[test]
fn splice_clips() {
    let xs = [1, 2, 3];
    assert_eq!(splice(&xs, 2, 10, [7]), (vec![1, 2, 7], vec![3]));
    assert_eq!(splice(&xs, 10, 1, [7]), (vec![1, 2, 3, 7], vec![]));
    assert_eq!(splice(&xs, 1, usize::MAX, std::iter::empty()), (vec![1], vec![2, 3]));
}

#[test]
fn rearrange_examples() {
    let xs = [0, 1, 2, 3];
    assert_eq!(rearrange(&xs, 1, 2, 0), [1, 2, 0, 3]);
    assert_eq!(rearrange(&xs, 1, 2, 3), [0, 3, 1, 2]);
    assert_eq!(rearrange(&xs, 1, 2, 1), [0, 1, 2, 3]);
    assert_eq!(rearrange(&xs, 1, 2, 2), [0, 1, 2, 3]);
    assert_eq!(rearrange(&xs, 0, 0, 3), [1, 2, 3, 0]);
    assert_eq!(rearrange(&xs, 3, 3, 0), [3, 0, 1, 2]);
    assert_eq!(rearrange(&xs, 1, 2, 99), [0, 3, 1, 2]);
}

#[test]
fn rearrange_degenerate_windows() {
    let xs = [0, 1, 2, 3];
    assert_eq!(rearrange(&xs, 2, 1, 0), xs);
    assert_eq!(rearrange(&xs, 4, 5, 0), xs);
    assert_eq!(rearrange(&xs, 2, 10, 0), [2, 3, 0, 1]);
    assert_eq!(rearrange::<u8>(&[], 0, 0, 0), Vec::<u8>::new());
}

#[test]
fn random_reconstruction() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(25);
    for _ in 0..500 {
        let len = rng.gen_range(0..12);
        let xs: Vec<u32> = (0..len).map(|_| rng.gen_range(0..100)).collect();
        let start = rng.gen_range(0..=len + 3);
        let end = rng.gen_range(0..=len + 3);
        let count = rng.gen_range(0..=len + 3);

        let (a, b) = split_at(&xs, start);
        assert_eq!([a, b].concat(), xs);

        let (a, b, c) = split_at_3(&xs, start, end);
        assert_eq!([a, b, c].concat(), xs);

        let insert: Vec<u32> = (0..rng.gen_range(0..4)).map(|n| 1000 + n).collect();
        let (spliced, removed) = splice(&xs, start, count, insert.clone());
        assert_eq!(spliced.len() + removed.len(), xs.len() + insert.len());
        let (restored, reinserted) = splice(&spliced, start.min(len), insert.len(), removed);
        assert_eq!(restored, xs);
        assert_eq!(reinserted, insert);
    }
}

#[test]
fn random_rearrange() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(42);
    for _ in 0..500 {
        let len = rng.gen_range(1..12);
        let xs: Vec<usize> = (0..len).collect();
        let begin = rng.gen_range(0..len);
        let end = rng.gen_range(begin..len);
        let dest = rng.gen_range(0..len + 2);

        let moved = rearrange(&xs, begin, end, dest);
        assert_eq!(moved.len(), xs.len());

        let mut sorted = moved.clone();
        sorted.sort();
        assert_eq!(sorted, xs);

        let window = &xs[begin..=end];
        let position = moved
            .windows(window.len())
            .position(|candidate| candidate == window)
            .unwrap();
        if (begin..=end).contains(&dest) {
            assert_eq!(moved, xs);
        } else if dest < begin {
            assert_eq!(position, dest);
        } else {
            assert_eq!(position + window.len() - 1, dest.min(len - 1));
        }
    }
}
