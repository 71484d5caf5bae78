#![allow(missing_docs)]

use super::*;
use rand::prelude::*;

fn lowercase() -> PolyUnionFind<String, KeyFn<impl Fn(&String) -> String, String>> {
    PolyUnionFind::with_key(|token: &String| token.to_lowercase())
}

fn s(token: &str) -> String {
    token.to_string()
}

#[test]
fn unseen_values_represent_themselves() {
    let mut uf = PolyUnionFind::new();
    assert_eq!(uf.find("a").unwrap(), "a");
    assert_eq!(uf.find("b").unwrap(), "b");
    assert_eq!(uf.find("a").unwrap(), "a");
    assert_eq!(uf.renumber().len(), 2);
}

#[test]
fn union_and_find() {
    let mut uf = PolyUnionFind::new();
    assert_eq!(uf.union("x", "y").unwrap(), "x");
    assert_eq!(uf.find("y").unwrap(), "x");

    // the first argument's group keeps its representative
    assert_eq!(uf.union("z", "y").unwrap(), "z");
    assert_eq!(uf.find("x").unwrap(), "z");
    assert_eq!(uf.find("y").unwrap(), "z");

    assert_eq!(uf.union("y", "x").unwrap(), "z");
    assert_eq!(uf.repr("x").unwrap(), uf.repr("z").unwrap());
}

#[test]
fn custom_equivalence() {
    let mut uf = lowercase();
    uf.union(s("Foo"), s("bar")).unwrap();
    assert_eq!(uf.find(s("FOO")).unwrap(), "Foo");
    assert_eq!(uf.find(s("BAR")).unwrap(), "Foo");
    assert_eq!(uf.find(s("baz")).unwrap(), "baz");
}

#[test]
fn unions() {
    let mut uf = lowercase();
    uf.unions(["b", "a", "C"].map(s)).unwrap();
    uf.unions([s("d")]).unwrap();
    for token in ["a", "B", "c"] {
        assert_eq!(uf.find(s(token)).unwrap(), "b");
    }
    assert_eq!(uf.find(s("d")).unwrap(), "d");
    assert!(matches!(uf.unions(Vec::new()), Err(Error::EmptyUnion)));
}

#[test]
fn structured_values() {
    let mut uf = PolyUnionFind::new();
    let node = |side: &str, index: usize| serde_json::json!({ "side": side, "index": index });
    uf.union(node("source", 0), node("target", 1)).unwrap();
    uf.union(node("target", 1), node("target", 2)).unwrap();
    assert_eq!(uf.find(node("target", 2)).unwrap(), node("source", 0));
    assert_eq!(uf.find(node("source", 1)).unwrap(), node("source", 1));
}

#[test]
fn groups() {
    let mut uf = PolyUnionFind::new();
    uf.find(1).unwrap();
    uf.union(2, 3).unwrap();
    uf.union(4, 2).unwrap();
    uf.union(5, 6).unwrap();
    assert_eq!(uf.groups(), vec![vec![4, 2, 3], vec![5, 6]]);
    assert_eq!(uf.partition(), vec![vec![1], vec![4, 2, 3], vec![5, 6]]);
    assert_eq!(format!("{uf:?}"), "{[4, 2, 3], [5, 6]}");
}

#[test]
fn failed_unions_change_nothing() {
    let mut uf = PolyUnionFind::new();
    let result = uf.unions([Some(1.0), Some(2.0), Some(f64::NAN), None]);
    assert!(matches!(result, Err(Error::NonFiniteFloat(_))));
    assert!(uf.renumber().is_empty());
    assert!(uf.union_find().is_empty());

    let result = uf.union(Some(3.0), Some(f64::INFINITY));
    assert!(matches!(result, Err(Error::NonFiniteFloat(_))));
    assert!(uf.renumber().is_empty());

    uf.unions([Some(1.0), Some(2.0)]).unwrap();
    assert_eq!(uf.partition(), vec![vec![Some(1.0), Some(2.0)]]);
}

#[test]
fn random_against_reference() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
    let mut uf = lowercase();
    // reference: group label per lower-cased token, relabelled on every union
    let mut label: std::collections::HashMap<String, usize> = Default::default();
    let mut next_label = 0;
    let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];

    let random_token = |rng: &mut rand_pcg::Pcg64| {
        let word = words[rng.gen_range(0..words.len())];
        if rng.gen_bool(0.5) {
            word.to_uppercase()
        } else {
            word.to_string()
        }
    };

    for _ in 0..500 {
        let a = random_token(&mut rng);
        let b = random_token(&mut rng);
        let mut fresh = || {
            next_label += 1;
            next_label
        };
        let la = *label.entry(a.to_lowercase()).or_insert_with(&mut fresh);
        let lb = *label.entry(b.to_lowercase()).or_insert_with(&mut fresh);

        let repr = uf.union(a.clone(), b.clone()).unwrap();
        for value in label.values_mut() {
            if *value == lb {
                *value = la;
            }
        }

        assert_eq!(uf.find(b.clone()).unwrap(), repr);
        assert_eq!(label[&repr.to_lowercase()], la);
        let repr_again = uf.find(repr.clone()).unwrap();
        assert_eq!(repr_again, repr);
    }

    for x in words {
        for y in words {
            let same = x == y
                || matches!((label.get(x), label.get(y)), (Some(lx), Some(ly)) if lx == ly);
            assert_eq!(uf.repr(s(x)).unwrap() == uf.repr(s(y)).unwrap(), same);
        }
    }
}
