use std::collections::BTreeMap;

use ft_containers::{
    lexicographical_compare, Bidirectional, Map, RandomAccess, Set, Stack, TreePos, Vector,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn stack_over_vector_and_vec_matrix() {
    let mut rng = StdRng::seed_from_u64(0xbeef);
    let mut ours: Stack<u32> = Stack::new();
    let mut over_vec: Stack<u32, Vec<u32>> = Stack::from_sequence(Vec::new());
    let mut shadow = Vec::new();

    for _ in 0..1000 {
        if rng.gen_bool(0.6) {
            let x = rng.gen();
            ours.push(x);
            over_vec.push(x);
            shadow.push(x);
        } else {
            let expected = shadow.pop();
            assert_eq!(ours.pop(), expected);
            assert_eq!(over_vec.pop(), expected);
        }
        assert_eq!(ours.top(), shadow.last());
        assert_eq!(over_vec.len(), shadow.len());
    }
    assert_eq!(ours.into_inner().as_slice(), shadow.as_slice());
}

#[test]
fn vector_cursor_arithmetic_matrix() {
    let v: Vector<i32> = (0..10).collect();
    let begin = v.begin();
    let end = v.end();
    assert_eq!(end - begin, 10);
    assert_eq!((begin + 3).get(), Some(&3));
    assert_eq!((end - 1).get(), Some(&9));
    assert_eq!(begin.get_at(9), Some(&9));

    let rb = v.rbegin();
    assert_eq!(rb.get(), Some(&9));
    assert_eq!((rb + 2).get(), Some(&7));
    assert_eq!(v.rend() - rb, 10);
    assert_eq!(rb.base(), &end);

    let mut walked = Vec::new();
    let mut r = v.rbegin();
    while let Some(x) = r.get() {
        walked.push(*x);
        r.step_forward();
    }
    assert!(walked.iter().copied().eq((0..10).rev()));
    assert_eq!(r.position(), v.len());
}

#[test]
#[should_panic(expected = "cursor moved out of range")]
fn vector_cursor_past_end_panics() {
    let v = Vector::from([1, 2]);
    let _ = v.end() + 1;
}

#[test]
fn map_of_vectors_matrix() {
    let mut index: Map<String, Vector<usize>> = Map::new();
    let text = "the quick brown fox jumps over the lazy dog the end";
    for (at, word) in text.split(' ').enumerate() {
        index.get_or_insert_default(word.to_string()).push_back(at);
    }
    assert_eq!(index[&"the".to_string()].as_slice(), &[0, 6, 9]);
    assert_eq!(index.len(), 9);
    assert!(index.keys().zip(index.keys().skip(1)).all(|(a, b)| a < b));
    index.assert_valid().unwrap();

    let copy = index.clone();
    assert_eq!(copy, index);
    assert!(index.erase(&"the".to_string()));
    assert!(index < copy);
}

#[test]
fn map_matches_btreemap_after_shuffled_build_matrix() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut keys: Vec<i64> = (0..500).map(|k| k * 7 - 1000).collect();
    keys.shuffle(&mut rng);

    let mut map = Map::new();
    let mut shadow = BTreeMap::new();
    for &k in &keys {
        map.insert(k, k.to_string());
        shadow.insert(k, k.to_string());
    }
    keys.shuffle(&mut rng);
    for &k in keys.iter().take(250) {
        assert_eq!(map.remove(&k), shadow.remove(&k));
    }
    map.assert_valid().unwrap();
    assert!(map.iter().eq(shadow.iter()));

    for probe in [-2000, -1000, -999, 0, 3, 2493, 5000] {
        let lower = shadow.range(probe..).next().map(|(k, _)| k);
        assert_eq!(map.entry_at(map.lower_bound(&probe)).map(|(k, _)| k), lower);
    }
}

#[test]
fn set_range_erase_round_trip_matrix() {
    let mut set: Set<u32> = (0..100).collect();
    let first = set.begin().pos();
    assert_eq!(set.erase_range(first, TreePos::End), 100);
    assert!(set.is_empty());
    assert_eq!(set.assert_valid(), Ok(0));
    set.insert(1);
    assert_eq!(set.len(), 1);
}

#[test]
fn relational_operators_agree_matrix() {
    let a: Vector<u8> = Vector::from([1, 2, 3]);
    let b: Set<u8> = [3, 2, 1].into_iter().collect();
    assert_eq!(
        lexicographical_compare(a.iter(), b.iter()),
        std::cmp::Ordering::Equal
    );
    let s1 = Stack::from_sequence(a.clone());
    let mut s2 = Stack::from_sequence(a);
    s2.pop();
    assert!(s2 < s1);
}

proptest! {
    #[test]
    fn prop_stack_len_tracks_pushes(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let mut stack = Stack::new();
        for &v in &values {
            stack.push(v);
        }
        prop_assert_eq!(stack.len(), values.len());
        let drained: Vec<i64> = std::iter::from_fn(|| stack.pop()).collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(drained, expected);
    }
}
