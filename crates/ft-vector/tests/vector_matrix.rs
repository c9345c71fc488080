use ft_vector::{Vector, VectorError};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn vector_push_back_growth_matrix() {
    for n in [0usize, 1, 2, 3, 7, 8, 9, 100, 1000] {
        let mut v = Vector::new();
        let mut prev_cap = 0;
        for i in 0..n {
            v.push_back(i);
            let cap = v.capacity();
            if cap != prev_cap {
                assert!(cap >= 2 * prev_cap || cap == i + 1, "cap {prev_cap} -> {cap}");
                prev_cap = cap;
            }
        }
        assert_eq!(v.len(), n);
        assert!(v.capacity() >= n);
        assert!(v.iter().copied().eq(0..n));
    }
}

#[test]
fn vector_operations_against_std_matrix() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut v: Vector<u32> = Vector::new();
    let mut shadow: Vec<u32> = Vec::new();

    for _ in 0..2000 {
        match rng.gen_range(0..7) {
            0 | 1 => {
                let x = rng.gen();
                v.push_back(x);
                shadow.push(x);
            }
            2 => {
                assert_eq!(v.pop_back(), shadow.pop());
            }
            3 => {
                let pos = rng.gen_range(0..=shadow.len());
                let count = rng.gen_range(0..4);
                let x = rng.gen();
                assert_eq!(v.insert_n(pos, count, x), Ok(pos));
                for _ in 0..count {
                    shadow.insert(pos, x);
                }
            }
            4 if !shadow.is_empty() => {
                let pos = rng.gen_range(0..shadow.len());
                assert_eq!(v.erase(pos), Ok(pos));
                shadow.remove(pos);
            }
            5 => {
                let first = rng.gen_range(0..=shadow.len());
                let last = rng.gen_range(first..=shadow.len());
                let cap = v.capacity();
                v.erase_range(first, last).unwrap();
                shadow.drain(first..last);
                assert_eq!(v.capacity(), cap);
            }
            _ => {
                let len = rng.gen_range(0..64);
                v.resize(len, 7).unwrap();
                shadow.resize(len, 7);
            }
        }
        assert_eq!(v.as_slice(), shadow.as_slice());
        assert!(v.capacity() >= v.len());
    }
}

#[test]
fn vector_checked_errors_matrix() {
    let mut v = Vector::from([1u8, 2, 3]);
    assert_eq!(v.at(3), Err(VectorError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(
        v.insert_iter(4, [9]),
        Err(VectorError::InvalidPosition { pos: 4, len: 3 })
    );
    let max = v.max_size();
    assert!(matches!(
        v.resize(max + 1, 0),
        Err(VectorError::Length { .. })
    ));
    assert!(matches!(
        Vector::with_len(usize::MAX, 0u16),
        Err(VectorError::Length { .. })
    ));
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(
        VectorError::OutOfRange { index: 3, len: 3 }.to_string(),
        "index 3 out of range for length 3"
    );
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn vector_unchecked_index_panics() {
    let v = Vector::from([1]);
    let _ = v[1];
}

#[test]
fn vector_lexicographic_ordering_matrix() {
    let cases: &[(&[i32], &[i32])] = &[
        (&[], &[1]),
        (&[1, 2], &[1, 2, 3]),
        (&[1, 2, 3], &[1, 3]),
        (&[0, 9, 9], &[1]),
    ];
    for (less, greater) in cases {
        let a: Vector<i32> = less.iter().copied().collect();
        let b: Vector<i32> = greater.iter().copied().collect();
        assert!(a < b);
        assert!(b > a);
        assert_ne!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_insert_iter_matches_splice(base in proptest::collection::vec(any::<i16>(), 0..32),
                                       extra in proptest::collection::vec(any::<i16>(), 0..32),
                                       pos_seed in any::<usize>()) {
        let pos = pos_seed % (base.len() + 1);
        let mut v: Vector<i16> = base.iter().copied().collect();
        let mut expected = base.clone();
        expected.splice(pos..pos, extra.iter().copied());
        prop_assert_eq!(v.insert_iter(pos, extra.iter().copied()), Ok(pos));
        prop_assert_eq!(v.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_ordering_matches_std(a in proptest::collection::vec(0u8..3, 0..6),
                                 b in proptest::collection::vec(0u8..3, 0..6)) {
        let va: Vector<u8> = a.iter().copied().collect();
        let vb: Vector<u8> = b.iter().copied().collect();
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }
}
