use std::cmp::Ordering;

/// Lexicographic comparison of two sequences.
///
/// The first differing pair decides. If one sequence is a prefix of the
/// other, the shorter one is less.
pub fn lexicographical_compare<I, J, T>(lhs: I, rhs: J) -> Ordering
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Ord,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            },
        }
    }
}

/// [`lexicographical_compare`] for partially ordered elements. Returns
/// `None` as soon as an incomparable pair is met.
pub fn partial_lexicographical_compare<I, J, T>(lhs: I, rhs: J) -> Option<Ordering>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: PartialOrd,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
            (Some(a), Some(b)) => match a.partial_cmp(&b)? {
                Ordering::Equal => {}
                non_eq => return Some(non_eq),
            },
        }
    }
}

/// Element-wise equality; sequences of different length are never equal.
pub fn equal<I, J, T>(lhs: I, rhs: J) -> bool
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_prefix_is_less() {
        assert_eq!(lexicographical_compare([1, 2], [1, 2, 3]), Ordering::Less);
        assert_eq!(lexicographical_compare([1, 2, 3], [1, 2]), Ordering::Greater);
        assert_eq!(lexicographical_compare::<[i32; 0], [i32; 0], i32>([], []), Ordering::Equal);
    }

    #[test]
    fn test_first_difference_decides() {
        assert_eq!(lexicographical_compare([1, 9], [2, 0, 0]), Ordering::Less);
        assert_eq!(lexicographical_compare([3], [2, 9]), Ordering::Greater);
    }

    #[test]
    fn test_partial_nan() {
        assert_eq!(partial_lexicographical_compare([1.0, f64::NAN], [1.0, 2.0]), None);
        assert_eq!(
            partial_lexicographical_compare([1.0], [1.0, f64::NAN]),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_equal() {
        assert!(equal([1, 2, 3], [1, 2, 3]));
        assert!(!equal([1, 2], [1, 2, 3]));
        assert!(!equal([1, 2, 4], [1, 2, 3]));
    }

    proptest! {
        #[test]
        fn prop_matches_slice_ordering(a in proptest::collection::vec(0u8..4, 0..8),
                                       b in proptest::collection::vec(0u8..4, 0..8)) {
            prop_assert_eq!(lexicographical_compare(&a, &b), a.cmp(&b));
            prop_assert_eq!(partial_lexicographical_compare(&a, &b), a.partial_cmp(&b));
            prop_assert_eq!(equal(&a, &b), a == b);
        }
    }
}
