use std::cmp::Ordering;

/// Extracts the ordering key from a stored value.
pub trait KeyProjection<T> {
    type Key: ?Sized;

    fn key(value: &T) -> &Self::Key;
}

/// The value is its own key. Used by sets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T> KeyProjection<T> for Identity {
    type Key = T;

    #[inline]
    fn key(value: &T) -> &T {
        value
    }
}

/// Orders `(key, mapped)` pairs by their first component. Used by maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyFirst;

impl<K, V> KeyProjection<(K, V)> for KeyFirst {
    type Key = K;

    #[inline]
    fn key(value: &(K, V)) -> &K {
        &value.0
    }
}

/// Default comparator: the key's own [`Ord`].
pub fn natural_order<K: Ord + ?Sized>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}
