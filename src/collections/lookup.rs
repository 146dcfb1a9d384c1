use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::control::Maybe;

/// Key lookup that reports a missing key as [`Maybe::Nothing`].
///
/// # Examples
///
/// ```rust
/// use railway::collections::LookupExt;
/// use railway::control::Maybe;
/// use std::collections::HashMap;
///
/// let ports = HashMap::from([("http", 80), ("https", 443)]);
/// assert_eq!(ports.try_find("https"), Maybe::just(&443));
/// assert_eq!(ports.try_find("gopher"), Maybe::nothing());
/// ```
pub trait LookupExt<K, V> {
    /// Returns the value stored under `key`, if any.
    fn try_find<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + Eq + ?Sized;
}

impl<K, V, S> LookupExt<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn try_find<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + Eq + ?Sized,
    {
        Maybe::from_nullable(self.get(key))
    }
}

impl<K, V> LookupExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn try_find<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + Eq + ?Sized,
    {
        Maybe::from_nullable(self.get(key))
    }
}
