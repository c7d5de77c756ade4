//! Parameter lookup for reverse routing.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::dispatch::Params;

/// Anything that can answer "what is the value of parameter `name`?".
///
/// Implemented for the usual maps, for slices and arrays of pairs, and for
/// [`Params`] so the variables of one match can feed a reverse lookup.
pub trait ParamSource {
    /// Value supplied for `name`, if any.
    fn param(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> ParamSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> ParamSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> ParamSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn param(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }
}

impl<K, V, const N: usize> ParamSource for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn param(&self, name: &str) -> Option<&str> {
        self.as_slice().param(name)
    }
}

impl<K, V> ParamSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn param(&self, name: &str) -> Option<&str> {
        self.as_slice().param(name)
    }
}

impl ParamSource for Params<'_> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn param(&self, name: &str) -> Option<&str> {
        (**self).param(name)
    }
}
