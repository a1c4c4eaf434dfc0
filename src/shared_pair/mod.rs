/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::utils::unwrap_or_clone;
use crate::Pair;
use archery::{ArcTK, RcK, SharedPointer, SharedPointerKind};
use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};

/// An immutable [`Pair`] behind a reference-counted pointer.
///
/// Clones share the same allocation, so handing the pair to many holders never copies the key
/// or the value.  The pair is dropped once the last handle goes away.
///
/// Use [`SharedPairSync`] (built with [`new_sync()`](SharedPair::new_sync)) to share a pair
/// between threads.
///
/// # Complexity
///
/// | Operation    | Average | Worst case  |
/// |:------------ | -------:| -----------:|
/// | `new()`      |    Θ(1) |        Θ(1) |
/// | `key()`      |    Θ(1) |        Θ(1) |
/// | `value()`    |    Θ(1) |        Θ(1) |
/// | `clone()`    |    Θ(1) |        Θ(1) |
/// | `into_pair()`|    Θ(1) |        Θ(1) |
///
/// `into_pair()` clones the key and the value when other handles are still alive.
///
/// # Example
///
/// ```rust
/// use labeled_pair::SharedPair;
///
/// let pair = SharedPair::new("Hi", 5);
/// let other = pair.clone();
///
/// assert!(pair.ptr_eq(&other));
/// assert_eq!(other.key(), &"Hi");
/// assert_eq!(other.value(), &5);
/// ```
#[derive(Debug)]
pub struct SharedPair<K, V, P = RcK>
where
    P: SharedPointerKind,
{
    pair: SharedPointer<Pair<K, V>, P>,
}

pub type SharedPairSync<K, V> = SharedPair<K, V, ArcTK>;

impl<K, V> SharedPairSync<K, V> {
    #[must_use]
    pub fn new_sync(key: K, value: V) -> SharedPairSync<K, V> {
        SharedPair::new_with_ptr_kind(key, value)
    }
}

impl<K, V> SharedPair<K, V> {
    #[must_use]
    pub fn new(key: K, value: V) -> SharedPair<K, V> {
        SharedPair::new_with_ptr_kind(key, value)
    }
}

impl<K, V, P> SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    #[must_use]
    pub fn new_with_ptr_kind(key: K, value: V) -> SharedPair<K, V, P> {
        SharedPair { pair: SharedPointer::new(Pair::new(key, value)) }
    }

    #[must_use]
    #[inline]
    pub fn key(&self) -> &K {
        self.pair.key()
    }

    #[must_use]
    #[inline]
    pub fn value(&self) -> &V {
        self.pair.value()
    }

    #[must_use]
    #[inline]
    pub fn as_pair(&self) -> &Pair<K, V> {
        &self.pair
    }

    /// Returns `true` if both handles point to the same pair.
    #[must_use]
    pub fn ptr_eq<PO: SharedPointerKind>(&self, other: &SharedPair<K, V, PO>) -> bool {
        core::ptr::eq::<Pair<K, V>>(self.as_pair(), other.as_pair())
    }

    /// Returns the pair by value.  The key and the value are moved out if this is the last
    /// handle, and cloned otherwise.
    #[must_use]
    pub fn into_pair(self) -> Pair<K, V>
    where
        K: Clone,
        V: Clone,
    {
        unwrap_or_clone(self.pair)
    }
}

impl<K, V, P> Clone for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn clone(&self) -> SharedPair<K, V, P> {
        SharedPair { pair: SharedPointer::clone(&self.pair) }
    }
}

impl<K, V, P> From<Pair<K, V>> for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn from(pair: Pair<K, V>) -> SharedPair<K, V, P> {
        SharedPair { pair: SharedPointer::new(pair) }
    }
}

impl<K, V, P> From<(K, V)> for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn from((key, value): (K, V)) -> SharedPair<K, V, P> {
        SharedPair::new_with_ptr_kind(key, value)
    }
}

impl<K, V, P> AsRef<Pair<K, V>> for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn as_ref(&self) -> &Pair<K, V> {
        self.as_pair()
    }
}

impl<K: PartialEq, V: PartialEq, P, PO> PartialEq<SharedPair<K, V, PO>> for SharedPair<K, V, P>
where
    P: SharedPointerKind,
    PO: SharedPointerKind,
{
    fn eq(&self, other: &SharedPair<K, V, PO>) -> bool {
        self.as_pair().eq(other.as_pair())
    }
}

impl<K: Eq, V: Eq, P> Eq for SharedPair<K, V, P> where P: SharedPointerKind {}

impl<K: PartialOrd, V: PartialOrd, P, PO> PartialOrd<SharedPair<K, V, PO>>
    for SharedPair<K, V, P>
where
    P: SharedPointerKind,
    PO: SharedPointerKind,
{
    fn partial_cmp(&self, other: &SharedPair<K, V, PO>) -> Option<Ordering> {
        self.as_pair().partial_cmp(other.as_pair())
    }
}

impl<K: Ord, V: Ord, P> Ord for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn cmp(&self, other: &SharedPair<K, V, P>) -> Ordering {
        self.as_pair().cmp(other.as_pair())
    }
}

impl<K: Hash, V: Hash, P> Hash for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_pair().hash(state);
    }
}

impl<K: Display, V: Display, P> Display for SharedPair<K, V, P>
where
    P: SharedPointerKind,
{
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_pair().fmt(fmt)
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer};
    use ::serde::ser::{Serialize, Serializer};

    impl<K, V, P> Serialize for SharedPair<K, V, P>
    where
        K: Serialize,
        V: Serialize,
        P: SharedPointerKind,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.as_pair().serialize(serializer)
        }
    }

    impl<'de, K, V, P> Deserialize<'de> for SharedPair<K, V, P>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
        P: SharedPointerKind,
    {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<SharedPair<K, V, P>, D::Error> {
            Pair::<K, V>::deserialize(deserializer).map(SharedPair::from)
        }
    }
}
