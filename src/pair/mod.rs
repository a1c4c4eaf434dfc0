/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::fmt::Display;

/// An immutable pair of values, one labeled "key" and one labeled "value".
///
/// Once built, a pair never changes: there is no setter and no way to borrow either slot
/// mutably.  Operations that look like updates, such as [`with_value()`](Pair::with_value) or
/// [`map_key()`](Pair::map_key), consume the pair and return a new one.
///
/// Equality, ordering, and hashing are structural.  Pairs compare key first, then value.
///
/// # Complexity
///
/// Every operation is *Θ(1)* in time and space, apart from the cost of the closures passed to
/// the `map_*` methods.
///
/// # Example
///
/// ```rust
/// use labeled_pair::Pair;
///
/// let pair = Pair::new("Hi", 5);
///
/// assert_eq!(pair.key(), &"Hi");
/// assert_eq!(pair.value(), &5);
///
/// let doubled = pair.map_value(|v| v * 2);
///
/// assert_eq!(doubled.value(), &10);
/// assert_eq!(pair.value(), &5);
/// ```
///
/// The slots cannot be assigned:
///
/// ```compile_fail
/// use labeled_pair::Pair;
///
/// let mut pair = Pair::new("Hi", 5);
///
/// pair.value = 6;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair holding `key` and `value`.
    #[must_use]
    pub fn new(key: K, value: V) -> Pair<K, V> {
        Pair { key, value }
    }

    #[must_use]
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the pair and returns its key.
    #[must_use]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Consumes the pair and returns its value.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Splits the pair into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Returns a pair borrowing both slots of this one.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn as_ref(&self) -> Pair<&K, &V> {
        Pair { key: &self.key, value: &self.value }
    }

    /// Returns a new pair whose key is `f` applied to the key of this one.
    #[must_use]
    pub fn map_key<K2, F>(self, f: F) -> Pair<K2, V>
    where
        F: FnOnce(K) -> K2,
    {
        Pair { key: f(self.key), value: self.value }
    }

    /// Returns a new pair whose value is `f` applied to the value of this one.
    #[must_use]
    pub fn map_value<V2, F>(self, f: F) -> Pair<K, V2>
    where
        F: FnOnce(V) -> V2,
    {
        Pair { key: self.key, value: f(self.value) }
    }

    /// Returns a new pair with the given key and the value of this one.
    #[must_use]
    pub fn with_key<K2>(self, key: K2) -> Pair<K2, V> {
        Pair { key, value: self.value }
    }

    /// Returns a new pair with the key of this one and the given value.
    #[must_use]
    pub fn with_value<V2>(self, value: V2) -> Pair<K, V2> {
        Pair { key: self.key, value }
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Pair<K, V> {
        Pair::new(key, value)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> (K, V) {
        pair.into_parts()
    }
}

impl<K: Display, V: Display> Display for Pair<K, V> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.key.fmt(fmt)?;
        fmt.write_str(": ")?;
        self.value.fmt(fmt)
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
    use ::serde::ser::{Serialize, SerializeStruct, Serializer};
    use core::fmt;
    use core::marker::PhantomData;

    const FIELDS: &[&str] = &["key", "value"];

    impl<K, V> Serialize for Pair<K, V>
    where
        K: Serialize,
        V: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Pair", 2)?;
            state.serialize_field("key", &self.key)?;
            state.serialize_field("value", &self.value)?;
            state.end()
        }
    }

    impl<'de, K, V> Deserialize<'de> for Pair<K, V>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Pair<K, V>, D::Error> {
            deserializer.deserialize_struct(
                "Pair",
                FIELDS,
                PairVisitor { _phantom_k: PhantomData, _phantom_v: PhantomData },
            )
        }
    }

    enum Field {
        Key,
        Value,
    }

    impl<'de> Deserialize<'de> for Field {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Field, D::Error> {
            deserializer.deserialize_identifier(FieldVisitor)
        }
    }

    struct FieldVisitor;

    impl Visitor<'_> for FieldVisitor {
        type Value = Field;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("`key` or `value`")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
            match v {
                "key" => Ok(Field::Key),
                "value" => Ok(Field::Value),
                _ => Err(E::unknown_field(v, FIELDS)),
            }
        }
    }

    struct PairVisitor<K, V> {
        _phantom_k: PhantomData<K>,
        _phantom_v: PhantomData<V>,
    }

    impl<'de, K, V> Visitor<'de> for PairVisitor<K, V>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        type Value = Pair<K, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a pair with a key and a value")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Pair<K, V>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let key: K = match seq.next_element()? {
                Some(key) => key,
                None => return Err(de::Error::invalid_length(0, &self)),
            };
            let value: V = match seq.next_element()? {
                Some(value) => value,
                None => return Err(de::Error::invalid_length(1, &self)),
            };

            Ok(Pair::new(key, value))
        }

        fn visit_map<A>(self, mut map: A) -> Result<Pair<K, V>, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut key: Option<K> = None;
            let mut value: Option<V> = None;

            while let Some(field) = map.next_key()? {
                match field {
                    Field::Key => {
                        if key.is_some() {
                            return Err(de::Error::duplicate_field("key"));
                        }
                        key = Some(map.next_value()?);
                    }
                    Field::Value => {
                        if value.is_some() {
                            return Err(de::Error::duplicate_field("value"));
                        }
                        value = Some(map.next_value()?);
                    }
                }
            }

            let key = key.ok_or_else(|| <A::Error as de::Error>::missing_field("key"))?;
            let value = value.ok_or_else(|| <A::Error as de::Error>::missing_field("value"))?;

            Ok(Pair::new(key, value))
        }
    }
}

#[cfg(test)]
mod test;
