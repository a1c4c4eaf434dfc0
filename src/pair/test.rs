/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use pretty_assertions::assert_eq;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use std::string::{String, ToString};
use std::vec::Vec;

assert_impl_all!(Pair<i32, &'static str>: Send, Sync, Copy);
assert_impl_all!(Pair<String, f64>: Send, Sync, Clone);
assert_not_impl_any!(Pair<std::rc::Rc<i32>, i32>: Send, Sync);
assert_not_impl_any!(Pair<String, i32>: Copy);

#[test]
fn test_new() {
    let pair = Pair::new("Hi", 5_i64);

    assert_eq!(pair.key(), &"Hi");
    assert_eq!(pair.value(), &5);
}

#[test]
fn test_new_heterogeneous() {
    let string_float = Pair::new(String::from("pi"), 3.25_f64);
    let int_bool = Pair::new(7_u8, true);
    let nested = Pair::new(Pair::new(1, 'a'), Some("b"));

    assert_eq!(string_float.key(), "pi");
    assert_eq!(*string_float.value(), 3.25);
    assert_eq!(int_bool.key(), &7);
    assert!(*int_bool.value());
    assert_eq!(nested.key().value(), &'a');
    assert_eq!(nested.value(), &Some("b"));
}

#[test]
fn test_accessors_do_not_move() {
    let pair = Pair::new(String::from("key"), vec![1, 2, 3]);

    let key: &String = pair.key();
    let value: &Vec<i32> = pair.value();

    assert_eq!(key, "key");
    assert_eq!(value, &vec![1, 2, 3]);
    assert_eq!(pair.key(), "key");
}

#[test]
fn test_into_parts() {
    let pair = Pair::new(String::from("a"), 1);

    assert_eq!(pair.clone().into_key(), "a");
    assert_eq!(pair.clone().into_value(), 1);
    assert_eq!(pair.into_parts(), (String::from("a"), 1));
}

#[test]
fn test_as_ref() {
    let pair = Pair::new(String::from("a"), String::from("b"));
    let borrowed: Pair<&String, &String> = pair.as_ref();

    assert_eq!(*borrowed.key(), "a");
    assert_eq!(*borrowed.value(), "b");
    assert_eq!(pair.key(), "a");
}

#[test]
fn test_map_key() {
    let pair = Pair::new("count", 3);
    let mapped = pair.map_key(str::len);

    assert_eq!(mapped, Pair::new(5, 3));
    assert_eq!(pair, Pair::new("count", 3));
}

#[test]
fn test_map_value() {
    let pair = Pair::new("count", 3);
    let mapped = pair.map_value(|v| v.to_string());

    assert_eq!(mapped.key(), &"count");
    assert_eq!(mapped.value(), "3");
    assert_eq!(pair.value(), &3);
}

#[test]
fn test_with_key() {
    let pair = Pair::new("a", 1);
    let replaced = pair.with_key('b');

    assert_eq!(replaced, Pair::new('b', 1));
    assert_eq!(pair.key(), &"a");
}

#[test]
fn test_with_value() {
    let pair = Pair::new("a", 1);
    let replaced = pair.with_value(2.5);

    assert_eq!(replaced.key(), &"a");
    assert_eq!(replaced.value(), &2.5);
    assert_eq!(pair.value(), &1);
}

#[test]
fn test_from_tuple() {
    let pair: Pair<&str, i32> = ("a", 1).into();
    let tuple: (&str, i32) = pair.into();

    assert_eq!(pair, Pair::new("a", 1));
    assert_eq!(tuple, ("a", 1));
}

#[test]
fn test_display() {
    let pair = Pair::new("Hi", 5);
    let nested = Pair::new(Pair::new(1, 2), "x");

    assert_eq!(format!("{}", pair), "Hi: 5");
    assert_eq!(format!("{}", nested), "1: 2: x");
}

#[test]
fn test_eq() {
    let pair_1 = Pair::new(String::from("a"), 1);
    let pair_1_prime = Pair::new(String::from("a"), 1);
    let pair_2 = Pair::new(String::from("a"), 2);
    let pair_3 = Pair::new(String::from("b"), 1);

    assert_eq!(pair_1, pair_1);
    assert_eq!(pair_1, pair_1_prime);
    assert_ne!(pair_1, pair_2);
    assert_ne!(pair_1, pair_3);
}

#[test]
fn test_partial_ord() {
    let pair_1 = Pair::new("a", 0.0);
    let pair_1_prime = Pair::new("a", 0.0);
    let pair_2 = Pair::new("a", 1.0);
    let pair_3 = Pair::new("b", -1.0);
    let pair_nan = Pair::new("a", f32::NAN);

    assert_eq!(pair_1.partial_cmp(&pair_1_prime), Some(Ordering::Equal));
    assert_eq!(pair_1.partial_cmp(&pair_2), Some(Ordering::Less));
    assert_eq!(pair_3.partial_cmp(&pair_2), Some(Ordering::Greater));
    assert_eq!(Pair::new("a", 0.0_f32).partial_cmp(&pair_nan), None);
}

#[test]
fn test_ord() {
    let pair_1 = Pair::new("a", 2);
    let pair_1_prime = Pair::new("a", 2);
    let pair_2 = Pair::new("b", 0);

    assert_eq!(pair_1.cmp(&pair_1_prime), Ordering::Equal);
    assert_eq!(pair_1.cmp(&pair_2), Ordering::Less);
    assert_eq!(pair_2.cmp(&pair_1), Ordering::Greater);
    assert_eq!(Pair::new("a", 1).cmp(&pair_1), Ordering::Less);
}

fn hash<K: Hash, V: Hash>(pair: &Pair<K, V>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();

    pair.hash(&mut hasher);

    hasher.finish()
}

#[test]
fn test_hash() {
    let pair_1 = Pair::new("a", 1);
    let pair_1_prime = Pair::new("a", 1);
    let pair_2 = Pair::new("a", 2);

    assert_eq!(hash(&pair_1), hash(&pair_1));
    assert_eq!(hash(&pair_1), hash(&pair_1_prime));
    assert_ne!(hash(&pair_1), hash(&pair_2));
}

#[test]
fn test_clone() {
    let pair = Pair::new(String::from("there"), String::from("hello"));
    let clone = pair.clone();

    assert_eq!(clone, pair);
    assert_eq!(clone.key(), pair.key());
    assert_eq!(clone.value(), pair.value());
}

#[test]
fn test_concurrent_reads() {
    let pair = Pair::new(String::from("Hi"), 5_u64);
    let shared = &pair;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(move |_| {
                scope.spawn(move || {
                    let mut sum = 0;

                    for _ in 0..1000 {
                        assert_eq!(shared.key(), "Hi");
                        sum += *shared.value();
                    }

                    sum
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5000);
        }
    });

    assert_eq!(pair, Pair::new(String::from("Hi"), 5));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let pair: Pair<String, i64> = Pair::new(String::from("Hi"), 5);
    let encoded = serde_json::to_string(&pair).unwrap();
    let decoded: Pair<String, i64> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(encoded, r#"{"key":"Hi","value":5}"#);
    assert_eq!(pair, decoded);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_from_seq() {
    let decoded: Pair<String, f64> = serde_json::from_str(r#"["pi", 3.5]"#).unwrap();

    assert_eq!(decoded, Pair::new(String::from("pi"), 3.5));
    assert!(serde_json::from_str::<Pair<String, f64>>(r#"["pi"]"#).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_invalid_fields() {
    assert!(serde_json::from_str::<Pair<i32, i32>>(r#"{"key":1}"#).is_err());
    assert!(serde_json::from_str::<Pair<i32, i32>>(r#"{"key":1,"key":2,"value":3}"#).is_err());
    assert!(serde_json::from_str::<Pair<i32, i32>>(r#"{"key":1,"value":2,"other":3}"#).is_err());
}
