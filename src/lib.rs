/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]
// Note: If you change this remember to update `README.md`.  To do so run `cargo rdme`.
//! Labeled Pair provides an immutable pair of values where one slot is labeled "key" and the
//! other "value".
//!
//! This crate is `no_std`.
//!
//! # Data Structures
//!
//! This crate implements the following data structures:
//!
//!   1. [`Pair`](#pair)
//!   2. [`SharedPair`](#sharedpair)
//!
//! ## `Pair`
//! [![Pair documentation](https://img.shields.io/badge/doc-Pair-303070.svg)](crate::Pair)
//!
//! A plain immutable pair.  Nothing can change its key or its value after it is built;
//! operations that would update it return a new pair instead.
//!
//! ### Example
//!
//! ```rust
//! use labeled_pair::Pair;
//!
//! let pair = Pair::new("Hi", 5);
//!
//! assert_eq!(pair.key(), &"Hi");
//! assert_eq!(pair.value(), &5);
//!
//! let renamed = pair.with_key("Hello");
//!
//! assert_eq!(renamed, Pair::new("Hello", 5));
//! assert_eq!(pair.key(), &"Hi");
//! ```
//!
//! ## `SharedPair`
//! [![SharedPair documentation](https://img.shields.io/badge/doc-SharedPair-303070.svg)](crate::SharedPair)
//!
//! A [`Pair`] behind a reference-counted pointer.  Clones share the pair instead of copying it.
//!
//! ### Example
//!
//! ```rust
//! use labeled_pair::SharedPair;
//!
//! let pair = SharedPair::new(String::from("Hi"), vec![1, 2, 3]);
//! let other = pair.clone();
//!
//! assert!(pair.ptr_eq(&other));
//! assert_eq!(other.value(), &vec![1, 2, 3]);
//! ```
//!
//! # Thread safety
//!
//! [`Pair`] is [`Send`] and [`Sync`] whenever its key and value are.  [`SharedPair`] uses
//! [`Rc`](::alloc::rc::Rc) by default, so it cannot cross threads; use
//! [`SharedPairSync`] instead:
//!
//! ```rust
//! use labeled_pair::SharedPairSync;
//! use std::thread;
//!
//! let pair = SharedPairSync::new_sync("Hi", 5);
//!
//! let readers: Vec<_> = (0..4)
//!     .map(|_| {
//!         let pair = pair.clone();
//!         thread::spawn(move || *pair.value())
//!     })
//!     .collect();
//!
//! for reader in readers {
//!     assert_eq!(reader.join().unwrap(), 5);
//! }
//! ```
//!
//! # Serialization
//!
//! We support serialization through [serde](https://crates.io/crates/serde).  To use it
//! enable the `serde` feature.  To do so change the labeled-pair dependency in your
//! `Cargo.toml` to
//!
//! ```toml
//! [dependencies]
//! labeled-pair = { version = "<version>", features = ["serde"] }
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

mod utils;

pub mod pair;
pub mod shared_pair;

pub use crate::pair::Pair;
pub use crate::shared_pair::SharedPair;
pub use crate::shared_pair::SharedPairSync;
