/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Value hashing for shapes.
//!
//! Shapes hash to a 32-bit value derived only from their field values. Fields are folded in
//! declaration order with `hash = 31 * hash + field_hash`, starting from `1`, and an unset field
//! contributes `0`. Two shapes that compare equal therefore always hash equal, and the result is
//! stable across processes, unlike [`std::collections::hash_map::DefaultHasher`].
//!
//! Generated shapes implement [`std::hash::Hash`] by writing their [`ShapeHash`] value.

use std::collections::HashMap;

/// Multiplier used when folding hashes together.
pub const PRIME: i32 = 31;

/// A stable 32-bit hash of a shape member or of a whole shape.
pub trait ShapeHash {
    /// Returns the hash of this value.
    fn shape_hash(&self) -> i32;
}

impl ShapeHash for str {
    fn shape_hash(&self) -> i32 {
        self.bytes()
            .fold(0i32, |hash, b| hash.wrapping_mul(PRIME).wrapping_add(i32::from(b)))
    }
}

impl ShapeHash for String {
    fn shape_hash(&self) -> i32 {
        self.as_str().shape_hash()
    }
}

impl ShapeHash for bool {
    fn shape_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl ShapeHash for i32 {
    fn shape_hash(&self) -> i32 {
        *self
    }
}

impl<T: ShapeHash + ?Sized> ShapeHash for &T {
    fn shape_hash(&self) -> i32 {
        (**self).shape_hash()
    }
}

impl<T: ShapeHash> ShapeHash for Option<T> {
    fn shape_hash(&self) -> i32 {
        self.as_ref().map_or(0, ShapeHash::shape_hash)
    }
}

impl<T: ShapeHash> ShapeHash for [T] {
    fn shape_hash(&self) -> i32 {
        self.iter().fold(1i32, |hash, item| {
            hash.wrapping_mul(PRIME).wrapping_add(item.shape_hash())
        })
    }
}

impl<T: ShapeHash> ShapeHash for Vec<T> {
    fn shape_hash(&self) -> i32 {
        self.as_slice().shape_hash()
    }
}

// Iteration order of a `HashMap` is unspecified, so entries are combined with a commutative sum.
impl<K: ShapeHash, V: ShapeHash, S> ShapeHash for HashMap<K, V, S> {
    fn shape_hash(&self) -> i32 {
        self.iter().fold(0i32, |hash, (key, value)| {
            hash.wrapping_add(key.shape_hash() ^ value.shape_hash())
        })
    }
}

/// Folds the hashes of a shape's fields, in declaration order.
///
/// ```
/// use smithy_types::hash::{HashCombiner, ShapeHash};
///
/// let format = Some("TXT".to_string());
/// let status: Option<String> = None;
/// let hash = HashCombiner::new().field(&format).field(&status).finish();
/// assert_eq!(hash, 31 * (31 + format.shape_hash()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCombiner {
    hash: i32,
}

impl Default for HashCombiner {
    fn default() -> Self {
        Self { hash: 1 }
    }
}

impl HashCombiner {
    /// Creates a combiner seeded with `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in the hash of the next field.
    pub fn field<T: ShapeHash + ?Sized>(mut self, value: &T) -> Self {
        self.hash = self
            .hash
            .wrapping_mul(PRIME)
            .wrapping_add(value.shape_hash());
        self
    }

    /// Returns the combined hash.
    pub fn finish(self) -> i32 {
        self.hash
    }
}

#[cfg(test)]
mod test {
    use super::{HashCombiner, ShapeHash};
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn string_hash_is_polynomial() {
        assert_eq!("".shape_hash(), 0);
        assert_eq!("a".shape_hash(), 97);
        assert_eq!("ab".shape_hash(), 97 * 31 + 98);
        assert_eq!(String::from("ab").shape_hash(), "ab".shape_hash());
    }

    #[test]
    fn unset_contributes_zero() {
        let unset: Option<String> = None;
        assert_eq!(unset.shape_hash(), 0);
        assert_eq!(HashCombiner::new().field(&unset).finish(), 31);
    }

    #[test]
    fn empty_list_differs_from_unset() {
        let empty: Option<Vec<String>> = Some(vec![]);
        let unset: Option<Vec<String>> = None;
        assert_eq!(empty.shape_hash(), 1);
        assert_ne!(empty.shape_hash(), unset.shape_hash());
    }

    #[test]
    fn field_order_matters() {
        let a = Some("a".to_string());
        let b = Some("b".to_string());
        assert_ne!(
            HashCombiner::new().field(&a).field(&b).finish(),
            HashCombiner::new().field(&b).field(&a).finish()
        );
    }

    #[test]
    fn integers_and_booleans() {
        assert_eq!(3000i32.shape_hash(), 3000);
        assert_eq!(true.shape_hash(), 1231);
        assert_eq!(false.shape_hash(), 1237);
    }

    proptest! {
        #[test]
        fn map_hash_ignores_insertion_order(entries in proptest::collection::hash_map("[a-z]{1,6}", "[a-z]{0,6}", 0..8)) {
            let mut sorted: Vec<_> = entries.iter().collect();
            sorted.sort();
            let mut ascending = HashMap::new();
            for (k, v) in &sorted {
                ascending.insert((*k).clone(), (*v).clone());
            }
            let mut descending = HashMap::new();
            for (k, v) in sorted.iter().rev() {
                descending.insert((*k).clone(), (*v).clone());
            }
            prop_assert_eq!(ascending.shape_hash(), descending.shape_hash());
            prop_assert_eq!(ascending.shape_hash(), entries.shape_hash());
        }

        #[test]
        fn equal_strings_hash_equal(s in ".{0,32}") {
            prop_assert_eq!(s.shape_hash(), s.clone().as_str().shape_hash());
        }
    }
}
