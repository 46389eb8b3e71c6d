/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Accumulator helpers for map-valued shape members

use crate::error::DuplicateKeyError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Adds a single entry to an optional map member.
///
/// The map is created on first use. If `key` is already present the insert is refused with a
/// [`DuplicateKeyError`] and the existing entry is kept.
///
/// ```
/// use smithy_types::map::insert_unique;
/// use std::collections::HashMap;
///
/// let mut tags: Option<HashMap<String, String>> = None;
/// insert_unique(&mut tags, "team", "detection".to_string()).unwrap();
/// assert!(insert_unique(&mut tags, "team", "other".to_string()).is_err());
/// assert_eq!(tags.unwrap()["team"], "detection");
/// ```
pub fn insert_unique<V>(
    map: &mut Option<HashMap<String, V>>,
    key: impl Into<String>,
    value: V,
) -> Result<(), DuplicateKeyError> {
    let map = map.get_or_insert_with(HashMap::new);
    match map.entry(key.into()) {
        Entry::Occupied(entry) => {
            tracing::debug!(key = %entry.key(), "rejecting duplicate map entry");
            Err(DuplicateKeyError::new(entry.key().as_str()))
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::insert_unique;
    use std::collections::HashMap;

    #[test]
    fn creates_map_on_first_insert() {
        let mut map: Option<HashMap<String, i32>> = None;
        insert_unique(&mut map, "a", 1).unwrap();
        assert_eq!(map.as_ref().map(HashMap::len), Some(1));
    }

    #[test]
    fn duplicate_key_keeps_original_value() {
        let mut map: Option<HashMap<String, i32>> = None;
        insert_unique(&mut map, "a", 1).unwrap();
        let err = insert_unique(&mut map, "a", 2).expect_err("duplicate key must fail");
        assert_eq!(err.key(), "a");
        assert_eq!(map.unwrap().get("a"), Some(&1));
    }

    #[test]
    fn existing_empty_map_is_reused() {
        let mut map = Some(HashMap::new());
        insert_unique(&mut map, "a", "x").unwrap();
        insert_unique(&mut map, "b", "y").unwrap();
        assert_eq!(map.unwrap().len(), 2);
    }
}
