/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A list member that distinguishes "never set" from "explicitly emptied".

use crate::display::DisplayValue;
use crate::hash::ShapeHash;
use std::fmt;
use std::ops::Deref;

/// List member of a shape whose wire protocol needs to know whether the list was ever set.
///
/// A freshly constructed list is *auto-constructed*: it reads as an empty slice, but a
/// marshaller should treat it as absent. Any write (push, extend, or setting a value) turns it
/// into an explicit list, which stays explicit even when empty. Setting `None` returns it to the
/// auto-constructed state.
///
/// Equality and hashing only look at the items, so an auto-constructed list is equal to an
/// explicitly emptied one.
///
/// ```
/// use smithy_types::AutoConstructList;
///
/// let mut groups = AutoConstructList::new();
/// assert!(groups.is_auto_construct());
/// assert_eq!(groups.as_option(), None);
///
/// groups.push("sg-12345678".to_string());
/// assert!(!groups.is_auto_construct());
/// assert_eq!(groups.as_option(), Some(&["sg-12345678".to_string()][..]));
/// ```
#[derive(Clone)]
pub struct AutoConstructList<T> {
    items: Vec<T>,
    auto_construct: bool,
}

impl<T> Default for AutoConstructList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            auto_construct: true,
        }
    }
}

impl<T> AutoConstructList<T> {
    /// Creates an auto-constructed (unset) list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the list has never been set.
    pub fn is_auto_construct(&self) -> bool {
        self.auto_construct
    }

    /// Returns the items as a slice. Unset lists read as empty.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the items, or `None` if the list has never been set.
    pub fn as_option(&self) -> Option<&[T]> {
        if self.auto_construct {
            None
        } else {
            Some(&self.items)
        }
    }

    /// Consumes the list, returning `None` if it has never been set.
    pub fn into_option(self) -> Option<Vec<T>> {
        if self.auto_construct {
            None
        } else {
            Some(self.items)
        }
    }

    /// Replaces the contents. `None` resets the list to the auto-constructed state.
    pub fn set(&mut self, items: Option<Vec<T>>) {
        *self = match items {
            Some(items) => Self::from(items),
            None => Self::new(),
        };
    }

    /// Appends an item, making the list explicit.
    pub fn push(&mut self, item: T) {
        self.materialize();
        self.items.push(item);
    }

    fn materialize(&mut self) {
        if self.auto_construct {
            tracing::trace!("materializing auto-constructed list");
            self.auto_construct = false;
        }
    }
}

impl<T> From<Vec<T>> for AutoConstructList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            auto_construct: false,
        }
    }
}

impl<T> From<Option<Vec<T>>> for AutoConstructList<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        let mut list = Self::new();
        list.set(items);
        list
    }
}

impl<T> FromIterator<T> for AutoConstructList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for AutoConstructList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.materialize();
        self.items.extend(iter);
    }
}

impl<T> Deref for AutoConstructList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a AutoConstructList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for AutoConstructList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for AutoConstructList<T> {}

impl<T: ShapeHash> ShapeHash for AutoConstructList<T> {
    fn shape_hash(&self) -> i32 {
        self.items.shape_hash()
    }
}

impl<T: DisplayValue> DisplayValue for AutoConstructList<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.items.fmt_value(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for AutoConstructList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.auto_construct {
            f.write_str("AutoConstruct")
        } else {
            f.debug_list().entries(&self.items).finish()
        }
    }
}

#[cfg(test)]
mod test {
    use super::AutoConstructList;
    use crate::hash::ShapeHash;

    #[test]
    fn unset_reads_as_empty_but_absent() {
        let list: AutoConstructList<String> = AutoConstructList::new();
        assert!(list.is_auto_construct());
        assert!(list.is_empty());
        assert_eq!(list.as_option(), None);
        assert_eq!(list.into_option(), None);
    }

    #[test]
    fn explicit_empty_is_present() {
        let list: AutoConstructList<String> = AutoConstructList::from(vec![]);
        assert!(!list.is_auto_construct());
        assert_eq!(list.as_option(), Some(&[][..]));
    }

    #[test]
    fn extend_with_nothing_still_materializes() {
        let mut list: AutoConstructList<String> = AutoConstructList::new();
        list.extend(std::iter::empty());
        assert!(!list.is_auto_construct());
    }

    #[test]
    fn set_none_resets_to_auto_construct() {
        let mut list = AutoConstructList::from(vec![1, 2]);
        list.set(None);
        assert!(list.is_auto_construct());
        list.set(Some(vec![3]));
        assert_eq!(list.as_slice(), &[3]);
    }

    #[test]
    fn equality_ignores_auto_construct_flag() {
        let unset: AutoConstructList<i32> = AutoConstructList::new();
        let emptied: AutoConstructList<i32> = AutoConstructList::from(vec![]);
        assert_eq!(unset, emptied);
        assert_eq!(unset.shape_hash(), emptied.shape_hash());
    }

    #[test]
    fn debug_marks_auto_construct() {
        let unset: AutoConstructList<i32> = AutoConstructList::new();
        assert_eq!(format!("{:?}", unset), "AutoConstruct");
        assert_eq!(format!("{:?}", AutoConstructList::from(vec![1])), "[1]");
    }
}
