/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! `proptest` strategies for shape members.
//!
//! Every strategy yields unset values as well as set ones, so property tests over shapes cover
//! the "absent" state of each member.

use crate::AutoConstructList;
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use std::collections::HashMap;

/// An optional string member.
pub fn optional_string() -> impl Strategy<Value = Option<String>> {
    option::of("[a-zA-Z0-9:/._-]{0,16}")
}

/// An optional boolean member.
pub fn optional_bool() -> impl Strategy<Value = Option<bool>> {
    option::of(any::<bool>())
}

/// An optional integer member.
pub fn optional_i32() -> impl Strategy<Value = Option<i32>> {
    option::of(any::<i32>())
}

/// An optional list member built from `element`.
pub fn optional_list<S: Strategy>(element: S) -> impl Strategy<Value = Option<Vec<S::Value>>> {
    option::of(vec(element, 0..4))
}

/// An optional string-to-string map member.
pub fn optional_string_map() -> impl Strategy<Value = Option<HashMap<String, String>>> {
    option::of(hash_map("[A-Z_]{1,8}", "[a-z0-9]{0,8}", 0..4))
}

/// An auto-construct list member built from `element`; unset lists stay auto-constructed.
pub fn auto_construct_list<S: Strategy>(
    element: S,
) -> impl Strategy<Value = AutoConstructList<S::Value>> {
    optional_list(element).prop_map(AutoConstructList::from)
}
