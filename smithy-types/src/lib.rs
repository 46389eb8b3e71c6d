/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime support shared by the generated AWS shape crates.
//!
//! Shapes are plain values: every field is optional, collections stay absent until an
//! accumulator touches them, and map accumulators refuse duplicate keys. The pieces in
//! this crate are what the generated code leans on to provide those guarantees.
//!
//! # Crate Features
//!
//! - `test-util`: Enables `proptest` strategies for generating shape field values. DO NOT ENABLE IN PRODUCTION.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod auto_construct;
pub mod display;
pub mod error;
pub mod hash;
pub mod map;

#[cfg(feature = "test-util")]
pub mod test_util;

pub use auto_construct::AutoConstructList;
pub use display::{DisplayValue, FieldList};
pub use hash::{HashCombiner, ShapeHash};

/// Placeholder emitted in place of the value of a field modeled as sensitive.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";
