/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors raised while populating shapes

/// A map accumulator was given a key it already holds.
///
/// This is a caller-side bug: the entries handed to the shape were not deduplicated. The map
/// the key was offered to is left exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicated key ({key}) provided")]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    /// Creates an error for the rejected `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the key that was rejected.
    pub fn key(&self) -> &str {
        &self.key
    }
}
