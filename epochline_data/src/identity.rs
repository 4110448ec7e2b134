// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::{self, Write as _};

/// Stable identity of an event.
///
/// Built by [`IdentityKey::for_event`]: the explicit id when one is present and
/// non-empty, otherwise `"{year}-{label}"` with every run of whitespace in the
/// label collapsed to a single `-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Derives the key for an event with the given id, year and label.
    #[must_use]
    pub fn for_event(id: Option<&str>, year: i32, label: &str) -> Self {
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            return Self(String::from(id));
        }

        let mut key = String::with_capacity(label.len() + 8);
        // Writing into a `String` cannot fail.
        let _ = write!(key, "{year}-");
        let mut in_whitespace = false;
        for ch in label.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    key.push('-');
                }
                in_whitespace = true;
            } else {
                key.push(ch);
                in_whitespace = false;
            }
        }
        Self(key)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IdentityKey {
    fn from(value: &str) -> Self {
        Self(String::from(value))
    }
}

impl From<String> for IdentityKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
