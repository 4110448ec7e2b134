// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use epochline_data::IdentityKey;
use hashbrown::HashMap;

/// Stacking order of labels that have never been raised.
pub const BASE_Z: u32 = 1;

/// Monotonic z-order for hovered labels.
///
/// Every [`LabelStacking::raise`] puts the label above all labels raised
/// before it. The counter only grows; nothing lowers a label again short of
/// dropping the table.
#[derive(Clone, Debug)]
pub struct LabelStacking {
    top: u32,
    raised: HashMap<IdentityKey, u32>,
}

impl Default for LabelStacking {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelStacking {
    /// Creates an empty table; every label starts at [`BASE_Z`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            top: BASE_Z,
            raised: HashMap::new(),
        }
    }

    /// Raises `key` above every previous raise and returns its new z-order.
    pub fn raise(&mut self, key: &IdentityKey) -> u32 {
        self.top = self.top.saturating_add(1);
        match self.raised.get_mut(key) {
            Some(z) => *z = self.top,
            None => {
                self.raised.insert(key.clone(), self.top);
            }
        }
        self.top
    }

    /// Current z-order of `key`.
    #[must_use]
    pub fn z_of(&self, key: &IdentityKey) -> u32 {
        self.raised.get(key).copied().unwrap_or(BASE_Z)
    }

    /// The highest z-order handed out so far.
    #[must_use]
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Number of labels raised at least once.
    #[must_use]
    pub fn raised_count(&self) -> usize {
        self.raised.len()
    }
}

#[cfg(test)]
mod tests {
    use epochline_data::IdentityKey;

    use super::{BASE_Z, LabelStacking};

    #[test]
    fn raises_are_monotonic() {
        let mut stacking = LabelStacking::new();
        let a = IdentityKey::from("a");
        let b = IdentityKey::from("b");

        assert_eq!(stacking.z_of(&a), BASE_Z);
        let za = stacking.raise(&a);
        let zb = stacking.raise(&b);
        assert!(zb > za);
        assert!(za > BASE_Z);

        // Raising again lifts `a` above `b`.
        let za2 = stacking.raise(&a);
        assert!(za2 > zb);
        assert_eq!(stacking.z_of(&a), za2);
        assert_eq!(stacking.z_of(&b), zb);
        assert_eq!(stacking.raised_count(), 2);
        assert_eq!(stacking.top(), za2);
    }
}
