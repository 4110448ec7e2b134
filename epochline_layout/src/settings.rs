// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::FontRange;

/// Tunables for cluster and period layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutSettings {
    /// Largest cluster drawn as two label stacks; bigger ones become a range.
    pub max_stack: usize,
    /// Width, in percent of the axis, above which a top-level period bar is
    /// replaced by its children.
    pub drill_down_width: f64,
    /// Font sizes tried when fitting period names into their bars.
    pub fonts: FontRange,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            max_stack: 4,
            drill_down_width: 65.0,
            fonts: FontRange::default(),
        }
    }
}
