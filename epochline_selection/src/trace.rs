// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observing hover and selection changes.

use alloc::vec::Vec;

use epochline_data::IdentityKey;

use crate::Hover;

/// One effective change of the interaction state.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionChange {
    /// A new hover replaced the previous one.
    Hovered(Hover),
    /// The hover was cleared.
    HoverCleared,
    /// An event was selected.
    Selected(IdentityKey),
    /// The selection was closed.
    Closed,
}

/// A callback sink for interaction changes.
pub trait SelectionTrace {
    /// Called once per effective change with the revision it produced.
    fn selection_changed(&mut self, revision: u64, change: &SelectionChange);
}

impl SelectionTrace for () {
    fn selection_changed(&mut self, _revision: u64, _change: &SelectionChange) {}
}

impl<T: SelectionTrace + ?Sized> SelectionTrace for &mut T {
    fn selection_changed(&mut self, revision: u64, change: &SelectionChange) {
        (**self).selection_changed(revision, change);
    }
}

/// Records every change it is handed, oldest first.
#[derive(Clone, Debug, Default)]
pub struct SelectionRecorder {
    changes: Vec<(u64, SelectionChange)>,
}

impl SelectionRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(revision, change)` pairs.
    #[must_use]
    pub fn changes(&self) -> &[(u64, SelectionChange)] {
        &self.changes
    }

    /// Forgets all recorded changes.
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl SelectionTrace for SelectionRecorder {
    fn selection_changed(&mut self, revision: u64, change: &SelectionChange) {
        self.changes.push((revision, change.clone()));
    }
}
