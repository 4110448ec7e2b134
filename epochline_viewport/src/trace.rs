// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observing viewport changes.
//!
//! The controller never logs. Each mutator returns the effective
//! [`RangeChange`], and embedders that want a running record hand those to a
//! [`ViewportTrace`] sink. `()` is the no-op sink; [`RangeRecorder`] keeps
//! every change for inspection.

use alloc::vec::Vec;

use epochline_axis::Viewport;

use crate::ChangeCause;

/// One effective change of the visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeChange {
    /// Entry point that produced the change.
    pub cause: ChangeCause,
    /// Window before the change.
    pub before: Viewport,
    /// Window after the change.
    pub after: Viewport,
}

/// A callback sink for viewport changes.
pub trait ViewportTrace {
    /// Called once per effective change, after it has been applied.
    fn range_changed(&mut self, change: &RangeChange);
}

impl ViewportTrace for () {
    fn range_changed(&mut self, _change: &RangeChange) {}
}

impl<T: ViewportTrace + ?Sized> ViewportTrace for &mut T {
    fn range_changed(&mut self, change: &RangeChange) {
        (**self).range_changed(change);
    }
}

/// Records every change it is handed, oldest first.
#[derive(Clone, Debug, Default)]
pub struct RangeRecorder {
    changes: Vec<RangeChange>,
}

impl RangeRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded changes.
    #[must_use]
    pub fn changes(&self) -> &[RangeChange] {
        &self.changes
    }

    /// Forgets all recorded changes.
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl ViewportTrace for RangeRecorder {
    fn range_changed(&mut self, change: &RangeChange) {
        self.changes.push(*change);
    }
}
