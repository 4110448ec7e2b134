// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observing a timeline.
//!
//! A [`Timeline`](crate::Timeline) forwards every effective viewport change to
//! [`ViewportTrace`] and every effective hover or selection change to
//! [`SelectionTrace`]. Any type implementing both is a [`TimelineTrace`].

use epochline_selection::{SelectionChange, SelectionRecorder, SelectionTrace};
use epochline_viewport::{RangeChange, RangeRecorder, ViewportTrace};

/// Sink for both kinds of timeline change.
pub trait TimelineTrace: ViewportTrace + SelectionTrace {}

impl<T: ViewportTrace + SelectionTrace + ?Sized> TimelineTrace for T {}

/// Records viewport and interaction changes separately, oldest first.
#[derive(Clone, Debug, Default)]
pub struct TimelineRecorder {
    /// Viewport changes.
    pub ranges: RangeRecorder,
    /// Hover and selection changes.
    pub selections: SelectionRecorder,
}

impl TimelineRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.ranges.clear();
        self.selections.clear();
    }
}

impl ViewportTrace for TimelineRecorder {
    fn range_changed(&mut self, change: &RangeChange) {
        self.ranges.range_changed(change);
    }
}

impl SelectionTrace for TimelineRecorder {
    fn selection_changed(&mut self, revision: u64, change: &SelectionChange) {
        self.selections.selection_changed(revision, change);
    }
}

/// Emits every change as a `DEBUG` level `tracing` event.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl ViewportTrace for TracingTrace {
    fn range_changed(&mut self, change: &RangeChange) {
        tracing::debug!(
            cause = ?change.cause,
            before_start = change.before.start,
            before_end = change.before.end,
            start = change.after.start,
            end = change.after.end,
            "viewport changed"
        );
    }
}

#[cfg(feature = "tracing")]
impl SelectionTrace for TracingTrace {
    fn selection_changed(&mut self, revision: u64, change: &SelectionChange) {
        match change {
            SelectionChange::Hovered(hover) => tracing::debug!(
                revision,
                target = ?hover.target,
                x = hover.position.x,
                y = hover.position.y,
                "hover changed"
            ),
            SelectionChange::HoverCleared => tracing::debug!(revision, "hover cleared"),
            SelectionChange::Selected(key) => {
                tracing::debug!(revision, key = key.as_str(), "event selected");
            }
            SelectionChange::Closed => tracing::debug!(revision, "selection closed"),
        }
    }
}
