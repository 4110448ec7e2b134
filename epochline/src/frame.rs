// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use epochline_axis::Viewport;
use epochline_data::Event;
use epochline_layout::{ClusterLayout, PeriodBar};
use epochline_selection::Hover;
use epochline_viewport::SliderHandle;

/// Everything a renderer needs to draw one state of the timeline.
///
/// A frame borrows from its [`Timeline`](crate::Timeline); build a new one
/// after each change.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// The visible window.
    pub viewport: Viewport,
    /// Slider handle geometry.
    pub handle: SliderHandle,
    /// Period band, left to right.
    pub periods: Vec<PeriodBar<'a>>,
    /// Event clusters, left to right.
    pub clusters: Vec<ClusterLayout<'a>>,
    /// The current hover, for drawing a popup.
    pub hover: Option<&'a Hover>,
    /// The selected event, for drawing its detail view.
    pub selected: Option<&'a Event>,
    /// Interaction revision the frame was built at.
    pub revision: u64,
}

impl Frame<'_> {
    /// Number of events represented by the clusters.
    #[must_use]
    pub fn visible_events(&self) -> usize {
        self.clusters.iter().map(ClusterLayout::event_count).sum()
    }
}
