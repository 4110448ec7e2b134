// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use epochline_axis::Viewport;
use epochline_cluster::DEFAULT_THRESHOLD;
use epochline_layout::LayoutSettings;
use epochline_viewport::ViewportSettings;

/// Everything a [`Timeline`](crate::Timeline) needs besides its data.
///
/// The defaults describe a timeline from 10000 BCE to 2023 CE opened on
/// 5000 BCE to 2000 CE. With the `serde` feature every field is optional when
/// deserializing and falls back to its default.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimelineConfig {
    /// Fixed outer range of years.
    pub total: Viewport,
    /// Window shown on construction; clamped into `total`.
    pub initial: Viewport,
    /// Zoom step, minimum span, minimum handle width and scroll window.
    pub viewport: ViewportSettings,
    /// Clustering distance, in percent of the axis.
    pub cluster_threshold: f64,
    /// Stack size, drill-down width and font range.
    pub layout: LayoutSettings,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            total: Viewport::new(-10_000.0, 2023.0),
            initial: Viewport::new(-5000.0, 2000.0),
            viewport: ViewportSettings::default(),
            cluster_threshold: DEFAULT_THRESHOLD,
            layout: LayoutSettings::default(),
        }
    }
}
