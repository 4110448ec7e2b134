// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline Layout: render instructions for clusters and period bars.
//!
//! This crate turns clusters from `epochline_cluster` and the period forest
//! from `epochline_data` into plain data a renderer can draw:
//!
//! - A cluster of one event becomes a dot, a whisker and a label. Labels
//!   alternate above and below the axis by cluster index.
//! - A cluster of two to four events becomes two label stacks. The earlier
//!   half (rounded up) goes above the axis, the rest below.
//! - A larger cluster becomes a rectangle from its earliest to its latest
//!   member, labelled with a count. Only the two end members get labels, and
//!   clicking the rectangle zooms to their years.
//! - Top-level periods become bars; a bar wider than the drill-down width is
//!   replaced by its children.
//!
//! Horizontal positions are percentages of the axis; vertical offsets are
//! pixels from the axis line, negative above. Hovered labels are raised with
//! [`LabelStacking`], which never lowers a label again.
//!
//! ## Minimal example
//!
//! ```rust
//! use epochline_axis::Viewport;
//! use epochline_cluster::Clusterer;
//! use epochline_data::Event;
//! use epochline_layout::{
//!     ClusterLayout, LabelStacking, LayoutContext, LayoutSettings, layout_clusters,
//! };
//!
//! let events = [Event::new(-500, "Foundation"), Event::new(1066, "Conquest")];
//! let view = Viewport::new(-1000.0, 2000.0);
//! let clusters = Clusterer::default().cluster(&events, &view);
//!
//! let stacking = LabelStacking::new();
//! let ctx = LayoutContext { viewport: view, selected: None, hovered: None, stacking: &stacking };
//! let layouts = layout_clusters(&clusters, &ctx, &LayoutSettings::default());
//!
//! let ClusterLayout::Single { label, .. } = &layouts[0] else { unreachable!() };
//! assert_eq!(label.label.year.to_string(), "500 BCE");
//! assert_eq!(label.top, -52.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clusters;
mod fit;
mod geometry;
mod period;
mod settings;
mod stacking;

pub use clusters::{
    ClusterLayout, Label, LabelStack, LayoutContext, PlacedLabel, RangeEnd, RangeLayout,
    layout_cluster, layout_clusters,
};
pub use fit::{AverageAdvance, FontRange, TextMeasure};
pub use geometry::{Side, Whisker};
pub use period::{PeriodBar, layout_periods};
pub use settings::LayoutSettings;
pub use stacking::{BASE_Z, LabelStacking};
