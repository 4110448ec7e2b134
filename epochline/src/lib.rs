// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline: a headless engine for zoomable historical timelines.
//!
//! A [`Timeline`] owns a set of dated events, a forest of named periods, the
//! visible window and the hover/selection state. Hosts feed it input and ask
//! it for a [`Frame`] of render instructions:
//!
//! - Pointer input on the slider: [`Timeline::pointer_down`],
//!   [`Timeline::pointer_move`], [`Timeline::pointer_up`]. Keep routing pointer
//!   input to the timeline while [`Timeline::needs_pointer_capture`] is `true`.
//! - Zoom buttons: [`Timeline::zoom_in`], [`Timeline::zoom_out`].
//! - A scroll container: [`Timeline::scroll`].
//! - Clicks: [`Timeline::click_period`] for period bars and
//!   [`Timeline::zoom_to`] with a range cluster's `zoom_target`.
//! - Hover and selection: [`Timeline::hover`], [`Timeline::clear_hover`],
//!   [`Timeline::select`], [`Timeline::close_selection`].
//!
//! Nothing is drawn here. [`Timeline::frame`] reports the window, the slider
//! handle, period bars and one [`ClusterLayout`] per cluster; positions are
//! percentages of the axis width and offsets are pixels from the axis line.
//!
//! The pieces live in their own crates and are re-exported:
//! `epochline_axis` (year ↔ position), `epochline_data` (records and identity),
//! `epochline_viewport` (the window), `epochline_cluster`, `epochline_layout`
//! and `epochline_selection`.
//!
//! ## Minimal example
//!
//! ```rust
//! use epochline::{AverageAdvance, Event, Period, Timeline, TimelineConfig};
//!
//! let events = vec![
//!     Event::new(-2560, "Great Pyramid"),
//!     Event::new(-2550, "Sphinx"),
//!     Event::new(800, "Charlemagne crowned"),
//! ];
//! let periods = vec![Period::new("Bronze Age", -3300, -1200)];
//! let mut timeline = Timeline::new(events, periods, TimelineConfig::default()).unwrap();
//!
//! timeline.zoom_in();
//! let frame = timeline.frame(&mut AverageAdvance::new(1200.0));
//! assert_eq!(frame.visible_events(), 3);
//! assert_eq!(frame.periods.len(), 1);
//! ```
//!
//! ## Observing changes
//!
//! Every effective change is forwarded to the timeline's trace sink, a
//! [`TimelineTrace`]. The default `()` discards them, [`TimelineRecorder`]
//! keeps them, and with the `tracing` feature `TracingTrace` emits them as
//! `tracing` events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod frame;
mod timeline;
pub mod trace;

pub use config::TimelineConfig;
pub use error::TimelineError;
pub use frame::Frame;
pub use timeline::Timeline;
#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
pub use trace::{TimelineRecorder, TimelineTrace};

pub use epochline_axis::{FormattedYear, Viewport, format_year, position};
pub use epochline_data::{DataError, Event, IdentityKey, MediaRef, Period, PeriodForest};
pub use epochline_layout::{
    AverageAdvance, BASE_Z, ClusterLayout, Label, LabelStack, PeriodBar, RangeLayout, Side,
    TextMeasure, Whisker,
};
pub use epochline_selection::{Hover, HoverTarget, SelectionChange};
pub use epochline_viewport::{ChangeCause, RangeChange, RangeError, SliderHandle, ZoomDirection};
