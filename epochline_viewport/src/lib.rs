// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline Viewport: the visible window over a fixed range of years.
//!
//! This crate provides a small, headless controller for a timeline's visible
//! window. It focuses on:
//! - Slider panning: a proportional handle whose width tracks the visible share
//!   of the total range ([`ViewportController::set_by_drag`], [`SliderDrag`]).
//! - Stepped zoom about the window midpoint ([`ViewportController::zoom`]).
//! - Scroll-driven updates from a scroll container's metrics
//!   ([`ViewportController::set_by_scroll`]).
//! - Re-targeting to an explicit range, for example a clicked period
//!   ([`ViewportController::zoom_to`]).
//!
//! All entry points converge on one clamping write, so the window never
//! leaves the total range, never exceeds it, and never collapses to zero width.
//! The last write wins; entry points do not coordinate with each other.
//!
//! It does **not** own any event data or rendering. Callers are expected to:
//! - Wire pointer and scroll input into the controller.
//! - Use [`ViewportController::viewport`] with `epochline_axis` to place items.
//! - Forward returned [`RangeChange`]s to a [`ViewportTrace`] if they want a log.
//!
//! ## Minimal example
//!
//! ```rust
//! use epochline_axis::Viewport;
//! use epochline_viewport::{ViewportController, ZoomDirection};
//!
//! let mut vp =
//!     ViewportController::new(Viewport::new(-10_000.0, 2023.0), Viewport::new(1000.0, 1100.0))
//!         .unwrap();
//!
//! vp.zoom(ZoomDirection::Out);
//! let view = vp.viewport();
//! assert!((view.start - 990.0).abs() < 1e-9);
//! assert!((view.end - 1110.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod modes;
pub mod slider;
pub mod trace;

pub use controller::{
    RangeError, SliderHandle, ViewportController, ViewportDebugInfo, ViewportSettings,
};
pub use modes::{ChangeCause, ZoomDirection};
pub use slider::SliderDrag;
pub use trace::{RangeChange, RangeRecorder, ViewportTrace};
