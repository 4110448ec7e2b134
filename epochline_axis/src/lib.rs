// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline Axis: mapping years onto a percentage axis.
//!
//! This crate is the leaf of the Epochline stack. It knows nothing about
//! events, clusters or pointer input; it only answers "where on a `0..=100`
//! axis does this year land, given the visible window?".
//!
//! - [`Viewport`] is a plain `{start, end}` pair of (possibly fractional) years.
//! - [`position`] maps one year to a percentage, clamping outside years to the
//!   axis ends.
//! - [`span`] maps a `[start, end]` year interval to a left offset plus width,
//!   which is what period bars and cluster rectangles need.
//! - [`format_year`] renders the BCE/CE label convention without allocating.
//!
//! ## Minimal example
//!
//! ```rust
//! use epochline_axis::{Viewport, format_year, position};
//!
//! let view = Viewport::new(-5000.0, 2000.0);
//!
//! assert_eq!(position(-5000.0, &view), 0.0);
//! assert_eq!(position(2000.0, &view), 100.0);
//! assert!((position(-1500.0, &view) - 50.0).abs() < 1e-9);
//!
//! assert_eq!(format_year(-44).to_string(), "44 BCE");
//! assert_eq!(format_year(1066).to_string(), "1066 CE");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod label;
mod viewport;

pub use label::{FormattedYear, format_year};
pub use viewport::{Span, Viewport, position, span};
