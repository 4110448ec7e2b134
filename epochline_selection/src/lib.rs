// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline Selection: hover and selection bookkeeping.
//!
//! [`InteractionState`] holds two independent cells:
//! - The **hover**: at most one [`HoverTarget`] (an event, a period bar or a
//!   range cluster) plus the pointer position, for placing a popup.
//! - The **selection**: at most one event, by [`IdentityKey`], for the detail
//!   view.
//!
//! Writes are last-write-wins and never fail. Every effective write bumps a
//! revision counter and returns a [`SelectionChange`]; writes that leave the
//! state as it was return `None`. Forward changes to a [`SelectionTrace`] to
//! observe them.
//!
//! The crate knows nothing about geometry beyond the pointer position. Hit
//! testing belongs to the caller.
//!
//! ## Minimal example
//!
//! ```rust
//! use epochline_data::Event;
//! use epochline_selection::{HoverTarget, InteractionState};
//! use kurbo::Point;
//!
//! let moon = Event::new(1969, "Moon landing").with_id("apollo-11");
//! let mut state = InteractionState::new();
//!
//! state.set_hover(HoverTarget::Event(moon.identity_key()), Point::new(320.0, 48.0));
//! state.select_event(&moon);
//! assert!(state.is_selected(&moon.identity_key()));
//! assert_eq!(state.revision(), 2);
//!
//! state.close_selection();
//! assert!(state.selected().is_none());
//! ```
//!
//! [`IdentityKey`]: epochline_data::IdentityKey
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod state;
pub mod trace;

pub use state::{Hover, HoverTarget, InteractionState};
pub use trace::{SelectionChange, SelectionRecorder, SelectionTrace};
