// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline Data: the static records a timeline plots.
//!
//! - [`Event`]: a single dated occurrence with optional id, era, description,
//!   impact and media reference. Missing text fields fall back to fixed
//!   strings at read time rather than failing at load time.
//! - [`Period`]: a named `[start, end]` span that may name a parent period.
//! - [`PeriodForest`]: a validated view over a set of periods, answering
//!   "which periods are top-level?" and "what are the children of X?".
//! - [`IdentityKey`]: the one key used for events everywhere (clustering,
//!   selection, render keys). It is the explicit `id` when present and a
//!   derived `"{year}-{label}"` otherwise.
//!
//! ## Loading from JSON
//!
//! With the default `serde` feature both record types deserialize from the
//! loose JSON shape used by timeline datasets:
//!
//! ```rust
//! use epochline_data::{Event, IdentityKey};
//!
//! let json = r#"[
//!     { "year": -3200, "event": "Writing in Sumer", "era": "Bronze Age" },
//!     { "id": "moon", "year": 1969, "name": "Moon landing", "explanation": "Apollo 11" }
//! ]"#;
//! let events: Vec<Event> = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(events[0].identity_key(), IdentityKey::from("-3200-Writing-in-Sumer"));
//! assert_eq!(events[0].description(), "No description available");
//! assert_eq!(events[1].identity_key(), IdentityKey::from("moon"));
//! assert_eq!(events[1].description(), "Apollo 11");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod event;
mod identity;
mod period;

pub use error::DataError;
pub use event::{Event, MediaRef, UNKNOWN_DESCRIPTION, UNKNOWN_ERA, UNKNOWN_EVENT};
pub use identity::IdentityKey;
pub use period::{Period, PeriodForest};
