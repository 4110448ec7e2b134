// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epochline Cluster: group events whose axis positions are close.
//!
//! Labels of events that land within a few percent of each other on the axis
//! would overlap. This crate partitions the visible events into [`Cluster`]s
//! so that a layout pass can render each group once.
//!
//! The algorithm is a single left-to-right sweep:
//!
//! 1. Sort events by year (stable, so equal years keep input order).
//! 2. For each event, compute its axis position and scan the clusters opened
//!    so far, in creation order. Join the **first** one whose anchor is
//!    strictly closer than the threshold.
//! 3. Otherwise open a new cluster anchored at the event's position.
//!
//! The anchor is the first member's position and never moves. Proximity is
//! measured against the anchor only, not between members: a chain of events
//! each close to its neighbour still splits once it runs a threshold past the
//! anchor. With a non-decreasing placement such as [`position`], every
//! cluster therefore covers `[anchor, anchor + threshold)`.
//!
//! ## Minimal example
//!
//! ```rust
//! use epochline_axis::Viewport;
//! use epochline_cluster::{Clusterer, Dated};
//!
//! struct Mark(i32);
//! impl Dated for Mark {
//!     fn year(&self) -> i32 {
//!         self.0
//!     }
//! }
//!
//! let view = Viewport::new(0.0, 1000.0);
//! let marks = [Mark(500), Mark(105), Mark(100), Mark(108)];
//!
//! let clusters = Clusterer::default().cluster(&marks, &view);
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].anchor(), 10.0);
//! assert_eq!(clusters[0].len(), 3);
//! assert_eq!(clusters[1].anchor(), 50.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use epochline_axis::{Viewport, position};

/// Default clustering threshold, in percent of the axis.
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// Anything that sits at a whole year on the timeline.
pub trait Dated {
    /// The item's year. Negative years are BCE.
    fn year(&self) -> i32;
}

impl<T: Dated + ?Sized> Dated for &T {
    fn year(&self) -> i32 {
        (**self).year()
    }
}

#[cfg(feature = "data")]
impl Dated for epochline_data::Event {
    fn year(&self) -> i32 {
        Self::year(self)
    }
}

/// A group of events rendered together.
///
/// Members are ordered by year ascending. A cluster is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<T> {
    anchor: f64,
    members: Vec<T>,
}

impl<T> Cluster<T> {
    /// Axis position of the first member, in percent.
    #[must_use]
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Members ordered by year ascending.
    #[must_use]
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Number of members. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member with the smallest year.
    #[must_use]
    pub fn earliest(&self) -> &T {
        &self.members[0]
    }

    /// The member with the largest year.
    #[must_use]
    pub fn latest(&self) -> &T {
        &self.members[self.members.len() - 1]
    }

    /// Consumes the cluster, returning its members.
    #[must_use]
    pub fn into_members(self) -> Vec<T> {
        self.members
    }
}

impl<T: Dated> Cluster<T> {
    /// Years of the earliest and latest member.
    #[must_use]
    pub fn year_range(&self) -> (i32, i32) {
        (self.earliest().year(), self.latest().year())
    }
}

/// Single-sweep proximity clusterer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clusterer {
    threshold: f64,
}

impl Default for Clusterer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Clusterer {
    /// Creates a clusterer joining events strictly closer than `threshold`
    /// percent to a cluster anchor.
    ///
    /// A threshold that is not positive (or is NaN) puts every event in its
    /// own cluster.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the threshold in percent of the axis.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Clusters `events` as placed on `viewport`.
    ///
    /// Events are expected to be pre-filtered to the viewport (see
    /// [`visible`]); events outside it still cluster, at the axis ends.
    pub fn cluster<I>(&self, events: I, viewport: &Viewport) -> Vec<Cluster<I::Item>>
    where
        I: IntoIterator,
        I::Item: Dated,
    {
        self.cluster_with(events, |year| position(f64::from(year), viewport))
    }

    /// Clusters `events` using a caller-supplied year-to-position mapping.
    ///
    /// `place` must be non-decreasing in the year for the sweep to mean
    /// "left to right"; the partition is deterministic either way.
    pub fn cluster_with<I, F>(&self, events: I, mut place: F) -> Vec<Cluster<I::Item>>
    where
        I: IntoIterator,
        I::Item: Dated,
        F: FnMut(i32) -> f64,
    {
        let mut sorted: Vec<I::Item> = events.into_iter().collect();
        sorted.sort_by_key(Dated::year);

        let mut clusters: Vec<Cluster<I::Item>> = Vec::new();
        for event in sorted {
            let at = place(event.year());
            match clusters
                .iter_mut()
                .find(|cluster| (cluster.anchor - at).abs() < self.threshold)
            {
                Some(cluster) => cluster.members.push(event),
                None => clusters.push(Cluster {
                    anchor: at,
                    members: alloc::vec![event],
                }),
            }
        }
        clusters
    }
}

/// Iterates over the events whose year lies inside `viewport`, inclusive.
pub fn visible<'a, T: Dated>(
    events: &'a [T],
    viewport: &Viewport,
) -> impl Iterator<Item = &'a T> + use<'a, T> {
    let viewport = *viewport;
    events
        .iter()
        .filter(move |event| viewport.contains_year(event.year()))
}
