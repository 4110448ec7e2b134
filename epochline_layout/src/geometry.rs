// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel offsets of whiskers and labels relative to the axis line.
//!
//! Vertical offsets are in pixels with the axis line at `0.0`; negative values
//! are above the axis. Horizontal positions elsewhere in this crate are in
//! percent of the axis width.

/// Which side of the axis a label sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the axis line.
    Above,
    /// Below the axis line.
    Below,
}

impl Side {
    /// Alternating side for the `index`-th cluster: even indices go above.
    #[must_use]
    pub const fn alternating(index: usize) -> Self {
        if index % 2 == 0 { Self::Above } else { Self::Below }
    }

    /// The other side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }
}

/// A vertical connector from the axis towards a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Whisker {
    /// Horizontal position, in percent of the axis.
    pub x: f64,
    /// Side of the axis the whisker extends to.
    pub side: Side,
    /// Top edge of the whisker, in pixels from the axis.
    pub top: f64,
    /// Length of the whisker, in pixels.
    pub length: f64,
}

impl Whisker {
    /// Bottom edge of the whisker, in pixels from the axis.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.length
    }
}

pub(crate) const SINGLE_WHISKER: f64 = 22.0;
pub(crate) const SINGLE_LABEL_ABOVE: f64 = -52.0;
pub(crate) const SINGLE_LABEL_BELOW: f64 = 30.0;

pub(crate) const STACK_WHISKER: f64 = 22.0;
pub(crate) const STACK_OUTER_ABOVE: f64 = -85.0;
pub(crate) const STACK_OUTER_BELOW: f64 = 75.0;

pub(crate) const RANGE_WHISKER: f64 = 15.0;
pub(crate) const RANGE_WHISKER_ABOVE: f64 = -27.0;
pub(crate) const RANGE_WHISKER_BELOW: f64 = 12.0;
pub(crate) const RANGE_LABEL_ABOVE: f64 = -55.0;
pub(crate) const RANGE_LABEL_BELOW: f64 = 37.0;

/// Whisker hugging the axis on `side`, `length` pixels long.
pub(crate) fn axis_whisker(x: f64, side: Side, length: f64) -> Whisker {
    let top = match side {
        Side::Above => -length,
        Side::Below => 0.0,
    };
    Whisker {
        x,
        side,
        top,
        length,
    }
}
