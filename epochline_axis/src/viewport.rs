// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The visible window of years along the timeline axis.
///
/// Bounds are `f64` so that zooming and dragging can land between whole years.
/// `Viewport` is a plain value and does not enforce any invariant on its own;
/// the viewport controller is responsible for keeping `start < end` inside
/// the total range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// First visible year.
    pub start: f64,
    /// Last visible year.
    pub end: f64,
}

impl Viewport {
    /// Creates a viewport over `[start, end]`.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the year halfway between the two bounds.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) * 0.5
    }

    /// Returns `true` if `year` lies inside the window, inclusive at both ends.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        let year = f64::from(year);
        year >= self.start && year <= self.end
    }

    /// Maps `year` to a percentage along this viewport.
    ///
    /// Shorthand for [`position`].
    #[must_use]
    pub fn position(&self, year: f64) -> f64 {
        position(year, self)
    }

    /// Returns the whole years that cover the window: `floor(start)` and
    /// `ceil(end)`.
    ///
    /// Useful for axis captions, which never show fractional years.
    #[must_use]
    pub fn year_bounds(&self) -> (i32, i32) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Viewport bounds are kept within the i32 year range by the controller"
        )]
        let bounds = (
            libm::floor(self.start) as i32,
            libm::ceil(self.end) as i32,
        );
        bounds
    }
}

/// A `[left, left + width]` interval on the percentage axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Offset of the interval start, in percent of the axis.
    pub left: f64,
    /// Width of the interval, in percent of the axis.
    pub width: f64,
}

impl Span {
    /// Returns `left + width`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Maps `year` to a percentage on `[0, 100]` for the given viewport.
///
/// Years before the window map to `0`, years after it map to `100`, and years
/// inside are interpolated linearly. A degenerate window (`end <= start`) maps
/// every year that is not past the end to `0` instead of dividing by zero.
#[must_use]
pub fn position(year: f64, viewport: &Viewport) -> f64 {
    if year < viewport.start {
        return 0.0;
    }
    if year > viewport.end {
        return 100.0;
    }
    let width = viewport.span();
    if width <= 0.0 {
        return 0.0;
    }
    (year - viewport.start) / width * 100.0
}

/// Maps the year interval `[start, end]` to a [`Span`] on the percentage axis.
///
/// Both ends are clamped independently, so an interval that overhangs the
/// window is cut at the axis edges. The width is never negative.
#[must_use]
pub fn span(start: f64, end: f64, viewport: &Viewport) -> Span {
    let left = position(start, viewport);
    let right = position(end, viewport);
    Span {
        left,
        width: (right - left).max(0.0),
    }
}
