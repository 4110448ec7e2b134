// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use epochline_axis::Viewport;

use crate::modes::{ChangeCause, ZoomDirection};
use crate::trace::RangeChange;

/// Smallest minimum span the controller will honor, in years.
///
/// Keeps `start + span` distinguishable from `start` for any realistic year.
const MIN_SPAN_FLOOR: f64 = 1e-6;

/// Tunable constants for a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportSettings {
    /// Scale applied per zoom step. Zooming in divides the range by it,
    /// zooming out multiplies. Values `<= 1` disable zooming.
    pub zoom_factor: f64,
    /// Narrowest window the controller allows, in years.
    pub min_span: f64,
    /// Smallest slider handle width, in percent of the track.
    pub min_handle_width: f64,
    /// Outer window represented by the full scrollable content width.
    ///
    /// This is independent of the total range: scrolling maps into this
    /// window, and the result is then clamped like any other write.
    pub scroll_window: Viewport,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            zoom_factor: 1.2,
            min_span: 1.0,
            min_handle_width: 1.0,
            scroll_window: Viewport::new(-5000.0, 2023.0),
        }
    }
}

/// Error returned when a controller is built over an unusable total range.
#[derive(Clone, Copy, PartialEq)]
pub struct RangeError {
    /// The rejected total start.
    pub start: f64,
    /// The rejected total end.
    pub end: f64,
}

impl fmt::Debug for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeError {{ start: {:?}, end: {:?} }}", self.start, self.end)
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total range [{}, {}] must be finite with start before end",
            self.start, self.end
        )
    }
}

impl core::error::Error for RangeError {}

/// Geometry of the proportional slider handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderHandle {
    /// Left edge of the handle, in percent of the track.
    pub position_percent: f64,
    /// Width of the handle, in percent of the track.
    pub width_percent: f64,
}

impl SliderHandle {
    /// Right edge of the handle, in percent of the track.
    #[must_use]
    pub fn end_percent(&self) -> f64 {
        self.position_percent + self.width_percent
    }
}

/// Owns the visible window over a fixed total range of years.
///
/// Every entry point ([`set_by_drag`](Self::set_by_drag), [`zoom`](Self::zoom),
/// [`set_by_scroll`](Self::set_by_scroll), [`set_range`](Self::set_range))
/// funnels into one clamping write, so after any call:
///
/// - `total.start <= start < end <= total.end`
/// - `end - start <= total.end - total.start`
///
/// Mutators return the effective [`RangeChange`], or `None` when the request
/// was rejected or left the window unchanged.
#[derive(Clone, Debug)]
pub struct ViewportController {
    total: Viewport,
    current: Viewport,
    settings: ViewportSettings,
}

impl ViewportController {
    /// Creates a controller over `total`, starting at `initial`, with default
    /// settings.
    ///
    /// `initial` is clamped into `total`. Fails if `total` is not finite or
    /// not strictly increasing.
    pub fn new(total: Viewport, initial: Viewport) -> Result<Self, RangeError> {
        Self::with_settings(total, initial, ViewportSettings::default())
    }

    /// Creates a controller with explicit settings.
    pub fn with_settings(
        total: Viewport,
        initial: Viewport,
        settings: ViewportSettings,
    ) -> Result<Self, RangeError> {
        if !(total.start.is_finite() && total.end.is_finite() && total.start < total.end) {
            return Err(RangeError {
                start: total.start,
                end: total.end,
            });
        }
        let mut controller = Self {
            total,
            current: total,
            settings,
        };
        controller.commit(ChangeCause::Retarget, initial.start, initial.end);
        Ok(controller)
    }

    /// Returns the current visible window.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.current
    }

    /// Returns the fixed total range.
    #[must_use]
    pub fn total(&self) -> Viewport {
        self.total
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    /// Returns the slider handle for the current window.
    ///
    /// The handle always fits the track: `end_percent() <= 100`, also when
    /// its width is raised to [`ViewportSettings::min_handle_width`].
    #[must_use]
    pub fn handle(&self) -> SliderHandle {
        let width_percent = self.handle_width();
        let max_position = (100.0 - width_percent).max(0.0);
        let free = self.total.span() - self.current.span();
        let position_percent = if free > 0.0 {
            ((self.current.start - self.total.start) / free * max_position).clamp(0.0, max_position)
        } else {
            0.0
        };
        SliderHandle {
            position_percent,
            width_percent,
        }
    }

    /// Moves the window so the slider handle's left edge sits at `position`
    /// percent of the track.
    ///
    /// The position is clamped to `[0, 100 - handle width]` and the visible
    /// range length is preserved. This is the inverse of [`handle`](Self::handle),
    /// so dragging to the reported position leaves the window in place.
    pub fn set_by_drag(&mut self, position: f64) -> Option<RangeChange> {
        let max_position = (100.0 - self.handle_width()).max(0.0);
        if max_position <= 0.0 {
            return None;
        }
        let position = position.clamp(0.0, max_position);
        let visible = self.current.span();
        let free = self.total.span() - visible;
        let start = self.total.start + position / max_position * free;
        self.commit(ChangeCause::Drag, start, start + visible)
    }

    /// Applies one zoom step around the window midpoint.
    ///
    /// Zooming out never grows past the total range. If the recentered window
    /// overhangs either edge it is shifted back inside, keeping its length.
    pub fn zoom(&mut self, direction: ZoomDirection) -> Option<RangeChange> {
        let factor = self.settings.zoom_factor;
        if !(factor > 1.0) {
            return None;
        }
        let scale = match direction {
            ZoomDirection::In => 1.0 / factor,
            ZoomDirection::Out => factor,
        };
        let midpoint = self.current.midpoint();
        let range = (self.current.span() * scale).min(self.total.span());
        self.commit(
            ChangeCause::Zoom,
            midpoint - range * 0.5,
            midpoint + range * 0.5,
        )
    }

    /// Derives the window from a scroll container's metrics.
    ///
    /// The full `scroll_width` represents the settings' scroll window;
    /// `scroll_left` picks the start and `client_width / scroll_width` the
    /// visible share of it. Degenerate metrics are ignored.
    pub fn set_by_scroll(
        &mut self,
        scroll_left: f64,
        scroll_width: f64,
        client_width: f64,
    ) -> Option<RangeChange> {
        if !(scroll_width > 0.0) {
            return None;
        }
        let outer = self.settings.scroll_window;
        let outer_span = outer.span();
        let start = outer.start + scroll_left / scroll_width * outer_span;
        let end = start + client_width / scroll_width * outer_span;
        self.commit(ChangeCause::Scroll, start, end)
    }

    /// Re-targets the window to `[start, end]`, clamped like every other write.
    pub fn set_range(&mut self, start: f64, end: f64) -> Option<RangeChange> {
        self.commit(ChangeCause::Retarget, start, end)
    }

    /// Re-targets the window to `range`.
    ///
    /// Used for "zoom to this period" and "zoom to this cluster".
    pub fn zoom_to(&mut self, range: Viewport) -> Option<RangeChange> {
        self.set_range(range.start, range.end)
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            total: self.total,
            current: self.current,
            handle: self.handle(),
            settings: self.settings,
        }
    }

    fn handle_width(&self) -> f64 {
        (self.current.span() / self.total.span() * 100.0).max(self.settings.min_handle_width)
    }

    /// The single write path. Rejects non-finite input, then enforces the
    /// minimum and maximum span, then shifts the window inside the total range.
    fn commit(&mut self, cause: ChangeCause, start: f64, end: f64) -> Option<RangeChange> {
        if !(start.is_finite() && end.is_finite()) {
            return None;
        }
        let (mut start, mut end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };

        let total_span = self.total.span();
        let min_span = self.settings.min_span.max(MIN_SPAN_FLOOR).min(total_span);
        let span = end - start;
        if span < min_span {
            let midpoint = (start + end) * 0.5;
            start = midpoint - min_span * 0.5;
            end = start + min_span;
        } else if span > total_span {
            start = self.total.start;
            end = self.total.end;
        }

        let span = end - start;
        if start < self.total.start {
            start = self.total.start;
            end = start + span;
        }
        if end > self.total.end {
            end = self.total.end;
            start = (end - span).max(self.total.start);
        }

        let next = Viewport::new(start, end);
        if next == self.current {
            return None;
        }
        let before = core::mem::replace(&mut self.current, next);
        Some(RangeChange {
            cause,
            before,
            after: next,
        })
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Fixed total range.
    pub total: Viewport,
    /// Current visible window.
    pub current: Viewport,
    /// Slider handle for the current window.
    pub handle: SliderHandle,
    /// Settings in use.
    pub settings: ViewportSettings,
}
