// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider drag session: turn pointer travel on the slider track into handle
//! positions.
//!
//! ## Usage
//!
//! 1) On pointer down over the track, call [`SliderDrag::press`] with the
//!    current [`SliderHandle`]. Presses outside the handle are ignored.
//! 2) While [`SliderDrag::is_dragging`] is `true`, attach global pointer move
//!    and up listeners. On each move call [`SliderDrag::drag_to`] and feed the
//!    result to [`ViewportController::set_by_drag`](crate::ViewportController::set_by_drag).
//! 3) On pointer up call [`SliderDrag::release`] and detach the listeners.
//!
//! ## Minimal example
//!
//! ```
//! use epochline_axis::Viewport;
//! use epochline_viewport::{SliderDrag, ViewportController};
//! use kurbo::{Point, Rect};
//!
//! let mut vp =
//!     ViewportController::new(Viewport::new(0.0, 1000.0), Viewport::new(0.0, 200.0)).unwrap();
//! let track = Rect::new(0.0, 0.0, 500.0, 30.0);
//! let mut drag = SliderDrag::default();
//!
//! // The handle covers the first 100px of the track.
//! assert!(drag.press(Point::new(50.0, 15.0), track, vp.handle()));
//!
//! // Move 250px right: half the track.
//! let position = drag.drag_to(Point::new(300.0, 15.0), track).unwrap();
//! vp.set_by_drag(position);
//! assert_eq!(vp.viewport(), Viewport::new(500.0, 700.0));
//!
//! drag.release();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Rect};

use crate::SliderHandle;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    pointer_x: f64,
    handle_position: f64,
}

/// Tracks one press-move-release drag of the slider handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SliderDrag {
    grab: Option<Grab>,
}

impl SliderDrag {
    /// Starts a drag if `pointer` lies on the handle drawn inside `track`.
    ///
    /// The hit box is the handle's horizontal extent, inclusive at both edges,
    /// across the full track height. Returns `true` if a drag started. A press
    /// elsewhere leaves any state untouched and returns `false`.
    pub fn press(&mut self, pointer: Point, track: Rect, handle: SliderHandle) -> bool {
        let width = track.width();
        if !(width > 0.0) {
            return false;
        }
        let left = track.x0 + width * handle.position_percent / 100.0;
        let right = left + width * handle.width_percent / 100.0;
        let on_handle = pointer.x >= left
            && pointer.x <= right
            && pointer.y >= track.y0
            && pointer.y <= track.y1;
        if !on_handle {
            return false;
        }
        self.grab = Some(Grab {
            pointer_x: pointer.x,
            handle_position: handle.position_percent,
        });
        true
    }

    /// Returns the handle position, in percent of the track, implied by the
    /// pointer now being at `pointer`.
    ///
    /// The result is the handle position at press time plus the pointer's
    /// horizontal travel since the press. It is not clamped; the controller
    /// clamps on write. Returns `None` when no drag is active.
    #[must_use]
    pub fn drag_to(&self, pointer: Point, track: Rect) -> Option<f64> {
        let grab = self.grab?;
        let width = track.width();
        if !(width > 0.0) {
            return None;
        }
        let travel = (pointer.x - grab.pointer_x) / width * 100.0;
        Some(grab.handle_position + travel)
    }

    /// Ends the drag. Safe to call when no drag is active.
    pub fn release(&mut self) {
        self.grab = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::SliderDrag;
    use crate::SliderHandle;

    const TRACK: Rect = Rect::new(100.0, 0.0, 600.0, 30.0);
    const HANDLE: SliderHandle = SliderHandle {
        position_percent: 20.0,
        width_percent: 10.0,
    };

    #[test]
    fn new_drag_is_idle() {
        let drag = SliderDrag::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.drag_to(Point::new(0.0, 0.0), TRACK), None);
    }

    #[test]
    fn press_on_handle_starts_drag() {
        // Handle spans x = 200..250.
        let mut drag = SliderDrag::default();
        assert!(drag.press(Point::new(200.0, 10.0), TRACK, HANDLE));
        assert!(drag.is_dragging());

        let mut drag = SliderDrag::default();
        assert!(drag.press(Point::new(250.0, 10.0), TRACK, HANDLE));
    }

    #[test]
    fn press_off_handle_is_ignored() {
        let mut drag = SliderDrag::default();
        assert!(!drag.press(Point::new(199.0, 10.0), TRACK, HANDLE));
        assert!(!drag.press(Point::new(251.0, 10.0), TRACK, HANDLE));
        assert!(!drag.press(Point::new(220.0, 31.0), TRACK, HANDLE));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn travel_is_measured_from_the_press() {
        let mut drag = SliderDrag::default();
        drag.press(Point::new(225.0, 10.0), TRACK, HANDLE);

        // 50px of a 500px track is 10%.
        assert_eq!(drag.drag_to(Point::new(275.0, 10.0), TRACK), Some(30.0));
        // Moves are not cumulative.
        assert_eq!(drag.drag_to(Point::new(275.0, 10.0), TRACK), Some(30.0));
        assert_eq!(drag.drag_to(Point::new(175.0, 99.0), TRACK), Some(10.0));
    }

    #[test]
    fn release_ends_drag_and_is_idempotent() {
        let mut drag = SliderDrag::default();
        drag.press(Point::new(225.0, 10.0), TRACK, HANDLE);
        drag.release();
        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.drag_to(Point::new(300.0, 10.0), TRACK), None);
    }

    #[test]
    fn degenerate_track_never_starts() {
        let mut drag = SliderDrag::default();
        let flat = Rect::new(100.0, 0.0, 100.0, 30.0);
        assert!(!drag.press(Point::new(100.0, 10.0), flat, HANDLE));
    }

    #[test]
    fn ignored_press_keeps_active_drag() {
        let mut drag = SliderDrag::default();
        drag.press(Point::new(225.0, 10.0), TRACK, HANDLE);
        assert!(!drag.press(Point::new(500.0, 10.0), TRACK, HANDLE));
        assert_eq!(drag.drag_to(Point::new(225.0, 10.0), TRACK), Some(20.0));
    }
}
