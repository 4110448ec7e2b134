// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of one discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Shrink the visible range by the zoom factor.
    In,
    /// Grow the visible range by the zoom factor, up to the total range.
    Out,
}

/// Which entry point produced a viewport change.
///
/// All entry points write the same `{start, end}` state; the cause is only
/// reported to trace hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    /// The slider handle was dragged.
    Drag,
    /// A zoom step was applied.
    Zoom,
    /// The scrollable timeline content was scrolled.
    Scroll,
    /// The window was re-targeted to an explicit range (period or cluster
    /// click, or a direct `set_range`).
    Retarget,
}
