// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Period bars with drill-down into sub-periods.

use alloc::vec::Vec;

use epochline_axis::{Span, Viewport, span};
use epochline_data::{Period, PeriodForest};

use crate::{LayoutSettings, TextMeasure};

/// One bar of the period band.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodBar<'a> {
    /// The period drawn.
    pub period: &'a Period,
    /// Horizontal extent, in percent of the axis.
    pub span: Span,
    /// `0` for top-level periods, `1` for drilled-down children.
    pub depth: usize,
    /// Clicking the bar zooms to the period. Only top-level bars are.
    pub clickable: bool,
    /// Font size at which the name fits the bar.
    pub font_size: f64,
}

impl PeriodBar<'_> {
    /// Window to show when the bar is clicked, if it is clickable.
    #[must_use]
    pub fn zoom_target(&self) -> Option<Viewport> {
        self.clickable.then(|| {
            Viewport::new(f64::from(self.period.start), f64::from(self.period.end))
        })
    }
}

/// Lays out the period band for `viewport`.
///
/// Top-level periods become bars in start order. A top-level bar wider than
/// [`LayoutSettings::drill_down_width`] is replaced by bars for its direct
/// children. A period with no children in view keeps its own bar. Periods
/// that do not intersect the viewport are skipped.
pub fn layout_periods<'a>(
    forest: &'a PeriodForest,
    viewport: &Viewport,
    settings: &LayoutSettings,
    measure: &mut impl TextMeasure,
) -> Vec<PeriodBar<'a>> {
    let mut bars = Vec::new();
    for root in forest.roots() {
        if !intersects(root, viewport) {
            continue;
        }
        let extent = bar_span(root, viewport);
        let children: Vec<&Period> = if extent.width > settings.drill_down_width {
            forest
                .children_of(&root.name)
                .filter(|c| intersects(c, viewport))
                .collect()
        } else {
            Vec::new()
        };
        if children.is_empty() {
            bars.push(bar(root, extent, 0, true, settings, measure));
        } else {
            for child in children {
                bars.push(bar(child, bar_span(child, viewport), 1, false, settings, measure));
            }
        }
    }
    bars
}

fn intersects(period: &Period, viewport: &Viewport) -> bool {
    f64::from(period.end) >= viewport.start && f64::from(period.start) <= viewport.end
}

fn bar_span(period: &Period, viewport: &Viewport) -> Span {
    span(f64::from(period.start), f64::from(period.end), viewport)
}

fn bar<'a>(
    period: &'a Period,
    extent: Span,
    depth: usize,
    clickable: bool,
    settings: &LayoutSettings,
    measure: &mut impl TextMeasure,
) -> PeriodBar<'a> {
    PeriodBar {
        period,
        span: extent,
        depth,
        clickable,
        font_size: settings.fonts.fit(&period.name, extent.width, measure),
    }
}
