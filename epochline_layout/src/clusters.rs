// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render instructions for event clusters.

use alloc::vec::Vec;

use epochline_axis::{FormattedYear, Span, Viewport, format_year, span};
use epochline_cluster::Cluster;
use epochline_data::{Event, IdentityKey};
use smallvec::SmallVec;

use crate::geometry::{
    RANGE_LABEL_ABOVE, RANGE_LABEL_BELOW, RANGE_WHISKER, RANGE_WHISKER_ABOVE,
    RANGE_WHISKER_BELOW, SINGLE_LABEL_ABOVE, SINGLE_LABEL_BELOW, SINGLE_WHISKER,
    STACK_OUTER_ABOVE, STACK_OUTER_BELOW, STACK_WHISKER, Side, Whisker, axis_whisker,
};
use crate::{LabelStacking, LayoutSettings};

/// Per-frame inputs shared by every cluster.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext<'s> {
    /// The visible window.
    pub viewport: Viewport,
    /// Identity of the selected event, if any.
    pub selected: Option<&'s IdentityKey>,
    /// Identity of the hovered event, if any.
    pub hovered: Option<&'s IdentityKey>,
    /// Hover z-order table.
    pub stacking: &'s LabelStacking,
}

/// One event's label.
#[derive(Clone, Debug, PartialEq)]
pub struct Label<'a> {
    /// The event the label describes.
    pub event: &'a Event,
    /// Identity used for selection and z-order.
    pub key: IdentityKey,
    /// Year, formatted as `"… BCE"` or `"… CE"`.
    pub year: FormattedYear,
    /// Event name, with the unknown-event fallback applied.
    pub name: &'a str,
    /// The event is the current selection.
    pub selected: bool,
    /// The event is under the pointer.
    pub hovered: bool,
    /// Stacking order; higher draws on top.
    pub z: u32,
}

impl<'a> Label<'a> {
    fn new(event: &'a Event, ctx: &LayoutContext<'_>) -> Self {
        let key = event.identity_key();
        Self {
            event,
            year: format_year(event.year()),
            name: event.name(),
            selected: ctx.selected == Some(&key),
            hovered: ctx.hovered == Some(&key),
            z: ctx.stacking.z_of(&key),
            key,
        }
    }
}

/// A label placed on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel<'a> {
    /// Horizontal position, in percent of the axis.
    pub x: f64,
    /// Side of the axis.
    pub side: Side,
    /// Top edge, in pixels from the axis.
    pub top: f64,
    /// Contents.
    pub label: Label<'a>,
}

/// Labels stacked vertically on one side of the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStack<'a> {
    /// Side of the axis.
    pub side: Side,
    /// Edge of the stack farthest from the axis, in pixels from the axis.
    pub outer_edge: f64,
    /// Labels ordered by year ascending.
    pub labels: SmallVec<[Label<'a>; 2]>,
}

/// One end of a range rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeEnd<'a> {
    /// Connector from the rectangle to the label.
    pub whisker: Whisker,
    /// The end member's label.
    pub label: PlacedLabel<'a>,
}

/// A large cluster drawn as a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeLayout<'a> {
    /// Horizontal extent from the earliest to the latest member.
    pub span: Span,
    /// Number of members, shown on the rectangle.
    pub count: usize,
    /// Identity of every member, ordered by year.
    pub members: Vec<IdentityKey>,
    /// The earliest member, on the cluster's side.
    pub earliest: RangeEnd<'a>,
    /// The latest member, on the opposite side.
    pub latest: RangeEnd<'a>,
    /// Window to show when the rectangle is clicked.
    pub zoom_target: Viewport,
}

/// Render instructions for one cluster.
#[derive(Clone, Debug, PartialEq)]
pub enum ClusterLayout<'a> {
    /// A lone event: a dot, a whisker and a label.
    Single {
        /// Dot position, in percent of the axis.
        x: f64,
        /// Connector from the dot to the label.
        whisker: Whisker,
        /// The label.
        label: PlacedLabel<'a>,
    },
    /// A few events: one stack above and one below the axis.
    Stack {
        /// Dot position, in percent of the axis.
        x: f64,
        /// Connectors to the upper and lower stacks.
        whiskers: [Whisker; 2],
        /// The earlier half of the members.
        above: LabelStack<'a>,
        /// The later half of the members.
        below: LabelStack<'a>,
    },
    /// Many events: a rectangle labelled with a count.
    Range(RangeLayout<'a>),
}

impl<'a> ClusterLayout<'a> {
    /// Number of events drawn or summarized by this layout.
    #[must_use]
    pub fn event_count(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Stack { above, below, .. } => above.labels.len() + below.labels.len(),
            Self::Range(range) => range.count,
        }
    }

    /// Iterates over every label this layout draws.
    pub fn labels(&self) -> impl Iterator<Item = &Label<'a>> + '_ {
        let (single, stacks, ends): (Option<&Label<'a>>, _, _) = match self {
            Self::Single { label, .. } => (Some(&label.label), None, None),
            Self::Stack { above, below, .. } => (None, Some((above, below)), None),
            Self::Range(range) => (None, None, Some(range)),
        };
        single
            .into_iter()
            .chain(
                stacks
                    .into_iter()
                    .flat_map(|(a, b)| a.labels.iter().chain(b.labels.iter())),
            )
            .chain(
                ends.into_iter()
                    .flat_map(|r| [&r.earliest.label.label, &r.latest.label.label]),
            )
    }
}

/// Lays out `clusters` left to right, alternating label sides by index.
pub fn layout_clusters<'a>(
    clusters: &[Cluster<&'a Event>],
    ctx: &LayoutContext<'_>,
    settings: &LayoutSettings,
) -> Vec<ClusterLayout<'a>> {
    clusters
        .iter()
        .enumerate()
        .map(|(index, cluster)| layout_cluster(index, cluster, ctx, settings))
        .collect()
}

/// Lays out the `index`-th cluster of a frame.
pub fn layout_cluster<'a>(
    index: usize,
    cluster: &Cluster<&'a Event>,
    ctx: &LayoutContext<'_>,
    settings: &LayoutSettings,
) -> ClusterLayout<'a> {
    let side = Side::alternating(index);
    let x = cluster.anchor();
    let members = cluster.members();

    if members.len() <= 1 {
        let event = *cluster.earliest();
        return ClusterLayout::Single {
            x,
            whisker: axis_whisker(x, side, SINGLE_WHISKER),
            label: PlacedLabel {
                x,
                side,
                top: match side {
                    Side::Above => SINGLE_LABEL_ABOVE,
                    Side::Below => SINGLE_LABEL_BELOW,
                },
                label: Label::new(event, ctx),
            },
        };
    }

    if members.len() <= settings.max_stack {
        let split = members.len().div_ceil(2);
        let (upper, lower) = members.split_at(split);
        return ClusterLayout::Stack {
            x,
            whiskers: [
                axis_whisker(x, Side::Above, STACK_WHISKER),
                axis_whisker(x, Side::Below, STACK_WHISKER),
            ],
            above: LabelStack {
                side: Side::Above,
                outer_edge: STACK_OUTER_ABOVE,
                labels: upper.iter().map(|&e| Label::new(e, ctx)).collect(),
            },
            below: LabelStack {
                side: Side::Below,
                outer_edge: STACK_OUTER_BELOW,
                labels: lower.iter().map(|&e| Label::new(e, ctx)).collect(),
            },
        };
    }

    let first = *cluster.earliest();
    let last = *cluster.latest();
    let extent = span(f64::from(first.year()), f64::from(last.year()), &ctx.viewport);
    ClusterLayout::Range(RangeLayout {
        span: extent,
        count: members.len(),
        members: members.iter().map(|e| e.identity_key()).collect(),
        earliest: range_end(extent.left, side, first, ctx),
        latest: range_end(extent.right(), side.flip(), last, ctx),
        zoom_target: Viewport::new(f64::from(first.year()), f64::from(last.year())),
    })
}

fn range_end<'a>(x: f64, side: Side, event: &'a Event, ctx: &LayoutContext<'_>) -> RangeEnd<'a> {
    let (whisker_top, label_top) = match side {
        Side::Above => (RANGE_WHISKER_ABOVE, RANGE_LABEL_ABOVE),
        Side::Below => (RANGE_WHISKER_BELOW, RANGE_LABEL_BELOW),
    };
    RangeEnd {
        whisker: Whisker {
            x,
            side,
            top: whisker_top,
            length: RANGE_WHISKER,
        },
        label: PlacedLabel {
            x,
            side,
            top: label_top,
            label: Label::new(event, ctx),
        },
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use epochline_axis::Viewport;
    use epochline_cluster::Clusterer;
    use epochline_data::{Event, IdentityKey};

    use super::{ClusterLayout, LayoutContext, layout_clusters};
    use crate::{LabelStacking, LayoutSettings, Side};

    fn events(years: &[i32]) -> Vec<Event> {
        years
            .iter()
            .map(|&y| Event::new(y, format!("event {y}")).with_id(format!("e{y}")))
            .collect()
    }

    fn lay_out<'a>(
        events: &'a [Event],
        view: Viewport,
        selected: Option<&IdentityKey>,
        stacking: &LabelStacking,
    ) -> Vec<ClusterLayout<'a>> {
        let clusters = Clusterer::default().cluster(events, &view);
        let ctx = LayoutContext {
            viewport: view,
            selected,
            hovered: None,
            stacking,
        };
        layout_clusters(&clusters, &ctx, &LayoutSettings::default())
    }

    #[test]
    fn strategy_follows_cluster_size() {
        let view = Viewport::new(0.0, 1000.0);
        let stacking = LabelStacking::new();
        // Clusters of 1, 3 and 6 members.
        let data = events(&[10, 300, 302, 304, 700, 701, 702, 703, 704, 705]);
        let layouts = lay_out(&data, view, None, &stacking);

        assert_eq!(layouts.len(), 3);
        assert!(matches!(layouts[0], ClusterLayout::Single { .. }));
        assert!(matches!(layouts[1], ClusterLayout::Stack { .. }));
        assert!(matches!(layouts[2], ClusterLayout::Range(_)));
        assert_eq!(
            layouts.iter().map(ClusterLayout::event_count).collect::<Vec<_>>(),
            [1, 3, 6]
        );
    }

    #[test]
    fn singles_alternate_sides() {
        let view = Viewport::new(0.0, 1000.0);
        let stacking = LabelStacking::new();
        let data = events(&[100, 300, 500]);
        let layouts = lay_out(&data, view, None, &stacking);

        let sides: Vec<(Side, f64)> = layouts
            .iter()
            .map(|l| match l {
                ClusterLayout::Single { label, whisker, .. } => {
                    assert_eq!(whisker.side, label.side);
                    (label.side, label.top)
                }
                _ => panic!("expected singles"),
            })
            .collect();
        assert_eq!(
            sides,
            [(Side::Above, -52.0), (Side::Below, 30.0), (Side::Above, -52.0)]
        );
    }

    #[test]
    fn stacks_split_with_the_larger_half_above() {
        let view = Viewport::new(0.0, 1000.0);
        let stacking = LabelStacking::new();
        let data = events(&[500, 501, 502]);
        let layouts = lay_out(&data, view, None, &stacking);

        let ClusterLayout::Stack {
            above,
            below,
            whiskers,
            ..
        } = &layouts[0]
        else {
            panic!("expected a stack");
        };
        let years = |s: &super::LabelStack<'_>| -> Vec<i32> {
            s.labels.iter().map(|l| l.event.year()).collect()
        };
        assert_eq!(years(above), [500, 501]);
        assert_eq!(years(below), [502]);
        assert_eq!(above.outer_edge, -85.0);
        assert_eq!(below.outer_edge, 75.0);
        assert_eq!(whiskers[0].side, Side::Above);
        assert_eq!(whiskers[1].side, Side::Below);
    }

    #[test]
    fn ranges_expose_both_ends_and_a_zoom_target() {
        let view = Viewport::new(0.0, 1000.0);
        let stacking = LabelStacking::new();
        let data = events(&[-400, 200, 201, 203, 205, 207, 209]);
        let layouts = lay_out(&data, view, None, &stacking);

        // -400 is clamped to 0 and lands in its own cluster at index 0, so the
        // range is the second cluster and starts below the axis.
        let ClusterLayout::Range(range) = &layouts[1] else {
            panic!("expected a range");
        };
        assert_eq!(range.count, 6);
        assert_eq!(range.members.len(), 6);
        assert_eq!(range.zoom_target, Viewport::new(200.0, 209.0));
        assert!((range.span.left - 20.0).abs() < 1e-9);
        assert!((range.span.right() - 20.9).abs() < 1e-9);

        assert_eq!(range.earliest.label.side, Side::Below);
        assert_eq!(range.earliest.label.top, 37.0);
        assert_eq!(range.earliest.whisker.top, 12.0);
        assert_eq!(range.latest.label.side, Side::Above);
        assert_eq!(range.latest.label.top, -55.0);
        assert_eq!(range.latest.whisker.top, -27.0);
        assert_eq!(range.earliest.label.label.event.year(), 200);
        assert_eq!(range.latest.label.label.event.year(), 209);
    }

    #[test]
    fn labels_carry_selection_and_z_order() {
        let view = Viewport::new(0.0, 1000.0);
        let mut stacking = LabelStacking::new();
        let data = events(&[500, 501]);
        let chosen = IdentityKey::from("e501");
        let z = stacking.raise(&chosen);

        let layouts = lay_out(&data, view, Some(&chosen), &stacking);
        let labels: Vec<_> = layouts[0].labels().collect();
        assert_eq!(labels.len(), 2);
        assert!(!labels[0].selected);
        assert!(labels[1].selected);
        assert_eq!(labels[1].z, z);
        assert_eq!(format!("{}", labels[0].year), "500 CE");
        assert_eq!(labels[0].name, "event 500");
    }
}
