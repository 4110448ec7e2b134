// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout properties over generated event sets.

use epochline_axis::Viewport;
use epochline_cluster::{Clusterer, visible};
use epochline_data::Event;
use epochline_layout::{
    ClusterLayout, LabelStacking, LayoutContext, LayoutSettings, Side, layout_clusters,
};

fn dense_events(count: usize, seed: u64) -> Vec<Event> {
    let mut state = seed;
    (0..count)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let year = ((state >> 33) % 3000) as i32 - 1000;
            Event::new(year, format!("event {i}"))
        })
        .collect()
}

#[test]
fn layouts_account_for_every_visible_event() {
    let events = dense_events(500, 9);
    let view = Viewport::new(-800.0, 1800.0);
    let shown: Vec<&Event> = visible(&events, &view).collect();
    let clusters = Clusterer::default().cluster(shown.iter().copied(), &view);

    let stacking = LabelStacking::new();
    let ctx = LayoutContext {
        viewport: view,
        selected: None,
        hovered: None,
        stacking: &stacking,
    };
    let layouts = layout_clusters(&clusters, &ctx, &LayoutSettings::default());

    assert_eq!(layouts.len(), clusters.len());
    let total: usize = layouts.iter().map(ClusterLayout::event_count).sum();
    assert_eq!(total, shown.len());

    for (index, layout) in layouts.iter().enumerate() {
        match layout {
            ClusterLayout::Single { label, .. } => {
                assert_eq!(label.side, Side::alternating(index));
            }
            ClusterLayout::Stack { above, below, .. } => {
                assert!(above.labels.len() >= below.labels.len());
                assert!(above.labels.len() - below.labels.len() <= 1);
            }
            ClusterLayout::Range(range) => {
                assert!(range.count > 4);
                assert_eq!(range.earliest.label.side, Side::alternating(index));
                assert_eq!(range.latest.label.side, Side::alternating(index).flip());
                assert!(range.span.left <= range.span.right());
                assert!(range.zoom_target.start <= range.zoom_target.end);
            }
        }
    }
}

#[test]
fn a_raised_label_outranks_its_neighbours() {
    let events = vec![
        Event::new(100, "Left").with_id("left"),
        Event::new(101, "Right").with_id("right"),
    ];
    let view = Viewport::new(0.0, 1000.0);
    let clusters = Clusterer::default().cluster(&events, &view);

    let mut stacking = LabelStacking::new();
    stacking.raise(&events[1].identity_key());
    stacking.raise(&events[0].identity_key());

    let hovered = events[0].identity_key();
    let ctx = LayoutContext {
        viewport: view,
        selected: None,
        hovered: Some(&hovered),
        stacking: &stacking,
    };
    let layouts = layout_clusters(&clusters, &ctx, &LayoutSettings::default());
    let labels: Vec<_> = layouts[0].labels().collect();

    assert!(labels[0].hovered);
    assert!(!labels[1].hovered);
    assert!(labels[0].z > labels[1].z);
}
