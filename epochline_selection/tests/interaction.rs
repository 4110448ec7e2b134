// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A pointer session over a timeline, observed through a recorder.

use epochline_data::{Event, IdentityKey};
use epochline_selection::{
    HoverTarget, InteractionState, SelectionChange, SelectionRecorder, SelectionTrace,
};
use kurbo::Point;

fn apply(
    trace: &mut impl SelectionTrace,
    state: &InteractionState,
    change: Option<SelectionChange>,
) {
    if let Some(change) = change {
        trace.selection_changed(state.revision(), &change);
    }
}

#[test]
fn session_is_recorded_in_revision_order() {
    let rome = Event::new(-753, "Founding of Rome");
    let carthage = Event::new(-146, "Fall of Carthage").with_id("carthage");
    let mut state = InteractionState::new();
    let mut rec = SelectionRecorder::new();

    let change = state.set_hover(
        HoverTarget::Period("Classical Antiquity".into()),
        Point::new(100.0, 10.0),
    );
    apply(&mut rec, &state, change);

    let change = state.set_hover(
        HoverTarget::cluster([&carthage, &rome]),
        Point::new(140.0, 60.0),
    );
    apply(&mut rec, &state, change);

    let change = state.select_event(&rome);
    apply(&mut rec, &state, change);

    let change = state.select_event(&carthage);
    apply(&mut rec, &state, change);

    let change = state.clear_hover();
    apply(&mut rec, &state, change);

    let change = state.close_selection();
    apply(&mut rec, &state, change);

    let revisions: Vec<u64> = rec.changes().iter().map(|(r, _)| *r).collect();
    assert_eq!(revisions, [1, 2, 3, 4, 5, 6]);

    let (_, hovered) = &rec.changes()[1];
    let SelectionChange::Hovered(hover) = hovered else {
        panic!("expected a hover, got {hovered:?}");
    };
    assert_eq!(
        hover.target,
        HoverTarget::Cluster(vec![
            IdentityKey::from("-753-Founding-of-Rome"),
            IdentityKey::from("carthage"),
        ])
    );

    assert_eq!(
        rec.changes()[3].1,
        SelectionChange::Selected(IdentityKey::from("carthage"))
    );
    assert_eq!(rec.changes()[5].1, SelectionChange::Closed);
    assert!(state.hover().is_none());
    assert!(state.selected().is_none());
}

#[test]
fn hovering_something_else_keeps_the_selection() {
    let event = Event::new(1492, "Voyage").with_id("voyage");
    let mut state = InteractionState::new();

    state.select_event(&event);
    state.set_hover(HoverTarget::Period("Renaissance".into()), Point::ZERO);
    state.clear_hover();

    assert!(state.is_selected(&IdentityKey::from("voyage")));
    assert_eq!(state.hovered_event(), None);
}
