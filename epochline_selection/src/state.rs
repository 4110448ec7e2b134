// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use epochline_data::{Event, IdentityKey};
use kurbo::Point;

use crate::SelectionChange;

/// What the pointer is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    /// A single event label or dot.
    Event(IdentityKey),
    /// A period bar, by period name.
    Period(String),
    /// A range rectangle; member identities ordered by year.
    Cluster(Vec<IdentityKey>),
}

impl HoverTarget {
    /// Hover target for a cluster of `members`, listed by year ascending.
    ///
    /// Members with equal years keep their input order.
    pub fn cluster<'a>(members: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut dated: Vec<(i32, IdentityKey)> = members
            .into_iter()
            .map(|e| (e.year(), e.identity_key()))
            .collect();
        dated.sort_by_key(|(year, _)| *year);
        Self::Cluster(dated.into_iter().map(|(_, key)| key).collect())
    }
}

/// The hovered item and where the pointer was when it was hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    /// The hovered item.
    pub target: HoverTarget,
    /// Pointer position in screen coordinates, for placing a popup.
    pub position: Point,
}

/// Hover and selection cells for one timeline.
///
/// Both cells are last-write-wins: a new hover replaces the previous one and a
/// new selection replaces the previous selection. [`InteractionState::revision`]
/// increases by one on every effective change and never otherwise.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    hover: Option<Hover>,
    selected: Option<IdentityKey>,
    revision: u64,
}

impl InteractionState {
    /// Creates a state with nothing hovered or selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hover: None,
            selected: None,
            revision: 0,
        }
    }

    /// The current hover, if any.
    #[must_use]
    pub fn hover(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    /// Identity of the hovered event, if the hover is on an event.
    #[must_use]
    pub fn hovered_event(&self) -> Option<&IdentityKey> {
        match &self.hover {
            Some(Hover {
                target: HoverTarget::Event(key),
                ..
            }) => Some(key),
            _ => None,
        }
    }

    /// Identity of the selected event, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&IdentityKey> {
        self.selected.as_ref()
    }

    /// Returns `true` if `key` is the selected event.
    #[must_use]
    pub fn is_selected(&self, key: &IdentityKey) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Monotonic counter of effective changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the hover with `target` at `position`.
    ///
    /// Hovering the same target at the same position is not a change.
    pub fn set_hover(&mut self, target: HoverTarget, position: Point) -> Option<SelectionChange> {
        let next = Hover { target, position };
        if self.hover.as_ref() == Some(&next) {
            return None;
        }
        self.hover = Some(next.clone());
        Some(self.bump(SelectionChange::Hovered(next)))
    }

    /// Clears the hover, for example when the pointer leaves the timeline.
    pub fn clear_hover(&mut self) -> Option<SelectionChange> {
        self.hover.take()?;
        Some(self.bump(SelectionChange::HoverCleared))
    }

    /// Selects `event`, replacing any previous selection.
    pub fn select_event(&mut self, event: &Event) -> Option<SelectionChange> {
        self.select_key(event.identity_key())
    }

    /// Selects the event with identity `key`, replacing any previous selection.
    pub fn select_key(&mut self, key: IdentityKey) -> Option<SelectionChange> {
        if self.selected.as_ref() == Some(&key) {
            return None;
        }
        self.selected = Some(key.clone());
        Some(self.bump(SelectionChange::Selected(key)))
    }

    /// Closes the selection detail.
    pub fn close_selection(&mut self) -> Option<SelectionChange> {
        self.selected.take()?;
        Some(self.bump(SelectionChange::Closed))
    }

    fn bump(&mut self, change: SelectionChange) -> SelectionChange {
        self.revision = self.revision.wrapping_add(1);
        change
    }
}
