// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use epochline_axis::Viewport;
use epochline_cluster::{Clusterer, visible};
use epochline_data::{Event, IdentityKey, Period, PeriodForest};
use epochline_layout::{
    LabelStacking, LayoutContext, LayoutSettings, TextMeasure, layout_clusters, layout_periods,
};
use epochline_selection::{HoverTarget, InteractionState, SelectionChange};
use epochline_viewport::{
    RangeChange, SliderDrag, SliderHandle, ViewportController, ViewportDebugInfo, ZoomDirection,
};
use kurbo::{Point, Rect};

use crate::{Frame, TimelineConfig, TimelineError, TimelineTrace};

/// A headless timeline: data, visible window and interaction state.
///
/// Input methods take `&mut self` and return what changed, if anything.
/// [`Timeline::frame`] takes `&self` and recomputes clusters and layout from
/// scratch.
#[derive(Debug)]
pub struct Timeline<T = ()> {
    events: Vec<Event>,
    periods: PeriodForest,
    viewport: ViewportController,
    slider: SliderDrag,
    interaction: InteractionState,
    stacking: LabelStacking,
    clusterer: Clusterer,
    layout: LayoutSettings,
    trace: T,
}

impl Timeline {
    /// Builds a timeline over `events` and `periods`.
    ///
    /// Fails if the configured total range is unusable or the periods do not
    /// form a forest.
    pub fn new(
        events: Vec<Event>,
        periods: Vec<Period>,
        config: TimelineConfig,
    ) -> Result<Self, TimelineError> {
        let viewport =
            ViewportController::with_settings(config.total, config.initial, config.viewport)?;
        let periods = PeriodForest::new(periods)?;
        Ok(Self {
            events,
            periods,
            viewport,
            slider: SliderDrag::default(),
            interaction: InteractionState::new(),
            stacking: LabelStacking::new(),
            clusterer: Clusterer::new(config.cluster_threshold),
            layout: config.layout,
            trace: (),
        })
    }
}

impl<T: TimelineTrace> Timeline<T> {
    /// Replaces the trace sink.
    pub fn with_trace<U: TimelineTrace>(self, trace: U) -> Timeline<U> {
        Timeline {
            events: self.events,
            periods: self.periods,
            viewport: self.viewport,
            slider: self.slider,
            interaction: self.interaction,
            stacking: self.stacking,
            clusterer: self.clusterer,
            layout: self.layout,
            trace,
        }
    }

    /// All events, in dataset order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The period forest.
    #[must_use]
    pub fn periods(&self) -> &PeriodForest {
        &self.periods
    }

    /// The visible window.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// Slider handle geometry.
    #[must_use]
    pub fn handle(&self) -> SliderHandle {
        self.viewport.handle()
    }

    /// Hover and selection state.
    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Hover z-order table.
    #[must_use]
    pub fn stacking(&self) -> &LabelStacking {
        &self.stacking
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Snapshot of the viewport controller for debugging.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        self.viewport.debug_info()
    }

    /// Looks up an event by identity.
    #[must_use]
    pub fn event(&self, key: &IdentityKey) -> Option<&Event> {
        self.events.iter().find(|e| &e.identity_key() == key)
    }

    /// The selected event, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        self.event(self.interaction.selected()?)
    }

    /// Pointer pressed at `pointer` over the slider drawn in `track`.
    ///
    /// Returns `true` if a drag of the handle started.
    pub fn pointer_down(&mut self, pointer: Point, track: Rect) -> bool {
        self.slider.press(pointer, track, self.viewport.handle())
    }

    /// Pointer moved. Pans the window while a slider drag is active.
    pub fn pointer_move(&mut self, pointer: Point, track: Rect) -> Option<RangeChange> {
        let position = self.slider.drag_to(pointer, track)?;
        let change = self.viewport.set_by_drag(position);
        self.record_range(change)
    }

    /// Pointer released. Ends any slider drag.
    pub fn pointer_up(&mut self) {
        self.slider.release();
    }

    /// Returns `true` while the host should route pointer input here even
    /// when it leaves the slider.
    #[must_use]
    pub fn needs_pointer_capture(&self) -> bool {
        self.slider.is_dragging()
    }

    /// Zooms in one step about the window midpoint.
    pub fn zoom_in(&mut self) -> Option<RangeChange> {
        let change = self.viewport.zoom(ZoomDirection::In);
        self.record_range(change)
    }

    /// Zooms out one step about the window midpoint.
    pub fn zoom_out(&mut self) -> Option<RangeChange> {
        let change = self.viewport.zoom(ZoomDirection::Out);
        self.record_range(change)
    }

    /// Scroll container moved; see [`ViewportController::set_by_scroll`].
    pub fn scroll(
        &mut self,
        scroll_left: f64,
        scroll_width: f64,
        client_width: f64,
    ) -> Option<RangeChange> {
        let change = self
            .viewport
            .set_by_scroll(scroll_left, scroll_width, client_width);
        self.record_range(change)
    }

    /// Shows `range`, clamped into the total range.
    pub fn zoom_to(&mut self, range: Viewport) -> Option<RangeChange> {
        let change = self.viewport.zoom_to(range);
        self.record_range(change)
    }

    /// A period bar was clicked.
    ///
    /// Only top-level periods respond; they zoom to their own years.
    pub fn click_period(&mut self, name: &str) -> Option<RangeChange> {
        let period = self.periods.get(name).filter(|p| p.is_top_level())?;
        let range = Viewport::new(f64::from(period.start), f64::from(period.end));
        self.zoom_to(range)
    }

    /// The pointer is over `target` at screen position `position`.
    ///
    /// Hovering an event also raises its label above every other label.
    pub fn hover(&mut self, target: HoverTarget, position: Point) -> Option<SelectionChange> {
        if let HoverTarget::Event(key) = &target {
            self.stacking.raise(key);
        }
        let change = self.interaction.set_hover(target, position);
        self.record_selection(change)
    }

    /// The pointer left whatever it was over.
    pub fn clear_hover(&mut self) -> Option<SelectionChange> {
        let change = self.interaction.clear_hover();
        self.record_selection(change)
    }

    /// Selects the event with identity `key`.
    ///
    /// Keys that match no event are ignored.
    pub fn select(&mut self, key: &IdentityKey) -> Option<SelectionChange> {
        self.event(key)?;
        let change = self.interaction.select_key(key.clone());
        self.record_selection(change)
    }

    /// Closes the selected event's detail view.
    pub fn close_selection(&mut self) -> Option<SelectionChange> {
        let change = self.interaction.close_selection();
        self.record_selection(change)
    }

    /// Builds the render instructions for the current state.
    pub fn frame(&self, measure: &mut impl TextMeasure) -> Frame<'_> {
        let view = self.viewport.viewport();
        let clusters = self
            .clusterer
            .cluster(visible(&self.events, &view), &view);
        let ctx = LayoutContext {
            viewport: view,
            selected: self.interaction.selected(),
            hovered: self.interaction.hovered_event(),
            stacking: &self.stacking,
        };
        Frame {
            viewport: view,
            handle: self.viewport.handle(),
            periods: layout_periods(&self.periods, &view, &self.layout, measure),
            clusters: layout_clusters(&clusters, &ctx, &self.layout),
            hover: self.interaction.hover(),
            selected: self.selected_event(),
            revision: self.interaction.revision(),
        }
    }

    fn record_range(&mut self, change: Option<RangeChange>) -> Option<RangeChange> {
        if let Some(change) = &change {
            self.trace.range_changed(change);
        }
        change
    }

    fn record_selection(&mut self, change: Option<SelectionChange>) -> Option<SelectionChange> {
        if let Some(change) = &change {
            self.trace
                .selection_changed(self.interaction.revision(), change);
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use epochline_axis::Viewport;
    use epochline_data::{Event, IdentityKey, Period};
    use epochline_selection::HoverTarget;
    use kurbo::{Point, Rect};

    use super::Timeline;
    use crate::{TimelineConfig, TimelineRecorder};

    fn timeline() -> Timeline<TimelineRecorder> {
        Timeline::new(
            vec![
                Event::new(-3000, "Writing").with_id("writing"),
                Event::new(1066, "Hastings"),
            ],
            vec![
                Period::new("Antiquity", -3000, 500),
                Period::new("Bronze Age", -3000, -1200).with_parent("Antiquity"),
            ],
            TimelineConfig::default(),
        )
        .unwrap()
        .with_trace(TimelineRecorder::new())
    }

    #[test]
    fn only_top_level_periods_respond_to_clicks() {
        let mut tl = timeline();
        assert!(tl.click_period("Bronze Age").is_none());
        assert!(tl.click_period("Nowhere").is_none());

        let change = tl.click_period("Antiquity").unwrap();
        assert_eq!(change.after, Viewport::new(-3000.0, 500.0));
        assert_eq!(tl.trace().ranges.changes().len(), 1);
    }

    #[test]
    fn drag_session_captures_the_pointer_only_while_dragging() {
        let mut tl = timeline();
        let track = Rect::new(0.0, 0.0, 1000.0, 20.0);
        let handle = tl.handle();
        let on_handle = Point::new(handle.position_percent * 10.0 + 1.0, 10.0);

        assert!(!tl.pointer_down(Point::new(5.0, 10.0), track));
        assert!(!tl.needs_pointer_capture());
        assert!(tl.pointer_move(Point::new(50.0, 10.0), track).is_none());

        assert!(tl.pointer_down(on_handle, track));
        assert!(tl.needs_pointer_capture());
        let change = tl
            .pointer_move(Point::new(on_handle.x - 100.0, 10.0), track)
            .unwrap();
        assert!(change.after.start < change.before.start);

        tl.pointer_up();
        assert!(!tl.needs_pointer_capture());
        assert!(tl.pointer_move(Point::new(0.0, 10.0), track).is_none());
    }

    #[test]
    fn hovering_an_event_raises_its_label() {
        let mut tl = timeline();
        let key = IdentityKey::from("writing");
        tl.hover(HoverTarget::Event(key.clone()), Point::new(1.0, 2.0));
        assert!(tl.stacking().z_of(&key) > epochline_layout::BASE_Z);
        assert_eq!(tl.trace().selections.changes().len(), 1);
    }

    #[test]
    fn unknown_keys_are_not_selected() {
        let mut tl = timeline();
        assert!(tl.select(&IdentityKey::from("missing")).is_none());
        assert!(tl.select(&IdentityKey::from("1066-Hastings")).is_some());
        assert_eq!(tl.selected_event().map(Event::name), Some("Hastings"));
    }
}
