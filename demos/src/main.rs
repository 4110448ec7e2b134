// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless timeline walkthrough.
//!
//! Loads the bundled datasets, drives a few interactions and prints each
//! resulting frame. Viewport and selection changes are logged through
//! `tracing`; set `RUST_LOG` to adjust.
//!
//! Run:
//! - `cargo run -p epochline_demos --bin timeline_walkthrough`

use std::error::Error;

use epochline::{
    AverageAdvance, ClusterLayout, Event, Frame, HoverTarget, Period, Timeline, TimelineConfig,
    TracingTrace, format_year,
};
use kurbo::{Point, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;

const EVENTS: &str = include_str!("../data/events.json");
const PERIODS: &str = include_str!("../data/periods.json");

const AXIS_WIDTH: f64 = 1200.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();

    let events: Vec<Event> = serde_json::from_str(EVENTS)?;
    let periods: Vec<Period> = serde_json::from_str(PERIODS)?;
    info!(events = events.len(), periods = periods.len(), "datasets loaded");

    let mut timeline =
        Timeline::new(events, periods, TimelineConfig::default())?.with_trace(TracingTrace);
    let mut measure = AverageAdvance::new(AXIS_WIDTH);
    let track = Rect::new(0.0, 0.0, AXIS_WIDTH, 24.0);

    print_frame("initial", &timeline.frame(&mut measure));

    timeline.zoom_in();
    print_frame("after zoom in", &timeline.frame(&mut measure));

    // Grab the middle of the slider handle and drag it 120px to the left.
    let handle = timeline.handle();
    let grab = Point::new(
        track.x0 + track.width() * (handle.position_percent + handle.width_percent / 2.0) / 100.0,
        track.center().y,
    );
    if timeline.pointer_down(grab, track) {
        timeline.pointer_move(Point::new(grab.x - 60.0, grab.y), track);
        timeline.pointer_move(Point::new(grab.x - 120.0, grab.y), track);
        timeline.pointer_up();
    }
    print_frame("after slider drag", &timeline.frame(&mut measure));

    timeline.click_period("Antiquity");
    let target = {
        let frame = timeline.frame(&mut measure);
        print_frame("after clicking Antiquity", &frame);
        frame.clusters.iter().find_map(|layout| match layout {
            ClusterLayout::Range(range) => Some(range.zoom_target),
            _ => None,
        })
    };
    if let Some(target) = target {
        timeline.zoom_to(target);
        print_frame("after clicking a range cluster", &timeline.frame(&mut measure));
    }

    let first = timeline
        .frame(&mut measure)
        .clusters
        .iter()
        .flat_map(ClusterLayout::labels)
        .next()
        .map(|label| label.key.clone());
    if let Some(key) = first {
        timeline.hover(HoverTarget::Event(key.clone()), Point::new(200.0, 40.0));
        timeline.select(&key);
        if let Some(event) = timeline.selected_event() {
            print_detail(event);
        }
        timeline.close_selection();
        timeline.clear_hover();
    }

    Ok(())
}

fn print_frame(title: &str, frame: &Frame<'_>) {
    let (start, end) = frame.viewport.year_bounds();
    println!("== {title} ==");
    println!(
        "window {} .. {}   handle at {:.1}% width {:.1}%",
        format_year(start),
        format_year(end),
        frame.handle.position_percent,
        frame.handle.width_percent
    );

    for bar in &frame.periods {
        println!(
            "  {indent}[{name}] {left:.1}% +{width:.1}% font {font}px{click}",
            indent = "  ".repeat(bar.depth),
            name = bar.period.name,
            left = bar.span.left,
            width = bar.span.width,
            font = bar.font_size,
            click = if bar.clickable { " (clickable)" } else { "" },
        );
    }

    for layout in &frame.clusters {
        match layout {
            ClusterLayout::Single { x, label, .. } => {
                println!(
                    "  • {x:5.1}% {:?}: {}: {}",
                    label.side, label.label.year, label.label.name
                );
            }
            ClusterLayout::Stack { x, above, below, .. } => {
                println!("  ≡ {x:5.1}% stack of {}", layout.event_count());
                for label in above.labels.iter().chain(below.labels.iter()) {
                    println!("        {}: {}", label.year, label.name);
                }
            }
            ClusterLayout::Range(range) => {
                println!(
                    "  ▭ {:5.1}%..{:.1}% {} events, {} to {}",
                    range.span.left,
                    range.span.right(),
                    range.count,
                    range.earliest.label.label.year,
                    range.latest.label.label.year
                );
            }
        }
    }
    println!();
}

fn print_detail(event: &Event) {
    println!("== selected ==");
    println!("{}: {}", format_year(event.year()), event.name());
    println!("era: {}", event.era());
    println!("{}", event.description());
    if let Some(media) = event.media() {
        println!("media: {} ({:?}..{:?})", media.url, media.start_time, media.end_time);
    }
    println!();
}
