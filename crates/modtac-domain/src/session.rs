//! Event-loop facing state of the scrolling image field.
//!
//! The host forwards resize, scroll and frame callbacks; the session keeps
//! placements, runway and tracker consistent and pushes telemetry to its
//! observer at most once per frame.

use std::time::Instant;

use modtac_core::{LayoutConfig, Observer, ScrollConfig};

use crate::frame::FrameGate;
use crate::item::{Item, PlacedItem, Viewport};
use crate::layout::{generate_layout, loop_span_for, tile_layout};
use crate::telemetry::{ScrollTracker, Telemetry};

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutcome {
    /// Telemetry pushed to the observer, if the offset was inside the section.
    pub telemetry: Option<Telemetry>,
    /// New runway length when the frame extended it.
    pub extended_to: Option<f64>,
}

pub struct ScrollSession<O> {
    layout: LayoutConfig,
    items: Vec<Item>,
    viewport: Viewport,
    tiled: Vec<PlacedItem>,
    tracker: ScrollTracker,
    gate: FrameGate<f64>,
    phase_offset: f64,
    observer: O,
}

impl<O: Observer<Telemetry>> ScrollSession<O> {
    pub fn new(
        items: Vec<Item>,
        viewport: Viewport,
        layout: LayoutConfig,
        scroll: &ScrollConfig,
        observer: O,
    ) -> Self {
        let loop_span = loop_span_for(viewport.height, layout.height_vh, layout.min_canvas_viewports);
        let tracker = ScrollTracker::new(loop_span, viewport.height, layout.height_vh, scroll);
        let mut session = Self {
            layout,
            items,
            viewport,
            tiled: Vec::new(),
            tracker,
            gate: FrameGate::new(),
            phase_offset: 0.0,
            observer,
        };
        session.relayout();
        session
    }

    fn relayout(&mut self) {
        let span = self.tracker.loop_span();
        let placed = generate_layout(&self.items, self.viewport, self.layout.seed, span);
        self.tiled = tile_layout(&placed, span);
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        let loop_span = loop_span_for(
            viewport.height,
            self.layout.height_vh,
            self.layout.min_canvas_viewports,
        );
        self.tracker = self.tracker.resized(loop_span, viewport.height);
        self.relayout();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            loop_span,
            "scroll session resized"
        );
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.relayout();
    }

    /// Records the latest offset from the section top. Returns `true` when a
    /// frame needs to be requested from the host.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.gate.request(offset)
    }

    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        let Some(offset) = self.gate.take() else {
            return FrameOutcome::default();
        };

        let mut outcome = FrameOutcome::default();
        let viewport_height = self.viewport.height;
        if !self.tracker.in_section(offset, viewport_height) {
            return outcome;
        }

        let telemetry = self.tracker.update(offset);
        self.phase_offset = telemetry.phase_offset;
        self.observer.notify(&telemetry);
        outcome.telemetry = Some(telemetry);

        if self.tracker.should_extend_at(offset, viewport_height, now) {
            outcome.extended_to = Some(self.tracker.extend());
        }
        outcome
    }

    /// Stops listening; pending frame work is dropped.
    pub fn detach(&mut self) {
        self.gate.cancel();
    }

    /// Tiled placements, two loop spans tall.
    pub fn placements(&self) -> &[PlacedItem] {
        &self.tiled
    }

    /// Vertical translate for the tiled canvas.
    pub fn canvas_shift(&self) -> f64 {
        -self.phase_offset
    }

    pub fn loop_span(&self) -> f64 {
        self.tracker.loop_span()
    }

    pub fn runway_vh(&self) -> f64 {
        self.tracker.runway_vh()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::time::Duration;

    mock! {
        Sink {}
        impl Observer<Telemetry> for Sink {
            fn notify(&mut self, value: &Telemetry);
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(format!("{i}.jpg"), format!("Shot {i}")))
            .collect()
    }

    fn session<O: Observer<Telemetry>>(observer: O) -> ScrollSession<O> {
        ScrollSession::new(
            items(8),
            Viewport::new(1200.0, 800.0),
            LayoutConfig::default(),
            &ScrollConfig::default(),
            observer,
        )
    }

    #[test]
    fn test_initial_layout_is_tiled() {
        let session = session(|_: &Telemetry| {});
        assert_eq!(session.loop_span(), 4000.0);
        assert_eq!(session.placements().len(), 16);
        assert_eq!(session.runway_vh(), 600.0);
    }

    #[test]
    fn test_scroll_burst_emits_once_per_frame() {
        let mut sink = MockSink::new();
        sink.expect_notify()
            .times(1)
            .withf(|t| t.phase_offset == 300.0)
            .return_const(());
        let mut session = session(sink);

        assert!(session.on_scroll(100.0));
        assert!(!session.on_scroll(200.0));
        assert!(!session.on_scroll(300.0));

        let outcome = session.on_frame(Instant::now());
        assert_eq!(outcome.telemetry.map(|t| t.phase_offset), Some(300.0));
        assert_eq!(session.canvas_shift(), -300.0);

        // No new scroll, nothing emitted.
        assert_eq!(session.on_frame(Instant::now()), FrameOutcome::default());
    }

    #[test]
    fn test_outside_section_emits_nothing() {
        let mut sink = MockSink::new();
        sink.expect_notify().times(0);
        let mut session = session(sink);

        session.on_scroll(-20.0);
        let outcome = session.on_frame(Instant::now());
        assert!(outcome.telemetry.is_none());
    }

    #[test]
    fn test_frame_near_end_extends_runway() {
        let mut seen = Vec::new();
        let mut session = session(|t: &Telemetry| seen.push(*t));
        let start = Instant::now();

        session.on_scroll(3900.0);
        let outcome = session.on_frame(start);
        assert_eq!(outcome.extended_to, Some(1000.0));
        assert_eq!(session.runway_vh(), 1000.0);
        assert_eq!(session.loop_span(), 4000.0);

        // Cool-down: a second burst right away does not extend again.
        session.on_scroll(7100.0);
        let outcome = session.on_frame(start + Duration::from_millis(16));
        assert_eq!(outcome.extended_to, None);
        assert_eq!(outcome.telemetry.map(|t| t.loop_count), Some(1));

        drop(session);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].runway_length, 600.0);
        assert_eq!(seen[1].runway_length, 1000.0);
    }

    #[test]
    fn test_resize_relayouts_and_keeps_runway() {
        let mut session = session(|_: &Telemetry| {});
        session.on_scroll(3900.0);
        session.on_frame(Instant::now());
        assert_eq!(session.runway_vh(), 1000.0);

        session.on_resize(Viewport::new(800.0, 600.0));
        assert_eq!(session.loop_span(), 3000.0);
        assert_eq!(session.runway_vh(), 1000.0);
        for p in session.placements() {
            assert!(p.x + p.width <= 800.0 - 16.0);
            assert!(p.y < 6000.0);
        }
    }

    #[test]
    fn test_detach_drops_pending_scroll() {
        let mut sink = MockSink::new();
        sink.expect_notify().times(0);
        let mut session = session(sink);

        session.on_scroll(500.0);
        session.detach();
        assert!(session.on_frame(Instant::now()).telemetry.is_none());
    }

    #[test]
    fn test_empty_items_still_track_scroll() {
        let mut session = ScrollSession::new(
            Vec::new(),
            Viewport::new(1200.0, 800.0),
            LayoutConfig::default(),
            &ScrollConfig::default(),
            |_: &Telemetry| {},
        );
        assert!(session.placements().is_empty());
        session.on_scroll(1000.0);
        assert!(session.on_frame(Instant::now()).telemetry.is_some());
    }
}
