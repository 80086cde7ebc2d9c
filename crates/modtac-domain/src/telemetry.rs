//! Scroll progress through the looping image field.

use std::time::{Duration, Instant};

use modtac_core::ScrollConfig;
use serde::{Deserialize, Serialize};

/// Snapshot of scroll progress, as shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Allotted section height, in percent of the viewport height.
    pub runway_length: f64,
    /// Raw offset in percent of the viewport height.
    pub scrolled_amount: f64,
    pub loop_count: u64,
    /// Offset inside the current loop, in `[0, loop_span)`.
    pub phase_offset: f64,
    pub phase_percent: f64,
}

/// Tracks scroll position against a fixed loop span and a growing runway.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    loop_span: f64,
    viewport_height: f64,
    runway_vh: f64,
    extend_by_vh: f64,
    threshold_viewports: f64,
    cooldown: Duration,
    cooldown_until: Option<Instant>,
}

impl ScrollTracker {
    pub fn new(loop_span: f64, viewport_height: f64, runway_vh: f64, config: &ScrollConfig) -> Self {
        Self {
            loop_span: if loop_span.is_finite() { loop_span.max(1.0) } else { 1.0 },
            viewport_height,
            runway_vh,
            extend_by_vh: config.extend_by_vh.max(0.0),
            threshold_viewports: config.extend_threshold_viewports,
            cooldown: Duration::from_millis(config.extend_cooldown_ms),
            cooldown_until: None,
        }
    }

    /// Rebuilds the tracker for a new viewport, keeping the runway and any
    /// running cool-down.
    pub fn resized(&self, loop_span: f64, viewport_height: f64) -> Self {
        Self {
            loop_span: if loop_span.is_finite() { loop_span.max(1.0) } else { 1.0 },
            viewport_height,
            ..self.clone()
        }
    }

    pub fn loop_span(&self) -> f64 {
        self.loop_span
    }

    pub fn runway_vh(&self) -> f64 {
        self.runway_vh
    }

    /// Runway length in pixels for the current viewport.
    pub fn runway_px(&self) -> f64 {
        self.runway_vh / 100.0 * self.viewport_height
    }

    /// Computes telemetry for an offset measured from the top of the section.
    /// Negative offsets wrap into the last loop.
    pub fn update(&self, raw_offset: f64) -> Telemetry {
        let raw = if raw_offset.is_finite() { raw_offset } else { 0.0 };
        let span = self.loop_span;

        let phase_offset = wrap_phase(raw, span);
        let loops = (raw / span).floor();
        let loop_count = if loops > 0.0 { loops as u64 } else { 0 };

        Telemetry {
            runway_length: self.runway_vh,
            scrolled_amount: raw / self.viewport_height.max(1.0) * 100.0,
            loop_count,
            phase_offset,
            phase_percent: phase_offset / span * 100.0,
        }
    }

    /// Whether `raw_offset` lies between the section top and the last
    /// position at which the section still fills the viewport.
    pub fn in_section(&self, raw_offset: f64, viewport_height: f64) -> bool {
        let max = self.runway_vh / 100.0 * viewport_height - viewport_height;
        raw_offset >= 0.0 && raw_offset <= max
    }

    pub fn should_extend(&mut self, raw_offset: f64, viewport_height: f64) -> bool {
        self.should_extend_at(raw_offset, viewport_height, Instant::now())
    }

    /// Like [`should_extend`](Self::should_extend) with an explicit clock reading.
    ///
    /// Once this returns `true` it returns `false` until the cool-down elapses.
    pub fn should_extend_at(&mut self, raw_offset: f64, viewport_height: f64, now: Instant) -> bool {
        if let Some(until) = self.cooldown_until {
            if now < until {
                return false;
            }
            self.cooldown_until = None;
        }

        if !raw_offset.is_finite() || !self.in_section(raw_offset, viewport_height) {
            return false;
        }

        let section_end = self.runway_vh / 100.0 * viewport_height - viewport_height;
        let distance_to_end = section_end - raw_offset;
        if distance_to_end < viewport_height * self.threshold_viewports {
            self.cooldown_until = Some(now + self.cooldown);
            return true;
        }
        false
    }

    /// Grows the runway by the configured increment and returns the new length.
    /// The loop span is unaffected.
    pub fn extend(&mut self) -> f64 {
        self.runway_vh += self.extend_by_vh;
        tracing::debug!(runway_vh = self.runway_vh, "extended scroll runway");
        self.runway_vh
    }
}

/// `raw` reduced into `[0, span)`.
pub fn wrap_phase(raw: f64, span: f64) -> f64 {
    let wrapped = ((raw % span) + span) % span;
    // Guards the rounding case where a tiny negative remainder lands on `span`.
    if wrapped >= span {
        0.0
    } else {
        wrapped
    }
}
