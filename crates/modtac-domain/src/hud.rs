use serde::Serialize;

use crate::telemetry::Telemetry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudLine {
    pub label: String,
    pub value: String,
}

impl HudLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Rounds half away from zero, as the overlay displays whole numbers.
fn whole(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Lines of the telemetry overlay, followed by any caller-supplied extras.
pub fn hud_lines(telemetry: Option<&Telemetry>, extra: &[HudLine]) -> Vec<HudLine> {
    let (scrolled, phase, loops) = telemetry
        .map(|t| (whole(t.scrolled_amount), whole(t.phase_percent), t.loop_count))
        .unwrap_or((0, 0, 0));

    let mut lines = vec![
        HudLine::new("Scroll Distance", format!("{scrolled}vh")),
        HudLine::new("Phase", format!("{phase}%")),
        HudLine::new("Image loops", loops.to_string()),
    ];
    lines.extend(extra.iter().cloned());
    lines
}
