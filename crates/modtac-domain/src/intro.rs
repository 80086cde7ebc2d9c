//! Intro overlay sequencing.
//!
//! The overlay stays up for at least `min_show`, leaves as soon as the hero
//! video is ready after that, and is forced out at `max_show`. Leaving is a
//! fade to black followed by a fade out; the exit starts exactly once.

use std::time::Duration;

use modtac_core::IntroConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroPhase {
    Show,
    FadeToBlack,
    FadeOut,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTimings {
    pub min_show: Duration,
    pub max_show: Duration,
    pub fade_to_black: Duration,
    pub fade_out: Duration,
}

impl IntroTimings {
    pub fn from_config(config: &IntroConfig) -> Self {
        if config.reduced_motion {
            Self {
                min_show: Duration::from_millis(250),
                max_show: Duration::from_millis(600),
                fade_to_black: Duration::from_millis(220),
                fade_out: Duration::from_millis(260),
            }
        } else {
            Self {
                min_show: Duration::from_millis(config.min_show_ms),
                max_show: Duration::from_millis(config.max_show_ms),
                fade_to_black: Duration::from_millis(900),
                fade_out: Duration::from_millis(950),
            }
        }
    }
}

/// Time is measured from when the overlay mounted.
#[derive(Debug, Clone)]
pub struct IntroSequencer {
    timings: IntroTimings,
    video_ready_at: Option<Duration>,
}

impl IntroSequencer {
    pub fn new(timings: IntroTimings) -> Self {
        Self {
            timings,
            video_ready_at: None,
        }
    }

    /// Records when the video became playable. Later reports are ignored.
    pub fn video_ready(&mut self, at: Duration) {
        if self.video_ready_at.is_none() {
            self.video_ready_at = Some(at);
        }
    }

    /// When the exit begins given what is known so far.
    pub fn exit_start(&self) -> Duration {
        self.video_ready_at
            .map(|ready| ready.max(self.timings.min_show))
            .map_or(self.timings.max_show, |start| start.min(self.timings.max_show))
    }

    /// When `on_done` fires.
    pub fn done_at(&self) -> Duration {
        self.exit_start() + self.timings.fade_to_black + self.timings.fade_out
    }

    pub fn phase_at(&self, elapsed: Duration) -> IntroPhase {
        let start = self.exit_start();
        if elapsed < start {
            IntroPhase::Show
        } else if elapsed < start + self.timings.fade_to_black {
            IntroPhase::FadeToBlack
        } else if elapsed < self.done_at() {
            IntroPhase::FadeOut
        } else {
            IntroPhase::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn sequencer() -> IntroSequencer {
        IntroSequencer::new(IntroTimings::from_config(&IntroConfig::default()))
    }

    #[test]
    fn test_without_video_exits_at_cap() {
        let seq = sequencer();
        assert_eq!(seq.exit_start(), ms(2200));
        assert_eq!(seq.phase_at(ms(2199)), IntroPhase::Show);
        assert_eq!(seq.phase_at(ms(2200)), IntroPhase::FadeToBlack);
        assert_eq!(seq.phase_at(ms(3100)), IntroPhase::FadeOut);
        assert_eq!(seq.phase_at(ms(4050)), IntroPhase::Done);
    }

    #[test]
    fn test_early_video_waits_for_min_show() {
        let mut seq = sequencer();
        seq.video_ready(ms(100));
        assert_eq!(seq.exit_start(), ms(950));
        assert_eq!(seq.phase_at(ms(500)), IntroPhase::Show);
    }

    #[test]
    fn test_video_ready_after_min_show_exits_immediately() {
        let mut seq = sequencer();
        seq.video_ready(ms(1400));
        assert_eq!(seq.exit_start(), ms(1400));
        assert_eq!(seq.done_at(), ms(1400 + 900 + 950));
    }

    #[test]
    fn test_exit_starts_once() {
        let mut seq = sequencer();
        seq.video_ready(ms(1000));
        seq.video_ready(ms(1800));
        assert_eq!(seq.exit_start(), ms(1000));
    }

    #[test]
    fn test_late_video_does_not_delay_cap() {
        let mut seq = sequencer();
        seq.video_ready(ms(5000));
        assert_eq!(seq.exit_start(), ms(2200));
    }

    #[test]
    fn test_reduced_motion_timings() {
        let config = IntroConfig {
            reduced_motion: true,
            ..IntroConfig::default()
        };
        let seq = IntroSequencer::new(IntroTimings::from_config(&config));
        assert_eq!(seq.exit_start(), ms(600));
        assert_eq!(seq.done_at(), ms(600 + 220 + 260));
    }
}
