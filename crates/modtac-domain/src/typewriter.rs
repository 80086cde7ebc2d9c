//! Rotating typewriter caption.
//!
//! Types a phrase one character at a time, holds it, deletes it, pauses and
//! moves to the next phrase. Timing is driven externally: the host asks for
//! [`Typewriter::next_delay`] and calls [`Typewriter::advance`] when it fires,
//! or feeds elapsed time to [`Typewriter::tick`].

use std::time::Duration;

use modtac_core::TypewriterConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypePhase {
    Typing,
    Holding,
    Deleting,
    Between,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTimings {
    pub typing_per_char: Duration,
    pub deleting_per_char: Duration,
    pub hold: Duration,
    pub between: Duration,
    pub cursor_blink: Duration,
}

impl From<&TypewriterConfig> for TypeTimings {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            typing_per_char: Duration::from_millis(config.typing_ms_per_char),
            deleting_per_char: Duration::from_millis(config.deleting_ms_per_char),
            hold: Duration::from_millis(config.hold_ms),
            between: Duration::from_millis(config.between_ms),
            cursor_blink: Duration::from_millis(config.cursor_blink_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    items: Vec<String>,
    timings: TypeTimings,
    index: usize,
    shown: usize,
    phase: TypePhase,
    carry: Duration,
}

impl Typewriter {
    pub fn new(items: Vec<String>, timings: TypeTimings) -> Self {
        Self {
            items,
            timings,
            index: 0,
            shown: 0,
            phase: TypePhase::Typing,
            carry: Duration::ZERO,
        }
    }

    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(config.items.clone(), TypeTimings::from(config))
    }

    fn current(&self) -> &str {
        self.items.get(self.index).map(String::as_str).unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Visible prefix of the current phrase.
    pub fn text(&self) -> &str {
        let current = self.current();
        let end = current
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(current.len());
        &current[..end]
    }

    /// Delay before the next transition; `None` when there is nothing to rotate.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.items.is_empty() {
            return None;
        }
        let t = &self.timings;
        Some(match self.phase {
            TypePhase::Typing if self.shown < self.current_len() => t.typing_per_char,
            // The finished phrase waits once before holding and once while holding.
            TypePhase::Typing | TypePhase::Holding => t.hold,
            TypePhase::Deleting if self.shown > 0 => t.deleting_per_char,
            TypePhase::Deleting | TypePhase::Between => t.between,
        })
    }

    /// Applies the pending transition.
    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        match self.phase {
            TypePhase::Typing if self.shown < self.current_len() => self.shown += 1,
            TypePhase::Typing => self.phase = TypePhase::Holding,
            TypePhase::Holding => self.phase = TypePhase::Deleting,
            TypePhase::Deleting if self.shown > 0 => self.shown -= 1,
            TypePhase::Deleting => self.phase = TypePhase::Between,
            TypePhase::Between => {
                self.index = (self.index + 1) % self.items.len();
                self.phase = TypePhase::Typing;
            }
        }
    }

    /// Advances through every transition that fits in `elapsed`, carrying the
    /// remainder to the next call.
    pub fn tick(&mut self, elapsed: Duration) {
        self.carry += elapsed;
        while let Some(delay) = self.next_delay() {
            if delay > self.carry {
                break;
            }
            self.carry -= delay;
            self.advance();
            if delay.is_zero() {
                break;
            }
        }
    }

    /// Blinking cursor state `elapsed` after start; visible first.
    pub fn cursor_visible(&self, elapsed: Duration) -> bool {
        let blink = self.timings.cursor_blink.as_millis();
        if blink == 0 {
            return true;
        }
        (elapsed.as_millis() / blink) % 2 == 0
    }
}
