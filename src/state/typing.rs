//! Character-by-character reveal of the hero subtitle.
//!
//! The cursor is pure bookkeeping; `components::typing` owns the timers and
//! writes each emitted character into the live text span.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// Static subtitle text still displayed.
    Idle,
    /// Reveal in progress; `index` characters shown so far.
    Typing { index: usize },
    /// Whole string shown. Nothing else happens.
    Finished,
}

#[derive(Clone, Debug)]
pub struct TypingCursor {
    chars: Vec<char>,
    phase: TypingPhase,
}

impl TypingCursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            phase: TypingPhase::Idle,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Leave the idle state. Only the first call has any effect.
    pub fn start(&mut self) {
        if self.phase == TypingPhase::Idle {
            self.phase = if self.chars.is_empty() {
                TypingPhase::Finished
            } else {
                TypingPhase::Typing { index: 0 }
            };
        }
    }

    /// Next character to append, or `None` once finished (or not started).
    pub fn advance(&mut self) -> Option<char> {
        let TypingPhase::Typing { index } = self.phase else {
            return None;
        };
        let ch = *self.chars.get(index)?;
        let next = index + 1;
        self.phase = if next >= self.chars.len() {
            TypingPhase::Finished
        } else {
            TypingPhase::Typing { index: next }
        };
        Some(ch)
    }

    /// Text that should currently be visible in the live span.
    pub fn rendered(&self) -> String {
        let shown = match self.phase {
            TypingPhase::Idle => 0,
            TypingPhase::Typing { index } => index,
            TypingPhase::Finished => self.chars.len(),
        };
        self.chars[..shown].iter().collect()
    }
}

/// Wait before emitting character number `step` (zero-based).
pub fn step_delay(config: &Config, step: usize) -> Duration {
    let ms = if step == 0 {
        config.typing_delay_ms
    } else {
        config.typing_speed_ms
    };
    Duration::from_millis(u64::from(ms))
}
