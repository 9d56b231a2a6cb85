//! Sequence state structure and phases

use serde::Serialize;

/// Where the exercise sequence currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Reset, waiting for the user to start
    Idle,
    /// Counting down exercise `index`
    Running { index: usize, remaining: u32 },
    /// Exercise `index` is done and another one follows
    AwaitingNext { index: usize },
    /// Every exercise is done
    Finished,
}

/// Cursor driving the exercise sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceState {
    /// Current exercise; equal to the catalog length once the sequence is done
    pub index: usize,
    /// Seconds left of the current exercise, non-zero only while running
    pub countdown: u32,
    /// The per-second ticker is active
    pub running: bool,
    pub awaiting_ack: bool,
}

impl SequenceState {
    /// Create a state in the reset configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Phase of this state for a catalog of `len` exercises
    pub fn phase(&self, len: usize) -> Phase {
        if self.running {
            Phase::Running {
                index: self.index,
                remaining: self.countdown,
            }
        } else if self.index >= len {
            Phase::Finished
        } else if self.awaiting_ack {
            Phase::AwaitingNext { index: self.index }
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let state = SequenceState::new();
        assert_eq!(state.phase(5), Phase::Idle);
        assert_eq!(state.countdown, 0);
    }

    #[test]
    fn phases_follow_flags() {
        let mut state = SequenceState {
            index: 2,
            countdown: 5,
            running: true,
            awaiting_ack: false,
        };
        assert_eq!(state.phase(5), Phase::Running { index: 2, remaining: 5 });

        state.running = false;
        state.countdown = 0;
        state.awaiting_ack = true;
        assert_eq!(state.phase(5), Phase::AwaitingNext { index: 2 });

        state.index = 5;
        assert_eq!(state.phase(5), Phase::Finished);

        state.reset();
        assert_eq!(state, SequenceState::new());
    }
}
