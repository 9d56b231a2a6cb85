//! Snapshot of what the exercise window shows

use serde::Serialize;

use super::Frame;
use crate::state::Phase;

/// The single action button under the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub label: &'static str,
    pub enabled: bool,
}

impl ButtonState {
    pub const START: &'static str = "Start Exercises";
    pub const NEXT: &'static str = "Next Exercise";
    pub const FINISH: &'static str = "Finish";

    /// Button for a given sequence phase; `last` marks the final exercise
    pub fn for_phase(phase: Phase, last: bool) -> Self {
        match phase {
            Phase::Idle => Self { label: Self::START, enabled: true },
            Phase::Running { .. } if last => Self { label: Self::FINISH, enabled: false },
            Phase::Running { .. } => Self { label: Self::NEXT, enabled: false },
            Phase::AwaitingNext { .. } => Self { label: Self::NEXT, enabled: true },
            Phase::Finished => Self { label: Self::FINISH, enabled: true },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub phase: Phase,
    pub instruction: String,
    pub countdown: String,
    pub button: ButtonState,
    pub frame: Frame,
}

pub fn countdown_text(seconds: u32) -> String {
    format!("Time left: {} seconds", seconds)
}
