//! State management module
//! 
//! This module contains the exercise sequence state machine and the
//! application state the event loop owns.

pub mod app_state;
pub mod sequence_state;
pub mod sequencer;

// Re-export main types
pub use app_state::AppState;
pub use sequence_state::{Phase, SequenceState};
pub use sequencer::{Acknowledgement, Sequencer};
