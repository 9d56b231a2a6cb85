//! Eye Break - an hourly reminder that walks through timed eye exercises
//! 
//! This library provides the exercise catalog and animations, the
//! sequencing state machine, the reminder scheduler and the hosts that
//! present the exercise window.

pub mod config;
pub mod exercise;
pub mod host;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, Theme};
pub use state::AppState;
pub use tasks::{run_event_loop, ReminderScheduler};
pub use utils::signals::shutdown_signal;
