//! Timer tasks module
//! 
//! This module contains the reminder timer and the event loop that drives
//! the exercise sequence.

pub mod event_loop;
pub mod reminder_scheduler;

// Re-export main types
pub use event_loop::run_event_loop;
pub use reminder_scheduler::ReminderScheduler;
