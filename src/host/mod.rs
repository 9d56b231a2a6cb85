//! Host window module
//!
//! The core never talks to a real window. It draws onto a [`DrawingSurface`]
//! and hands a [`View`] snapshot to whatever [`HostWindow`] presents it.

pub mod frame;
pub mod input;
pub mod json;
pub mod terminal;
pub mod view;

use crate::exercise::{Bounds, Dot, Rgba};

// Re-export main types
pub use frame::Frame;
pub use input::{read_commands, Command};
pub use json::JsonHost;
pub use terminal::TerminalHost;
pub use view::{ButtonState, View};

/// Canvas the exercise animations draw onto
pub trait DrawingSurface {
    fn bounds(&self) -> Bounds;

    /// Wipe the surface to a single color
    fn clear(&mut self, color: Rgba);

    /// Draw a soft, glowing dot
    fn draw_dot(&mut self, dot: &Dot);
}

/// The window that presents exercises to the user
pub trait HostWindow {
    /// Make the window visible and bring it to the foreground once
    fn show(&mut self) -> anyhow::Result<()>;

    fn hide(&mut self) -> anyhow::Result<()>;

    /// Render the current instruction, countdown, button and frame
    fn present(&mut self, view: &View) -> anyhow::Result<()>;
}
