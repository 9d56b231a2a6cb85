//! Main application state management

use std::sync::Arc;

use tracing::{debug, info};

use super::{Acknowledgement, Phase, SequenceState, Sequencer};
use crate::config::Theme;
use crate::exercise::{Bounds, Exercise};
use crate::host::{Command, Frame, View};

/// Everything the exercise window shows, owned by the event loop
#[derive(Debug)]
pub struct AppState {
    sequencer: Sequencer,
    frame: Frame,
    visible: bool,
    /// A reminder asked for the window to come to the foreground
    raise_pending: bool,
}

impl AppState {
    /// Create a new AppState with the sequence reset
    pub fn new(exercises: Vec<Exercise>, theme: Arc<Theme>, bounds: Bounds, visible: bool) -> Self {
        let frame = Frame::new(bounds, theme.drawing_background);
        Self {
            sequencer: Sequencer::new(exercises, theme),
            frame,
            visible,
            raise_pending: visible,
        }
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sequence_state(&self) -> &SequenceState {
        self.sequencer.state()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the per-second exercise ticker should run
    pub fn is_ticking(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Consume a pending request to bring the window forward
    pub fn take_raise_request(&mut self) -> bool {
        std::mem::take(&mut self.raise_pending)
    }

    /// Reminder: show the window and start the sequence over
    pub fn remind(&mut self) {
        if self.phase() != Phase::Idle {
            info!("Reminder interrupts {:?}, resetting sequence", self.phase());
        }
        self.sequencer.reset(&mut self.frame);
        self.show();
    }

    pub fn show(&mut self) {
        if !self.visible {
            debug!("Showing exercise window");
        }
        self.visible = true;
        self.raise_pending = true;
    }

    /// Hide the window; the sequence keeps its place
    pub fn hide(&mut self) {
        if self.visible {
            debug!("Hiding exercise window");
        }
        self.visible = false;
        self.raise_pending = false;
    }

    pub fn tick(&mut self) -> Phase {
        self.sequencer.tick(&mut self.frame)
    }

    /// The action button was pressed
    pub fn acknowledge(&mut self) -> Acknowledgement {
        let outcome = self.sequencer.acknowledge(&mut self.frame);
        if outcome == Acknowledgement::Completed {
            info!("Exercises completed, hiding until the next reminder");
            self.hide();
        }
        outcome
    }

    /// New drawing bounds; the canvas starts blank again
    pub fn resize(&mut self, bounds: Bounds) {
        debug!("Drawing area resized to {}x{}", bounds.width, bounds.height);
        self.frame.resize(bounds);
    }

    /// Apply a user command; returns false once the application should exit
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Acknowledge => {
                self.acknowledge();
            }
            Command::Show => self.remind(),
            Command::Hide => self.hide(),
            Command::Resize(bounds) => self.resize(bounds),
            Command::Exit => return false,
        }
        true
    }

    pub fn view(&self) -> View {
        View {
            phase: self.phase(),
            instruction: self.sequencer.instruction_text(),
            countdown: self.sequencer.countdown_text(),
            button: self.sequencer.button(),
            frame: self.frame.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::catalog;
    use crate::host::{ButtonState, DrawingSurface};

    fn app(duration: u32, visible: bool) -> AppState {
        AppState::new(catalog(duration), Arc::new(Theme::default()), Bounds::new(600, 300), visible)
    }

    fn finish_exercise(app: &mut AppState) {
        while app.is_ticking() {
            app.tick();
        }
    }

    #[test]
    fn reminder_wins_over_running_exercise() {
        let mut app = app(10, true);
        app.acknowledge();
        finish_exercise(&mut app);
        app.acknowledge();
        finish_exercise(&mut app);
        app.acknowledge();
        for _ in 0..5 {
            app.tick();
        }
        assert_eq!(app.phase(), Phase::Running { index: 2, remaining: 5 });

        app.remind();

        assert_eq!(app.phase(), Phase::Idle);
        assert_eq!(app.sequence_state().index, 0);
        assert!(!app.is_ticking());
        assert!(app.frame().is_blank());
    }

    #[test]
    fn reminder_shows_hidden_window_and_requests_raise() {
        let mut app = app(30, false);
        assert!(!app.take_raise_request());

        app.remind();
        assert!(app.is_visible());
        assert!(app.take_raise_request());
        assert!(!app.take_raise_request());
    }

    #[test]
    fn finishing_hides_the_window() {
        let mut app = app(1, true);
        let count = app.sequencer().exercises().len();
        for _ in 0..count {
            app.acknowledge();
            finish_exercise(&mut app);
        }
        assert_eq!(app.phase(), Phase::Finished);
        assert!(app.is_visible());

        assert_eq!(app.acknowledge(), Acknowledgement::Completed);
        assert!(!app.is_visible());
        assert_eq!(app.phase(), Phase::Idle);
    }

    #[test]
    fn hide_keeps_the_sequence_going() {
        let mut app = app(30, true);
        app.acknowledge();
        app.tick();
        assert!(app.apply(Command::Hide));

        assert!(!app.is_visible());
        assert_eq!(app.phase(), Phase::Running { index: 0, remaining: 29 });
    }

    #[test]
    fn show_command_resets_and_shows() {
        let mut app = app(30, false);
        app.acknowledge();
        assert!(app.apply(Command::Show));

        assert!(app.is_visible());
        assert_eq!(app.phase(), Phase::Idle);
    }

    #[test]
    fn resize_clears_the_canvas() {
        let mut app = app(30, true);
        app.acknowledge();
        app.tick();
        assert!(!app.frame().is_blank());

        app.apply(Command::Resize(Bounds::new(320, 200)));
        assert!(app.frame().is_blank());
        assert_eq!(app.view().frame.bounds(), Bounds::new(320, 200));
    }

    #[test]
    fn exit_command_stops() {
        let mut app = app(30, true);
        assert!(!app.apply(Command::Exit));
    }

    #[test]
    fn view_reflects_state() {
        let mut app = app(30, true);
        let view = app.view();
        assert_eq!(view.phase, Phase::Idle);
        assert_eq!(view.countdown, "Time left: 0 seconds");
        assert_eq!(view.button.label, ButtonState::START);

        app.acknowledge();
        app.tick();
        let view = app.view();
        assert_eq!(view.countdown, "Time left: 29 seconds");
        assert!(view.instruction.starts_with("Focus Shift"));
        assert_eq!(view.frame.dots().len(), 2);
        assert!(!view.button.enabled);
    }
}
