//! Exercise sequencer state machine
//!
//! `Idle --start--> Running --tick...--> AwaitingNext --acknowledge--> Running`
//! and, after the last exercise, `Running --tick--> Finished --acknowledge--> Idle`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Phase, SequenceState};
use crate::config::Theme;
use crate::exercise::Exercise;
use crate::host::{view::countdown_text, ButtonState, DrawingSurface};

pub const IDLE_INSTRUCTION: &str = "Time for eye exercises!\nPress 'Start Exercises' to begin.";
pub const FINISHED_INSTRUCTION: &str = "Well done, all exercises are complete.\nPress 'Finish' to close.";

/// What an acknowledgment did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// Exercise at this index started counting down
    Started(usize),
    /// The finished sequence was reset; the window may hide
    Completed,
    /// An exercise is still running
    Ignored,
}

#[derive(Debug)]
pub struct Sequencer {
    exercises: Vec<Exercise>,
    state: SequenceState,
    theme: Arc<Theme>,
}

impl Sequencer {
    pub fn new(exercises: Vec<Exercise>, theme: Arc<Theme>) -> Self {
        debug_assert!(!exercises.is_empty(), "exercise catalog must not be empty");
        Self {
            exercises,
            state: SequenceState::new(),
            theme,
        }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.exercises.len())
    }

    /// Whether the per-second ticker should be running
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.state.index)
    }

    /// Begin counting down the exercise at the current index
    pub fn start<S>(&mut self, surface: &mut S)
    where
        S: DrawingSurface + ?Sized,
    {
        let index = self.state.index;
        let Some(exercise) = self.exercises.get(index) else {
            debug_assert!(false, "start() past the last exercise");
            warn!("Cannot start exercise {}: only {} exist", index, self.exercises.len());
            return;
        };

        info!(
            "Starting exercise {}/{}: {} ({}s)",
            index + 1,
            self.exercises.len(),
            exercise.name,
            exercise.duration_seconds
        );

        self.state.countdown = exercise.duration_seconds;
        self.state.awaiting_ack = false;
        self.state.running = true;
        surface.clear(self.theme.drawing_background);
    }

    /// Advance the countdown by one second and draw the next frame
    pub fn tick<S>(&mut self, surface: &mut S) -> Phase
    where
        S: DrawingSurface + ?Sized,
    {
        if !self.state.running {
            warn!("Exercise tick while stopped, ignoring");
            return self.phase();
        }
        let Some(exercise) = self.exercises.get(self.state.index) else {
            debug_assert!(false, "running past the last exercise");
            self.state.running = false;
            return self.phase();
        };

        self.state.countdown = self.state.countdown.saturating_sub(1);
        let remaining = self.state.countdown;

        if let Some(animation) = exercise.animation {
            animation.draw(surface, remaining, exercise.duration_seconds, &self.theme);
        }

        if remaining == 0 {
            self.state.running = false;
            self.state.awaiting_ack = true;
            if self.state.index + 1 < self.exercises.len() {
                debug!("Exercise {} done, waiting for next", exercise.name);
            } else {
                info!("Exercise sequence finished");
                self.state.index = self.exercises.len();
            }
        }

        self.phase()
    }

    /// The user pressed the action button
    pub fn acknowledge<S>(&mut self, surface: &mut S) -> Acknowledgement
    where
        S: DrawingSurface + ?Sized,
    {
        match self.phase() {
            Phase::Idle => {
                self.start(surface);
                Acknowledgement::Started(self.state.index)
            }
            Phase::AwaitingNext { index } => {
                self.state.index = index + 1;
                self.start(surface);
                Acknowledgement::Started(index + 1)
            }
            Phase::Finished => {
                self.reset(surface);
                Acknowledgement::Completed
            }
            Phase::Running { index, remaining } => {
                warn!(
                    "Acknowledgment while exercise {} has {}s left, ignoring",
                    index, remaining
                );
                Acknowledgement::Ignored
            }
        }
    }

    /// Back to the first exercise, ticker stopped
    pub fn reset<S>(&mut self, surface: &mut S)
    where
        S: DrawingSurface + ?Sized,
    {
        debug!("Resetting exercise sequence");
        self.state.reset();
        surface.clear(self.theme.drawing_background);
    }

    pub fn instruction_text(&self) -> String {
        match self.phase() {
            Phase::Idle => IDLE_INSTRUCTION.to_string(),
            Phase::Finished => FINISHED_INSTRUCTION.to_string(),
            Phase::Running { .. } | Phase::AwaitingNext { .. } => self
                .current_exercise()
                .map(Exercise::instruction_text)
                .unwrap_or_default(),
        }
    }

    pub fn countdown_text(&self) -> String {
        countdown_text(self.state.countdown)
    }

    pub fn button(&self) -> ButtonState {
        let last = self.state.index + 1 >= self.exercises.len();
        ButtonState::for_phase(self.phase(), last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::{catalog, Animation, Bounds, Rgba};
    use crate::host::Frame;

    fn setup(duration: u32) -> (Sequencer, Frame) {
        let theme = Arc::new(Theme::default());
        let frame = Frame::new(Bounds::new(600, 300), theme.drawing_background);
        (Sequencer::new(catalog(duration), theme), frame)
    }

    fn run_out(sequencer: &mut Sequencer, frame: &mut Frame) -> Phase {
        let mut phase = sequencer.phase();
        while sequencer.is_running() {
            phase = sequencer.tick(frame);
        }
        phase
    }

    #[test]
    fn starts_idle() {
        let (sequencer, _) = setup(30);
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert!(!sequencer.is_running());
        assert_eq!(sequencer.instruction_text(), IDLE_INSTRUCTION);
        assert_eq!(sequencer.button(), ButtonState { label: ButtonState::START, enabled: true });
    }

    #[test]
    fn start_loads_the_exercise_duration() {
        let (mut sequencer, mut frame) = setup(30);
        sequencer.start(&mut frame);

        assert_eq!(sequencer.phase(), Phase::Running { index: 0, remaining: 30 });
        assert_eq!(sequencer.countdown_text(), "Time left: 30 seconds");
        assert!(sequencer.instruction_text().starts_with("Focus Shift\n"));
        assert!(!sequencer.button().enabled);
    }

    #[test]
    fn duration_ticks_reach_awaiting_next() {
        let (mut sequencer, mut frame) = setup(5);
        sequencer.acknowledge(&mut frame);

        for expected in (1..5).rev() {
            assert_eq!(
                sequencer.tick(&mut frame),
                Phase::Running { index: 0, remaining: expected }
            );
        }
        assert_eq!(sequencer.tick(&mut frame), Phase::AwaitingNext { index: 0 });
        assert!(!sequencer.is_running());
        assert_eq!(sequencer.button(), ButtonState { label: ButtonState::NEXT, enabled: true });
    }

    #[test]
    fn every_exercise_runs_exactly_its_duration() {
        let (mut sequencer, mut frame) = setup(7);
        let count = sequencer.exercises().len();

        for index in 0..count {
            assert_eq!(sequencer.acknowledge(&mut frame), Acknowledgement::Started(index));
            for _ in 0..6 {
                assert!(matches!(sequencer.tick(&mut frame), Phase::Running { .. }));
            }
            let expected = if index + 1 < count {
                Phase::AwaitingNext { index }
            } else {
                Phase::Finished
            };
            assert_eq!(sequencer.tick(&mut frame), expected);
        }
        assert_eq!(sequencer.state().index, count);
    }

    #[test]
    fn acknowledge_advances_and_reloads_countdown() {
        let (mut sequencer, mut frame) = setup(3);
        sequencer.acknowledge(&mut frame);
        run_out(&mut sequencer, &mut frame);

        assert_eq!(sequencer.acknowledge(&mut frame), Acknowledgement::Started(1));
        assert_eq!(sequencer.phase(), Phase::Running { index: 1, remaining: 3 });
        assert!(sequencer.instruction_text().starts_with("Figure Eight\n"));
    }

    #[test]
    fn finished_acknowledgment_returns_to_idle() {
        let (mut sequencer, mut frame) = setup(1);
        for _ in 0..sequencer.exercises().len() {
            sequencer.acknowledge(&mut frame);
            run_out(&mut sequencer, &mut frame);
        }
        assert_eq!(sequencer.phase(), Phase::Finished);
        assert_eq!(sequencer.button(), ButtonState { label: ButtonState::FINISH, enabled: true });
        assert_eq!(sequencer.instruction_text(), FINISHED_INSTRUCTION);

        assert_eq!(sequencer.acknowledge(&mut frame), Acknowledgement::Completed);
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert_eq!(sequencer.state(), &SequenceState::new());
    }

    #[test]
    fn acknowledgment_while_running_is_ignored() {
        let (mut sequencer, mut frame) = setup(10);
        sequencer.acknowledge(&mut frame);
        sequencer.tick(&mut frame);

        assert_eq!(sequencer.acknowledge(&mut frame), Acknowledgement::Ignored);
        assert_eq!(sequencer.phase(), Phase::Running { index: 0, remaining: 9 });
    }

    #[test]
    fn animated_exercise_draws_each_tick() {
        let (mut sequencer, mut frame) = setup(30);
        sequencer.state.index = 3;
        sequencer.start(&mut frame);
        assert!(frame.is_blank());

        sequencer.tick(&mut frame);
        assert_eq!(frame.dots().len(), 1);
        assert_eq!(frame.background(), Theme::default().drawing_background);
    }

    #[test]
    fn exercise_without_animation_draws_nothing() {
        let (mut sequencer, mut frame) = setup(30);
        let last = sequencer.exercises().len() - 1;
        assert_eq!(sequencer.exercises()[last].animation, None);

        sequencer.state.index = last;
        sequencer.start(&mut frame);
        frame.clear(Rgba::opaque(1, 1, 1));
        sequencer.tick(&mut frame);

        assert!(frame.is_blank());
        assert_eq!(frame.background(), Rgba::opaque(1, 1, 1));
    }

    #[test]
    fn start_clears_previous_drawing() {
        let (mut sequencer, mut frame) = setup(2);
        sequencer.state.index = 1;
        sequencer.start(&mut frame);
        sequencer.tick(&mut frame);
        sequencer.tick(&mut frame);
        assert!(!frame.is_blank());
        assert_eq!(sequencer.exercises()[2].animation, Some(Animation::DiagonalStretch));

        sequencer.acknowledge(&mut frame);
        assert!(frame.is_blank());
    }

    #[test]
    fn tick_while_stopped_changes_nothing() {
        let (mut sequencer, mut frame) = setup(30);
        assert_eq!(sequencer.tick(&mut frame), Phase::Idle);
        assert_eq!(sequencer.state(), &SequenceState::new());
    }
}
