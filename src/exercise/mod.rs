//! Exercise catalog
//!
//! The catalog is built once at start-up and never changes afterwards.

pub mod animation;

pub use animation::{Animation, Bounds, Dot, Point, Rgba};

/// One named, timed routine of the sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub instructions: String,
    pub duration_seconds: u32,
    /// `None` for routines with nothing to follow on screen
    pub animation: Option<Animation>,
}

impl Exercise {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        duration_seconds: u32,
        animation: Option<Animation>,
    ) -> Self {
        debug_assert!(duration_seconds > 0, "exercise duration must be positive");
        Self {
            name: name.into(),
            instructions: instructions.into(),
            duration_seconds,
            animation,
        }
    }

    /// Text shown above the drawing area while the exercise runs
    pub fn instruction_text(&self) -> String {
        format!("{}\n{}", self.name, self.instructions)
    }
}

/// The fixed exercise sequence, each lasting `duration_seconds`
pub fn catalog(duration_seconds: u32) -> Vec<Exercise> {
    vec![
        Exercise::new(
            "Focus Shift",
            "Focus on the light blue dot, then on the light green dot. Shift your focus back and forth.",
            duration_seconds,
            Some(Animation::FocusShift),
        ),
        Exercise::new(
            "Figure Eight",
            "Follow the moving pink dot with your eyes as it traces a figure eight.",
            duration_seconds,
            Some(Animation::FigureEight),
        ),
        Exercise::new(
            "Diagonal Stretch",
            "Follow the purple dot as it moves from corner to corner.",
            duration_seconds,
            Some(Animation::DiagonalStretch),
        ),
        Exercise::new(
            "Circular Motion",
            "Follow the orange dot as it moves in a circular pattern.",
            duration_seconds,
            Some(Animation::CircularMotion),
        ),
        Exercise::new(
            "Butterfly Blink",
            blink_instructions(duration_seconds),
            duration_seconds,
            None,
        ),
    ]
}

/// Half blinking, half resting; too short to split means one brief round of each
fn blink_instructions(duration_seconds: u32) -> String {
    if duration_seconds < 2 {
        return "Blink rapidly for a moment, then close your eyes and relax.".to_string();
    }
    let blink = duration_seconds / 2;
    format!(
        "Blink rapidly for {} seconds, then close your eyes and relax for {} seconds.",
        blink,
        duration_seconds - blink
    )
}
