//! Configuration and CLI argument handling

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::exercise::animation::Rgba;

/// Longest accepted reminder period: one week
pub const MAX_INTERVAL_MINUTES: u64 = 7 * 24 * 60;

/// Longest accepted exercise: one hour
pub const MAX_EXERCISE_SECONDS: u32 = 60 * 60;

/// Which host renders the exercise window
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostKind {
    /// Draw the window in the terminal
    Terminal,
    /// Emit one JSON view per line on stdout
    Json,
}

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "eye-break")]
#[command(about = "An hourly eye exercise reminder")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Minutes between exercise reminders
    #[arg(
        short,
        long,
        default_value = "60",
        value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL_MINUTES)
    )]
    pub interval_minutes: u64,

    /// Length of each exercise in seconds
    #[arg(
        short,
        long,
        default_value = "30",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_EXERCISE_SECONDS))
    )]
    pub exercise_seconds: u32,

    /// One-second exercises, for trying the sequence out
    #[arg(long)]
    pub quick: bool,

    /// Host used to present the exercise window
    #[arg(long, value_enum, default_value = "terminal")]
    pub host: HostKind,

    /// Drawing surface width
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Drawing surface height
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Start hidden and wait for the first reminder
    #[arg(long)]
    pub hidden: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Period of the reminder timer
    pub fn reminder_interval(&self) -> Duration {
        let minutes = self.interval_minutes.clamp(1, MAX_INTERVAL_MINUTES);
        Duration::from_secs(minutes * 60)
    }

    /// Effective exercise length, honouring `--quick`
    pub fn exercise_duration(&self) -> u32 {
        if self.quick {
            1
        } else {
            self.exercise_seconds.clamp(1, MAX_EXERCISE_SECONDS)
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Fixed look of the exercise window
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Rgba,
    pub text: Rgba,
    pub accent: Rgba,
    pub disabled: Rgba,
    pub drawing_background: Rgba,
    /// Dot radius is the shorter side of the drawing bounds divided by this
    pub element_size_ratio: f64,
    /// Extra radius of the soft glow around each dot
    pub glow_width: f64,
    /// Horizontal share of the drawing width between the focus-shift dots
    pub focus_separation_ratio: f64,
    pub focus_near: Rgba,
    pub focus_far: Rgba,
    pub figure_eight: Rgba,
    pub diagonal: Rgba,
    pub circle: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba::opaque(18, 18, 18),
            text: Rgba::opaque(220, 220, 220),
            accent: Rgba::opaque(103, 152, 188),
            disabled: Rgba::opaque(189, 195, 199),
            drawing_background: Rgba::opaque(30, 30, 30),
            element_size_ratio: 20.0,
            glow_width: 2.0,
            focus_separation_ratio: 0.7,
            focus_near: Rgba::new(103, 152, 188, 200),
            focus_far: Rgba::new(152, 188, 103, 200),
            figure_eight: Rgba::new(188, 103, 152, 200),
            diagonal: Rgba::new(152, 103, 188, 200),
            circle: Rgba::new(188, 152, 103, 200),
        }
    }
}
