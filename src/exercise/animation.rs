//! Exercise animations
//!
//! Every routine is a pure function of the remaining countdown, the exercise
//! duration and the drawing bounds. Nothing here touches a surface except
//! [`Animation::draw`], which forwards the computed dots.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::config::Theme;
use crate::host::DrawingSurface;

/// Length of one diagonal-stretch lap in seconds
pub const DIAGONAL_CYCLE_SECONDS: u32 = 8;

/// Straight RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing area; the origin is its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One filled circle of a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
}

/// Drawable exercise routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Animation {
    FocusShift,
    FigureEight,
    DiagonalStretch,
    CircularMotion,
}

impl Animation {
    /// Dots making up the frame for `remaining` seconds left of `duration`
    pub fn frame(&self, bounds: Bounds, remaining: u32, duration: u32, theme: &Theme) -> Vec<Dot> {
        let radius = dot_radius(bounds, theme.element_size_ratio);
        let dot = |center, color| Dot { center, radius, color };

        match self {
            Animation::FocusShift => {
                let (near, far) = focus_shift(bounds, theme.focus_separation_ratio);
                vec![dot(near, theme.focus_near), dot(far, theme.focus_far)]
            }
            Animation::FigureEight => {
                vec![dot(figure_eight(bounds, remaining, duration), theme.figure_eight)]
            }
            Animation::DiagonalStretch => {
                vec![dot(diagonal_stretch(bounds, remaining, duration), theme.diagonal)]
            }
            Animation::CircularMotion => {
                vec![dot(circular_motion(bounds, remaining, duration), theme.circle)]
            }
        }
    }

    /// Clear `surface` and draw this animation's frame onto it
    pub fn draw<S>(&self, surface: &mut S, remaining: u32, duration: u32, theme: &Theme)
    where
        S: DrawingSurface + ?Sized,
    {
        let dots = self.frame(surface.bounds(), remaining, duration, theme);
        surface.clear(theme.drawing_background);
        for dot in &dots {
            surface.draw_dot(dot);
        }
    }
}

pub fn dot_radius(bounds: Bounds, size_ratio: f64) -> f64 {
    bounds.width.min(bounds.height) / size_ratio
}

/// Angle travelled after `duration - remaining` seconds, one full turn per exercise
pub fn sweep_angle(remaining: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    let elapsed = duration.saturating_sub(remaining);
    f64::from(elapsed) * TAU / f64::from(duration)
}

/// Two static targets on the horizontal center line
pub fn focus_shift(bounds: Bounds, separation_ratio: f64) -> (Point, Point) {
    let separation = bounds.width * separation_ratio;
    let y = bounds.height / 2.0;
    let left = (bounds.width - separation) / 2.0;
    (Point::new(left, y), Point::new(left + separation, y))
}

pub fn figure_eight(bounds: Bounds, remaining: u32, duration: u32) -> Point {
    let angle = sweep_angle(remaining, duration);
    let center = bounds.center();
    Point::new(
        center.x + bounds.width / 3.0 * angle.sin(),
        center.y + bounds.height / 4.0 * (2.0 * angle).sin(),
    )
}

pub fn circular_motion(bounds: Bounds, remaining: u32, duration: u32) -> Point {
    let angle = sweep_angle(remaining, duration);
    let center = bounds.center();
    Point::new(
        center.x + bounds.width / 3.0 * angle.cos(),
        center.y + bounds.height / 3.0 * angle.sin(),
    )
}

/// Lap progress in `[0, 1)` of the diagonal stretch
pub fn diagonal_progress(remaining: u32, duration: u32) -> f64 {
    let elapsed = duration.saturating_sub(remaining);
    f64::from(elapsed % DIAGONAL_CYCLE_SECONDS) / f64::from(DIAGONAL_CYCLE_SECONDS)
}

pub fn diagonal_stretch(bounds: Bounds, remaining: u32, duration: u32) -> Point {
    diagonal_point(bounds, diagonal_progress(remaining, duration))
}

/// Position along the corner lap for `progress` in `[0, 1)`.
///
/// The quarters start at (0,0), (w,0), (0,h) and (w,h): along the top edge,
/// down the anti-diagonal, along the bottom edge, then up the main diagonal.
pub fn diagonal_point(bounds: Bounds, progress: f64) -> Point {
    let (w, h) = (bounds.width, bounds.height);
    if progress < 0.25 {
        let t = progress * 4.0;
        Point::new(w * t, 0.0)
    } else if progress < 0.5 {
        let t = (progress - 0.25) * 4.0;
        Point::new(w * (1.0 - t), h * t)
    } else if progress < 0.75 {
        let t = (progress - 0.5) * 4.0;
        Point::new(w * t, h)
    } else {
        let t = (progress - 0.75) * 4.0;
        Point::new(w * (1.0 - t), h * (1.0 - t))
    }
}
