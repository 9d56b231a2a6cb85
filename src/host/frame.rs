//! Retained drawing surface

use serde::Serialize;

use super::DrawingSurface;
use crate::exercise::{Bounds, Dot, Rgba};

/// Display list of the exercise canvas: a background plus the dots on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    bounds: Bounds,
    background: Rgba,
    dots: Vec<Dot>,
}

impl Frame {
    pub fn new(bounds: Bounds, background: Rgba) -> Self {
        Self {
            bounds,
            background,
            dots: Vec::new(),
        }
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn is_blank(&self) -> bool {
        self.dots.is_empty()
    }

    /// Adopt new bounds; whatever was drawn is discarded
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.dots.clear();
    }
}

impl DrawingSurface for Frame {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self, color: Rgba) {
        self.background = color;
        self.dots.clear();
    }

    fn draw_dot(&mut self, dot: &Dot) {
        self.dots.push(*dot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Point;

    fn dot() -> Dot {
        Dot {
            center: Point::new(10.0, 10.0),
            radius: 4.0,
            color: Rgba::opaque(1, 2, 3),
        }
    }

    #[test]
    fn clear_drops_dots_and_sets_background() {
        let mut frame = Frame::new(Bounds::new(100, 50), Rgba::opaque(0, 0, 0));
        frame.draw_dot(&dot());
        assert!(!frame.is_blank());

        frame.clear(Rgba::opaque(30, 30, 30));
        assert!(frame.is_blank());
        assert_eq!(frame.background(), Rgba::opaque(30, 30, 30));
    }

    #[test]
    fn resize_discards_drawing() {
        let mut frame = Frame::new(Bounds::new(100, 50), Rgba::opaque(0, 0, 0));
        frame.draw_dot(&dot());
        frame.resize(Bounds::new(200, 80));
        assert!(frame.is_blank());
        assert_eq!(frame.bounds(), Bounds::new(200, 80));
    }
}
