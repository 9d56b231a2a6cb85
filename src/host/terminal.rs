//! Terminal host
//!
//! Draws the exercise window with crossterm. The canvas is rasterised onto a
//! character grid: each dot becomes a solid core with a faint glow ring.

use std::{io::Write, sync::Arc};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use tracing::debug;

use super::{DrawingSurface, Frame, HostWindow, View};
use crate::config::Theme;
use crate::exercise::Rgba;

const CORE_GLYPH: char = '●';
const GLOW_GLYPH: char = '·';
const EMPTY_GLYPH: char = ' ';
const GLOW_ALPHA: u8 = 60;

/// One character of the rasterised canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Rgba,
}

pub struct TerminalHost<W: Write> {
    out: W,
    theme: Arc<Theme>,
    cols: u16,
    rows: u16,
}

impl TerminalHost<std::io::Stdout> {
    /// Host on stdout, sized to the current terminal
    pub fn stdout(theme: Arc<Theme>) -> Self {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        debug!("Terminal size {}x{}", width, height);
        Self::new(
            std::io::stdout(),
            theme,
            width.saturating_sub(2).max(8),
            height.saturating_sub(9).max(4),
        )
    }
}

impl<W: Write> TerminalHost<W> {
    /// `cols` x `rows` is the size of the canvas, borders excluded
    pub fn new(out: W, theme: Arc<Theme>, cols: u16, rows: u16) -> Self {
        Self { out, theme, cols, rows }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, row: u16, color: Rgba, text: &str) -> std::io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, row),
            SetForegroundColor(to_color(color)),
            Print(text)
        )
    }
}

impl<W: Write> HostWindow for TerminalHost<W> {
    fn show(&mut self) -> anyhow::Result<()> {
        // BEL asks the terminal emulator for attention without grabbing focus for good
        queue!(self.out, Print('\u{7}'), Clear(ClearType::All))?;
        self.out.flush()?;
        Ok(())
    }

    fn hide(&mut self) -> anyhow::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))?;
        self.write_line(0, self.theme.disabled, "Eye exercises hidden until the next reminder (s to show now)")?;
        queue!(self.out, ResetColor, Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }

    fn present(&mut self, view: &View) -> anyhow::Result<()> {
        let theme = Arc::clone(&self.theme);
        let window = to_color(theme.background);
        // Clearing paints with the current background color
        queue!(self.out, SetBackgroundColor(window), Clear(ClearType::All))?;

        let mut row = 0;
        for line in view.instruction.lines() {
            self.write_line(row, theme.text, line)?;
            row += 1;
        }
        row += 1;
        self.write_line(row, theme.accent, &view.countdown)?;
        row += 1;

        let border = "─".repeat(usize::from(self.cols));
        self.write_line(row, theme.disabled, &format!("┌{}┐", border))?;
        row += 1;

        for cells in rasterize(&view.frame, self.cols, self.rows, theme.glow_width) {
            queue!(self.out, MoveTo(0, row), SetForegroundColor(to_color(theme.disabled)), Print('│'))?;
            queue!(self.out, SetBackgroundColor(to_color(view.frame.background())))?;
            for cell in cells {
                queue!(self.out, SetForegroundColor(to_color(cell.color)), Print(cell.glyph))?;
            }
            queue!(
                self.out,
                SetBackgroundColor(window),
                SetForegroundColor(to_color(theme.disabled)),
                Print('│')
            )?;
            row += 1;
        }

        self.write_line(row, theme.disabled, &format!("└{}┘", border))?;
        row += 1;

        let (color, text) = if view.button.enabled {
            (theme.accent, format!("[ {} ]  (press Enter)", view.button.label))
        } else {
            (theme.disabled, format!("[ {} ]", view.button.label))
        };
        self.write_line(row + 1, color, &text)?;
        queue!(self.out, ResetColor, MoveTo(0, row + 2))?;

        self.out.flush()?;
        Ok(())
    }
}

/// Rasterise `frame` onto a `cols` x `rows` grid of cells.
///
/// A cell is part of a dot's core when its center lies inside the dot, or
/// when it contains the dot's center; it glows when it lies within
/// `glow_width` (at least one cell) of the edge.
pub fn rasterize(frame: &Frame, cols: u16, rows: u16, glow_width: f64) -> Vec<Vec<Cell>> {
    let background = frame.background();
    let empty = Cell { glyph: EMPTY_GLYPH, color: background };
    let mut grid = vec![vec![empty; usize::from(cols)]; usize::from(rows)];
    if cols == 0 || rows == 0 {
        return grid;
    }

    let bounds = frame.bounds();
    let cell_w = bounds.width / f64::from(cols);
    let cell_h = bounds.height / f64::from(rows);
    let glow = glow_width.max(cell_w.max(cell_h));

    for dot in frame.dots() {
        let core = Cell { glyph: CORE_GLYPH, color: blend(dot.color.with_alpha(255), background) };
        let halo = Cell { glyph: GLOW_GLYPH, color: blend(dot.color.with_alpha(GLOW_ALPHA), background) };
        let home = (
            cell_index(dot.center.y, cell_h, rows),
            cell_index(dot.center.x, cell_w, cols),
        );

        for (r, line) in grid.iter_mut().enumerate() {
            let y = (r as f64 + 0.5) * cell_h;
            for (c, cell) in line.iter_mut().enumerate() {
                let x = (c as f64 + 0.5) * cell_w;
                let distance = (x - dot.center.x).hypot(y - dot.center.y);
                if distance <= dot.radius || (r, c) == home {
                    *cell = core;
                } else if distance <= dot.radius + glow && cell.glyph != CORE_GLYPH {
                    *cell = halo;
                }
            }
        }
    }

    grid
}

fn cell_index(position: f64, cell_size: f64, count: u16) -> usize {
    let index = (position / cell_size).floor().max(0.0) as usize;
    index.min(usize::from(count) - 1)
}

/// Composite `fg` over an opaque `bg`
pub fn blend(fg: Rgba, bg: Rgba) -> Rgba {
    let mix = |f: u8, b: u8| {
        let alpha = u32::from(fg.a);
        ((u32::from(f) * alpha + u32::from(b) * (255 - alpha) + 127) / 255) as u8
    };
    Rgba::opaque(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b))
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
