use serde::Deserialize;

use crate::grid::{Cell, Grid};
use crate::input::{Point, Rect};
use crate::palette::Color;
use crate::progress::FoundWord;

/// A color together with the opacity it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub alpha: f64,
}

/// The drawing operations a board needs.
///
/// Coordinates are in surface pixels with `(0, 0)` at the top left.
pub trait Surface {
    /// Set the surface's pixel size.
    fn resize(&mut self, width: f64, height: f64);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Stroke a straight line with round caps.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, paint: Paint);

    /// Draw `text` centred on `at`.
    fn fill_text(&mut self, text: &str, at: Point, font: &str, paint: Paint);
}

/// How a run of cells is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// A thick round-capped line from the first cell's centre to the last's.
    #[default]
    Stroke,
    /// A filled square behind every cell.
    Cells,
}

/// Visual parameters of the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    pub cell_size: f64,
    pub font: String,
    pub letter_color: Color,
    pub found_alpha: f64,
    pub selection_color: Color,
    pub selection_alpha: f64,
    pub highlight: Highlight,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            font: "20px Arial".into(),
            letter_color: Color::BLACK,
            found_alpha: 0.6,
            selection_color: Color::rgb(0xA0, 0xA0, 0xA0),
            selection_alpha: 0.3,
            highlight: Highlight::Stroke,
        }
    }
}

impl Style {
    fn cell_rect(&self, cell: Cell) -> Rect {
        Rect {
            left: cell.col as f64 * self.cell_size,
            top: cell.row as f64 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    fn cell_center(&self, cell: Cell) -> Point {
        let half = self.cell_size / 2.0;
        Point::new(
            cell.col as f64 * self.cell_size + half,
            cell.row as f64 * self.cell_size + half,
        )
    }

    fn highlight(&self, surface: &mut impl Surface, cells: &[Cell], paint: Paint) {
        match (self.highlight, cells) {
            (_, []) => {}
            (Highlight::Stroke, [only]) => surface.fill_rect(self.cell_rect(*only), paint),
            (Highlight::Stroke, [first, .., last]) => surface.stroke_line(
                self.cell_center(*first),
                self.cell_center(*last),
                self.cell_size / 2.0,
                paint,
            ),
            (Highlight::Cells, cells) => {
                for &cell in cells {
                    surface.fill_rect(self.cell_rect(cell), paint);
                }
            }
        }
    }
}

/// Everything that appears on the board.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    pub grid: &'a Grid<char>,
    pub found: &'a [FoundWord],
    pub selection: &'a [Cell],
}

/// Repaint `board` onto `surface`.
///
/// Layers, bottom to top: found words in discovery order, the letters, then the
/// in-progress selection.
pub fn paint(surface: &mut impl Surface, board: Board<'_>, style: &Style) {
    let side = board.grid.size() as f64 * style.cell_size;
    surface.resize(side, side);
    surface.clear();

    for found in board.found {
        let paint = Paint {
            color: found.color,
            alpha: style.found_alpha,
        };
        style.highlight(surface, &found.path, paint);
    }

    let ink = Paint {
        color: style.letter_color,
        alpha: 1.0,
    };
    let mut buf = [0; 4];
    for (cell, letter) in board.grid.iter() {
        let text = letter.encode_utf8(&mut buf);
        surface.fill_text(text, style.cell_center(cell), &style.font, ink);
    }

    let paint = Paint {
        color: style.selection_color,
        alpha: style.selection_alpha,
    };
    style.highlight(surface, board.selection, paint);
}
