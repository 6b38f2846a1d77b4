use crate::grid::Cell;

/// The cells of one gesture, in the order they were selected.
pub type Selection = Vec<Cell>;

/// Turns a gesture into a straight-line run of cells.
///
/// Every cell after the first must share a row, a column, or a diagonal with the
/// first cell, and must differ from the cell selected just before it. The second
/// cell fixes the line; later cells must stay on it.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    size: usize,
    cells: Selection,
    active: bool,
}

impl SelectionTracker {
    /// A tracker for a `size × size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: Vec::new(),
            active: false,
        }
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), Rejection> {
        if cell.row < self.size && cell.col < self.size {
            Ok(())
        } else {
            Err(Rejection::OffGrid {
                cell,
                size: self.size,
            })
        }
    }

    /// Check whether `cell` may extend the current selection.
    pub fn admit(&self, cell: Cell) -> Result<(), Rejection> {
        if !self.active {
            return Err(Rejection::Inactive);
        }
        self.check_bounds(cell)?;
        let (Some(&first), Some(&last)) = (self.cells.first(), self.cells.last()) else {
            return Err(Rejection::Inactive);
        };
        if !first.is_aligned_with(cell) {
            return Err(Rejection::OffLine { cell, first });
        }
        if cell == last {
            return Err(Rejection::Repeat { cell });
        }
        if let Some(direction) = self.direction() {
            if !first.is_on_line(direction, cell) {
                return Err(Rejection::Bend { cell, direction });
            }
        }
        Ok(())
    }

    /// Begin a gesture at `cell`, discarding any previous selection.
    ///
    /// A cell off the grid starts nothing; the tracker stays inactive.
    pub fn start(&mut self, cell: Cell) -> Result<&[Cell], Rejection> {
        self.cells.clear();
        self.active = false;
        self.check_bounds(cell)?;
        self.cells.push(cell);
        self.active = true;
        Ok(self.cells.as_slice())
    }

    /// Append `cell` to the selection if it is admissible.
    ///
    /// Inadmissible cells are dropped without disturbing the selection.
    pub fn extend(&mut self, cell: Cell) -> Result<&[Cell], Rejection> {
        self.admit(cell)?;
        self.cells.push(cell);
        Ok(self.cells.as_slice())
    }

    /// Finish the gesture and hand back its cells.
    ///
    /// Returns an empty selection if no gesture was active.
    pub fn end(&mut self) -> Selection {
        let was_active = std::mem::replace(&mut self.active, false);
        let cells = std::mem::take(&mut self.cells);
        if was_active {
            cells
        } else {
            Vec::new()
        }
    }

    /// The direction set by the first cell that differs from the starting one.
    fn direction(&self) -> Option<(isize, isize)> {
        let (&first, rest) = self.cells.split_first()?;
        rest.iter().find_map(|&cell| first.direction_to(cell))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The in-progress selection; empty between gestures.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Why a cell was not added to the selection.
///
/// These never reach the player: a rejected cell is simply not selected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no gesture is in progress")]
    Inactive,
    #[error("the cell `{cell}` is off the grid. size: `{size}`")]
    OffGrid { cell: Cell, size: usize },
    #[error("the cell `{cell}` is not in line with the first cell `{first}`")]
    OffLine { cell: Cell, first: Cell },
    #[error("the cell `{cell}` leaves the selection's line, heading {direction:?}")]
    Bend {
        cell: Cell,
        direction: (isize, isize),
    },
    #[error("the cell `{cell}` was just selected")]
    Repeat { cell: Cell },
}
