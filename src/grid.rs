use std::{fmt, ops::Index};

/// A position on a [`Grid`].
///
/// `(0, 0)` is the top left corner; rows grow downward, columns rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when `other` shares a row, a column, or a diagonal with `self`.
    pub fn is_aligned_with(self, other: Cell) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }

    /// The unit step from `self` toward `other`, if the two are distinct and aligned.
    pub fn direction_to(self, other: Cell) -> Option<(isize, isize)> {
        if self == other || !self.is_aligned_with(other) {
            return None;
        }
        let unit = |from: usize, to: usize| to.cmp(&from) as isize;
        Some((unit(self.row, other.row), unit(self.col, other.col)))
    }

    /// `true` when `other` lies on the line through `self` with the given direction,
    /// on either side of `self`.
    pub fn is_on_line(self, (d_row, d_col): (isize, isize), other: Cell) -> bool {
        let dr = other.row as isize - self.row as isize;
        let dc = other.col as isize - self.col as isize;
        dr * d_col == dc * d_row
    }

    /// Step `n` times in the direction `(d_row, d_col)`, or `None` if that leaves
    /// the non-negative quadrant.
    pub(crate) fn offset(self, (d_row, d_col): (isize, isize), n: usize) -> Option<Cell> {
        let n = isize::try_from(n).ok()?;
        let row = self.row.checked_add_signed(d_row.checked_mul(n)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(n)?)?;
        Some(Cell { row, col })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// All eight straight-line directions as `(d_row, d_col)`.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

/// A square `size × size` grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from rows. The caller guarantees the rows form a square;
    /// [`Puzzle`][crate::Puzzle] checks that before getting here.
    pub(crate) fn from_square_rows(rows: Vec<Vec<T>>) -> Self {
        let size = rows.len();
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), size * size, "rows must form a square");
        Grid { size, cells }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then_some((cell.row * self.size) + cell.col)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.idx(cell).map(|idx| &self.cells[idx])
    }

    /// Iterate over every cell with its value, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, value)| (Cell::new(idx / self.size, idx % self.size), value))
    }
}

impl Grid<char> {
    /// Concatenate the letters along `path`, or `None` if any cell is off the grid.
    pub fn read(&self, path: &[Cell]) -> Option<String> {
        path.iter().map(|&cell| self.get(cell).copied()).collect()
    }

    /// Find `word` as a straight run in any of the eight directions.
    ///
    /// Returns the path of the first placement found, scanning cells row by row.
    pub fn locate(&self, word: &str) -> Option<Vec<Cell>> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;
        for (start, &letter) in self.iter() {
            if letter != first {
                continue;
            }
            for direction in DIRECTIONS {
                let path: Option<Vec<Cell>> = (0..letters.len())
                    .map(|n| start.offset(direction, n).filter(|&cell| self.contains(cell)))
                    .collect();
                if let Some(path) = path {
                    if path.iter().zip(&letters).all(|(&cell, l)| self[cell] == *l) {
                        return Some(path);
                    }
                }
            }
        }
        None
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &Self::Output {
        self.get(cell).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters(rows: &[&str]) -> Grid<char> {
        Grid::from_square_rows(rows.iter().map(|row| row.chars().collect()).collect())
    }

    #[rstest]
    #[case((0, 0), (0, 5), true)]
    #[case((0, 0), (4, 0), true)]
    #[case((2, 2), (0, 0), true)]
    #[case((2, 2), (4, 0), true)]
    #[case((0, 0), (1, 2), false)]
    #[case((3, 1), (0, 2), false)]
    fn alignment(#[case] a: (usize, usize), #[case] b: (usize, usize), #[case] expect: bool) {
        assert_eq!(Cell::from(a).is_aligned_with(b.into()), expect);
    }

    #[rstest]
    #[case((2, 2), (2, 4), Some((0, 1)))]
    #[case((2, 2), (0, 2), Some((-1, 0)))]
    #[case((2, 2), (4, 0), Some((1, -1)))]
    #[case((2, 2), (2, 2), None)]
    #[case((2, 2), (3, 4), None)]
    fn direction(
        #[case] from: (usize, usize),
        #[case] to: (usize, usize),
        #[case] expect: Option<(isize, isize)>,
    ) {
        assert_eq!(Cell::from(from).direction_to(to.into()), expect);
    }

    #[rstest]
    #[case((0, 1), (2, 0), true)]
    #[case((0, 1), (2, 5), true)]
    #[case((0, 1), (1, 3), false)]
    #[case((1, 0), (0, 2), true)]
    #[case((1, 0), (4, 2), true)]
    #[case((1, 0), (0, 0), false)]
    #[case((1, 1), (4, 4), true)]
    #[case((1, 1), (0, 0), true)]
    #[case((1, 1), (0, 3), false)]
    #[case((1, -1), (0, 4), true)]
    fn on_line_through_origin(
        #[case] direction: (isize, isize),
        #[case] cell: (usize, usize),
        #[case] expect: bool,
    ) {
        assert_eq!(Cell::new(2, 2).is_on_line(direction, cell.into()), expect);
    }

    #[test]
    fn row_major_indexing() {
        let grid = letters(&["AB", "CD"]);
        assert_eq!(grid.size(), 2);
        assert_eq!(grid[Cell::new(0, 1)], 'B');
        assert_eq!(grid[Cell::new(1, 0)], 'C');
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.get(Cell::new(0, 2)), None);
    }

    #[test]
    fn read_concatenates_in_path_order() {
        let grid = letters(&["CAT", "XXX", "XXX"]);
        let path = [Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)];
        assert_eq!(grid.read(&path).as_deref(), Some("TAC"));
        assert_eq!(grid.read(&[Cell::new(3, 0)]), None);
    }

    #[rstest]
    #[case("CAT", vec![(0, 0), (0, 1), (0, 2)])]
    #[case("CXX", vec![(0, 0), (1, 0), (2, 0)])]
    #[case("TXX", vec![(0, 2), (1, 2), (2, 2)])]
    #[case("TAC", vec![(0, 2), (0, 1), (0, 0)])]
    fn locate_searches_every_direction(#[case] word: &str, #[case] expect: Vec<(usize, usize)>) {
        let grid = letters(&["CAT", "XXX", "XXX"]);
        let expect: Vec<Cell> = expect.into_iter().map(Cell::from).collect();
        assert_eq!(grid.locate(word), Some(expect));
    }

    #[rstest]
    #[case("AEI", vec![(0, 0), (1, 1), (2, 2)])]
    #[case("CEG", vec![(0, 2), (1, 1), (2, 0)])]
    #[case("IEA", vec![(2, 2), (1, 1), (0, 0)])]
    #[case("GEC", vec![(2, 0), (1, 1), (0, 2)])]
    fn locate_diagonals(#[case] word: &str, #[case] expect: Vec<(usize, usize)>) {
        let grid = letters(&["ABC", "DEF", "GHI"]);
        let expect: Vec<Cell> = expect.into_iter().map(Cell::from).collect();
        assert_eq!(grid.locate(word), Some(expect));
    }

    #[rstest]
    #[case("DOG")]
    #[case("CATS")]
    #[case("")]
    fn locate_misses(#[case] word: &str) {
        let grid = letters(&["CAT", "XXX", "XXX"]);
        assert_eq!(grid.locate(word), None);
    }
}
