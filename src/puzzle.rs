use tracing::warn;

use crate::api::PuzzleResponse;
use crate::config::ValidationConfig;
use crate::grid::{Cell, Grid};
use crate::words::WordList;

/// The letter grid and target words of one puzzle.
///
/// A `Puzzle` is only ever built from a response that passed validation, so the
/// grid is square and non-empty and every word fits in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid<char>,
    words: WordList,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Validate a server response and build a puzzle from it.
    pub fn from_response(
        response: PuzzleResponse,
        validation: &ValidationConfig,
    ) -> Result<Self, Error> {
        let PuzzleResponse {
            grid,
            words,
            solution,
        } = response;

        let grid = parse_grid(grid)?;
        let size = grid.size();

        if words.is_empty() {
            return Err(Error::NoWords);
        }
        let mut list = WordList::new();
        for word in words {
            let len = word.chars().count();
            if len == 0 {
                return Err(Error::EmptyWord);
            }
            if len > size {
                return Err(Error::WordTooLong { word, len, size });
            }
            if validation.require_findable_words && grid.locate(&word).is_none() {
                return Err(Error::NotFindable { word });
            }
            let (_, inserted) = list.insert(word.clone());
            if !inserted {
                warn!(%word, "dropping duplicate word from puzzle");
            }
        }

        for placement in solution.iter().flatten() {
            let read = placement.path().and_then(|path| grid.read(&path));
            if read.as_deref() != Some(placement.word.as_str()) {
                return Err(Error::BadPlacement {
                    word: placement.word.clone(),
                    at: Cell::new(placement.row, placement.col),
                });
            }
        }

        Ok(Puzzle { grid, words: list })
    }
}

fn parse_grid(rows: Vec<Vec<String>>) -> Result<Grid<char>, Error> {
    let size = rows.len();
    if size == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut letters = Vec::with_capacity(size);
    for (row, cells) in rows.into_iter().enumerate() {
        if cells.len() != size {
            return Err(Error::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }
        let parsed = cells
            .into_iter()
            .enumerate()
            .map(|(col, glyph)| parse_glyph(glyph, Cell::new(row, col)))
            .collect::<Result<Vec<char>, Error>>()?;
        letters.push(parsed);
    }
    Ok(Grid::from_square_rows(letters))
}

/// A grid cell must hold exactly one printable, non-blank character.
fn parse_glyph(glyph: String, cell: Cell) -> Result<char, Error> {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() && !c.is_whitespace() => Ok(c),
        _ => Err(Error::BadGlyph { cell, glyph }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the puzzle grid is empty")]
    EmptyGrid,
    #[error("row {row} has {len} cells but the grid has {size} rows")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("the cell `{cell}` holds {glyph:?}, which is not a single printable character")]
    BadGlyph { cell: Cell, glyph: String },
    #[error("the puzzle has no words")]
    NoWords,
    #[error("the puzzle contains an empty word")]
    EmptyWord,
    #[error("\"{word}\" has {len} letters but the grid is only {size} wide")]
    WordTooLong {
        word: String,
        len: usize,
        size: usize,
    },
    #[error("\"{word}\" does not appear in the grid")]
    NotFindable { word: String },
    #[error("the solution places \"{word}\" at `{at}` but the grid disagrees")]
    BadPlacement { word: String, at: Cell },
}
