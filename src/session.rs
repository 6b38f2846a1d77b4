use tracing::{debug, info, trace};

use crate::grid::Cell;
use crate::input::{Pointer, SurfaceMetrics};
use crate::palette::{Color, Palette};
use crate::progress::{CompletionLatch, FoundWord, FoundWords, WordListing};
use crate::puzzle::Puzzle;
use crate::render::Board;
use crate::selection::SelectionTracker;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No puzzle, either because none was requested or because loading failed.
    Idle,
    Loading,
    Ready,
    /// A gesture is in progress.
    Selecting,
    /// Every word has been found. Terminal until the next load.
    Complete,
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The board changed and should be repainted.
    Redraw,
    /// A target word was found for the first time.
    WordFound { word: String, color: Color },
    /// The last word was found. Sent once per puzzle.
    PuzzleComplete,
}

/// The live state of one puzzle.
///
/// Each gesture event returns the [`Signal`]s it caused. Nothing here touches a
/// surface.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    palette: Palette,
    tracker: SelectionTracker,
    found: FoundWords,
    latch: CompletionLatch,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle, palette: Palette) -> Self {
        debug!(
            size = puzzle.size(),
            words = puzzle.words().len(),
            "starting puzzle session"
        );
        Self {
            tracker: SelectionTracker::new(puzzle.size()),
            found: FoundWords::new(puzzle.words().len()),
            latch: CompletionLatch::default(),
            puzzle,
            palette,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    /// The cells of the gesture in progress.
    pub fn selection(&self) -> &[Cell] {
        self.tracker.cells()
    }

    pub fn is_complete(&self) -> bool {
        self.latch.has_fired()
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.tracker.is_active() {
            Phase::Selecting
        } else {
            Phase::Ready
        }
    }

    pub fn listing(&self) -> WordListing<'_> {
        WordListing::new(self.puzzle.words(), &self.found)
    }

    pub fn board(&self) -> Board<'_> {
        Board {
            grid: self.puzzle.grid(),
            found: self.found.entries(),
            selection: self.tracker.cells(),
        }
    }

    pub fn on_gesture_start(
        &mut self,
        pointer: &dyn Pointer,
        metrics: &SurfaceMetrics,
    ) -> Vec<Signal> {
        if self.is_complete() {
            trace!("ignoring gesture on a completed puzzle");
            return Vec::new();
        }
        let Some(cell) = locate(pointer, metrics) else {
            // an unmappable start still abandons the previous selection
            self.tracker.end();
            return vec![Signal::Redraw];
        };
        if let Err(rejection) = self.tracker.start(cell) {
            trace!(%rejection, "gesture did not start");
        }
        vec![Signal::Redraw]
    }

    pub fn on_gesture_move(
        &mut self,
        pointer: &dyn Pointer,
        metrics: &SurfaceMetrics,
    ) -> Vec<Signal> {
        if !self.tracker.is_active() {
            return Vec::new();
        }
        let Some(cell) = locate(pointer, metrics) else {
            return Vec::new();
        };
        match self.tracker.extend(cell) {
            Ok(_) => vec![Signal::Redraw],
            Err(rejection) => {
                trace!(%rejection, "ignoring cell");
                Vec::new()
            }
        }
    }

    pub fn on_gesture_end(&mut self) -> Vec<Signal> {
        if !self.tracker.is_active() {
            return Vec::new();
        }
        let selection = self.tracker.end();
        let mut signals = self.evaluate(&selection);
        signals.push(Signal::Redraw);
        signals
    }

    /// Check a finished selection against the word list.
    ///
    /// A word that is a target and not yet found is recorded with the next
    /// palette color. Anything else changes nothing.
    pub fn evaluate(&mut self, selection: &[Cell]) -> Vec<Signal> {
        let mut signals = Vec::new();
        if self.is_complete() {
            return signals;
        }
        let Some(candidate) = self.puzzle.grid().read(selection) else {
            return signals;
        };
        let Some(word) = self.puzzle.words().get(candidate.as_str()) else {
            trace!(%candidate, "not a target word");
            return signals;
        };
        if self.found.contains(word) {
            trace!(%candidate, "already found");
            return signals;
        }

        let color = self.palette.nth(self.found.len());
        let entry = FoundWord {
            word,
            text: candidate,
            path: selection.to_vec(),
            color,
        };
        if let Some(entry) = self.found.insert(entry) {
            info!(word = %entry.text, %color, "found word");
            signals.push(Signal::WordFound {
                word: entry.text.clone(),
                color,
            });
        }

        if self
            .latch
            .observe(self.found.len(), self.puzzle.words().len())
        {
            info!("puzzle complete");
            signals.push(Signal::PuzzleComplete);
        }
        signals
    }
}

fn locate(pointer: &dyn Pointer, metrics: &SurfaceMetrics) -> Option<Cell> {
    pointer.position().and_then(|point| metrics.cell_at(point))
}
