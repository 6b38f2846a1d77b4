mod api;
mod config;
mod error;
mod game;
mod grid;
mod input;
mod palette;
mod progress;
mod puzzle;
mod render;
mod scene;
mod selection;
mod session;
mod words;

pub use api::{
    Backend, Direction, GenerateRequest, HttpBackend, Placement, PuzzleResponse, TopicsResponse,
};
pub use config::{Config, Error as ConfigError, ServerConfig, ValidationConfig};
pub use error::{Error, Result};
pub use game::{Game, TopicEntry, TopicMenu, NO_TOPICS};
pub use grid::{Cell, Grid};
pub use input::{MouseInput, Point, Pointer, Rect, SurfaceMetrics, TouchInput};
pub use palette::{Color, Error as PaletteError, Palette, PASTELS};
pub use progress::{CompletionLatch, FoundWord, FoundWords, ListingEntry, WordListing};
pub use puzzle::{Error as PuzzleError, Puzzle};
pub use render::{paint, Board, Highlight, Paint, Style, Surface};
pub use scene::{DrawOp, Scene};
pub use selection::{Rejection, Selection, SelectionTracker};
pub use session::{Phase, PuzzleSession, Signal};
pub use words::{WordId, WordList};
