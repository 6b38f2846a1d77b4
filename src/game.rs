use tracing::{debug, error, warn};

use crate::api::{Backend, PuzzleResponse};
use crate::config::Config;
use crate::error::Result;
use crate::input::{Pointer, Rect, SurfaceMetrics};
use crate::palette::Palette;
use crate::progress::WordListing;
use crate::puzzle::Puzzle;
use crate::render::{paint, Surface};
use crate::session::{Phase, PuzzleSession, Signal};

pub const NO_TOPICS: &str = "No topics available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    pub label: String,
    pub value: String,
    pub enabled: bool,
}

/// The topic picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicMenu {
    entries: Vec<TopicEntry>,
    selected: Option<usize>,
}

impl TopicMenu {
    fn from_topics(topics: Vec<String>) -> Self {
        if topics.is_empty() {
            return Self {
                entries: vec![TopicEntry {
                    label: NO_TOPICS.into(),
                    value: String::new(),
                    enabled: false,
                }],
                selected: None,
            };
        }
        let entries = topics
            .into_iter()
            .map(|topic| TopicEntry {
                label: topic.clone(),
                value: topic,
                enabled: true,
            })
            .collect();
        Self {
            entries,
            selected: Some(0),
        }
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(|entry| entry.value.as_str())
    }

    fn select(&mut self, value: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|entry| entry.enabled && entry.value == value)
        {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }
}

/// Everything the player sees, driven by explicit events.
///
/// Network calls go through `B`; they block, and a failed call is logged and
/// leaves the game without a puzzle.
pub struct Game<B> {
    backend: B,
    config: Config,
    palette: Palette,
    menu: TopicMenu,
    session: Option<PuzzleSession>,
    loading: bool,
    popup_open: bool,
}

impl<B: Backend> Game<B> {
    pub fn new(backend: B, config: Config) -> Result<Self> {
        config.validate()?;
        let palette = config.palette()?;
        Ok(Self {
            backend,
            config,
            palette,
            menu: TopicMenu::default(),
            session: None,
            loading: false,
            popup_open: false,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn menu(&self) -> &TopicMenu {
        &self.menu
    }

    pub fn session(&self) -> Option<&PuzzleSession> {
        self.session.as_ref()
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    pub fn phase(&self) -> Phase {
        match &self.session {
            _ if self.loading => Phase::Loading,
            None => Phase::Idle,
            Some(session) => session.phase(),
        }
    }

    /// Fetch the topic list, fill the menu, and load a puzzle for the first topic.
    pub fn load_topics(&mut self) -> Vec<Signal> {
        let topics = self.backend.topics();
        self.on_topics_loaded(topics)
    }

    pub fn on_topics_loaded(&mut self, topics: Result<Vec<String>>) -> Vec<Signal> {
        let topics = match topics {
            Ok(topics) => topics,
            Err(err) => {
                error!(error = %err, "error fetching topics");
                return Vec::new();
            }
        };
        debug!(count = topics.len(), "loaded topics");
        self.menu = TopicMenu::from_topics(topics);
        if self.menu.selected().is_none() {
            return vec![Signal::Redraw];
        }
        self.load_puzzle()
    }

    /// Switch topic and load a fresh puzzle for it.
    pub fn select_topic(&mut self, topic: &str) -> Vec<Signal> {
        if !self.menu.select(topic) {
            warn!(topic, "ignoring unknown topic");
            return Vec::new();
        }
        self.load_puzzle()
    }

    /// Throw away the current puzzle and fetch a new one for the selected topic.
    pub fn load_puzzle(&mut self) -> Vec<Signal> {
        let Some(topic) = self.begin_load() else {
            return vec![Signal::Redraw];
        };
        let response = self.backend.generate(&topic);
        self.on_puzzle_loaded(response)
    }

    /// Drop the current puzzle and enter [`Phase::Loading`].
    ///
    /// Returns the topic to request, or `None` if no topic is selected.
    pub fn begin_load(&mut self) -> Option<String> {
        self.session = None;
        self.popup_open = false;
        let topic = self.menu.selected()?.to_owned();
        self.loading = true;
        Some(topic)
    }

    pub fn on_puzzle_loaded(&mut self, response: Result<PuzzleResponse>) -> Vec<Signal> {
        self.loading = false;
        let puzzle = response.and_then(|response| {
            Ok(Puzzle::from_response(response, &self.config.validation)?)
        });
        match puzzle {
            Ok(puzzle) => {
                self.session = Some(PuzzleSession::new(puzzle, self.palette.clone()));
                vec![Signal::Redraw]
            }
            Err(err) => {
                error!(error = %err, "error fetching puzzle");
                Vec::new()
            }
        }
    }

    pub fn pointer_down(
        &mut self,
        pointer: &dyn Pointer,
        metrics: &SurfaceMetrics,
    ) -> Vec<Signal> {
        match &mut self.session {
            Some(session) => session.on_gesture_start(pointer, metrics),
            None => Vec::new(),
        }
    }

    pub fn pointer_move(
        &mut self,
        pointer: &dyn Pointer,
        metrics: &SurfaceMetrics,
    ) -> Vec<Signal> {
        match &mut self.session {
            Some(session) => session.on_gesture_move(pointer, metrics),
            None => Vec::new(),
        }
    }

    pub fn pointer_up(&mut self) -> Vec<Signal> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };
        let signals = session.on_gesture_end();
        if signals.contains(&Signal::PuzzleComplete) {
            self.popup_open = true;
        }
        signals
    }

    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }

    pub fn play_again(&mut self) -> Vec<Signal> {
        self.close_popup();
        self.load_puzzle()
    }

    /// Metrics for the current puzzle's surface displayed in `rect`.
    pub fn metrics(&self, rect: Rect) -> Option<SurfaceMetrics> {
        let session = self.session.as_ref()?;
        let cell_size = self.config.board.cell_size;
        let side = session.puzzle().size() as f64 * cell_size;
        Some(SurfaceMetrics {
            rect,
            bitmap_width: side,
            bitmap_height: side,
            cell_size,
        })
    }

    /// Paint the board. Without a puzzle there is nothing to paint.
    pub fn render(&self, surface: &mut impl Surface) {
        if let Some(session) = &self.session {
            paint(surface, session.board(), &self.config.board);
        }
    }

    pub fn word_listing(&self) -> Option<WordListing<'_>> {
        self.session.as_ref().map(PuzzleSession::listing)
    }
}
