use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::grid::Cell;

/// Body of `GET /get_topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest<'a> {
    pub topic: &'a str,
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResponse {
    pub grid: Vec<Vec<String>>,
    pub words: Vec<String>,
    /// Where the generator put each word. Not every server sends this.
    #[serde(default)]
    pub solution: Option<Vec<Placement>>,
}

/// One word as the generator placed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Placement {
    /// The cells this placement claims to occupy, or `None` if they run past
    /// the addressable range.
    pub fn path(&self) -> Option<Vec<Cell>> {
        let step = match self.direction {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        };
        let start = Cell::new(self.row, self.col);
        (0..self.word.chars().count())
            .map(|n| start.offset(step, n))
            .collect()
    }
}

/// Where topics and puzzles come from.
pub trait Backend {
    fn topics(&self) -> Result<Vec<String>>;

    fn generate(&self, topic: &str) -> Result<PuzzleResponse>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn topics(&self) -> Result<Vec<String>> {
        (**self).topics()
    }

    fn generate(&self, topic: &str) -> Result<PuzzleResponse> {
        (**self).generate(topic)
    }
}

/// [`Backend`] over HTTP.
pub struct HttpBackend {
    client: Client,
    topics_url: String,
    generate_url: String,
}

impl HttpBackend {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(Error::Transport)?;
        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            topics_url: format!("{base}{}", config.topics_path),
            generate_url: format!("{base}{}", config.generate_path),
        })
    }

    /// Turn a response into its decoded body, or the error it represents.
    fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::blocking::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                endpoint: endpoint.to_owned(),
                status: status.as_u16(),
            });
        }
        let body = response.text().map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            endpoint: endpoint.to_owned(),
            source,
        })
    }
}

impl Backend for HttpBackend {
    fn topics(&self) -> Result<Vec<String>> {
        debug!(url = %self.topics_url, "fetching topics");
        let response = self
            .client
            .get(&self.topics_url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(Error::Transport)?;
        let body: TopicsResponse = Self::decode(&self.topics_url, response)?;
        Ok(body.topics)
    }

    fn generate(&self, topic: &str) -> Result<PuzzleResponse> {
        debug!(url = %self.generate_url, topic, "requesting puzzle");
        let response = self
            .client
            .post(&self.generate_url)
            .header(ACCEPT, "application/json")
            .json(&GenerateRequest { topic })
            .send()
            .map_err(Error::Transport)?;
        Self::decode(&self.generate_url, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn decodes_puzzle_without_solution() {
        let body = r#"{"grid": [["C","A"],["X","X"]], "words": ["CA"]}"#;
        let puzzle: PuzzleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(puzzle.grid[0], ["C", "A"]);
        assert_eq!(puzzle.words, ["CA"]);
        assert_eq!(puzzle.solution, None);
    }

    #[test]
    fn decodes_solution_placements() {
        let body = r#"{
            "grid": [["C","A","T"],["X","X","X"],["X","X","X"]],
            "words": ["CAT"],
            "solution": [{"word": "CAT", "row": 0, "col": 0, "direction": "HORIZONTAL"}]
        }"#;
        let puzzle: PuzzleResponse = serde_json::from_str(body).unwrap();
        let solution = puzzle.solution.unwrap();
        assert_eq!(solution[0].direction, Direction::Horizontal);
        assert_eq!(
            solution[0].path().unwrap(),
            [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
    }

    #[test]
    fn placement_paths_follow_direction() {
        let placement = |direction| Placement {
            word: "DOG".into(),
            row: 1,
            col: 2,
            direction,
        };
        assert_eq!(
            placement(Direction::Vertical).path().unwrap(),
            [Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]
        );
        assert_eq!(
            placement(Direction::Diagonal).path().unwrap(),
            [Cell::new(1, 2), Cell::new(2, 3), Cell::new(3, 4)]
        );
    }

    #[test]
    fn placement_past_usize_max_has_no_path() {
        let placement = Placement {
            word: "DOG".into(),
            row: 0,
            col: usize::MAX,
            direction: Direction::Horizontal,
        };
        assert_eq!(placement.path(), None);
    }

    #[rstest]
    #[case("http://127.0.0.1:5000")]
    #[case("http://127.0.0.1:5000/")]
    #[case("http://127.0.0.1:5000///")]
    fn backend_joins_base_url_and_paths(#[case] base_url: &str) {
        let config = ServerConfig {
            base_url: base_url.into(),
            ..ServerConfig::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.topics_url, "http://127.0.0.1:5000/get_topics");
        assert_eq!(backend.generate_url, "http://127.0.0.1:5000/generate");
    }

    #[test]
    fn backend_uses_configured_paths() {
        let config = ServerConfig {
            base_url: "https://puzzles.example.com/api/".into(),
            topics_path: "/topics".into(),
            generate_path: "/puzzle".into(),
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.topics_url, "https://puzzles.example.com/api/topics");
        assert_eq!(backend.generate_url, "https://puzzles.example.com/api/puzzle");
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&GenerateRequest { topic: "Sports" }).unwrap();
        assert_eq!(body, r#"{"topic":"Sports"}"#);
    }

    #[test]
    fn topics_body_shape() {
        let topics: TopicsResponse = serde_json::from_str(r#"{"topics": []}"#).unwrap();
        assert!(topics.topics.is_empty());
    }
}
