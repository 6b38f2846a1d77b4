use std::path::Path;

use serde::Deserialize;

use crate::palette::{self, Color, Palette, PASTELS};
use crate::render::Style;

/// Game configuration. Every field has a default, so an empty TOML document is
/// a complete configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub board: Style,
    pub palette: Vec<Color>,
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            board: Style::default(),
            palette: PASTELS.to_vec(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let cell_size = self.board.cell_size;
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(Error::CellSize(cell_size));
        }
        self.palette()?;
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette, Error> {
        Ok(Palette::new(self.palette.clone())?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub base_url: String,
    pub topics_path: String,
    pub generate_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            topics_path: "/get_topics".into(),
            generate_path: "/generate".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reject puzzles containing a word that cannot be found in the grid.
    pub require_findable_words: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_findable_words: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read config file `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Palette(#[from] palette::Error),
    #[error("cell size must be positive, got {0}")]
    CellSize(f64),
}
