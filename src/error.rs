use crate::{config, puzzle};

/// Everything that can go wrong outside of a gesture.
///
/// Gestures never fail; see [`Rejection`][crate::Rejection].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
    #[error("`{endpoint}` answered with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("`{endpoint}` sent a body that could not be decoded")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("the server sent an unusable puzzle")]
    Puzzle(#[from] puzzle::Error),
    #[error("invalid configuration")]
    Config(#[from] config::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
