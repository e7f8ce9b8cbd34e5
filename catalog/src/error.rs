use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("mismatched API URLs (expected {expected_base} but got {actual_url} instead)")]
    ApiMismatch {
        expected_base: String,
        actual_url: String,
    },
    #[error("unexpected shape: {0}")]
    UnexpectedShape(#[from] Shape),
}

/// The two broad families of failure a card can run into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Transport,
    UnexpectedShape,
}

impl Error {
    pub fn kind(&self) -> Kind {
        match self {
            Self::RequestFailed(_) => Kind::Transport,
            Self::ApiMismatch { .. } | Self::UnexpectedShape(_) => Kind::UnexpectedShape,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

/// A payload that decoded, or failed to decode, into something we cannot draw.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Shape {
    #[error("malformed {resource}: {error}")]
    Malformed {
        resource: String,
        error: Arc<serde_json::Error>,
    },
    #[error("{pokemon} has no moves")]
    NoMoves { pokemon: String },
    #[error("{pokemon} has no types")]
    NoTypes { pokemon: String },
    #[error("{pokemon} has no hp stat")]
    NoHp { pokemon: String },
    #[error("{pokemon} has no sprite")]
    NoSprite { pokemon: String },
    #[error("move {name} has no English flavor text")]
    NoEnglishText { name: String },
    #[error("unknown type: {0}")]
    UnknownType(String),
}
