/// Error types.  Only construction-time defects surface here; gameplay
/// inputs that can't be honoured (off-grid moves, unmapped keys) are
/// reported as plain values instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResourceError {
    #[error("no asset named {0:?} in the sprite catalogue")]
    UnknownAsset(String),

    #[error("asset {0:?} requested before it finished loading")]
    NotLoaded(String),

    #[error("asset loader thread hung up before reporting")]
    LoaderDisconnected,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EntityError {
    #[error("unknown mob variant {0:?}")]
    UnknownVariant(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Entity(#[from] EntityError),
}
