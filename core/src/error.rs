use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("move violates the row's progression rules")]
    InvalidMove,
    #[error("game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("snapshot violates pad invariants")]
    CorruptState,
}

pub type Result<T> = core::result::Result<T, GameError>;
