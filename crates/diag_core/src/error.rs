/// Errors raised by the engine for malformed inputs.
///
/// Illegal move requests are never reported here; the resolver turns them
/// into fallback moves and penalties instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown piece name: {0:?}")]
    UnknownPieceName(String),
    #[error("invalid piece code: {0}")]
    InvalidPieceCode(i32),
    #[error("invalid piece character: {0:?}")]
    InvalidPieceChar(char),
    #[error("invalid move notation: {0:?}")]
    InvalidMoveNotation(String),
    #[error("action out of range: {0}")]
    InvalidAction(u32),
    #[error("invalid board notation: {0}")]
    InvalidNotation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
