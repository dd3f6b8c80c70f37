use crate::core::BoardError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown engine: {0} (expected random, greedy or minimax:<depth>)")]
    UnknownEngine(String),

    #[error("Invalid search depth {0}: must be at least 1")]
    InvalidDepth(u32),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}
