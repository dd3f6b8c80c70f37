// Ficheiro: src/core/error.rs
// Descrição: Erros do modelo de posição (tabuleiro, variantes e notação).

use super::types::Move;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// O lance não pertence ao conjunto de lances legais; o tabuleiro fica inalterado.
    #[error("Invalid move: {mv}")]
    InvalidMove { mv: String },

    /// `undo_last` sem histórico: nada a desfazer.
    #[error("No move to undo")]
    NoHistory,

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid notation: {0}")]
    BadNotation(String),

    #[error("Invalid FEN: {0}")]
    BadFen(String),

    #[error("Illegal position: {0}")]
    IllegalPosition(String),
}

impl BoardError {
    pub fn invalid_move(mv: &Move) -> Self {
        BoardError::InvalidMove { mv: mv.to_string() }
    }
}
