// Ficheiro: src/core/mod.rs
// Descrição: Modelo de posição: tipos, variantes, tabuleiro e notação.

pub mod board;
pub mod error;
pub mod notation;
pub mod types;
pub mod variant;

pub use board::{Board, GameResult, GameStatus, DRAW_HALFMOVE_THRESHOLD, MAX_MOVE_COUNTER};
pub use error::BoardError;
pub use types::*;
pub use variant::{Variant, VariantConfig};
