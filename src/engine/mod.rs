// Ficheiro: src/engine/mod.rs
// Descrição: Estratégias de escolha de lances, sessões de jogo e torneios entre motores.

pub mod arena;
pub mod error;
pub mod game;
pub mod greedy;
pub mod minimax;
pub mod random;
pub mod spec;

pub use arena::{Arena, GameSummary, MatchConfig, MatchReport};
pub use error::EngineError;
pub use game::{GameRecord, GameSession, StepOutcome};
pub use greedy::GreedyEngine;
pub use minimax::MinimaxEngine;
pub use random::RandomEngine;
pub use spec::EngineSpec;

use crate::core::{Board, Move};

/// Uma estratégia que escolhe um lance para o lado a jogar.
///
/// `get_move` devolve `None` se e só se não houver lances legais. Um lance
/// devolvido pertence sempre ao conjunto de lances legais da posição.
pub trait MoveSelector: Send {
    fn name(&self) -> String;
    fn get_move(&mut self, board: &Board) -> Option<Move>;
}
