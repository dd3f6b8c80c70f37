use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::MoveSelector;
use crate::core::{Board, Move};

/// Escolhe um lance legal uniformemente ao acaso.
#[derive(Debug)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        RandomEngine { rng: StdRng::seed_from_u64(seed) }
    }
}

impl MoveSelector for RandomEngine {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn get_move(&mut self, board: &Board) -> Option<Move> {
        board.generate_legal_moves().choose(&mut self.rng).copied()
    }
}
