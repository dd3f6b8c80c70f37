use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::MoveSelector;
use crate::core::{Board, Move, PieceKind, VariantConfig};
use crate::search::evaluation::material;

// ============================================================================
// HEURÍSTICAS POSICIONAIS
// ============================================================================

pub const CENTER_BONUS: i32 = 15;
/// Por fila de distância entre o destino do peão e a fila de trás do jogador.
pub const PAWN_ADVANCE_BONUS: i32 = 10;
pub const DEVELOPMENT_BONUS: i32 = 10;
pub const KNIGHT_EDGE_PENALTY: i32 = 10;

/// Estratégia de um lance: maximiza ganho material mais bónus posicionais,
/// com desempate uniforme entre os melhores.
#[derive(Debug)]
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(seed: u64) -> Self {
        GreedyEngine { rng: StdRng::seed_from_u64(seed) }
    }

    /// Pontuação de um lance do ponto de vista de quem o joga.
    pub fn score_move(board: &Board, mv: Move) -> i32 {
        let mover = board.to_move();
        let before = material(board);
        let mut after = board.clone();
        after.make_move(mv);
        let gain = mover.sign() * (material(&after) - before);

        gain + positional_bonus(board.config(), mv)
    }
}

/// Bónus posicional de um lance, independente do material.
pub fn positional_bonus(config: &VariantConfig, mv: Move) -> i32 {
    let color = mv.piece.color;
    let home = config.home_row(color);
    let mut bonus = 0;

    // Controlo do centro
    if config.is_center(mv.to) {
        bonus += CENTER_BONUS;
    }

    match mv.piece.kind {
        PieceKind::Pawn => {
            bonus += PAWN_ADVANCE_BONUS * i32::from(mv.to.row.abs_diff(home));
        }
        PieceKind::Knight | PieceKind::Bishop => {
            // Desenvolvimento
            if mv.from.row == home && mv.to.row != home {
                bonus += DEVELOPMENT_BONUS;
            }
            if mv.piece.kind == PieceKind::Knight && config.is_edge_file(mv.to) {
                bonus -= KNIGHT_EDGE_PENALTY;
            }
        }
        _ => {}
    }

    bonus
}

impl MoveSelector for GreedyEngine {
    fn name(&self) -> String {
        "greedy".to_string()
    }

    fn get_move(&mut self, board: &Board) -> Option<Move> {
        let scored: Vec<(Move, i32)> = board
            .generate_legal_moves()
            .into_iter()
            .map(|mv| (mv, Self::score_move(board, mv)))
            .collect();
        let best = scored.iter().map(|&(_, score)| score).max()?;
        let candidates: Vec<Move> = scored
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(mv, _)| mv)
            .collect();
        candidates.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    #[test]
    fn prefers_central_pawn_pushes_in_4x5() {
        let board = Board::new(Variant::Silverman4x5);
        let a3 = board.parse_move("a2a3").unwrap();
        let b3 = board.parse_move("b2b3").unwrap();
        assert_eq!(GreedyEngine::score_move(&board, a3), 20);
        assert_eq!(GreedyEngine::score_move(&board, b3), 35);

        let mut engine = GreedyEngine::new(5);
        for _ in 0..10 {
            let mv = engine.get_move(&board).unwrap();
            assert!(["b2-b3", "c2-c3"].contains(&mv.to_string().as_str()));
        }
    }

    #[test]
    fn black_pawn_advance_counts_from_black_back_rank() {
        let board = Board::from_fen("rqkr/pppp/4/PPPP/RQKR b d 0 1").unwrap();
        let d3 = board.parse_move("d4d3").unwrap();
        // Duas filas a partir da fila 5, fora do centro.
        assert_eq!(GreedyEngine::score_move(&board, d3), 20);
    }

    #[test]
    fn knight_development_and_edge_penalty() {
        let board = Board::new(Variant::LosAlamos6x6);
        // b1-a3: desenvolve (+10) mas vai para a borda (-10).
        let edge = board.parse_move("b1a3").unwrap();
        assert_eq!(GreedyEngine::score_move(&board, edge), 0);
        // b1-c3: desenvolve e ocupa o centro.
        let center = board.parse_move("b1c3").unwrap();
        assert_eq!(GreedyEngine::score_move(&board, center), DEVELOPMENT_BONUS + CENTER_BONUS);
    }

    #[test]
    fn takes_material_when_available() {
        let board = Board::from_fen("k3/4/r3/R2K w - 0 1").unwrap();
        let mut engine = GreedyEngine::new(1);
        let mv = engine.get_move(&board).unwrap();
        assert_eq!(mv.to_string(), "a1xa2");
        assert_eq!(GreedyEngine::score_move(&board, mv), 500);
    }
}
