// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei.

use crate::core::{Board, Move, Piece, Square};

/// Movimentos de um passo em todas as 8 direções.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Gera os lances pseudo-legais do rei. Não há roque nas variantes generalizadas.
#[inline]
pub fn generate_king_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    super::push_leaper_moves(board, from, piece, &KING_OFFSETS, moves);
}
