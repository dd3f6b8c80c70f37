// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::{Board, Move, Piece, Square};

/// Deslocamentos (linha, coluna) do cavalo.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Gera os lances pseudo-legais de um cavalo.
#[inline]
pub fn generate_knight_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    super::push_leaper_moves(board, from, piece, &KNIGHT_OFFSETS, moves);
}
