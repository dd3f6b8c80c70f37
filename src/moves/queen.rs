// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para gerar os lances da Dama (torre + bispo).

use crate::core::{Board, Move, Piece, Square};
use super::sliding::{push_ray_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Gera todos os lances pseudo-legais da dama.
#[inline]
pub fn generate_queen_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    push_ray_moves(board, from, piece, &ROOK_DIRECTIONS, moves);
    push_ray_moves(board, from, piece, &BISHOP_DIRECTIONS, moves);
}
