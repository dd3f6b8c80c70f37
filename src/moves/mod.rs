// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod queen;
pub mod king;

use crate::core::{Board, Move, Piece, PieceKind, Square};

/// Gera os lances pseudo-legais da peça `piece` em `from`.
///
/// A cor vem da própria peça e não do lado a jogar, o que permite reutilizar
/// os geradores para verificar ataques do adversário.
pub fn generate_piece_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves_into(board, from, piece, moves),
        PieceKind::Knight => knight::generate_knight_moves_into(board, from, piece, moves),
        PieceKind::Bishop => sliding::generate_bishop_moves_into(board, from, piece, moves),
        PieceKind::Rook => sliding::generate_rook_moves_into(board, from, piece, moves),
        PieceKind::Queen => queen::generate_queen_moves_into(board, from, piece, moves),
        PieceKind::King => king::generate_king_moves_into(board, from, piece, moves),
    }
}

/// Lances de peças que saltam (cavalo e rei): casa vazia ou peça inimiga.
#[inline]
pub(crate) fn push_leaper_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        let Some(to) = board.config().offset(from, dr, dc) else { continue };
        match board.piece_at(to) {
            None => moves.push(Move::new(from, to, piece, None)),
            Some(target) if target.color != piece.color => moves.push(Move::new(from, to, piece, Some(target))),
            Some(_) => {}
        }
    }
}
