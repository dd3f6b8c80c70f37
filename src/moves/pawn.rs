// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões (avanço simples, duplo e capturas).

use crate::core::{Board, Color, Move, Piece, Square};

/// Colunas das capturas diagonais do peão.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

/// Gera os lances pseudo-legais de um peão.
///
/// Sem en passant nem promoção: um peão na última fila fica sem lances.
pub fn generate_pawn_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    let config = board.config();
    let forward = piece.color.forward();

    // Avanço simples (e duplo, se a variante o permitir e o caminho estiver livre)
    if let Some(one) = config.offset(from, forward, 0) {
        if board.piece_at(one).is_none() {
            moves.push(Move::new(from, one, piece, None));

            if can_double_push(board, from, piece.color) {
                if let Some(two) = config.offset(one, forward, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(from, two, piece, None));
                    }
                }
            }
        }
    }

    // Capturas diagonais
    for dc in PAWN_CAPTURE_COLS {
        let Some(to) = config.offset(from, forward, dc) else { continue };
        if let Some(target) = board.piece_at(to) {
            if target.color != piece.color {
                moves.push(Move::new(from, to, piece, Some(target)));
            }
        }
    }
}

/// Verdadeiro se um peão desta cor em `from` tem direito ao lance duplo.
#[inline]
pub fn can_double_push(board: &Board, from: Square, color: Color) -> bool {
    let config = board.config();
    config.pawn_double_move() && from.row == config.pawn_start_row(color)
}
