// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres e Bispos).

use crate::core::{Board, Move, Piece, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Percorre cada raio casa a casa: lances para casas vazias, uma captura na
/// primeira peça inimiga, e o raio termina em qualquer casa ocupada.
pub(crate) fn push_ray_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    let config = board.config();
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = config.offset(current, dr, dc) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to, piece, None)),
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(Move::new(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

pub fn generate_rook_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    push_ray_moves(board, from, piece, &ROOK_DIRECTIONS, moves);
}

pub fn generate_bishop_moves_into(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    push_ray_moves(board, from, piece, &BISHOP_DIRECTIONS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PieceKind};

    #[test]
    fn rook_ray_stops_at_first_piece() {
        // Torre em a1: sobe até a3 (captura), para a direita é bloqueada pelo rei em c1.
        let board = Board::from_fen("k3/p3/4/R1K1 w - 0 1").unwrap();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let mut moves = Vec::new();
        generate_rook_moves_into(&board, Square::new(0, 0), rook, &mut moves);
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["a2", "a3", "b1"]);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);
    }

    #[test]
    fn bishop_walks_full_diagonal() {
        let board = Board::from_fen("3k/4/4/4/B3/K3 w - 0 1").unwrap();
        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        let mut moves = Vec::new();
        generate_bishop_moves_into(&board, Square::new(1, 0), bishop, &mut moves);
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        // b1 e a diagonal b3-c4 até d5; d5 está vazia (o rei preto está em d6).
        assert_eq!(targets, vec!["b1", "b3", "c4", "d5"]);
    }
}
