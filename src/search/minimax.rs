// Minimax de largura total, sem poda. Serve de referência para validar a
// busca alpha-beta: as duas têm de chegar à mesma pontuação na raiz.

use crate::core::*;
use crate::search::alpha_beta::SearchContext;
use crate::search::evaluation::{Evaluator, INF};

/// Valor minimax da posição, do ponto de vista das brancas.
pub fn minimax_value(board: &mut Board, depth: u32, evaluator: &Evaluator, ctx: &mut SearchContext) -> i32 {
    ctx.nodes += 1;

    let moves = board.legal_moves_in_place();
    if depth == 0 || moves.is_empty() || board.is_draw_by_halfmove_clock() {
        return evaluator.evaluate(board);
    }

    let maximizing = board.to_move() == Color::White;
    let mut best = if maximizing { -INF } else { INF };
    for mv in moves {
        board.make_move(mv);
        let value = minimax_value(board, depth - 1, evaluator, ctx);
        board.unmake_move();

        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::alpha_beta::AlphaBetaSearcher;

    #[test]
    fn pruning_keeps_root_score_and_visits_fewer_nodes() {
        let evaluator = Evaluator::new();
        let mut board = Board::new(Variant::Silverman4x4);
        let mut ctx = SearchContext::new();
        let reference = minimax_value(&mut board, 3, &evaluator, &mut ctx);

        let result = AlphaBetaSearcher::new(evaluator).search(&mut board, 3);
        assert_eq!(result.score, board.to_move().sign() * reference);
        assert!(result.nodes_searched <= ctx.nodes);
    }

    #[test]
    fn leaves_board_untouched() {
        let mut board = Board::new(Variant::Baby5x5);
        let before = board.clone();
        minimax_value(&mut board, 2, &Evaluator::new(), &mut SearchContext::new());
        assert_eq!(board, before);
    }
}
