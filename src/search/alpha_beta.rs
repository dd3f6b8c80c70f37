use std::time::{Duration, Instant};

use crate::core::*;
use crate::search::evaluation::{Evaluator, INF};
use crate::search::move_ordering::order_moves;
use crate::search::tie_break::TieBreak;

/// Resultado da busca Alpha-Beta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Pontuação do ponto de vista do lado a jogar.
    pub score: i32,
    pub depth: u32,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
}

/// Contadores de uma busca, passados explicitamente pela recursão.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchContext {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Busca negamax com poda alpha-beta a profundidade fixa.
#[derive(Debug)]
pub struct AlphaBetaSearcher {
    evaluator: Evaluator,
    tie_break: TieBreak,
    move_ordering: bool,
}

impl AlphaBetaSearcher {
    pub fn new(evaluator: Evaluator) -> Self {
        AlphaBetaSearcher {
            evaluator,
            tie_break: TieBreak::FirstSeen,
            move_ordering: true,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Ativa ou desativa a ordenação de lances (o resultado não muda, só o número de nós).
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Busca com limite de profundidade. O tabuleiro é alterado apenas por
    /// make/unmake e volta ao estado inicial.
    ///
    /// A profundidade mínima é 1; `SearchResult::depth` indica a profundidade usada.
    pub fn search(&mut self, board: &mut Board, depth: u32) -> SearchResult {
        let start = Instant::now();
        let mut ctx = SearchContext::new();
        let depth = depth.max(1);
        let (best_move, score) = self.search_root(board, depth, &mut ctx);

        let result = SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: ctx.nodes,
            time_elapsed: start.elapsed(),
        };
        log::debug!(
            "depth {} score cp {} nodes {} cutoffs {} time {}ms bestmove {}",
            result.depth,
            result.score,
            result.nodes_searched,
            ctx.cutoffs,
            result.time_elapsed.as_millis(),
            result.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
        );
        result
    }

    /// Raiz: todos os lances são avaliados com a janela `(best - 1, INF)`, de
    /// modo que os lances empatados com o melhor têm pontuação exata.
    fn search_root(&mut self, board: &mut Board, depth: u32, ctx: &mut SearchContext) -> (Option<Move>, i32) {
        ctx.nodes += 1;
        let mut moves = board.legal_moves_in_place();
        if moves.is_empty() {
            return (None, board.to_move().sign() * self.evaluator.evaluate(board));
        }
        if self.move_ordering {
            order_moves(board, &mut moves);
        }

        let mut best_score = -INF;
        let mut candidates: Vec<Move> = Vec::new();
        for &mv in &moves {
            let alpha = best_score - 1;
            board.make_move(mv);
            let score = -self.negamax(board, depth - 1, -INF, -alpha, ctx);
            board.unmake_move();

            if score > best_score {
                best_score = score;
                candidates.clear();
                candidates.push(mv);
            } else if score == best_score {
                candidates.push(mv);
            }
        }

        (self.tie_break.choose(&candidates), best_score)
    }

    /// Negamax com poda alpha-beta (fail-soft).
    fn negamax(&self, board: &mut Board, depth: u32, mut alpha: i32, beta: i32, ctx: &mut SearchContext) -> i32 {
        ctx.nodes += 1;

        let mut moves = board.legal_moves_in_place();
        if depth == 0 || moves.is_empty() || board.is_draw_by_halfmove_clock() {
            return board.to_move().sign() * self.evaluator.evaluate(board);
        }
        if self.move_ordering {
            order_moves(board, &mut moves);
        }

        let mut best_score = -INF;
        for &mv in &moves {
            board.make_move(mv);
            let score = -self.negamax(board, depth - 1, -beta, -alpha, ctx);
            board.unmake_move();

            if score > best_score {
                best_score = score;
            }
            if score > alpha {
                alpha = score;
            }
            // Poda beta
            if alpha >= beta {
                ctx.cutoffs += 1;
                break;
            }
        }

        best_score
    }
}
