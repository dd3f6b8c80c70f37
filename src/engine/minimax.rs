use super::{EngineError, MoveSelector};
use crate::core::{Board, Move};
use crate::search::{AlphaBetaSearcher, Evaluator, SearchResult, TieBreak};

/// Busca alpha-beta a profundidade fixa, com desempate aleatório semeado.
#[derive(Debug)]
pub struct MinimaxEngine {
    depth: u32,
    searcher: AlphaBetaSearcher,
    last_result: Option<SearchResult>,
}

impl MinimaxEngine {
    pub fn new(depth: u32, seed: u64) -> Result<Self, EngineError> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth(depth));
        }
        let searcher = AlphaBetaSearcher::new(Evaluator::new()).with_tie_break(TieBreak::uniform(seed));
        Ok(MinimaxEngine { depth, searcher, last_result: None })
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.searcher = self.searcher.with_tie_break(tie_break);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Resultado da última busca (pontuação, nós, tempo).
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl MoveSelector for MinimaxEngine {
    fn name(&self) -> String {
        format!("minimax:{}", self.depth)
    }

    fn get_move(&mut self, board: &Board) -> Option<Move> {
        let mut scratch = board.clone();
        let result = self.searcher.search(&mut scratch, self.depth);
        let best = result.best_move;
        self.last_result = Some(result);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    #[test]
    fn rejects_zero_depth() {
        assert_eq!(MinimaxEngine::new(0, 1).unwrap_err(), EngineError::InvalidDepth(0));
    }

    #[test]
    fn depth_one_on_fresh_4x4_returns_legal_move() {
        let board = Board::new(Variant::Silverman4x4);
        let mut engine = MinimaxEngine::new(1, 42).unwrap();
        let mv = engine.get_move(&board).unwrap();
        assert!(board.generate_legal_moves().contains(&mv));
        assert_eq!(engine.name(), "minimax:1");
        assert!(engine.last_result().map_or(false, |r| r.nodes_searched > 0));
    }

    #[test]
    fn first_seen_tie_break_is_deterministic() {
        let board = Board::new(Variant::Minit5x6);
        let mut a = MinimaxEngine::new(2, 0).unwrap().with_tie_break(TieBreak::FirstSeen);
        let mut b = MinimaxEngine::new(2, 99).unwrap().with_tie_break(TieBreak::FirstSeen);
        assert_eq!(a.get_move(&board), b.get_move(&board));
    }
}
