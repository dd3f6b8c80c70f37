// Ficheiro: src/engine/game.rs
// Descrição: Condução de uma partida entre duas estratégias.

use super::{EngineError, MoveSelector};
use crate::core::*;

/// Resultado de um passo da sessão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Um lance foi aplicado.
    Played(Move),
    /// A partida terminou; `GameResult::Ongoing` quando parou pelo limite de meios-lances.
    Finished(GameResult),
}

/// Registo final de uma partida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub result: GameResult,
    pub status: GameStatus,
    pub moves: Vec<Move>,
    pub plies: usize,
    pub final_fen: String,
    /// Lances ilegais (ou em falta) de uma estratégia que foram substituídos.
    pub substitutions: usize,
    pub reached_ply_limit: bool,
}

/// Uma partida em curso: o tabuleiro e a estratégia de cada cor.
pub struct GameSession {
    board: Board,
    white: Box<dyn MoveSelector>,
    black: Box<dyn MoveSelector>,
    max_plies: Option<usize>,
    plies: usize,
    substitutions: usize,
}

impl GameSession {
    pub fn new(board: Board, white: Box<dyn MoveSelector>, black: Box<dyn MoveSelector>) -> Self {
        GameSession {
            board,
            white,
            black,
            max_plies: None,
            plies: 0,
            substitutions: 0,
        }
    }

    /// Limita o número de meios-lances; ao atingir o limite a partida fica por decidir (`*`).
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn plies(&self) -> usize {
        self.plies
    }

    fn reached_ply_limit(&self) -> bool {
        self.max_plies.map_or(false, |limit| self.plies >= limit)
    }

    /// Pede um lance ao lado a jogar e aplica-o.
    ///
    /// Um lance ilegal, ou nenhum lance quando há lances legais, é registado com
    /// `warn!` e substituído pelo primeiro lance legal.
    pub fn step(&mut self) -> Result<StepOutcome, EngineError> {
        if self.board.is_game_over() {
            return Ok(StepOutcome::Finished(self.board.result()));
        }
        if self.reached_ply_limit() {
            return Ok(StepOutcome::Finished(GameResult::Ongoing));
        }

        let side = self.board.to_move();
        let engine = match side {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let proposed = engine.get_move(&self.board);

        let legal = self.board.generate_legal_moves();
        let mv = match proposed {
            Some(mv) if legal.contains(&mv) => mv,
            _ => {
                let Some(&fallback) = legal.first() else {
                    return Ok(StepOutcome::Finished(self.board.result()));
                };
                let proposed = proposed.map_or_else(|| "no move".to_string(), |m| format!("illegal move {}", m));
                log::warn!(
                    "{} ({}) returned {}; playing {} instead",
                    engine.name(),
                    side.name(),
                    proposed,
                    fallback
                );
                self.substitutions += 1;
                fallback
            }
        };

        self.board.apply_move(mv)?;
        self.plies += 1;
        Ok(StepOutcome::Played(mv))
    }

    /// Joga até ao fim (ou até ao limite de meios-lances).
    pub fn play(mut self) -> Result<GameRecord, EngineError> {
        let result = loop {
            if let StepOutcome::Finished(result) = self.step()? {
                break result;
            }
        };
        Ok(self.into_record(result))
    }

    fn into_record(self, result: GameResult) -> GameRecord {
        let reached_ply_limit = result == GameResult::Ongoing && self.reached_ply_limit();
        GameRecord {
            white: self.white.name(),
            black: self.black.name(),
            result,
            status: self.board.status(),
            moves: self.board.history().collect(),
            plies: self.plies,
            final_fen: self.board.to_fen(),
            substitutions: self.substitutions,
            reached_ply_limit,
        }
    }
}
