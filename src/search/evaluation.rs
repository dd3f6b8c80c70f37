use crate::core::*;

/// Pontuação de xeque-mate (em centipeões).
pub const MATE_SCORE: i32 = 30_000;

/// Limite das janelas alpha-beta; maior do que qualquer avaliação.
pub const INF: i32 = 1_000_000;

/// Parâmetros configuráveis da avaliação.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalParams {
    /// A mobilidade só conta enquanto `fullmove_number < mobility_window`.
    pub mobility_window: u32,
    /// Centipeões por lance legal do lado a jogar.
    pub mobility_weight: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams { mobility_window: 5, mobility_weight: 5 }
    }
}

/// Avaliação estática, do ponto de vista das brancas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    params: EvalParams,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: EvalParams) -> Self {
        Evaluator { params }
    }

    pub fn params(&self) -> EvalParams {
        self.params
    }

    /// Avalia a posição em centipeões (positivo favorece as brancas).
    pub fn evaluate(&self, board: &Board) -> i32 {
        let side = board.to_move();
        let legal = board.generate_legal_moves();

        // Posições terminais
        if legal.is_empty() {
            if board.is_in_check(side) {
                return -side.sign() * MATE_SCORE;
            }
            return 0;
        }
        if board.is_draw_by_halfmove_clock() {
            return 0;
        }

        let mut score = material(board);

        // Bónus de mobilidade na abertura
        if board.fullmove_number() < self.params.mobility_window {
            score += side.sign() * self.params.mobility_weight * legal.len() as i32;
        }

        score
    }
}

/// Soma do material com sinal (brancas positivas). O rei vale 0.
pub fn material(board: &Board) -> i32 {
    board
        .iter_pieces()
        .map(|(_, piece)| piece.color.sign() * piece.kind.value())
        .sum()
}

/// Verdadeiro para pontuações que representam xeque-mate.
#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE
}
