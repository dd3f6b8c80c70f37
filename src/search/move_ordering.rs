use std::cmp::Reverse;

use crate::core::*;

/// Bónus base de uma captura; soma-se o valor da peça capturada.
pub const CAPTURE_BONUS: i32 = 10_000;
/// Bónus de um lance que dá xeque.
pub const CHECK_BONUS: i32 = 5_000;

/// Ordena movimentos para maximizar podas Alpha-Beta: capturas (vítima mais
/// valiosa primeiro), depois xeques, depois os restantes pela ordem de geração.
///
/// A ordenação é estável, por isso lances com a mesma pontuação mantêm a ordem original.
pub fn order_moves(board: &mut Board, moves: &mut [Move]) {
    let mut scored: Vec<(i32, Move)> = moves.iter().map(|&mv| (score_move(board, mv), mv)).collect();
    scored.sort_by_key(|&(score, _)| Reverse(score));
    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}

/// Pontua movimento para ordenação (quanto maior, melhor)
pub fn score_move(board: &mut Board, mv: Move) -> i32 {
    let mut score = 0;

    // ========================================================================
    // CAPTURAS (vítima mais valiosa primeiro)
    // ========================================================================
    if let Some(victim) = mv.captured {
        score += CAPTURE_BONUS + victim.kind.value();
    }

    // ========================================================================
    // XEQUES
    // ========================================================================
    if gives_check(board, mv) {
        score += CHECK_BONUS;
    }

    score
}

/// Verdadeiro se o lance deixa o rei adversário em xeque. O tabuleiro volta ao estado inicial.
pub fn gives_check(board: &mut Board, mv: Move) -> bool {
    let mover = board.to_move();
    board.make_move(mv);
    let check = board.is_in_check(!mover);
    board.unmake_move();
    check
}
