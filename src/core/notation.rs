// Ficheiro: src/core/notation.rs
// Descrição: Leitura de lances em texto e reconstrução de partidas a partir de registos.

use super::board::Board;
use super::error::BoardError;
use super::types::{Move, Square};
use super::variant::VariantConfig;

impl Board {
    /// Converte texto em coordenadas (`a2a3`, `a2-a3` ou `a2xb3`) num lance legal
    /// da posição atual.
    pub fn parse_move(&self, text: &str) -> Result<Move, BoardError> {
        let (from, to) = parse_coordinates(text)?;
        self.generate_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or_else(|| BoardError::InvalidMove { mv: text.trim().to_string() })
    }

    /// Reconstrói a posição aplicando `moves` a partir da posição inicial da
    /// configuração. Cada lance é validado.
    pub fn replay(config: VariantConfig, moves: &[Move]) -> Result<Board, BoardError> {
        let mut board = Board::from_config(config);
        for &mv in moves {
            board.apply_move(mv)?;
        }
        Ok(board)
    }

    /// Registo da partida em notação de coordenadas separada por espaços.
    pub fn move_log(&self) -> String {
        self.history()
            .map(|mv| mv.to_coordinate())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inverso de `move_log`: aceita um registo e devolve o tabuleiro resultante.
    pub fn replay_log(config: VariantConfig, log: &str) -> Result<Board, BoardError> {
        let mut board = Board::from_config(config);
        for token in log.split_whitespace() {
            let mv = board.parse_move(token)?;
            board.make_move(mv);
        }
        Ok(board)
    }
}

fn parse_coordinates(text: &str) -> Result<(Square, Square), BoardError> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '-' && c != 'x').collect();
    if cleaned.len() != 4 || !cleaned.is_ascii() {
        return Err(BoardError::BadNotation(text.to_string()));
    }
    let from: Square = cleaned[..2].parse()?;
    let to: Square = cleaned[2..].parse()?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    #[test]
    fn accepts_all_coordinate_forms() {
        let board = Board::from_fen("k3/2p1/3R/1N1K w - 0 1").unwrap();
        let plain = board.parse_move("b1c3").unwrap();
        assert_eq!(board.parse_move("b1xc3").unwrap(), plain);
        assert_eq!(board.parse_move(" b1-c3 ").unwrap(), plain);
        assert!(plain.is_capture());
    }

    #[test]
    fn rejects_garbage_and_illegal_moves() {
        let board = Board::new(Variant::Silverman4x5);
        assert!(matches!(board.parse_move("hello"), Err(BoardError::BadNotation(_))));
        assert!(matches!(board.parse_move("a2a9"), Err(BoardError::BadNotation(_))));
        assert!(matches!(board.parse_move("a2a4"), Err(BoardError::InvalidMove { .. })));
    }

    #[test]
    fn move_log_replays_to_same_position() {
        let mut board = Board::new(Variant::Silverman4x5);
        for text in ["b2b3", "c4c3", "b3xa4"] {
            let mv = board.parse_move(text).unwrap();
            board.apply_move(mv).unwrap();
        }
        assert_eq!(board.last_move().map(|m| m.is_capture()), Some(true));
        let log = board.move_log();
        let rebuilt = Board::replay_log(Variant::Silverman4x5.config(), &log).unwrap();
        assert_eq!(rebuilt.to_fen(), board.to_fen());

        let moves: Vec<Move> = board.history().collect();
        let replayed = Board::replay(Variant::Silverman4x5.config(), &moves).unwrap();
        assert_eq!(replayed, board);
    }

    #[test]
    fn replay_starts_from_the_loaded_position() {
        // Pretas a jogar, em xeque da torre em a1.
        let mut board = Board::from_fen("k3/4/4/R2K b - 0 1").unwrap();
        let mv = board.parse_move("a4b4").unwrap();
        board.apply_move(mv).unwrap();
        let white = board.parse_move("d1c2").unwrap();
        board.apply_move(white).unwrap();

        let moves: Vec<Move> = board.history().collect();
        let replayed = Board::replay(board.config().clone(), &moves).unwrap();
        assert_eq!(replayed, board);
        assert_eq!(replayed.fullmove_number(), 2);

        let from_log = Board::replay_log(board.config().clone(), &board.move_log()).unwrap();
        assert_eq!(from_log.to_fen(), board.to_fen());
    }
}
