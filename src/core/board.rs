// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use std::fmt;
use std::sync::Arc;

use super::error::BoardError;
use super::types::*;
use super::variant::{Variant, VariantConfig};
use crate::moves;
use crate::moves::king::KING_OFFSETS;
use crate::moves::knight::KNIGHT_OFFSETS;
use crate::moves::sliding::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Meios-lances sem captura nem lance de peão a partir dos quais a partida é empatada.
pub const DRAW_HALFMOVE_THRESHOLD: u32 = 50;

/// Maior valor aceite para os contadores de uma FEN.
pub const MAX_MOVE_COUNTER: u32 = 1_000_000;

/// Estado de terminação da posição.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    DrawByClock,
}

/// Resultado no formato PGN: "1-0", "0-1", "1/2-1/2" ou "*".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Ongoing,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HistoryEntry {
    mv: Move,
    undo: UndoInfo,
}

// A struct principal do tabuleiro: grelha de casas de dimensão variável.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: Arc<VariantConfig>,
    squares: Vec<Option<Piece>>,

    // De quem é a vez de jogar.
    to_move: Color,

    // Para detecção de empates e numeração dos lances
    halfmove_clock: u32,
    fullmove_number: u32,

    // Lances aplicados desde o início, com a informação para os desfazer
    history: Vec<HistoryEntry>,
}

impl Board {
    /// Cria um novo tabuleiro na posição inicial da variante.
    pub fn new(variant: Variant) -> Self {
        Self::from_config(variant.config())
    }

    /// Cria um tabuleiro na posição inicial de uma configuração arbitrária,
    /// incluindo o lado a jogar e os contadores iniciais.
    pub fn from_config(config: VariantConfig) -> Self {
        let squares = config.layout().to_vec();
        Board {
            to_move: config.start_to_move(),
            halfmove_clock: config.start_halfmove_clock(),
            fullmove_number: config.start_fullmove_number(),
            config: Arc::new(config),
            squares,
            history: Vec::new(),
        }
    }

    /// Cria um tabuleiro a partir de uma string FEN compacta:
    /// `filas side lance_duplo meios_lances lance`, ex.: `rqkr/pppp/PPPP/RQKR w - 0 1`.
    ///
    /// As dimensões vêm das filas. A posição (peças, lado a jogar e contadores)
    /// passa a ser a posição inicial da configuração, de modo que `replay`
    /// reconstrói a partir dela. Contadores acima de `MAX_MOVE_COUNTER` são rejeitados.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(BoardError::BadFen(format!("expected 5 fields, got {}", parts.len())));
        }

        // Filas, da última linha para a primeira
        let ranks: Vec<&str> = parts[0].split('/').collect();
        let rows = ranks.len();
        let mut grid: Vec<Vec<Option<Piece>>> = Vec::with_capacity(rows);
        for rank in &ranks {
            let mut row = Vec::new();
            for ch in rank.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    if digit == 0 {
                        return Err(BoardError::BadFen(format!("empty run of zero in '{}'", rank)));
                    }
                    row.extend(std::iter::repeat(None).take(digit as usize));
                } else {
                    let piece = Piece::from_char(ch)
                        .ok_or_else(|| BoardError::BadFen(format!("invalid piece '{}'", ch)))?;
                    row.push(Some(piece));
                }
            }
            grid.push(row);
        }
        let cols = grid.first().map_or(0, |r| r.len());
        if grid.iter().any(|r| r.len() != cols) {
            return Err(BoardError::BadFen("ranks have different widths".to_string()));
        }
        if rows == 0 || cols == 0 || rows > MAX_DIM as usize || cols > MAX_DIM as usize {
            return Err(BoardError::UnknownVariant(format!("{}x{}", cols, rows)));
        }

        let mut layout = Vec::with_capacity(rows * cols);
        for rank in grid.into_iter().rev() {
            layout.extend(rank);
        }

        let to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(BoardError::BadFen(format!("invalid side to move '{}'", other))),
        };
        let pawn_double_move = match parts[2] {
            "d" => true,
            "-" => false,
            other => return Err(BoardError::BadFen(format!("invalid double-move flag '{}'", other))),
        };
        let halfmove_clock: u32 = parts[3]
            .parse()
            .map_err(|_| BoardError::BadFen(format!("invalid halfmove clock '{}'", parts[3])))?;
        let fullmove_number: u32 = parts[4]
            .parse()
            .map_err(|_| BoardError::BadFen(format!("invalid fullmove number '{}'", parts[4])))?;
        if fullmove_number == 0 {
            return Err(BoardError::BadFen("fullmove number starts at 1".to_string()));
        }
        if halfmove_clock > MAX_MOVE_COUNTER || fullmove_number > MAX_MOVE_COUNTER {
            return Err(BoardError::BadFen(format!("move counters above {}", MAX_MOVE_COUNTER)));
        }

        let name = format!("{}x{}", cols, rows);
        let config = VariantConfig::new(name, rows as u8, cols as u8, layout, pawn_double_move)?
            .with_start_state(to_move, halfmove_clock, fullmove_number);
        let board = Board::from_config(config);
        board.validate()?;
        Ok(board)
    }

    /// Serializa a posição atual no mesmo formato aceite por `from_fen`.
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(self.rows() as usize);
        for row in (0..self.rows()).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..self.cols() {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        format!(
            "{} {} {} {} {}",
            ranks.join("/"),
            if self.to_move == Color::White { "w" } else { "b" },
            if self.config.pawn_double_move() { "d" } else { "-" },
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// No máximo um rei por cor, e o lado que não joga não pode estar em xeque
    /// (senão o próximo lance poderia capturar o rei).
    fn validate(&self) -> Result<(), BoardError> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .iter_pieces()
                .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                .count();
            if kings > 1 {
                return Err(BoardError::IllegalPosition(format!("{} has {} kings", color.name(), kings)));
            }
        }
        if self.is_in_check(!self.to_move) {
            return Err(BoardError::IllegalPosition(format!(
                "{} is in check but it is {} to move",
                (!self.to_move).name(),
                self.to_move.name()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // ACESSORES
    // ========================================================================

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.config.rows()
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.config.cols()
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.config.contains(sq) {
            return None;
        }
        self.squares[self.config.index(sq)]
    }

    /// Conteúdo das casas, indexado por `row * cols + col`.
    pub fn squares(&self) -> &[Option<Piece>] {
        &self.squares
    }

    /// Todas as peças do tabuleiro, por ordem de casa (linha a linha).
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(i, p)| p.map(|piece| (self.config.square(i), piece)))
    }

    /// Lances aplicados desde o início, do mais antigo para o mais recente.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.iter_pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Cópia sem histórico, usada como rascunho para filtrar lances legais.
    fn scratch(&self) -> Board {
        Board {
            config: Arc::clone(&self.config),
            squares: self.squares.clone(),
            to_move: self.to_move,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        }
    }

    // ========================================================================
    // GERAÇÃO DE LANCES
    // ========================================================================

    /// Gera todos os lances pseudo-legais para todas as peças do jogador atual.
    pub fn generate_pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);
        for (i, slot) in self.squares.iter().enumerate() {
            if let Some(piece) = *slot {
                if piece.color == self.to_move {
                    moves::generate_piece_moves_into(self, self.config.square(i), piece, &mut moves);
                }
            }
        }
        moves
    }

    /// Gera apenas lances legais (filtra lances que deixam o rei em xeque).
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        self.scratch().legal_moves_in_place()
    }

    /// Igual a `generate_legal_moves`, mas faz make/unmake diretamente neste
    /// tabuleiro. O estado final é idêntico ao inicial.
    pub fn legal_moves_in_place(&mut self) -> Vec<Move> {
        let mover = self.to_move;
        let mut moves = self.generate_pseudo_legal_moves();
        moves.retain(|&mv| {
            self.make_move(mv);
            let exposed = self.is_in_check(mover);
            self.unmake_move();
            !exposed
        });
        moves
    }

    /// Verifica se um lance é legal na posição atual.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.generate_legal_moves().contains(&mv)
    }

    // ========================================================================
    // ATAQUES E XEQUE
    // ========================================================================

    /// Verdadeiro se alguma peça de `attacker` tem um lance pseudo-legal que termina em `target`.
    ///
    /// Procura a partir da casa alvo (raios e saltos inversos) em vez de gerar os
    /// lances do adversário. Inclui avanços de peão para casas vazias, tal como o gerador.
    pub fn is_square_attacked_by(&self, target: Square, attacker: Color) -> bool {
        let occupant = self.piece_at(target);
        if occupant.map_or(false, |p| p.color == attacker) {
            return false; // nenhum lance termina numa peça da própria cor
        }

        let is_attacker = |sq: Square, kind: PieceKind| {
            self.piece_at(sq) == Some(Piece::new(kind, attacker))
        };
        let config = &*self.config;
        let back = -attacker.forward();

        // Peões
        if occupant.is_some() {
            for dc in moves::pawn::PAWN_CAPTURE_COLS {
                if config.offset(target, back, -dc).map_or(false, |sq| is_attacker(sq, PieceKind::Pawn)) {
                    return true;
                }
            }
        } else if let Some(one) = config.offset(target, back, 0) {
            if is_attacker(one, PieceKind::Pawn) {
                return true;
            }
            if self.piece_at(one).is_none() {
                if let Some(two) = config.offset(one, back, 0) {
                    if is_attacker(two, PieceKind::Pawn) && moves::pawn::can_double_push(self, two, attacker) {
                        return true;
                    }
                }
            }
        }

        // Cavalos e rei (deslocamentos simétricos)
        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, dc)| config.offset(target, dr, dc).map_or(false, |sq| is_attacker(sq, PieceKind::Knight)))
        {
            return true;
        }
        if KING_OFFSETS
            .iter()
            .any(|&(dr, dc)| config.offset(target, dr, dc).map_or(false, |sq| is_attacker(sq, PieceKind::King)))
        {
            return true;
        }

        // Peças deslizantes (mais lento, verificar por último)
        self.is_attacked_by_slider(target, attacker, &ROOK_DIRECTIONS, PieceKind::Rook)
            || self.is_attacked_by_slider(target, attacker, &BISHOP_DIRECTIONS, PieceKind::Bishop)
    }

    fn is_attacked_by_slider(&self, target: Square, attacker: Color, directions: &[(i8, i8)], kind: PieceKind) -> bool {
        for &(dr, dc) in directions {
            let mut current = target;
            while let Some(sq) = self.config.offset(current, dr, dc) {
                if let Some(piece) = self.piece_at(sq) {
                    // Só a primeira peça do raio conta
                    if piece.color == attacker && (piece.kind == kind || piece.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                current = sq;
            }
        }
        false
    }

    /// Verifica se o rei da cor especificada está em xeque. Sem rei, não há xeque.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked_by(king, !color),
            None => false,
        }
    }

    // ========================================================================
    // MAKE / UNMAKE
    // ========================================================================

    /// Executa um lance sem validação, atualizando o estado do tabuleiro.
    ///
    /// Usado pela busca e pelo filtro de legalidade; para lances vindos de fora
    /// usar `apply_move`.
    pub fn make_move(&mut self, mv: Move) {
        let from = self.config.index(mv.from);
        let to = self.config.index(mv.to);
        let moving = self.squares[from].unwrap_or(mv.piece);
        let captured = self.squares[to];

        let undo = UndoInfo {
            captured,
            old_halfmove_clock: self.halfmove_clock,
            old_fullmove_number: self.fullmove_number,
        };

        self.squares[to] = Some(moving);
        self.squares[from] = None;

        // Captura ou lance de peão reinicia o relógio dos 50 lances
        if captured.is_some() || moving.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.to_move = !self.to_move;
        self.history.push(HistoryEntry { mv, undo });
    }

    /// Desfaz o último lance do histórico, restaurando exatamente o estado anterior.
    pub fn unmake_move(&mut self) -> Option<Move> {
        let HistoryEntry { mv, undo } = self.history.pop()?;
        let from = self.config.index(mv.from);
        let to = self.config.index(mv.to);

        self.squares[from] = self.squares[to];
        self.squares[to] = undo.captured;
        self.halfmove_clock = undo.old_halfmove_clock;
        self.fullmove_number = undo.old_fullmove_number;
        self.to_move = !self.to_move;
        Some(mv)
    }

    /// Aplica um lance depois de confirmar que é legal. Um lance inválido deixa o
    /// tabuleiro inalterado.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.legal_moves_in_place().contains(&mv) {
            return Err(BoardError::invalid_move(&mv));
        }
        self.make_move(mv);
        Ok(())
    }

    /// Desfaz o último lance aplicado. Com histórico vazio devolve `NoHistory`
    /// e nada muda.
    pub fn undo_last(&mut self) -> Result<Move, BoardError> {
        self.unmake_move().ok_or(BoardError::NoHistory)
    }

    // ========================================================================
    // TERMINAÇÃO
    // ========================================================================

    pub fn status(&self) -> GameStatus {
        let no_moves = self.generate_legal_moves().is_empty();
        if no_moves {
            if self.is_in_check(self.to_move) {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if self.is_draw_by_halfmove_clock() {
            GameStatus::DrawByClock
        } else {
            GameStatus::Ongoing
        }
    }

    /// Verifica se a posição atual é xeque-mate
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.to_move) && self.generate_legal_moves().is_empty()
    }

    /// Verifica se a posição atual é empate por afogamento
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.to_move) && self.generate_legal_moves().is_empty()
    }

    /// Verifica se há empate pelo relógio de meios-lances
    pub fn is_draw_by_halfmove_clock(&self) -> bool {
        self.halfmove_clock >= DRAW_HALFMOVE_THRESHOLD
    }

    /// Verifica se o jogo acabou (xeque-mate ou empate)
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    pub fn result(&self) -> GameResult {
        match self.status() {
            GameStatus::Checkmate => match self.to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            },
            GameStatus::Stalemate | GameStatus::DrawByClock => GameResult::Draw,
            GameStatus::Ongoing => GameResult::Ongoing,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows()).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..self.cols() {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..self.cols() {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_positions_have_expected_move_counts() {
        // 4x4: só os peões podem capturar na diagonal.
        assert_eq!(Board::new(Variant::Silverman4x4).generate_legal_moves().len(), 6);
        // 4x5: quatro avanços simples (o duplo está bloqueado pelos peões pretos).
        assert_eq!(Board::new(Variant::Silverman4x5).generate_legal_moves().len(), 4);
    }

    #[test]
    fn fen_round_trip_keeps_position() {
        let fen = "k3/2p1/3R/1N1K b - 7 12";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.to_move(), Color::Black);
        assert_eq!(board.halfmove_clock(), 7);
        assert_eq!(board.fullmove_number(), 12);
        assert_eq!(Board::new(Variant::Silverman4x5).to_fen(), "rqkr/pppp/4/PPPP/RQKR w d 0 1");
    }

    #[test]
    fn fen_rejects_bad_input() {
        assert!(matches!(Board::from_fen("rqkr/ppp/PPPP/RQKR w - 0 1"), Err(BoardError::BadFen(_))));
        assert!(matches!(Board::from_fen("rqkr/pppp/PPPP/RQKR x - 0 1"), Err(BoardError::BadFen(_))));
        assert!(matches!(Board::from_fen("rqkr/pp0p/PPPP/RQKR w - 0 1"), Err(BoardError::BadFen(_))));
        assert!(matches!(
            Board::from_fen("k8/9/9/9/9/9/9/9/K8 w - 0 1"),
            Err(BoardError::UnknownVariant(_))
        ));
        // Rei preto em xeque com as brancas a jogar.
        assert!(matches!(Board::from_fen("k3/4/4/R2K w - 0 1"), Err(BoardError::IllegalPosition(_))));
        assert!(matches!(Board::from_fen("kk2/4/4/3K w - 0 1"), Err(BoardError::IllegalPosition(_))));
    }

    #[test]
    fn make_and_unmake_restore_counters() {
        let mut board = Board::from_fen("k3/2p1/3R/1N1K w - 7 12").unwrap();
        let before = board.clone();
        let capture = board.parse_move("b1xc3").unwrap();

        board.make_move(capture);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 12);
        assert_eq!(board.to_move(), Color::Black);

        assert_eq!(board.unmake_move(), Some(capture));
        assert_eq!(board, before);
    }

    #[test]
    fn fullmove_increments_after_black() {
        let mut board = Board::new(Variant::Silverman4x5);
        let white = board.parse_move("a2a3").unwrap();
        board.apply_move(white).unwrap();
        assert_eq!(board.fullmove_number(), 1);
        let black = board.parse_move("b4b2").unwrap_err();
        assert!(matches!(black, BoardError::InvalidMove { .. }));
        let black = board.parse_move("d4d3").unwrap();
        board.apply_move(black).unwrap();
        assert_eq!(board.fullmove_number(), 2);
        assert_eq!(board.history_len(), 2);
    }

    #[test]
    fn counters_are_bounded() {
        assert!(matches!(
            Board::from_fen("k3/4/4/3K w - 4294967295 1"),
            Err(BoardError::BadFen(_))
        ));
        assert!(matches!(
            Board::from_fen("k3/4/4/3K w - 0 4294967295"),
            Err(BoardError::BadFen(_))
        ));

        let fen = format!("k3/4/4/3K b - {0} {0}", MAX_MOVE_COUNTER);
        let mut board = Board::from_fen(&fen).unwrap();
        let mv = board.parse_move("a4b4").unwrap();
        board.apply_move(mv).unwrap();
        assert_eq!(board.halfmove_clock(), MAX_MOVE_COUNTER + 1);
        assert_eq!(board.fullmove_number(), MAX_MOVE_COUNTER + 1);
        board.undo_last().unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn fen_position_becomes_the_start_state() {
        let board = Board::from_fen("k3/4/4/R2K b - 3 9").unwrap();
        let restarted = Board::from_config(board.config().clone());
        assert_eq!(restarted, board);
        assert_eq!(restarted.to_move(), Color::Black);
        assert_eq!((restarted.halfmove_clock(), restarted.fullmove_number()), (3, 9));
    }

    #[test]
    fn check_requires_a_king() {
        let board = Board::from_fen("4/4/4/R3 b - 0 1").unwrap();
        assert!(!board.is_in_check(Color::Black));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn display_draws_top_rank_first() {
        let board = Board::new(Variant::Silverman4x4);
        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "4 r q k r ");
        assert!(text.ends_with("  a b c d"));
    }
}
