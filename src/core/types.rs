// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

/// Número máximo de linhas/colunas suportado por qualquer variante.
pub const MAX_DIM: u8 = 8;

const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Sinal da cor na convenção "brancas positivas".
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Direção de avanço dos peões desta cor (em linhas).
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Valor material em centipeões. O rei não conta para o material.
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::Pawn   => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 310,
            PieceKind::Rook   => 500,
            PieceKind::Queen  => 900,
            PieceKind::King   => 0,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Maiúsculas para as brancas, minúsculas para as pretas.
    pub fn to_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch,
            Color::Black => ch.to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece { kind, color })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Casa do tabuleiro: linha 0 é a primeira fila das brancas, coluna 0 é a coluna "a".
///
/// A validação contra as dimensões da variante é feita por `VariantConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = FILE_LETTERS.get(self.col as usize).copied().unwrap_or(b'?') as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::BadNotation(s.to_string()));
        }
        let col = FILE_LETTERS
            .iter()
            .position(|&b| b == bytes[0].to_ascii_lowercase())
            .ok_or_else(|| BoardError::BadNotation(s.to_string()))?;
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(BoardError::BadNotation(s.to_string())),
        };
        Ok(Square::new(row, col as u8))
    }
}

// Struct para representar um lance no jogo.
// Guarda origem, destino, a peça que se move e a peça capturada (se houver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move { from, to, piece, captured }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Notação de coordenadas sem separador (ex.: `a2a3`), usada nos registos de partidas.
    pub fn to_coordinate(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

// ============================================================================
// MAKE/UNMAKE
// ============================================================================

/// Estado do tabuleiro antes de um lance, suficiente para o desfazer exatamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    pub captured: Option<Piece>,
    pub old_halfmove_clock: u32,
    pub old_fullmove_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_text_form() {
        let sq: Square = "c4".parse().unwrap();
        assert_eq!(sq, Square::new(3, 2));
        assert_eq!(sq.to_string(), "c4");
        assert!("z1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn move_display_marks_captures() {
        let white_rook = Piece::new(PieceKind::Rook, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let quiet = Move::new(Square::new(0, 0), Square::new(1, 0), white_rook, None);
        let capture = Move::new(Square::new(0, 0), Square::new(1, 0), white_rook, Some(black_pawn));
        assert_eq!(quiet.to_string(), "a1-a2");
        assert_eq!(capture.to_string(), "a1xa2");
        assert_eq!(capture.to_coordinate(), "a1a2");
        assert_ne!(quiet, capture);
    }

    #[test]
    fn piece_chars_follow_color_case() {
        assert_eq!(Piece::from_char('q'), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).to_char(), 'N');
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(!Color::White, Color::Black);
    }
}
