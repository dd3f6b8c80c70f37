// Ficheiro: src/core/variant.rs
// Descrição: Geometria e posição inicial de cada variante de minixadrez.

use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::types::*;

/// Variantes suportadas. O nome `CxL` indica colunas x linhas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Silverman4x4,
    Silverman4x5,
    Demi4x8,
    Baby5x5,
    Minit5x6,
    LosAlamos6x6,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Silverman4x4,
        Variant::Silverman4x5,
        Variant::Demi4x8,
        Variant::Baby5x5,
        Variant::Minit5x6,
        Variant::LosAlamos6x6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Silverman4x4 => "4x4",
            Variant::Silverman4x5 => "4x5",
            Variant::Demi4x8 => "4x8",
            Variant::Baby5x5 => "5x5",
            Variant::Minit5x6 => "5x6",
            Variant::LosAlamos6x6 => "6x6",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Silverman4x4 => "Silverman 4x4",
            Variant::Silverman4x5 => "Silverman 4x5",
            Variant::Demi4x8 => "Demi-chess 4x8",
            Variant::Baby5x5 => "Baby chess 5x5",
            Variant::Minit5x6 => "Minit chess 5x6",
            Variant::LosAlamos6x6 => "Los Alamos 6x6",
        }
    }

    /// Constrói a configuração (dimensões, posição inicial, lance duplo de peão).
    pub fn config(self) -> VariantConfig {
        use PieceKind::*;
        match self {
            Variant::Silverman4x4 => VariantConfig::standard(self.name(), 4, &[Rook, Queen, King, Rook], false),
            Variant::Silverman4x5 => VariantConfig::standard(self.name(), 5, &[Rook, Queen, King, Rook], true),
            Variant::Demi4x8 => VariantConfig::standard(self.name(), 8, &[King, Bishop, Knight, Rook], false),
            Variant::Baby5x5 => VariantConfig::standard(self.name(), 5, &[King, Queen, Bishop, Knight, Rook], true),
            Variant::Minit5x6 => VariantConfig::standard(self.name(), 6, &[King, Queen, Bishop, Knight, Rook], true),
            Variant::LosAlamos6x6 => {
                VariantConfig::standard(self.name(), 6, &[Rook, Knight, Queen, King, Knight, Rook], false)
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| BoardError::UnknownVariant(s.to_string()))
    }
}

/// Configuração imutável de uma variante: dimensões, posição inicial e regras de peão.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantConfig {
    name: String,
    rows: u8,
    cols: u8,
    layout: Vec<Option<Piece>>,
    pawn_double_move: bool,

    // Estado inicial: lado a jogar e contadores
    start_to_move: Color,
    start_halfmove_clock: u32,
    start_fullmove_number: u32,
}

impl VariantConfig {
    /// Cria uma configuração arbitrária. `layout` é indexado por `row * cols + col`.
    pub fn new(
        name: impl Into<String>,
        rows: u8,
        cols: u8,
        layout: Vec<Option<Piece>>,
        pawn_double_move: bool,
    ) -> Result<Self, BoardError> {
        let name = name.into();
        if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
            return Err(BoardError::UnknownVariant(format!("{}x{}", cols, rows)));
        }
        if layout.len() != rows as usize * cols as usize {
            return Err(BoardError::UnknownVariant(format!(
                "{}: layout has {} squares, expected {}",
                name,
                layout.len(),
                rows as usize * cols as usize
            )));
        }
        Ok(VariantConfig {
            name,
            rows,
            cols,
            layout,
            pawn_double_move,
            start_to_move: Color::White,
            start_halfmove_clock: 0,
            start_fullmove_number: 1,
        })
    }

    /// Define o lado a jogar e os contadores da posição inicial (usado por `from_fen`).
    pub fn with_start_state(mut self, to_move: Color, halfmove_clock: u32, fullmove_number: u32) -> Self {
        self.start_to_move = to_move;
        self.start_halfmove_clock = halfmove_clock;
        self.start_fullmove_number = fullmove_number.max(1);
        self
    }

    /// Layout clássico: fila de trás das brancas na linha 0, peões na linha 1,
    /// espelhado por coluna para as pretas na última linha.
    fn standard(name: &str, rows: u8, back_rank: &[PieceKind], pawn_double_move: bool) -> Self {
        let cols = back_rank.len() as u8;
        let mut layout = vec![None; rows as usize * cols as usize];
        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as u8;
            layout[idx(cols, 0, col)] = Some(Piece::new(kind, Color::White));
            layout[idx(cols, rows - 1, col)] = Some(Piece::new(kind, Color::Black));
            layout[idx(cols, 1, col)] = Some(Piece::new(PieceKind::Pawn, Color::White));
            layout[idx(cols, rows - 2, col)] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        }
        VariantConfig {
            name: name.to_string(),
            rows,
            cols,
            layout,
            pawn_double_move,
            start_to_move: Color::White,
            start_halfmove_clock: 0,
            start_fullmove_number: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn pawn_double_move(&self) -> bool {
        self.pawn_double_move
    }

    pub fn layout(&self) -> &[Option<Piece>] {
        &self.layout
    }

    pub fn start_to_move(&self) -> Color {
        self.start_to_move
    }

    pub fn start_halfmove_clock(&self) -> u32 {
        self.start_halfmove_clock
    }

    pub fn start_fullmove_number(&self) -> u32 {
        self.start_fullmove_number
    }

    #[inline]
    pub fn square_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.row < self.rows && sq.col < self.cols
    }

    #[inline]
    pub fn index(&self, sq: Square) -> usize {
        idx(self.cols, sq.row, sq.col)
    }

    #[inline]
    pub fn square(&self, index: usize) -> Square {
        Square::new((index / self.cols as usize) as u8, (index % self.cols as usize) as u8)
    }

    /// Casa deslocada de `(dr, dc)`, ou `None` se sair do tabuleiro.
    #[inline]
    pub fn offset(&self, sq: Square, dr: i8, dc: i8) -> Option<Square> {
        let row = sq.row as i8 + dr;
        let col = sq.col as i8 + dc;
        if row < 0 || col < 0 || row >= self.rows as i8 || col >= self.cols as i8 {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.square_count()).map(move |i| self.square(i))
    }

    /// Fila de trás da cor (0 para as brancas, última linha para as pretas).
    pub fn home_row(&self, color: Color) -> u8 {
        match color {
            Color::White => 0,
            Color::Black => self.rows - 1,
        }
    }

    /// Fila de onde os peões podem dar o lance duplo.
    pub fn pawn_start_row(&self, color: Color) -> u8 {
        match color {
            Color::White => 1.min(self.rows - 1),
            Color::Black => self.rows.saturating_sub(2),
        }
    }

    /// Centro do tabuleiro: as linhas e colunas do meio (duas se a dimensão for par).
    pub fn is_center(&self, sq: Square) -> bool {
        in_middle(sq.row, self.rows) && in_middle(sq.col, self.cols)
    }

    pub fn is_edge_file(&self, sq: Square) -> bool {
        sq.col == 0 || sq.col + 1 == self.cols
    }
}

#[inline]
fn idx(cols: u8, row: u8, col: u8) -> usize {
    row as usize * cols as usize + col as usize
}

fn in_middle(value: u8, size: u8) -> bool {
    if size % 2 == 0 {
        value + 1 == size / 2 || value == size / 2
    } else {
        value == size / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_variant_name() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
        }
        assert_eq!(
            "7x7".parse::<Variant>(),
            Err(BoardError::UnknownVariant("7x7".to_string()))
        );
    }

    #[test]
    fn silverman_4x5_layout() {
        let config = Variant::Silverman4x5.config();
        assert_eq!((config.rows(), config.cols()), (5, 4));
        assert!(config.pawn_double_move());
        let at = |r, c| config.layout()[config.index(Square::new(r, c))];
        assert_eq!(at(0, 2), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(at(4, 2), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(at(1, 0), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(at(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(at(2, 1), None);
        assert_eq!(config.pawn_start_row(Color::Black), 3);
    }

    #[test]
    fn center_squares_follow_board_shape() {
        let square_board = Variant::Silverman4x4.config();
        let centers: Vec<Square> = square_board.squares().filter(|&s| square_board.is_center(s)).collect();
        assert_eq!(centers, vec![Square::new(1, 1), Square::new(1, 2), Square::new(2, 1), Square::new(2, 2)]);

        let tall = Variant::Silverman4x5.config();
        let centers: Vec<Square> = tall.squares().filter(|&s| tall.is_center(s)).collect();
        assert_eq!(centers, vec![Square::new(2, 1), Square::new(2, 2)]);
    }

    #[test]
    fn offset_respects_bounds() {
        let config = Variant::Baby5x5.config();
        assert_eq!(config.offset(Square::new(0, 0), -1, 0), None);
        assert_eq!(config.offset(Square::new(4, 4), 0, 1), None);
        assert_eq!(config.offset(Square::new(2, 2), 2, -1), Some(Square::new(4, 1)));
    }

    #[test]
    fn rejects_oversized_config() {
        assert!(VariantConfig::new("9x9", 9, 9, vec![None; 81], false).is_err());
        assert!(VariantConfig::new("bad", 4, 4, vec![None; 15], false).is_err());
    }
}
