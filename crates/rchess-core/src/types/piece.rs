//! 駒種（PieceType）、駒（Piece）、マスの中身（Cell）

use serde::{Deserialize, Serialize};

use super::Color;

/// 駒種（6種類）
///
/// 宣言順が `Move` の比較順（成り駒の比較）にそのまま使われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    /// ポーンが成れる駒種（生成順）
    pub const PROMOTIONS: [PieceType; 4] =
        [PieceType::Queen, PieceType::Rook, PieceType::Bishop, PieceType::Knight];

    /// 英字1文字（大文字）
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// 英字1文字から駒種に変換（大文字・小文字どちらも可）
    pub const fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// 駒（駒種 + 手番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// 表示用の1文字。白は大文字、黒は小文字。
    #[inline]
    pub const fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// 表示用の1文字から駒に変換（大文字=白、小文字=黒）
    pub const fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        match PieceType::from_char(c) {
            Some(piece_type) => Some(Piece::new(piece_type, color)),
            None => None,
        }
    }

    #[inline]
    pub const fn is(self, piece_type: PieceType, color: Color) -> bool {
        self.piece_type as u8 == piece_type as u8 && self.color as u8 == color as u8
    }
}

/// 1マスの中身
///
/// 「駒は無いが色はある」という組み合わせを型で表現できないようにしている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn occupied(piece_type: PieceType, color: Color) -> Cell {
        Cell::Occupied(Piece::new(piece_type, color))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// 駒の手番（空きマスなら None）
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece.color),
        }
    }

    /// 指定した手番の駒があるか
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type_order() {
        // 成りなし < ナイト < ビショップ < ルーク < クイーン
        assert!(PieceType::Pawn < PieceType::Knight);
        assert!(PieceType::Knight < PieceType::Bishop);
        assert!(PieceType::Bishop < PieceType::Rook);
        assert!(PieceType::Rook < PieceType::Queen);
        assert!(PieceType::Queen < PieceType::King);
    }

    #[test]
    fn test_piece_char() {
        assert_eq!(Piece::new(PieceType::Knight, Color::White).to_char(), 'N');
        assert_eq!(Piece::new(PieceType::Knight, Color::Black).to_char(), 'n');
        assert_eq!(Piece::from_char('q'), Some(Piece::new(PieceType::Queen, Color::Black)));
        assert_eq!(Piece::from_char('K'), Some(Piece::new(PieceType::King, Color::White)));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_cell_accessors() {
        let cell = Cell::occupied(PieceType::Rook, Color::Black);
        assert!(!cell.is_empty());
        assert_eq!(cell.color(), Some(Color::Black));
        assert!(cell.is_color(Color::Black));
        assert!(!cell.is_color(Color::White));

        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.piece(), None);
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Cell::default(), Cell::Empty);
    }
}
