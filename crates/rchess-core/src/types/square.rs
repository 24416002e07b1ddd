//! 升（Square）

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// 盤上の升 (row, col)
///
/// - row 0 = 黒の初期段（8段目）、row 7 = 白の初期段（1段目）
/// - col 0 = a筋、col 7 = h筋
///
/// 比較は (row, col) の辞書順。
/// デシリアライズ時も範囲を検査し、範囲外ならエラーにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// 検査前の (row, col)
#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = PositionError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        if raw.row < Square::SIZE && raw.col < Square::SIZE {
            Ok(Square::new(raw.row, raw.col))
        } else {
            Err(PositionError::SquareOutOfRange {
                row: raw.row,
                col: raw.col,
            })
        }
    }
}

impl Square {
    /// 盤の一辺
    pub const SIZE: u8 = 8;

    /// 升の数
    pub const NUM: usize = 64;

    /// (row, col) から升を作る
    ///
    /// # Panics
    /// 範囲外（8以上）の座標は呼び出し側のバグなので panic する。
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < Self::SIZE && col < Self::SIZE, "square out of range");
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 0..64 のインデックス（行優先）
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * Self::SIZE + self.col) as usize
    }

    /// インデックスから升に変換
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::NUM {
            Some(Square {
                row: (index / 8) as u8,
                col: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    /// (drow, dcol) だけずらした升。盤外なら None。
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if row < 0 || row >= Self::SIZE as i8 || col < 0 || col >= Self::SIZE as i8 {
            None
        } else {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// 全ての升（行優先）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM).filter_map(Square::from_index)
    }
}

/// 代数表記（例: row 6, col 4 → "e2"）
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}
