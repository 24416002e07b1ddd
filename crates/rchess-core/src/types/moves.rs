//! 指し手（Move）

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Color, PieceType, Square};

/// 指し手
///
/// 等価性・順序・ハッシュは (from, to, promotion) だけで決まる。
/// 駒種と手番は from の升から一意に決まるため比較には含めない。
/// この順序にチェス上の意味はなく、指し手集合の列挙順を再現可能にするためのもの。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    pub piece_type: PieceType,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color, from: Square, to: Square) -> Self {
        Move {
            piece_type,
            color,
            from,
            to,
            promotion: None,
        }
    }

    /// ポーンの成りを伴う指し手
    #[inline]
    pub const fn promoting(color: Color, from: Square, to: Square, promotion: PieceType) -> Self {
        Move {
            piece_type: PieceType::Pawn,
            color,
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// 成りを伴うか
    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// キャスリングか（キングが横に2マス動く）
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.piece_type == PieceType::King
            && self.from.row() == self.to.row()
            && self.from.col().abs_diff(self.to.col()) == 2
    }

    /// ポーンの2マス前進か
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_type == PieceType::Pawn
            && self.from.col() == self.to.col()
            && self.from.row().abs_diff(self.to.row()) == 2
    }

    fn key(&self) -> (Square, Square, Option<PieceType>) {
        (self.from, self.to, self.promotion)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// 座標表記（例: "e2e4", "e7e8q"）
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
