//! キャスリング権

use serde::{Deserialize, Serialize};

use super::Color;

/// キャスリングの翼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastlingSide {
    /// h筋側（O-O）
    KingSide,
    /// a筋側（O-O-O）
    QueenSide,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    /// ルークの初期筋
    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /// キャスリング後のルークの筋（キングの隣、ルークが来た側）
    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /// キャスリング後のキングの筋（2マス移動）
    #[inline]
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    /// キングとルークの間で空いていなければならない筋
    #[inline]
    pub const fn empty_cols(self) -> &'static [u8] {
        match self {
            CastlingSide::KingSide => &[5, 6],
            CastlingSide::QueenSide => &[1, 2, 3],
        }
    }

    /// 利きがあってはならない筋（初期位置・通過・到着）
    #[inline]
    pub const fn safe_cols(self) -> [u8; 3] {
        match self {
            CastlingSide::KingSide => [4, 5, 6],
            CastlingSide::QueenSide => [4, 3, 2],
        }
    }

    /// キングの移動先の筋から翼を判定
    #[inline]
    pub const fn from_king_to_col(col: u8) -> Option<CastlingSide> {
        match col {
            6 => Some(CastlingSide::KingSide),
            2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }
}

/// 片側のキャスリング関連フラグ
///
/// 一度 true になったら戻らない（単調）。外部からは参照のみ可能で、
/// 更新は `Position::do_move`（と権利を失わせる方向にだけ働く `PositionBuilder`）が行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideCastling {
    king_moved: bool,
    rook_a_moved: bool,
    rook_h_moved: bool,
}

impl SideCastling {
    #[inline]
    pub const fn king_moved(&self) -> bool {
        self.king_moved
    }

    /// 指定した翼のルークが動いたか
    #[inline]
    pub const fn rook_moved(&self, side: CastlingSide) -> bool {
        match side {
            CastlingSide::KingSide => self.rook_h_moved,
            CastlingSide::QueenSide => self.rook_a_moved,
        }
    }

    /// フラグ上キャスリング可能か（盤面上の条件は見ない）
    #[inline]
    pub const fn may_castle(&self, side: CastlingSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self) {
        self.king_moved = true;
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, side: CastlingSide) {
        match side {
            CastlingSide::KingSide => self.rook_h_moved = true,
            CastlingSide::QueenSide => self.rook_a_moved = true,
        }
    }
}

/// 両者のキャスリング権
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastlingRights {
    sides: [SideCastling; Color::NUM],
}

impl CastlingRights {
    #[inline]
    pub const fn side(&self, color: Color) -> &SideCastling {
        &self.sides[color.index()]
    }

    #[inline]
    pub const fn may_castle(&self, color: Color, side: CastlingSide) -> bool {
        self.sides[color.index()].may_castle(side)
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, color: Color) -> &mut SideCastling {
        &mut self.sides[color.index()]
    }
}
