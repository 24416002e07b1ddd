//! エラー型
//!
//! `Position::do_move` と `Position::legal_moves` は入力を信頼しエラーを返さない。
//! ここの型を返すのは検証付きの入口（`Game::play`、`PositionBuilder::build`、
//! `Position::checked_in_check`、`Square` のデシリアライズ）。

use crate::types::{Color, Move, Square};

/// 指し手を受け付けなかった理由
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 手番側の合法手に含まれない
    #[error("Illegal move for {side}: {mv}")]
    IllegalMove { mv: Move, side: Color },

    /// 終局済み（チェックメイトまたはステイルメイト）
    #[error("Game is over")]
    GameOver,
}

/// 不正な局面
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// キングが盤上に無い
    #[error("King not found for {0}")]
    KingNotFound(Color),

    /// キングが1枚ではない
    #[error("Expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    /// 直前の2マス前進と整合しないアンパッサン升
    #[error("Invalid en passant target: {0}")]
    InvalidEnPassant(Square),

    /// 1段目・8段目のポーン
    #[error("Pawn on back rank: {0}")]
    PawnOnBackRank(Square),

    /// 盤外の座標（デシリアライズした入力）
    #[error("Square out of range: ({row}, {col})")]
    SquareOutOfRange { row: u8, col: u8 },
}

/// 指し手操作の結果型
pub type MoveResult<T> = Result<T, MoveError>;

/// 局面操作の結果型
pub type PositionResult<T> = Result<T, PositionError>;
